/// Convenience result type used across shadergraph.
pub type ShaderResult<T> = Result<T, ShaderError>;

/// Top-level error taxonomy used by the compiler APIs.
///
/// None of these are recoverable inside a compilation: a call either yields a complete,
/// self-consistent shader pair or fails with the first violated contract.
#[derive(thiserror::Error, Debug)]
pub enum ShaderError {
    /// An operator, constructor or call was given operand kinds outside its valid set.
    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    /// The binder was asked to reserve or bind a name that is already in use.
    #[error("name conflict: {0}")]
    NameConflict(String),

    /// Generation reached an attribute, uniform or varying with no bound name.
    #[error("unbound named reference: {0}")]
    UnboundNamedReference(String),

    /// A named input was referenced from a stage where it cannot exist.
    #[error("stage violation: {0}")]
    StageViolation(String),

    /// Malformed expression source text.
    #[error("syntax error: {0}")]
    Syntax(String),

    /// Invalid caller-provided names, program documents or references.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ShaderError {
    /// Build a [`ShaderError::TypeMismatch`] value.
    pub fn type_mismatch(msg: impl Into<String>) -> Self {
        Self::TypeMismatch(msg.into())
    }

    /// Build a [`ShaderError::NameConflict`] value.
    pub fn name_conflict(msg: impl Into<String>) -> Self {
        Self::NameConflict(msg.into())
    }

    /// Build a [`ShaderError::UnboundNamedReference`] value.
    pub fn unbound(msg: impl Into<String>) -> Self {
        Self::UnboundNamedReference(msg.into())
    }

    /// Build a [`ShaderError::StageViolation`] value.
    pub fn stage_violation(msg: impl Into<String>) -> Self {
        Self::StageViolation(msg.into())
    }

    /// Build a [`ShaderError::Syntax`] value.
    pub fn syntax(msg: impl Into<String>) -> Self {
        Self::Syntax(msg.into())
    }

    /// Build a [`ShaderError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
