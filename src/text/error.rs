use crate::foundation::error::ShaderError;
use std::fmt;

/// Malformed expression source, located by byte offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    /// Byte offset into the source where the problem was detected.
    pub offset: usize,
    /// Human-readable description.
    pub message: String,
}

impl SyntaxError {
    pub(crate) fn new(offset: usize, message: impl Into<String>) -> Self {
        Self {
            offset,
            message: message.into(),
        }
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "at byte {}: {}", self.offset, self.message)
    }
}

impl std::error::Error for SyntaxError {}

impl From<SyntaxError> for ShaderError {
    fn from(e: SyntaxError) -> Self {
        ShaderError::Syntax(e.to_string())
    }
}
