use crate::codegen::reserved::{BUILTIN_PREFIX, reserved_names};
use crate::foundation::error::{ShaderError, ShaderResult};
use crate::foundation::ids::NodeId;
use std::collections::{HashMap, HashSet};

/// Name table for one generation pass: which identifiers are taken, and which node each
/// bound identifier stands for.
///
/// Cloning forks the table; the assembler gives each stage its own fork of the pre-bound
/// inputs so that stage-local names never leak across stages.
#[derive(Debug, Clone, Default)]
pub struct Binder {
    used: HashSet<String>,
    bound: HashMap<NodeId, String>,
    // First suffix worth probing per base; everything below it is taken.
    next_suffix: HashMap<String, usize>,
}

impl Binder {
    /// Empty table with no reserved names.
    pub fn new() -> Self {
        Self::default()
    }

    /// Table pre-loaded with the shading language's reserved words and builtin names.
    pub fn with_reserved_words() -> Self {
        let mut b = Self::new();
        b.used.extend(reserved_names().map(str::to_owned));
        b
    }

    /// Mark `name` as used without binding a node to it.
    pub fn reserve(&mut self, name: &str) -> ShaderResult<()> {
        validate_identifier(name)?;
        if !self.used.insert(name.to_owned()) {
            return Err(ShaderError::name_conflict(format!(
                "'{name}' is already in use"
            )));
        }
        Ok(())
    }

    /// Bind `node` to `name`; both must be fresh.
    pub fn bind(&mut self, node: NodeId, name: &str) -> ShaderResult<()> {
        validate_identifier(name)?;
        if let Some(existing) = self.bound.get(&node) {
            return Err(ShaderError::name_conflict(format!(
                "node {} is already bound to '{existing}'",
                node.index()
            )));
        }
        self.reserve(name)?;
        self.bound.insert(node, name.to_owned());
        Ok(())
    }

    /// `base` if it is free, otherwise the first free `base_0`, `base_1`, ...
    ///
    /// The returned name is not reserved; bind or reserve it before asking again.
    pub fn unique_name(&mut self, base: &str) -> String {
        if !self.used.contains(base) {
            return base.to_owned();
        }
        let mut i = self.next_suffix.get(base).copied().unwrap_or(0);
        loop {
            let candidate = format!("{base}_{i}");
            if !self.used.contains(&candidate) {
                self.next_suffix.insert(base.to_owned(), i);
                return candidate;
            }
            i += 1;
        }
    }

    /// Name bound to `node`, if any.
    pub fn name_of(&self, node: NodeId) -> Option<&str> {
        self.bound.get(&node).map(String::as_str)
    }

    /// Whether `node` has a bound name.
    pub fn is_bound(&self, node: NodeId) -> bool {
        self.bound.contains_key(&node)
    }

    /// Whether `name` is reserved or bound.
    pub fn is_used(&self, name: &str) -> bool {
        self.used.contains(name)
    }

    /// Number of bound nodes.
    pub fn bound_len(&self) -> usize {
        self.bound.len()
    }
}

/// Check that `name` can be declared: `[A-Za-z_][A-Za-z0-9_]*`, not a builtin variable.
pub fn validate_identifier(name: &str) -> ShaderResult<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    };
    if !valid {
        return Err(ShaderError::validation(format!(
            "'{name}' is not a valid identifier"
        )));
    }
    if name.starts_with(BUILTIN_PREFIX) {
        return Err(ShaderError::validation(format!(
            "'{name}' uses the reserved prefix '{BUILTIN_PREFIX}'"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/codegen/binder.rs"]
mod tests;
