use crate::foundation::error::{ShaderError, ShaderResult};
use crate::graph::dynamic::DynExpr;
use std::collections::HashMap;

/// Names visible to expression source text.
#[derive(Debug, Clone, Default)]
pub struct Scope<'p> {
    names: HashMap<String, DynExpr<'p>>,
}

impl<'p> Scope<'p> {
    /// Empty scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `expr` visible as `name`. Names cannot be redefined.
    pub fn define(&mut self, name: &str, expr: DynExpr<'p>) -> ShaderResult<()> {
        if self.names.contains_key(name) {
            return Err(ShaderError::validation(format!(
                "'{name}' is already defined"
            )));
        }
        self.names.insert(name.to_owned(), expr);
        Ok(())
    }

    /// Expression bound to `name`.
    pub fn get(&self, name: &str) -> Option<DynExpr<'p>> {
        self.names.get(name).copied()
    }

    /// Number of names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Return `true` when nothing is defined.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
