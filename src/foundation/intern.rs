use crate::foundation::ids::Symbol;
use std::collections::HashMap;

/// Caller-provided names (attributes, uniforms, function names) interned once per pool.
#[derive(Debug, Default)]
pub(crate) struct StringInterner {
    ids_by_str: HashMap<String, Symbol>,
    strs_by_id: Vec<String>,
}

impl StringInterner {
    pub(crate) fn intern(&mut self, s: &str) -> Symbol {
        if let Some(&id) = self.ids_by_str.get(s) {
            return id;
        }
        let id = Symbol(u32::try_from(self.strs_by_id.len()).unwrap_or(u32::MAX));
        self.strs_by_id.push(s.to_owned());
        self.ids_by_str.insert(s.to_owned(), id);
        id
    }

    pub(crate) fn lookup(&self, s: &str) -> Option<Symbol> {
        self.ids_by_str.get(s).copied()
    }

    pub(crate) fn get(&self, id: Symbol) -> &str {
        &self.strs_by_id[id.0 as usize]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/intern.rs"]
mod tests;
