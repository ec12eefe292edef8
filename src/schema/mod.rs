//! JSON program documents.
//!
//! ```json
//! {
//!   "attributes": { "aVertexPosition": "vec2", "aTexCoord": "vec2" },
//!   "uniforms": { "uTransform": "mat4", "uTexture": "sampler2D" },
//!   "defs": [{ "name": "vTexCoord", "expr": "aTexCoord", "varying": true }],
//!   "vertex_position": "uTransform * vec4(aVertexPosition, 0, 1)",
//!   "fragment_colour": "texture2D(uTexture, vTexCoord)"
//! }
//! ```

use crate::codegen::assemble::{Program, ShaderOpts};
use crate::codegen::binder::validate_identifier;
use crate::foundation::error::{ShaderError, ShaderResult};
use crate::graph::kind::Kind;
use crate::graph::pool::ExprPool;
use crate::text::compile_expr;
use crate::text::scope::Scope;
use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// A program as written in a JSON document: named inputs, ordered helper definitions, and the
/// two outputs as expression source text.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProgramSource {
    /// Per-vertex inputs by name.
    #[serde(default)]
    pub attributes: BTreeMap<String, Kind>,
    /// Per-draw inputs by name.
    #[serde(default)]
    pub uniforms: BTreeMap<String, Kind>,
    /// Named helper expressions, each visible to later definitions and to the outputs.
    #[serde(default)]
    pub defs: Vec<DefSource>,
    /// Expression for the clip-space vertex position (`vec4`).
    pub vertex_position: String,
    /// Expression for the fragment colour (`vec4`).
    pub fragment_colour: String,
    /// Output options.
    #[serde(default)]
    pub options: ShaderOpts,
}

/// One named helper expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefSource {
    /// Name visible to later expressions.
    pub name: String,
    /// Expression source text.
    pub expr: String,
    /// Interpolate the value from the vertex stage to the fragment stage.
    #[serde(default)]
    pub varying: bool,
}

impl ProgramSource {
    /// Parse a program document from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ShaderResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| ShaderError::validation(format!("parse program JSON: {e}")))
    }

    /// Parse a program document from a JSON string.
    pub fn from_json_str(s: &str) -> ShaderResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| ShaderError::validation(format!("parse program JSON: {e}")))
    }

    /// Parse a program document from a JSON file on disk.
    ///
    /// IO failures surface as [`ShaderError::Other`]; malformed documents as
    /// [`ShaderError::Validation`].
    pub fn from_path(path: impl AsRef<Path>) -> ShaderResult<Self> {
        let path = path.as_ref();
        let f = File::open(path)
            .with_context(|| format!("open program JSON '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }

    /// Build the expression graph in `pool`.
    ///
    /// Fails on invalid or duplicate names, unknown identifiers, kind errors and outputs that
    /// are not `vec4`.
    #[tracing::instrument(skip(self, pool), fields(defs = self.defs.len()))]
    pub fn build<'p>(&self, pool: &'p ExprPool) -> ShaderResult<(Program<'p>, ShaderOpts)> {
        let mut scope = Scope::new();
        for (name, kind) in &self.attributes {
            validate_identifier(name)?;
            let e = pool
                .dyn_attribute(name, *kind)
                .map_err(|e| in_item(e, "attribute", name))?;
            scope.define(name, e)?;
        }
        for (name, kind) in &self.uniforms {
            validate_identifier(name)?;
            scope.define(name, pool.dyn_uniform(name, *kind))?;
        }

        for def in &self.defs {
            validate_identifier(&def.name)?;
            let mut e = compile_expr(pool, &def.expr, &scope)
                .map_err(|e| in_item(e, "def", &def.name))?;
            if def.varying {
                e = e.varying().map_err(|e| in_item(e, "def", &def.name))?;
            }
            scope.define(&def.name, e)?;
        }

        let position = compile_expr(pool, &self.vertex_position, &scope)
            .map_err(|e| in_item(e, "output", "vertex_position"))?;
        let colour = compile_expr(pool, &self.fragment_colour, &scope)
            .map_err(|e| in_item(e, "output", "fragment_colour"))?;
        Ok((Program::from_dyn(position, colour)?, self.options.clone()))
    }
}

fn in_item(err: ShaderError, what: &str, name: &str) -> ShaderError {
    match err {
        ShaderError::TypeMismatch(m) => ShaderError::type_mismatch(format!("{what} '{name}': {m}")),
        ShaderError::Syntax(m) => ShaderError::syntax(format!("{what} '{name}': {m}")),
        ShaderError::Validation(m) => ShaderError::validation(format!("{what} '{name}': {m}")),
        other => other,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schema/mod.rs"]
mod tests;
