//! Textual front end: `uTransform * vec4(aPosition, 0.0, 1.0)` to a [`DynExpr`].
//!
//! Supports numbers, identifiers, calls, parentheses, unary minus and `+ - *`. A call whose
//! name is a kind (`vec2`, `vec3`, `vec4`, `mat4`) is a constructor, `varying(x)` marks an
//! interpolated value, and any other call is a builtin function. Kinds are checked by the
//! dynamic construction layer.
//!
//! `-x` lowers to `x * -1.0`, so it is only defined for `float` and vectors; negating a
//! `mat4` or `sampler2D` is a kind error.

pub(crate) mod ast;
pub(crate) mod error;
pub(crate) mod lexer;
pub(crate) mod lower;
pub(crate) mod parser;
pub(crate) mod scope;

use crate::foundation::error::ShaderResult;
use crate::graph::dynamic::DynExpr;
use crate::graph::pool::ExprPool;
use scope::Scope;

/// Parse `src` and build it in `pool`, resolving identifiers in `scope`.
#[tracing::instrument(skip(pool, scope), fields(names = scope.len()))]
pub fn compile_expr<'p>(
    pool: &'p ExprPool,
    src: &str,
    scope: &Scope<'_>,
) -> ShaderResult<DynExpr<'p>> {
    let ast = parser::parse_expr(src)?;
    lower::lower(pool, &ast, scope)
}

#[cfg(test)]
#[path = "../../tests/unit/text/compile.rs"]
mod tests;
