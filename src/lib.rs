//! shadergraph compiles typed expression graphs into GLSL ES vertex and fragment shaders.
//!
//! Programs are built as expressions over attributes, uniforms and literals, either with the
//! statically typed [`Expr`] API or with the runtime-checked [`DynExpr`] layer. Identical
//! sub-expressions share one node in an [`ExprPool`], so the graph is a DAG.
//!
//! - Build a [`Program`] from a vertex position and a fragment colour
//! - Generate a [`ShaderPair`] with [`assemble_shader_pair`]
//! - Or load a [`ProgramSource`] JSON document and [`ProgramSource::build`] it
//!
//! ```
//! use shadergraph::{ExprPool, Mat4, Program, Sampler2D, Vec2, assemble_shader_pair, glsl};
//!
//! let pool = ExprPool::new();
//! let position = pool.attribute::<Vec2>("aVertexPosition");
//! let tex_coord = pool.attribute::<Vec2>("aTexCoord");
//! let transform = pool.uniform::<Mat4>("uTransform");
//! let texture = pool.uniform::<Sampler2D>("uTexture");
//!
//! let program = Program::new(
//!     transform * pool.vec4((position, pool.float(0.0), pool.float(1.0))),
//!     glsl::texture2d(texture, tex_coord.varying()),
//! );
//! let pair = assemble_shader_pair(&program)?;
//! assert!(pair.vertex.contains("gl_Position = (uTransform * vec4(aVertexPosition, 0.0, 1.0));"));
//! assert!(pair.fragment.contains("gl_FragColor = texture2D(uTexture, varying_0);"));
//! # Ok::<(), shadergraph::ShaderError>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

pub(crate) mod analyze;
pub(crate) mod codegen;
pub(crate) mod graph;
pub(crate) mod schema;
pub(crate) mod text;

pub use crate::foundation::error::{ShaderError, ShaderResult};
pub use crate::foundation::ids::NodeId;

pub use crate::graph::builtins as glsl;
pub use crate::graph::dynamic::DynExpr;
pub use crate::graph::kind::{
    AttributeKind, Float, GenType, Kind, KindTag, Mat4, Sampler2D, Vec2, Vec3, Vec4,
};
pub use crate::graph::node::{BinaryOp, Literal, NodeView};
pub use crate::graph::pool::{ExprPool, NodeTable};
pub use crate::graph::signatures::{
    FUNCTION_NAMES, binary_result, call_result, construct_signatures, construct_valid,
    is_function,
};
pub use crate::graph::typed::{ConstructArgs, Expr};

pub use crate::analyze::{Enumerate, OccurrenceCounts, enumerate, reference_counts};

pub use crate::codegen::assemble::{
    FloatPrecision, Program, ShaderOpts, ShaderPair, assemble_shader_pair,
    assemble_shader_pair_with,
};
pub use crate::codegen::binder::{Binder, validate_identifier};
pub use crate::codegen::emit::{emit_block, emit_expression, format_literal};
pub use crate::codegen::fingerprint::ShaderFingerprint;
pub use crate::codegen::reserved::{
    BUILTIN_PREFIX, RESERVED_WORDS, reserved_names, varying_prefix,
};

pub use crate::schema::{DefSource, ProgramSource};
pub use crate::text::compile_expr;
pub use crate::text::error::SyntaxError;
pub use crate::text::scope::Scope;
