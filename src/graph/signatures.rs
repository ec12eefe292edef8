//! Enumerated kind tables for operators, constructors and builtin functions.
//!
//! The dynamic constructors consult these tables directly; the typed layer implements exactly
//! the same combinations as trait impls, and the tests cross-check the two.

use crate::graph::kind::Kind;
use crate::graph::node::BinaryOp;

/// Names of every builtin function known to [`call_result`].
pub const FUNCTION_NAMES: &[&str] = &[
    "texture2D",
    "sin",
    "cos",
    "abs",
    "fract",
    "floor",
    "normalize",
    "length",
    "dot",
    "distance",
    "min",
    "max",
    "pow",
    "step",
    "mix",
    "clamp",
    "cross",
];

/// Result kind of `lhs <op> rhs`, or `None` when the combination is not valid.
pub fn binary_result(op: BinaryOp, lhs: Kind, rhs: Kind) -> Option<Kind> {
    use Kind::*;

    match (op, lhs, rhs) {
        (_, Sampler2D, _) | (_, _, Sampler2D) => None,
        (_, l, r) if l == r => Some(l),
        (_, v, Float) | (_, Float, v) if v.is_vector() => Some(v),
        (BinaryOp::Mul, Mat4, Vec4) | (BinaryOp::Mul, Vec4, Mat4) => Some(Vec4),
        _ => None,
    }
}

/// Argument-kind lists accepted by the constructor of `target`.
pub fn construct_signatures(target: Kind) -> &'static [&'static [Kind]] {
    use Kind::*;

    match target {
        Float | Sampler2D => &[],
        Vec2 => &[&[Float, Float]],
        Vec3 => &[&[Float, Float, Float], &[Vec2, Float], &[Float, Vec2]],
        Vec4 => &[
            &[Float, Float, Float, Float],
            &[Vec2, Float, Float],
            &[Vec2, Vec2],
            &[Vec3, Float],
            &[Float, Vec3],
        ],
        Mat4 => &[&[Vec4, Vec4, Vec4, Vec4]],
    }
}

/// Whether `target(args...)` is a valid constructor call.
pub fn construct_valid(target: Kind, args: &[Kind]) -> bool {
    construct_signatures(target).iter().any(|sig| *sig == args)
}

/// Result kind of the builtin `name(args...)`, or `None` when the call is not valid.
pub fn call_result(name: &str, args: &[Kind]) -> Option<Kind> {
    use Kind::*;

    match (name, args) {
        ("texture2D", [Sampler2D, Vec2]) => Some(Vec4),
        ("sin" | "cos" | "abs" | "fract" | "floor" | "normalize", [g]) if g.is_gen_type() => {
            Some(*g)
        }
        ("length", [g]) if g.is_gen_type() => Some(Float),
        ("dot" | "distance", [a, b]) if a == b && a.is_gen_type() => Some(Float),
        ("min" | "max" | "pow" | "step", [a, b]) if a == b && a.is_gen_type() => Some(*a),
        ("mix", [a, b, Float]) if a == b && a.is_gen_type() => Some(*a),
        ("clamp", [x, Float, Float]) if x.is_gen_type() => Some(*x),
        ("cross", [Vec3, Vec3]) => Some(Vec3),
        _ => None,
    }
}

/// Whether `name` is a known builtin function.
pub fn is_function(name: &str) -> bool {
    FUNCTION_NAMES.contains(&name)
}

pub(crate) fn describe_kinds(kinds: &[Kind]) -> String {
    kinds
        .iter()
        .map(|k| k.glsl_name())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[path = "../../tests/unit/graph/signatures.rs"]
mod tests;
