//! Statically typed builtin functions.
//!
//! Each function mirrors one row of [`crate::call_result`].

use crate::graph::kind::{Float, GenType, KindTag, Sampler2D, Vec2, Vec3, Vec4};
use crate::graph::node::{Args, Node};
use crate::graph::typed::Expr;
use smallvec::smallvec;

fn call<'p, O: KindTag>(name: &str, first: Expr<'p, impl KindTag>, rest: Args) -> Expr<'p, O> {
    let pool = first.pool;
    let mut args: Args = smallvec![first.id];
    args.extend(rest);
    let id = pool.make_named(O::KIND, name, |func| Node::Call { func, args });
    Expr::from_raw(pool, id)
}

fn unary<'p, G: GenType, O: KindTag>(name: &str, x: Expr<'p, G>) -> Expr<'p, O> {
    call(name, x, Args::new())
}

fn binary<'p, A: KindTag, B: KindTag, O: KindTag>(
    name: &str,
    a: Expr<'p, A>,
    b: Expr<'_, B>,
) -> Expr<'p, O> {
    let b = a.pool.adopt(b.pool, b.id);
    call(name, a, smallvec![b])
}

fn ternary<'p, A: KindTag, B: KindTag, C: KindTag, O: KindTag>(
    name: &str,
    a: Expr<'p, A>,
    b: Expr<'_, B>,
    c: Expr<'_, C>,
) -> Expr<'p, O> {
    let b = a.pool.adopt(b.pool, b.id);
    let c = a.pool.adopt(c.pool, c.id);
    call(name, a, smallvec![b, c])
}

/// `texture2D(sampler, coord)`.
pub fn texture2d<'p>(sampler: Expr<'p, Sampler2D>, coord: Expr<'_, Vec2>) -> Expr<'p, Vec4> {
    binary("texture2D", sampler, coord)
}

/// `sin(x)`.
pub fn sin<G: GenType>(x: Expr<'_, G>) -> Expr<'_, G> {
    unary("sin", x)
}

/// `cos(x)`.
pub fn cos<G: GenType>(x: Expr<'_, G>) -> Expr<'_, G> {
    unary("cos", x)
}

/// `abs(x)`.
pub fn abs<G: GenType>(x: Expr<'_, G>) -> Expr<'_, G> {
    unary("abs", x)
}

/// `fract(x)`.
pub fn fract<G: GenType>(x: Expr<'_, G>) -> Expr<'_, G> {
    unary("fract", x)
}

/// `floor(x)`.
pub fn floor<G: GenType>(x: Expr<'_, G>) -> Expr<'_, G> {
    unary("floor", x)
}

/// `normalize(x)`.
pub fn normalize<G: GenType>(x: Expr<'_, G>) -> Expr<'_, G> {
    unary("normalize", x)
}

/// `length(x)`.
pub fn length<G: GenType>(x: Expr<'_, G>) -> Expr<'_, Float> {
    unary("length", x)
}

/// `dot(a, b)`.
pub fn dot<'p, G: GenType>(a: Expr<'p, G>, b: Expr<'_, G>) -> Expr<'p, Float> {
    binary("dot", a, b)
}

/// `distance(a, b)`.
pub fn distance<'p, G: GenType>(a: Expr<'p, G>, b: Expr<'_, G>) -> Expr<'p, Float> {
    binary("distance", a, b)
}

/// `min(a, b)`.
pub fn min<'p, G: GenType>(a: Expr<'p, G>, b: Expr<'_, G>) -> Expr<'p, G> {
    binary("min", a, b)
}

/// `max(a, b)`.
pub fn max<'p, G: GenType>(a: Expr<'p, G>, b: Expr<'_, G>) -> Expr<'p, G> {
    binary("max", a, b)
}

/// `pow(a, b)`.
pub fn pow<'p, G: GenType>(a: Expr<'p, G>, b: Expr<'_, G>) -> Expr<'p, G> {
    binary("pow", a, b)
}

/// `step(edge, x)`.
pub fn step<'p, G: GenType>(edge: Expr<'p, G>, x: Expr<'_, G>) -> Expr<'p, G> {
    binary("step", edge, x)
}

/// `mix(a, b, t)`.
pub fn mix<'p, G: GenType>(a: Expr<'p, G>, b: Expr<'_, G>, t: Expr<'_, Float>) -> Expr<'p, G> {
    ternary("mix", a, b, t)
}

/// `clamp(x, lo, hi)`.
pub fn clamp<'p, G: GenType>(
    x: Expr<'p, G>,
    lo: Expr<'_, Float>,
    hi: Expr<'_, Float>,
) -> Expr<'p, G> {
    ternary("clamp", x, lo, hi)
}

/// `cross(a, b)`.
pub fn cross<'p>(a: Expr<'p, Vec3>, b: Expr<'_, Vec3>) -> Expr<'p, Vec3> {
    binary("cross", a, b)
}
