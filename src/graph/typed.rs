use crate::foundation::ids::NodeId;
use crate::graph::dynamic::DynExpr;
use crate::graph::kind::{AttributeKind, Float, GenType, Kind, KindTag, Mat4, Vec2, Vec3, Vec4};
use crate::graph::node::{BinaryOp, Literal, Node};
use crate::graph::pool::ExprPool;
use smallvec::SmallVec;
use std::fmt;
use std::marker::PhantomData;

/// Statically kinded handle to an interned expression node.
///
/// Operators, constructors and builtin calls are only implemented for valid kind
/// combinations, so a well-typed Rust program can only build well-kinded nodes.
pub struct Expr<'p, K> {
    pub(crate) pool: &'p ExprPool,
    pub(crate) id: NodeId,
    _kind: PhantomData<fn() -> K>,
}

impl<K> Clone for Expr<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for Expr<'_, K> {}

impl<'p, K: KindTag> Expr<'p, K> {
    pub(crate) fn from_raw(pool: &'p ExprPool, id: NodeId) -> Self {
        Self {
            pool,
            id,
            _kind: PhantomData,
        }
    }

    /// Interned id of this node in its pool.
    pub fn id(self) -> NodeId {
        self.id
    }

    /// Runtime kind, always `K::KIND`.
    pub fn kind(self) -> Kind {
        K::KIND
    }

    /// The pool owning this node.
    pub fn pool(self) -> &'p ExprPool {
        self.pool
    }

    /// Forget the static kind.
    pub fn erase(self) -> DynExpr<'p> {
        DynExpr::from_raw(self.pool, self.id, K::KIND)
    }

    /// Structural equality, valid across pools.
    pub fn same_structure<K2: KindTag>(self, other: Expr<'_, K2>) -> bool {
        self.erase().same_structure(other.erase())
    }
}

impl<'p, K: GenType> Expr<'p, K> {
    /// Mark this value for interpolation from the vertex stage to the fragment stage.
    pub fn varying(self) -> Self {
        let id = self.pool.make(K::KIND, Node::Varying(self.id));
        Self::from_raw(self.pool, id)
    }
}

impl<K: KindTag> PartialEq for Expr<'_, K> {
    fn eq(&self, other: &Self) -> bool {
        self.same_structure(*other)
    }
}

impl<K: KindTag> fmt::Debug for Expr<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Expr")
            .field("id", &self.id)
            .field("kind", &K::KIND)
            .finish()
    }
}

impl ExprPool {
    /// Named per-vertex input.
    pub fn attribute<K: AttributeKind>(&self, name: &str) -> Expr<'_, K> {
        let id = self.make_named(K::KIND, name, Node::Attribute);
        Expr::from_raw(self, id)
    }

    /// Named per-draw input.
    pub fn uniform<K: KindTag>(&self, name: &str) -> Expr<'_, K> {
        let id = self.make_named(K::KIND, name, Node::Uniform);
        Expr::from_raw(self, id)
    }

    /// `float` constant.
    pub fn float(&self, v: f32) -> Expr<'_, Float> {
        let id = self.make(Kind::Float, Node::Literal(Literal::Float(v)));
        Expr::from_raw(self, id)
    }

    /// Invoke the constructor of `K` with one of its valid argument tuples.
    pub fn construct<'p, K: KindTag, A: ConstructArgs<'p, K>>(&'p self, args: A) -> Expr<'p, K> {
        let args = args.into_args(self);
        let id = self.make(K::KIND, Node::Construct { args });
        Expr::from_raw(self, id)
    }

    /// `vec2(...)`.
    pub fn vec2<'p, A: ConstructArgs<'p, Vec2>>(&'p self, args: A) -> Expr<'p, Vec2> {
        self.construct(args)
    }

    /// `vec3(...)`.
    pub fn vec3<'p, A: ConstructArgs<'p, Vec3>>(&'p self, args: A) -> Expr<'p, Vec3> {
        self.construct(args)
    }

    /// `vec4(...)`.
    pub fn vec4<'p, A: ConstructArgs<'p, Vec4>>(&'p self, args: A) -> Expr<'p, Vec4> {
        self.construct(args)
    }

    /// `mat4(...)` from four columns.
    pub fn mat4<'p, A: ConstructArgs<'p, Mat4>>(&'p self, args: A) -> Expr<'p, Mat4> {
        self.construct(args)
    }
}

mod sealed {
    pub trait Sealed<K> {}
}

/// Argument tuples accepted by the constructor of `K`.
///
/// Sealed: the implementations are exactly the enumerated constructor signatures.
pub trait ConstructArgs<'p, K: KindTag>: sealed::Sealed<K> {
    /// Argument ids, adopted into `pool`.
    fn into_args(self, pool: &'p ExprPool) -> SmallVec<[NodeId; 4]>;
}

macro_rules! construct_args {
    ($target:ty => $( ( $($arg:ident : $kind:ty),+ ) );+ $(;)?) => {
        $(
            impl<'p> sealed::Sealed<$target> for ( $(Expr<'p, $kind>,)+ ) {}

            impl<'p> ConstructArgs<'p, $target> for ( $(Expr<'p, $kind>,)+ ) {
                fn into_args(self, pool: &'p ExprPool) -> SmallVec<[NodeId; 4]> {
                    let ( $($arg,)+ ) = self;
                    smallvec::smallvec![ $( pool.adopt($arg.pool, $arg.id) ),+ ]
                }
            }
        )+
    };
}

construct_args!(Vec2 => (x: Float, y: Float));
construct_args!(Vec3 =>
    (x: Float, y: Float, z: Float);
    (xy: Vec2, z: Float);
    (x: Float, yz: Vec2);
);
construct_args!(Vec4 =>
    (x: Float, y: Float, z: Float, w: Float);
    (xy: Vec2, z: Float, w: Float);
    (xy: Vec2, zw: Vec2);
    (xyz: Vec3, w: Float);
    (x: Float, yzw: Vec3);
);
construct_args!(Mat4 => (c0: Vec4, c1: Vec4, c2: Vec4, c3: Vec4));

fn binary<'p, L: KindTag, R: KindTag, O: KindTag>(
    lhs: Expr<'p, L>,
    op: BinaryOp,
    rhs: Expr<'_, R>,
) -> Expr<'p, O> {
    let pool = lhs.pool;
    let rhs = pool.adopt(rhs.pool, rhs.id);
    let id = pool.make(
        O::KIND,
        Node::Operator {
            operands: [lhs.id, rhs],
            op,
        },
    );
    Expr::from_raw(pool, id)
}

macro_rules! impl_binary {
    ($trait:ident, $method:ident, $op:expr; $($lhs:ty, $rhs:ty => $out:ty;)+) => {
        $(
            impl<'p> std::ops::$trait<Expr<'p, $rhs>> for Expr<'p, $lhs> {
                type Output = Expr<'p, $out>;

                fn $method(self, rhs: Expr<'p, $rhs>) -> Expr<'p, $out> {
                    binary(self, $op, rhs)
                }
            }
        )+
    };
}

macro_rules! impl_arith {
    ($trait:ident, $method:ident, $op:expr) => {
        impl_binary!($trait, $method, $op;
            Float, Float => Float;
            Vec2, Vec2 => Vec2;
            Vec3, Vec3 => Vec3;
            Vec4, Vec4 => Vec4;
            Mat4, Mat4 => Mat4;
            Vec2, Float => Vec2;
            Vec3, Float => Vec3;
            Vec4, Float => Vec4;
            Float, Vec2 => Vec2;
            Float, Vec3 => Vec3;
            Float, Vec4 => Vec4;
        );
    };
}

impl_arith!(Add, add, BinaryOp::Add);
impl_arith!(Sub, sub, BinaryOp::Sub);
impl_arith!(Mul, mul, BinaryOp::Mul);

impl_binary!(Mul, mul, BinaryOp::Mul;
    Mat4, Vec4 => Vec4;
    Vec4, Mat4 => Vec4;
);
