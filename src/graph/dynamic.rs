use crate::foundation::error::{ShaderError, ShaderResult};
use crate::foundation::ids::NodeId;
use crate::graph::kind::{Kind, KindTag};
use crate::graph::node::{Args, BinaryOp, Literal, Node};
use crate::graph::pool::ExprPool;
use crate::graph::signatures::{
    binary_result, call_result, construct_signatures, construct_valid, describe_kinds,
    is_function,
};
use crate::graph::typed::Expr;
use std::fmt;

/// Expression handle whose kind is only known at runtime.
///
/// Every constructor checks the enumerated kind tables once and fails with
/// [`ShaderError::TypeMismatch`] on an invalid combination. Used by the text front end and
/// by callers assembling graphs from data.
#[derive(Clone, Copy)]
pub struct DynExpr<'p> {
    pool: &'p ExprPool,
    id: NodeId,
    kind: Kind,
}

impl<'p> DynExpr<'p> {
    pub(crate) fn from_raw(pool: &'p ExprPool, id: NodeId, kind: Kind) -> Self {
        Self { pool, id, kind }
    }

    /// Interned id of this node in its pool.
    pub fn id(self) -> NodeId {
        self.id
    }

    /// Value kind.
    pub fn kind(self) -> Kind {
        self.kind
    }

    /// The pool owning this node.
    pub fn pool(self) -> &'p ExprPool {
        self.pool
    }

    /// Structural equality, valid across pools.
    pub fn same_structure(self, other: DynExpr<'_>) -> bool {
        if self.pool.is_same(other.pool) {
            return self.id == other.id;
        }
        self.kind == other.kind
            && self.pool.table().digest(self.id) == other.pool.table().digest(other.id)
    }

    /// `self <op> rhs`, checked against the operator table.
    pub fn binary(self, op: BinaryOp, rhs: DynExpr<'_>) -> ShaderResult<DynExpr<'p>> {
        let kind = binary_result(op, self.kind, rhs.kind).ok_or_else(|| {
            ShaderError::type_mismatch(format!(
                "{} {} {} is not defined",
                self.kind,
                op.symbol(),
                rhs.kind
            ))
        })?;
        let rhs = self.pool.adopt(rhs.pool, rhs.id);
        let id = self.pool.make(
            kind,
            Node::Operator {
                operands: [self.id, rhs],
                op,
            },
        );
        Ok(Self::from_raw(self.pool, id, kind))
    }

    /// `self + rhs`.
    pub fn try_add(self, rhs: DynExpr<'_>) -> ShaderResult<DynExpr<'p>> {
        self.binary(BinaryOp::Add, rhs)
    }

    /// `self - rhs`.
    pub fn try_sub(self, rhs: DynExpr<'_>) -> ShaderResult<DynExpr<'p>> {
        self.binary(BinaryOp::Sub, rhs)
    }

    /// `self * rhs`.
    pub fn try_mul(self, rhs: DynExpr<'_>) -> ShaderResult<DynExpr<'p>> {
        self.binary(BinaryOp::Mul, rhs)
    }

    /// Mark this value for interpolation; only `float` and vectors interpolate.
    pub fn varying(self) -> ShaderResult<DynExpr<'p>> {
        if !self.kind.can_interpolate() {
            return Err(ShaderError::type_mismatch(format!(
                "{} cannot be a varying",
                self.kind
            )));
        }
        let id = self.pool.make(self.kind, Node::Varying(self.id));
        Ok(Self::from_raw(self.pool, id, self.kind))
    }

    /// Recover a statically kinded handle.
    pub fn typed<K: KindTag>(self) -> ShaderResult<Expr<'p, K>> {
        if self.kind != K::KIND {
            return Err(ShaderError::type_mismatch(format!(
                "expected {}, found {}",
                K::KIND,
                self.kind
            )));
        }
        Ok(Expr::from_raw(self.pool, self.id))
    }
}

impl PartialEq for DynExpr<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.same_structure(*other)
    }
}

impl fmt::Debug for DynExpr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynExpr")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .finish()
    }
}

impl ExprPool {
    /// Wrap an existing node of this pool.
    pub fn dyn_expr(&self, id: NodeId) -> DynExpr<'_> {
        DynExpr::from_raw(self, id, self.kind_of(id))
    }

    /// Named per-vertex input; samplers cannot be attributes.
    pub fn dyn_attribute(&self, name: &str, kind: Kind) -> ShaderResult<DynExpr<'_>> {
        if !kind.can_be_attribute() {
            return Err(ShaderError::type_mismatch(format!(
                "attribute '{name}' cannot have kind {kind}"
            )));
        }
        let id = self.make_named(kind, name, Node::Attribute);
        Ok(DynExpr::from_raw(self, id, kind))
    }

    /// Named per-draw input of any kind.
    pub fn dyn_uniform(&self, name: &str, kind: Kind) -> DynExpr<'_> {
        let id = self.make_named(kind, name, Node::Uniform);
        DynExpr::from_raw(self, id, kind)
    }

    /// `float` constant.
    pub fn dyn_float(&self, v: f32) -> DynExpr<'_> {
        let id = self.make(Kind::Float, Node::Literal(Literal::Float(v)));
        DynExpr::from_raw(self, id, Kind::Float)
    }

    /// `kind(args...)`, checked against the constructor table.
    pub fn dyn_construct(&self, kind: Kind, args: &[DynExpr<'_>]) -> ShaderResult<DynExpr<'_>> {
        let kinds: Vec<Kind> = args.iter().map(|a| a.kind).collect();
        if !construct_valid(kind, &kinds) {
            let accepted = construct_signatures(kind)
                .iter()
                .map(|sig| format!("{kind}({})", describe_kinds(sig)))
                .collect::<Vec<_>>();
            return Err(ShaderError::type_mismatch(format!(
                "no constructor {kind}({}); accepted: [{}]",
                describe_kinds(&kinds),
                accepted.join("; ")
            )));
        }
        let args = self.adopt_all(args);
        let id = self.make(kind, Node::Construct { args });
        Ok(DynExpr::from_raw(self, id, kind))
    }

    /// Builtin `name(args...)`, checked against the function table.
    pub fn dyn_call(&self, name: &str, args: &[DynExpr<'_>]) -> ShaderResult<DynExpr<'_>> {
        if !is_function(name) {
            return Err(ShaderError::validation(format!(
                "unknown function '{name}'"
            )));
        }
        let kinds: Vec<Kind> = args.iter().map(|a| a.kind).collect();
        let kind = call_result(name, &kinds).ok_or_else(|| {
            ShaderError::type_mismatch(format!("no overload {name}({})", describe_kinds(&kinds)))
        })?;
        let args = self.adopt_all(args);
        let id = self.make_named(kind, name, |func| Node::Call { func, args });
        Ok(DynExpr::from_raw(self, id, kind))
    }

    fn adopt_all(&self, args: &[DynExpr<'_>]) -> Args {
        args.iter().map(|a| self.adopt(a.pool, a.id)).collect()
    }
}
