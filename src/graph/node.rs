use crate::foundation::ids::{NodeId, Symbol};
use smallvec::SmallVec;
use std::hash::{Hash, Hasher};

/// Binary arithmetic operators. Each is kind-polymorphic over an enumerated set of operand
/// combinations (see [`crate::binary_result`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
}

impl BinaryOp {
    /// Infix symbol in GLSL source.
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
        }
    }

    pub(crate) fn tag(self) -> u8 {
        match self {
            BinaryOp::Add => 0,
            BinaryOp::Sub => 1,
            BinaryOp::Mul => 2,
        }
    }
}

/// Constant payload of a literal node.
#[derive(Debug, Clone, Copy)]
pub enum Literal {
    /// A `float` constant.
    Float(f32),
}

// Literals compare by bit pattern so they can key the interning table.
impl PartialEq for Literal {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Literal::Float(a), Literal::Float(b)) => a.to_bits() == b.to_bits(),
        }
    }
}

impl Eq for Literal {}

impl Hash for Literal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Literal::Float(v) => v.to_bits().hash(state),
        }
    }
}

pub(crate) type Args = SmallVec<[NodeId; 4]>;

/// One interned operation. Children are referenced by [`NodeId`] within the same pool.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum Node {
    Operator { operands: [NodeId; 2], op: BinaryOp },
    Call { func: Symbol, args: Args },
    Construct { args: Args },
    Varying(NodeId),
    Attribute(Symbol),
    Uniform(Symbol),
    Literal(Literal),
}

impl Node {
    /// Children in evaluation order.
    pub(crate) fn children(&self) -> &[NodeId] {
        match self {
            Node::Operator { operands, .. } => operands,
            Node::Call { args, .. } | Node::Construct { args } => args,
            Node::Varying(inner) => std::slice::from_ref(inner),
            Node::Attribute(_) | Node::Uniform(_) | Node::Literal(_) => &[],
        }
    }

    pub(crate) fn tag(&self) -> u8 {
        match self {
            Node::Operator { .. } => 0,
            Node::Call { .. } => 1,
            Node::Construct { .. } => 2,
            Node::Varying(_) => 3,
            Node::Attribute(_) => 4,
            Node::Uniform(_) => 5,
            Node::Literal(_) => 6,
        }
    }
}

/// Read-only view of a node's operation, with names resolved.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeView<'t> {
    /// `lhs <op> rhs`.
    Operator {
        /// Left operand.
        lhs: NodeId,
        /// Operator.
        op: BinaryOp,
        /// Right operand.
        rhs: NodeId,
    },
    /// Invocation of a named builtin function.
    Call {
        /// Function name.
        name: &'t str,
        /// Ordered arguments.
        args: &'t [NodeId],
    },
    /// Invocation of the node kind's own constructor.
    Construct {
        /// Ordered arguments.
        args: &'t [NodeId],
    },
    /// Value interpolated from vertex to fragment stage.
    Varying(NodeId),
    /// Named per-vertex input.
    Attribute(&'t str),
    /// Named per-draw input.
    Uniform(&'t str),
    /// Constant.
    Literal(Literal),
}
