use crate::graph::node::BinaryOp;

/// Parsed expression, before names and kinds are resolved. Offsets point into the source.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Ast {
    Number(f64),
    Ident {
        name: String,
        offset: usize,
    },
    Neg {
        expr: Box<Ast>,
        offset: usize,
    },
    Binary {
        op: BinaryOp,
        left: Box<Ast>,
        right: Box<Ast>,
        offset: usize,
    },
    Call {
        func: String,
        args: Vec<Ast>,
        offset: usize,
    },
}
