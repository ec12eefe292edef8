use crate::analyze::enumerate;
use crate::foundation::hash::StableHasher;
use crate::foundation::ids::{NodeId, Symbol};
use crate::foundation::intern::StringInterner;
use crate::graph::kind::Kind;
use crate::graph::node::{Literal, Node, NodeView};
use std::cell::{Ref, RefCell};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone)]
struct NodeEntry {
    kind: Kind,
    node: Node,
    digest: u128,
}

/// Hash-consing table behind an [`ExprPool`].
///
/// Nodes are keyed by `(kind, operation, child ids, payload)`; interning a node that is already
/// present returns the existing id, so equality of ids is structural equality of subtrees.
#[derive(Debug, Default)]
pub struct NodeTable {
    names: StringInterner,
    ids_by_node: HashMap<(Kind, Node), NodeId>,
    entries: Vec<NodeEntry>,
}

impl NodeTable {
    /// Number of distinct nodes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` when no node has been interned yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Value kind of `id`.
    pub fn kind(&self, id: NodeId) -> Kind {
        self.entries[id.index()].kind
    }

    /// Children of `id` in evaluation order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.entries[id.index()].node.children()
    }

    /// 128-bit structural digest of the subtree rooted at `id`.
    ///
    /// Equal across pools for structurally equal subtrees.
    pub fn digest(&self, id: NodeId) -> u128 {
        self.entries[id.index()].digest
    }

    /// Operation of `id` with names resolved.
    pub fn view(&self, id: NodeId) -> NodeView<'_> {
        match &self.entries[id.index()].node {
            Node::Operator { operands, op } => NodeView::Operator {
                lhs: operands[0],
                op: *op,
                rhs: operands[1],
            },
            Node::Call { func, args } => NodeView::Call {
                name: self.names.get(*func),
                args,
            },
            Node::Construct { args } => NodeView::Construct { args },
            Node::Varying(inner) => NodeView::Varying(*inner),
            Node::Attribute(name) => NodeView::Attribute(self.names.get(*name)),
            Node::Uniform(name) => NodeView::Uniform(self.names.get(*name)),
            Node::Literal(lit) => NodeView::Literal(*lit),
        }
    }

    /// Attributes, uniforms and varyings: the nodes that must be pre-bound before generation.
    pub fn is_named_input(&self, id: NodeId) -> bool {
        matches!(
            self.entries[id.index()].node,
            Node::Attribute(_) | Node::Uniform(_) | Node::Varying(_)
        )
    }

    /// Look up an already interned attribute by name and kind.
    pub fn find_attribute(&self, name: &str, kind: Kind) -> Option<NodeId> {
        let sym = self.names.lookup(name)?;
        self.ids_by_node.get(&(kind, Node::Attribute(sym))).copied()
    }

    /// Look up an already interned uniform by name and kind.
    pub fn find_uniform(&self, name: &str, kind: Kind) -> Option<NodeId> {
        let sym = self.names.lookup(name)?;
        self.ids_by_node.get(&(kind, Node::Uniform(sym))).copied()
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.entries[id.index()].node
    }

    pub(crate) fn name(&self, sym: Symbol) -> &str {
        self.names.get(sym)
    }

    pub(crate) fn intern_name(&mut self, s: &str) -> Symbol {
        self.names.intern(s)
    }

    pub(crate) fn intern(&mut self, kind: Kind, node: Node) -> NodeId {
        let key = (kind, node);
        if let Some(&id) = self.ids_by_node.get(&key) {
            return id;
        }
        let (kind, node) = key;
        let digest = self.digest_of(kind, &node);
        let id = NodeId(u32::try_from(self.entries.len()).unwrap_or(u32::MAX));
        self.entries.push(NodeEntry {
            kind,
            node: node.clone(),
            digest,
        });
        self.ids_by_node.insert((kind, node), id);
        id
    }

    fn digest_of(&self, kind: Kind, node: &Node) -> u128 {
        let mut h = StableHasher::new();
        h.write_u8(node.tag());
        h.write_u8(kind.tag());
        match node {
            Node::Operator { op, .. } => h.write_u8(op.tag()),
            Node::Call { func, .. } => h.write_str(self.names.get(*func)),
            Node::Construct { .. } | Node::Varying(_) => {}
            Node::Attribute(name) | Node::Uniform(name) => h.write_str(self.names.get(*name)),
            Node::Literal(Literal::Float(v)) => h.write_f32(*v),
        }
        let children = node.children();
        h.write_u32(children.len() as u32);
        for c in children {
            h.write_u128(self.digest(*c));
        }
        h.finish()
    }
}

/// Owner of every expression node built for one or more programs.
///
/// Typed handles ([`crate::Expr`]) and dynamic handles ([`crate::DynExpr`]) borrow the pool;
/// building the same expression twice yields the same [`NodeId`]. Handles from different
/// pools may be combined: the foreign subtree is re-interned into the receiving pool.
///
/// The table is behind a `RefCell`. Holding the guard returned by [`ExprPool::table`] while
/// constructing new nodes panics.
#[derive(Debug, Default)]
pub struct ExprPool {
    table: RefCell<NodeTable>,
}

impl ExprPool {
    /// Create an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct nodes interned so far.
    pub fn len(&self) -> usize {
        self.table.borrow().len()
    }

    /// Return `true` when no node has been interned yet.
    pub fn is_empty(&self) -> bool {
        self.table.borrow().is_empty()
    }

    /// Read-only access to the node table for analysis and code generation.
    pub fn table(&self) -> Ref<'_, NodeTable> {
        self.table.borrow()
    }

    /// Value kind of `id`.
    pub fn kind_of(&self, id: NodeId) -> Kind {
        self.table.borrow().kind(id)
    }

    pub(crate) fn make(&self, kind: Kind, node: Node) -> NodeId {
        self.table.borrow_mut().intern(kind, node)
    }

    pub(crate) fn make_named(
        &self,
        kind: Kind,
        name: &str,
        f: impl FnOnce(Symbol) -> Node,
    ) -> NodeId {
        let mut table = self.table.borrow_mut();
        let sym = table.intern_name(name);
        table.intern(kind, f(sym))
    }

    pub(crate) fn is_same(&self, other: &ExprPool) -> bool {
        std::ptr::eq(self, other)
    }

    /// Return the id of `id` (owned by `from`) inside this pool, re-interning it if needed.
    pub(crate) fn adopt(&self, from: &ExprPool, id: NodeId) -> NodeId {
        if self.is_same(from) {
            return id;
        }

        let src = from.table.borrow();
        let mut dst = self.table.borrow_mut();
        let mut mapped: HashMap<NodeId, NodeId> = HashMap::new();
        let mut seen: HashSet<NodeId> = HashSet::new();

        for old in enumerate(&src, id, |n| seen.insert(n)) {
            let node = match src.node(old) {
                Node::Operator { operands, op } => Node::Operator {
                    operands: [mapped[&operands[0]], mapped[&operands[1]]],
                    op: *op,
                },
                Node::Call { func, args } => Node::Call {
                    func: dst.intern_name(src.name(*func)),
                    args: args.iter().map(|a| mapped[a]).collect(),
                },
                Node::Construct { args } => Node::Construct {
                    args: args.iter().map(|a| mapped[a]).collect(),
                },
                Node::Varying(inner) => Node::Varying(mapped[inner]),
                Node::Attribute(name) => Node::Attribute(dst.intern_name(src.name(*name))),
                Node::Uniform(name) => Node::Uniform(dst.intern_name(src.name(*name))),
                Node::Literal(lit) => Node::Literal(*lit),
            };
            let new = dst.intern(src.kind(old), node);
            mapped.insert(old, new);
        }

        mapped[&id]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/graph/pool.rs"]
mod tests;
