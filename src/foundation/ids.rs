/// Handle of an interned expression node inside one [`crate::ExprPool`].
///
/// Two structurally equal nodes built in the same pool always share a `NodeId`, so the id is
/// the node's identity for every map and set used during compilation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Dense index of the node in its pool, in interning order.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct Symbol(pub(crate) u32);
