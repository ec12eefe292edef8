//! Expression-graph analysis: post-order enumeration and occurrence counting.
//!
//! Occurrences are counted per path: a node shared by two parents occurs twice, and every
//! node below it occurs twice as well. Nodes with more than one occurrence are the ones code
//! generation hoists into named locals.

use crate::foundation::ids::NodeId;
use crate::graph::pool::NodeTable;
use std::collections::{HashMap, HashSet};

/// Lazy post-order walk over the subtree of `root`.
///
/// Children are yielded strictly before their parent. `filter` is consulted once per visited
/// occurrence, before descending; returning `false` skips that node together with its
/// subtree. With an always-true filter every occurrence is yielded, so a shared sub-node
/// appears once per path that reaches it.
pub fn enumerate<F>(table: &NodeTable, root: NodeId, filter: F) -> Enumerate<'_, F>
where
    F: FnMut(NodeId) -> bool,
{
    Enumerate {
        table,
        root,
        filter,
        stack: Vec::new(),
        started: false,
    }
}

/// Iterator returned by [`enumerate`].
///
/// Uses an explicit stack, so arbitrarily deep graphs do not grow the call stack.
pub struct Enumerate<'t, F> {
    table: &'t NodeTable,
    root: NodeId,
    filter: F,
    // (node, index of the next child to visit)
    stack: Vec<(NodeId, usize)>,
    started: bool,
}

impl<F> Enumerate<'_, F>
where
    F: FnMut(NodeId) -> bool,
{
    /// Rewind to the root. A stateful filter keeps its state.
    pub fn restart(&mut self) {
        self.stack.clear();
        self.started = false;
    }
}

impl<F> Iterator for Enumerate<'_, F>
where
    F: FnMut(NodeId) -> bool,
{
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if !self.started {
            self.started = true;
            if (self.filter)(self.root) {
                self.stack.push((self.root, 0));
            }
        }

        while let Some(top) = self.stack.last_mut() {
            let (id, next) = *top;
            match self.table.children(id).get(next) {
                Some(&child) => {
                    top.1 += 1;
                    if (self.filter)(child) {
                        self.stack.push((child, 0));
                    }
                }
                None => {
                    self.stack.pop();
                    return Some(id);
                }
            }
        }
        None
    }
}

/// Distinct nodes in first-occurrence order, with their occurrence counts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OccurrenceCounts {
    order: Vec<NodeId>,
    counts: HashMap<NodeId, u64>,
}

impl OccurrenceCounts {
    /// Tally an occurrence sequence, typically the output of [`enumerate`].
    pub fn from_sequence(seq: impl IntoIterator<Item = NodeId>) -> Self {
        let mut out = Self::default();
        for id in seq {
            out.record(id, 1);
        }
        out
    }

    /// Counts for the union of the subtrees of `roots`, as if each root were enumerated in
    /// turn with `filter` and the sequences concatenated.
    ///
    /// Runs in time linear in distinct nodes and edges: each node is visited once, then
    /// path counts are pushed from parents to children in reverse topological order.
    /// `filter` must be a pure predicate. Counts saturate at `u64::MAX`.
    pub fn of_roots<F>(table: &NodeTable, roots: &[NodeId], mut filter: F) -> Self
    where
        F: FnMut(NodeId) -> bool,
    {
        let mut out = Self::default();
        let mut seen = HashSet::new();
        for &root in roots {
            if !filter(root) {
                continue;
            }
            let walk = enumerate(table, root, |n| {
                !seen.contains(&n) && filter(n) && seen.insert(n)
            });
            out.order.extend(walk);
            *out.counts.entry(root).or_insert(0) += 1;
        }

        for &id in out.order.iter().rev() {
            let paths = out.counts.get(&id).copied().unwrap_or(0);
            for &child in table.children(id) {
                if seen.contains(&child) {
                    let c = out.counts.entry(child).or_insert(0);
                    *c = c.saturating_add(paths);
                }
            }
        }
        out
    }

    fn record(&mut self, id: NodeId, n: u64) {
        let c = self.counts.entry(id).or_insert_with(|| {
            self.order.push(id);
            0
        });
        *c = c.saturating_add(n);
    }

    /// Distinct nodes in first-occurrence order.
    pub fn order(&self) -> &[NodeId] {
        &self.order
    }

    /// Occurrences of `id`; zero when it was never visited.
    pub fn count(&self, id: NodeId) -> u64 {
        self.counts.get(&id).copied().unwrap_or(0)
    }

    /// Nodes occurring more than once, in first-occurrence order.
    pub fn shared(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.order.iter().copied().filter(|id| self.count(*id) > 1)
    }

    /// Number of distinct nodes.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Return `true` when nothing was visited.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Sub-expressions of `root` that occur more than once, in first-occurrence order.
///
/// These must be bound to a named local before their second use; everything else is inlined.
pub fn reference_counts(table: &NodeTable, root: NodeId) -> Vec<NodeId> {
    OccurrenceCounts::from_sequence(enumerate(table, root, |_| true))
        .shared()
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/analyze/mod.rs"]
mod tests;
