//! Utility iterators that make it easier to implement the
//! iterator-centric traits in the [`graph`](crate::graph) module.
//!
//! These are structs rather than `std::iter::Map` and friends over
//! closures so that they can be named as associated types, and so
//! that the compiler can inline them.

use fnv::FnvHashSet;

use crate::node::{Edge, NodeId};

/// Iterator adapter to create an Iterator over `NodeId`s from an
/// iterator over &NodeId, in a way that can be used as the `Nodes`
/// type in implementations of [`AllNodes`](super::AllNodes).
pub struct NodeIdRefIter<I> {
    iter: I,
}

impl<I> NodeIdRefIter<I> {
    #[inline]
    pub fn new(iter: I) -> Self {
        Self { iter }
    }
}

impl<'a, I> Iterator for NodeIdRefIter<I>
where
    I: Iterator<Item = &'a NodeId> + 'a,
{
    type Item = NodeId;

    #[inline]
    fn next(&mut self) -> Option<NodeId> {
        self.iter.next().copied()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// Iterator over the edges leaving a single node, built from the
/// node's adjacency list. Used as the `Edges` type in implementations
/// of [`NodeEdges`](super::NodeEdges).
pub struct AdjacentEdges<I> {
    source: NodeId,
    iter: I,
}

impl<I> AdjacentEdges<I> {
    #[inline]
    pub fn new(source: NodeId, iter: I) -> Self {
        Self { source, iter }
    }
}

impl<'a, I> Iterator for AdjacentEdges<I>
where
    I: Iterator<Item = &'a NodeId> + 'a,
{
    type Item = Edge;

    #[inline]
    fn next(&mut self) -> Option<Edge> {
        let target = *self.iter.next()?;
        Some(Edge(self.source, target))
    }
}

impl<'a, I> std::iter::FusedIterator for AdjacentEdges<I> where
    I: Iterator<Item = &'a NodeId> + std::iter::FusedIterator + 'a
{
}

/// Iterator adapter projecting each `Edge(u, v)` to `v`. The same
/// node is produced once for each parallel edge.
pub struct EdgeTargets<I>
where
    I: Iterator<Item = Edge>,
{
    iter: I,
}

impl<I> EdgeTargets<I>
where
    I: Iterator<Item = Edge>,
{
    #[inline]
    pub fn new(iter: I) -> Self {
        Self { iter }
    }
}

impl<I> Iterator for EdgeTargets<I>
where
    I: Iterator<Item = Edge>,
{
    type Item = NodeId;

    #[inline]
    fn next(&mut self) -> Option<NodeId> {
        let Edge(_, target) = self.iter.next()?;
        Some(target)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// Iterator adapter that only produces the first occurrence of each
/// node in the wrapped iterator, keeping the order of first
/// occurrences.
///
/// Turns a multigraph adjacency list into a neighbor list. An
/// adjacency list already known to be free of duplicates can be
/// wrapped with [`DistinctNodes::unchecked`], which skips the
/// bookkeeping.
pub struct DistinctNodes<I>
where
    I: Iterator<Item = NodeId>,
{
    iter: I,
    seen: Option<FnvHashSet<NodeId>>,
}

impl<I> DistinctNodes<I>
where
    I: Iterator<Item = NodeId>,
{
    #[inline]
    pub fn new(iter: I) -> Self {
        Self {
            iter,
            seen: Some(FnvHashSet::default()),
        }
    }

    #[inline]
    pub fn unchecked(iter: I) -> Self {
        Self { iter, seen: None }
    }
}

impl<I> Iterator for DistinctNodes<I>
where
    I: Iterator<Item = NodeId>,
{
    type Item = NodeId;

    #[inline]
    fn next(&mut self) -> Option<NodeId> {
        match self.seen.as_mut() {
            Some(seen) => self.iter.find(|n| seen.insert(*n)),
            None => self.iter.next(),
        }
    }
}
