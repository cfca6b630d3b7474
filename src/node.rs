use std::ops::Add;

/// Newtype that represents a node in the graph, no matter the
/// graph implementation
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct NodeId(pub u64);

impl NodeId {
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for NodeId {
    #[inline]
    fn from(num: u64) -> Self {
        NodeId(num)
    }
}

impl From<usize> for NodeId {
    #[inline]
    fn from(num: usize) -> Self {
        NodeId(num as u64)
    }
}

impl From<i32> for NodeId {
    #[inline]
    fn from(num: i32) -> Self {
        NodeId(num as u64)
    }
}

impl From<NodeId> for u64 {
    #[inline]
    fn from(id: NodeId) -> Self {
        id.0
    }
}

impl From<NodeId> for usize {
    #[inline]
    fn from(id: NodeId) -> Self {
        id.0 as usize
    }
}

impl Add<u64> for NodeId {
    type Output = Self;

    #[inline]
    fn add(self, other: u64) -> Self {
        NodeId(self.0 + other)
    }
}

/// One edge leaving the first node, projected to an ordered pair.
/// Parallel edges in a multigraph produce equal `Edge`s.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Hash, Eq, Ord)]
pub struct Edge(pub NodeId, pub NodeId);

impl Edge {
    #[inline]
    pub fn new<S: Into<NodeId>, T: Into<NodeId>>(from: S, to: T) -> Edge {
        Edge(from.into(), to.into())
    }

    #[inline]
    pub fn source(&self) -> NodeId {
        self.0
    }

    #[inline]
    pub fn target(&self) -> NodeId {
        self.1
    }

    /// The same edge traversed the other way
    #[inline]
    pub fn flip(self) -> Edge {
        Edge(self.1, self.0)
    }

    #[inline]
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }
}

/// A path through the graph as an ordered list of nodes, first
/// element is the source and last is the target.
pub type Path = Vec<NodeId>;

/// Number of edges in a path.
#[inline]
pub fn path_length(path: &[NodeId]) -> usize {
    path.len().saturating_sub(1)
}

/// Convenience for building a `Path` out of integer IDs, mostly
/// useful in tests.
pub fn path_from<I, T>(ids: I) -> Path
where
    I: IntoIterator<Item = T>,
    T: Into<NodeId>,
{
    ids.into_iter().map(Into::into).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_id_conversions() {
        let u: u64 = 597283742;
        let id = NodeId::from(u);
        assert_eq!(u64::from(id), u);
        assert_eq!(usize::from(id), u as usize);
        assert_eq!(id + 1, NodeId(597283743));
        assert!(NodeId::default().is_zero());
    }

    #[test]
    fn edge_flip() {
        let e = Edge::new(3u64, 7u64);
        assert_eq!(e.source(), NodeId(3));
        assert_eq!(e.target(), NodeId(7));
        assert_eq!(e.flip(), Edge::new(7u64, 3u64));
        assert!(!e.is_loop());
        assert!(Edge::new(2u64, 2u64).is_loop());
    }

    #[test]
    fn path_lengths() {
        assert_eq!(path_length(&[]), 0);
        assert_eq!(path_length(&path_from(vec![1u64])), 0);
        assert_eq!(path_length(&path_from(vec![1u64, 2, 3])), 2);
    }
}
