/*!

`HashGraph` node definition

*/

use crate::node::NodeId;

/// A node's adjacency list. In a multigraph the same neighbor is
/// repeated once per parallel edge, in consecutive entries.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Node {
    pub edges: Vec<NodeId>,
}

impl Node {
    pub fn new() -> Node {
        Default::default()
    }

    #[inline]
    pub fn has_edge_to(&self, other: NodeId) -> bool {
        self.edges.contains(&other)
    }

    /// Number of edges to `other`
    #[inline]
    pub fn multiplicity(&self, other: NodeId) -> usize {
        self.edges.iter().filter(|&&n| n == other).count()
    }
}
