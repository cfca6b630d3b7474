/*!
A `HashMap`-based adjacency-list graph implementing the traits in
[`graph`](crate::graph).

Looking up the neighbors or edges of a node that is not in the graph
produces an empty iterator; `HashGraph` never panics on a missing
node during traversal. Use [`AllNodes::has_node`] to tell an absent
node apart from an isolated one.
*/

use std::collections::hash_map;

use crate::{graph::*, node::NodeId};

mod graph;
mod node;

pub use self::graph::HashGraph;
pub use self::node::Node;

impl<'a> AllNodes for &'a HashGraph {
    type Nodes = NodeIdRefIter<hash_map::Keys<'a, NodeId, Node>>;

    #[inline]
    fn all_nodes(self) -> Self::Nodes {
        NodeIdRefIter::new(self.graph.keys())
    }

    #[inline]
    fn node_count(self) -> usize {
        self.graph.len()
    }

    #[inline]
    fn has_node<I: Into<NodeId>>(self, n_id: I) -> bool {
        self.graph.contains_key(&n_id.into())
    }
}

impl<'a> NodeNeighbors for &'a HashGraph {
    type Neighbors =
        DistinctNodes<NodeIdRefIter<std::slice::Iter<'a, NodeId>>>;

    #[inline]
    fn neighbors(self, node: NodeId) -> Self::Neighbors {
        let iter = NodeIdRefIter::new(self.adjacency(node).iter());
        if self.kind.multigraph {
            DistinctNodes::new(iter)
        } else {
            DistinctNodes::unchecked(iter)
        }
    }
}

impl<'a> NodeEdges for &'a HashGraph {
    type Edges = AdjacentEdges<std::slice::Iter<'a, NodeId>>;

    #[inline]
    fn edges_from(self, node: NodeId) -> Self::Edges {
        AdjacentEdges::new(node, self.adjacency(node).iter())
    }
}

impl<'a> GraphKind for &'a HashGraph {
    #[inline]
    fn is_multigraph(self) -> bool {
        self.kind.multigraph
    }

    #[inline]
    fn is_directed(self) -> bool {
        self.kind.directed
    }
}
