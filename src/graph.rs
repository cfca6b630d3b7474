/*!
The capability contract between a graph and the path enumerator.

Like the iterator traits of a handlegraph, these are implemented on
shared references (`&'a G`) so that each implementation can name its
own iterator types through associated types, without boxing.

* [`AllNodes`] gives access to the node set, and is used to compute
  the default cutoff
* [`NodeNeighbors`] gives the distinct neighbors of a node, used by
  the simple-edge traversal
* [`NodeEdges`] gives every edge leaving a node, with parallel edges
  repeated, used by the multi-edge traversal
* [`GraphKind`] declares whether the graph is a multigraph, which
  selects the traversal
*/

use crate::node::{Edge, NodeId};

pub mod iter;

pub use self::iter::*;

/// Access to the nodes of a graph.
pub trait AllNodes: Sized {
    type Nodes: Iterator<Item = NodeId>;

    fn all_nodes(self) -> Self::Nodes;

    #[inline]
    fn node_count(self) -> usize {
        self.all_nodes().count()
    }

    #[inline]
    fn has_node<I: Into<NodeId>>(self, n_id: I) -> bool {
        let n_id = n_id.into();
        self.all_nodes().any(|n| n == n_id)
    }
}

/// Access to the neighbors of a node. Each neighbor is produced
/// once, no matter how many edges connect the two nodes.
///
/// Implementations must produce the neighbors in the same order every
/// time for an unchanged graph, as the order in which paths are
/// enumerated follows it.
pub trait NodeNeighbors: Sized {
    type Neighbors: Iterator<Item = NodeId>;

    fn neighbors(self, node: NodeId) -> Self::Neighbors;

    #[inline]
    fn degree(self, node: NodeId) -> usize {
        self.neighbors(node).count()
    }
}

/// Access to the edges leaving a node, as `Edge(node, other)`.
/// Parallel edges are each produced separately.
pub trait NodeEdges: Sized {
    type Edges: Iterator<Item = Edge>;

    fn edges_from(self, node: NodeId) -> Self::Edges;

    /// Iterator over the far end of each edge leaving `node`.
    #[inline]
    fn edge_targets(self, node: NodeId) -> EdgeTargets<Self::Edges> {
        EdgeTargets::new(self.edges_from(node))
    }
}

/// The structural flags of a graph.
pub trait GraphKind: Sized {
    /// `true` if the graph may hold more than one edge between the
    /// same ordered pair of nodes.
    fn is_multigraph(self) -> bool;

    fn is_directed(self) -> bool;
}

/// Trait encapsulating the owned side of a graph that can be searched
/// for paths.
pub trait PathGraph {
    /// Return the total number of edges in the graph, counting
    /// parallel edges individually
    fn edge_count(&self) -> usize;
}

/// Convenience trait for collecting all the graph reference traits in
/// a single bound. The `impl` on `&T`, which has the additional bound
/// that `T: PathGraph`, makes it possible to use this as the only
/// bound in functions that are generic over graph implementations.
pub trait PathGraphRef:
    AllNodes + NodeNeighbors + NodeEdges + GraphKind + Copy
{
}

impl<'a, T> PathGraphRef for &'a T
where
    T: PathGraph,
    &'a T: AllNodes + NodeNeighbors + NodeEdges + GraphKind + Copy,
{
}

/// The `directed` and `multigraph` flags of a graph, used when
/// constructing one.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GraphType {
    pub directed: bool,
    pub multigraph: bool,
}

impl GraphType {
    pub const UNDIRECTED: GraphType = GraphType {
        directed: false,
        multigraph: false,
    };

    pub const DIRECTED: GraphType = GraphType {
        directed: true,
        multigraph: false,
    };

    pub const MULTI_UNDIRECTED: GraphType = GraphType {
        directed: false,
        multigraph: true,
    };

    pub const MULTI_DIRECTED: GraphType = GraphType {
        directed: true,
        multigraph: true,
    };
}
