use crate::node::{Edge, NodeId};

/// Encapsulates adding nodes and edges to a graph.
pub trait AdditiveGraph {
    /// Add a node with the provided ID to the graph. Returns `false`
    /// if the node already existed.
    fn create_node<T: Into<NodeId>>(&mut self, node_id: T) -> bool;

    /// Add a node to the graph, letting the graph pick the node ID.
    fn append_node(&mut self) -> NodeId;

    /// Insert an edge into the graph, creating its endpoints if they
    /// do not already exist.
    ///
    /// Graphs that are not multigraphs ignore an edge that is already
    /// present; multigraphs add a parallel edge on every call.
    fn create_edge(&mut self, edge: Edge);

    fn create_edges<I>(&mut self, edges: I)
    where
        I: IntoIterator<Item = Edge>,
    {
        edges.into_iter().for_each(|e| self.create_edge(e));
    }

    fn clear_graph(&mut self);
}
