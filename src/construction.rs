/*!
Generators for small, well-known graphs.

All of them build an undirected, simple [`HashGraph`] on the nodes
`0..n`, inserting edges in ascending order so that the neighbor order
of every node, and thus the order paths are enumerated in, is fixed.
*/

use crate::{
    graph::GraphType,
    hashgraph::HashGraph,
    mutablegraph::AdditiveGraph,
    node::{Edge, NodeId},
};

fn with_nodes(n: usize) -> HashGraph {
    let mut graph = HashGraph::with_type(GraphType::UNDIRECTED);
    for id in 0..n {
        graph.create_node(NodeId::from(id));
    }
    graph
}

/// The path `0 - 1 - ... - (n-1)`.
pub fn path_graph(n: usize) -> HashGraph {
    let mut graph = with_nodes(n);
    graph.create_edges((1..n).map(|i| Edge::new(i - 1, i)));
    graph
}

/// The cycle `0 - 1 - ... - (n-1) - 0`. With a single node, that is
/// a self-loop.
pub fn cycle_graph(n: usize) -> HashGraph {
    let mut graph = with_nodes(n);
    graph.create_edges((0..n).map(|i| Edge::new(i, (i + 1) % n)));
    graph
}

/// The graph with an edge between every pair of distinct nodes.
pub fn complete_graph(n: usize) -> HashGraph {
    let mut graph = with_nodes(n);
    for i in 0..n {
        graph.create_edges(((i + 1)..n).map(|j| Edge::new(i, j)));
    }
    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::graph::*;

    fn neighbors(graph: &HashGraph, node: u64) -> Vec<u64> {
        graph.neighbors(NodeId(node)).map(u64::from).collect()
    }

    #[test]
    fn path_graph_shape() {
        let graph = path_graph(5);
        assert_eq!(graph.node_count(), 5);
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(neighbors(&graph, 0), vec![1]);
        assert_eq!(neighbors(&graph, 2), vec![1, 3]);
        assert_eq!(neighbors(&graph, 4), vec![3]);
    }

    #[test]
    fn cycle_graph_shape() {
        let graph = cycle_graph(4);
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(neighbors(&graph, 0), vec![1, 3]);
        assert_eq!(neighbors(&graph, 3), vec![2, 0]);

        let single = cycle_graph(1);
        assert_eq!(neighbors(&single, 0), vec![0]);
        assert_eq!(cycle_graph(0).node_count(), 0);
    }

    #[test]
    fn complete_graph_shape() {
        let graph = complete_graph(4);
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 6);
        assert_eq!(neighbors(&graph, 0), vec![1, 2, 3]);
        assert_eq!(neighbors(&graph, 2), vec![0, 1, 3]);
    }
}
