use simple_paths::{
    graph::*,
    hashgraph::HashGraph,
    mutablegraph::*,
    node::{Edge, NodeId},
};

static N1: NodeId = NodeId(1);
static N2: NodeId = NodeId(2);
static N3: NodeId = NodeId(3);
static N4: NodeId = NodeId(4);
static N5: NodeId = NodeId(5);
static N6: NodeId = NodeId(6);

fn diamond_graph() -> HashGraph {
    let mut graph = HashGraph::directed();
    for id in 1..=6u64 {
        graph.create_node(id);
    }

    /*
    edges
    1  -> 2 -> 5 -> 6
      \-> 3 -> 4 /
     */
    graph.create_edge(Edge(N1, N2));
    graph.create_edge(Edge(N2, N5));
    graph.create_edge(Edge(N5, N6));

    graph.create_edge(Edge(N1, N3));
    graph.create_edge(Edge(N3, N4));
    graph.create_edge(Edge(N4, N6));

    graph
}

#[test]
fn can_create_nodes() {
    let mut graph = HashGraph::new();
    let n1 = graph.append_node();
    let n2 = graph.append_node();
    let n3 = graph.append_node();

    assert_eq!(u64::from(n1), 0);
    assert_eq!(u64::from(n3), 2);
    assert!(graph.get_node(&n2).is_some());
    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.max_id, n3);
}

#[test]
fn can_create_edges() {
    let graph = diamond_graph();

    let n1 = graph.get_node_unchecked(&N1);
    let n4 = graph.get_node_unchecked(&N4);
    let n6 = graph.get_node_unchecked(&N6);

    assert!(n1.has_edge_to(N2));
    assert!(n1.has_edge_to(N3));
    assert!(n4.has_edge_to(N6));
    assert!(n6.edges.is_empty());
    assert_eq!(graph.edge_count(), 6);
}

#[test]
fn graph_neighbors_iter() {
    let mut graph = diamond_graph();

    graph.create_edge(Edge(N1, N4));
    graph.create_edge(Edge(N1, N6));

    let mut iter = graph.neighbors(N1);

    assert_eq!(Some(N2), iter.next());
    assert_eq!(Some(N3), iter.next());
    assert_eq!(Some(N4), iter.next());
    assert_eq!(Some(N6), iter.next());
    assert_eq!(None, iter.next());

    assert_eq!(graph.degree(N1), 4);
    assert_eq!(graph.degree(N6), 0);
}

#[test]
fn graph_nodes_iter() {
    let graph = diamond_graph();

    let nodes = vec![N1, N2, N3, N4, N5, N6];

    let mut iter_nodes: Vec<NodeId> = graph.all_nodes().collect();
    iter_nodes.sort();

    assert!(iter_nodes.iter().all(|n| graph.get_node(n).is_some()));
    assert_eq!(nodes, iter_nodes);
}

#[test]
fn graph_edges_iter() {
    let mut graph = HashGraph::multi_directed();
    graph.create_edge(Edge(N1, N2));
    graph.create_edge(Edge(N1, N2));
    graph.create_edge(Edge(N1, N3));

    let edges: Vec<Edge> = graph.edges_from(N1).collect();
    assert_eq!(edges, vec![Edge(N1, N2), Edge(N1, N2), Edge(N1, N3)]);

    let neighbors: Vec<NodeId> = graph.neighbors(N1).collect();
    assert_eq!(neighbors, vec![N2, N3]);

    assert!(graph.is_multigraph());
    assert_eq!(graph.edge_count(), 3);
}

#[test]
fn graph_from_edges() {
    let edges = vec![Edge(N1, N2), Edge(N2, N3), Edge(N1, N2)];

    let simple = HashGraph::from_edges(GraphType::UNDIRECTED, edges.clone());
    assert_eq!(simple.edge_count(), 2);
    assert_eq!(simple.neighbors(N2).collect::<Vec<_>>(), vec![N1, N3]);

    let multi = HashGraph::from_edges(GraphType::MULTI_UNDIRECTED, edges);
    assert_eq!(multi.edge_count(), 3);
    assert_eq!(
        multi.edge_targets(N2).collect::<Vec<_>>(),
        vec![N1, N1, N3]
    );
}

#[test]
fn parallel_edges_are_grouped() {
    let mut graph = HashGraph::multi_directed();
    graph.create_edge(Edge(N1, N2));
    graph.create_edge(Edge(N1, N3));
    graph.create_edge(Edge(N1, N4));
    graph.create_edge(Edge(N1, N3));
    graph.create_edge(Edge(N1, N2));

    let targets: Vec<NodeId> = graph.edge_targets(N1).collect();
    assert_eq!(targets, vec![N2, N2, N3, N3, N4]);

    let neighbors: Vec<NodeId> = graph.neighbors(N1).collect();
    assert_eq!(neighbors, vec![N2, N3, N4]);
    assert_eq!(graph.edge_count(), 5);
}
