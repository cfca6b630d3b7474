use fnv::FnvHashMap;

use crate::{
    graph::*,
    mutablegraph::*,
    node::{Edge, NodeId},
};

use super::Node;

/// A graph implementation using `HashMap` to represent the nodes,
/// and a `Vec` adjacency list per node.
///
/// Neighbors are produced in the order they were first connected.
/// Parallel edges in a multigraph are kept next to each other.
#[derive(Debug, Clone)]
pub struct HashGraph {
    pub kind: GraphType,
    pub max_id: NodeId,
    pub min_id: NodeId,
    pub graph: FnvHashMap<NodeId, Node>,
    pub edge_count: usize,
}

impl Default for HashGraph {
    fn default() -> HashGraph {
        HashGraph::with_type(GraphType::UNDIRECTED)
    }
}

impl HashGraph {
    pub fn new() -> HashGraph {
        Default::default()
    }

    pub fn with_type(kind: GraphType) -> HashGraph {
        HashGraph {
            kind,
            max_id: NodeId::from(0),
            min_id: NodeId::from(std::u64::MAX),
            graph: Default::default(),
            edge_count: 0,
        }
    }

    pub fn undirected() -> HashGraph {
        Self::with_type(GraphType::UNDIRECTED)
    }

    pub fn directed() -> HashGraph {
        Self::with_type(GraphType::DIRECTED)
    }

    pub fn multi_undirected() -> HashGraph {
        Self::with_type(GraphType::MULTI_UNDIRECTED)
    }

    pub fn multi_directed() -> HashGraph {
        Self::with_type(GraphType::MULTI_DIRECTED)
    }

    /// Build a graph of the given type from a list of edges.
    pub fn from_edges<I>(kind: GraphType, edges: I) -> HashGraph
    where
        I: IntoIterator<Item = Edge>,
    {
        let mut graph = Self::with_type(kind);
        graph.create_edges(edges);
        graph
    }

    pub fn get_node(&self, node_id: &NodeId) -> Option<&Node> {
        self.graph.get(node_id)
    }

    pub fn get_node_unchecked(&self, node_id: &NodeId) -> &Node {
        self.graph.get(node_id).unwrap_or_else(|| {
            panic!("Tried getting a node that doesn't exist, ID: {:?}", node_id)
        })
    }

    /// The adjacency list of a node, or an empty slice if the node
    /// does not exist.
    #[inline]
    pub(super) fn adjacency(&self, node_id: NodeId) -> &[NodeId] {
        self.graph
            .get(&node_id)
            .map(|n| n.edges.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    fn push_edge(&mut self, from: NodeId, to: NodeId) {
        if let Some(node) = self.graph.get_mut(&from) {
            match node.edges.iter().rposition(|&n| n == to) {
                Some(ix) => node.edges.insert(ix + 1, to),
                None => node.edges.push(to),
            }
        }
    }
}

impl AdditiveGraph for HashGraph {
    fn create_node<T: Into<NodeId>>(&mut self, node_id: T) -> bool {
        let node_id = node_id.into();
        if self.graph.contains_key(&node_id) {
            return false;
        }
        self.graph.insert(node_id, Node::new());
        self.max_id = std::cmp::max(self.max_id, node_id);
        self.min_id = std::cmp::min(self.min_id, node_id);
        true
    }

    fn append_node(&mut self) -> NodeId {
        let id = if self.graph.is_empty() {
            NodeId::from(0)
        } else {
            self.max_id + 1
        };
        self.create_node(id);
        id
    }

    fn create_edge(&mut self, Edge(from, to): Edge) {
        self.create_node(from);
        self.create_node(to);

        if !self.kind.multigraph
            && self.get_node_unchecked(&from).has_edge_to(to)
        {
            return;
        }

        self.push_edge(from, to);
        if !self.kind.directed && from != to {
            self.push_edge(to, from);
        }
        self.edge_count += 1;
    }

    fn clear_graph(&mut self) {
        *self = Self::with_type(self.kind);
    }
}

impl PathGraph for HashGraph {
    #[inline]
    fn edge_count(&self) -> usize {
        self.edge_count
    }
}
