/*!
Lazy enumeration of all simple paths between two nodes of a graph.

# Overview

The number of simple paths between two nodes can grow factorially
with the size of the graph, so this crate never builds the full set.
[`all_simple_paths`](algorithms::all_simple_paths) returns an
iterator that performs an iterative depth-first search, producing one
path at a time and doing no work until the next path is requested.

The search comes in two variants, chosen from the graph's declared
capabilities: one for graphs with at most one edge between each
ordered pair of nodes, and one for multigraphs, where each parallel
edge into the target contributes its own path.

# The interface

The search is generic over the graph, which only needs to implement
the traits in [`graph`]:

* [`AllNodes`](graph::AllNodes) for the node count, which gives the
  default cutoff
* [`NodeNeighbors`](graph::NodeNeighbors) and
  [`NodeEdges`](graph::NodeEdges) for the neighbors and edges of a
  node
* [`GraphKind`](graph::GraphKind) for the multigraph flag

There is one concrete graph implementing them,
[`HashGraph`](hashgraph::HashGraph), and [`construction`] has
generators for a few standard graphs.

# `NodeId`s and `Path`s

The core types are defined in [`node`]:

* [`NodeId`](node::NodeId) is a newtype used as a node identifier
* [`Edge`](node::Edge) is an ordered pair of nodes
* [`Path`](node::Path) is a `Vec<NodeId>` from source to target

# Misc.

* [`util::validate`] checks paths against the simple path properties

*/

pub mod node;

pub mod graph;
pub mod mutablegraph;

pub mod hashgraph;

pub mod algorithms;
pub mod construction;
pub mod util;
