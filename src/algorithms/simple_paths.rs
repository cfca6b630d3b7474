/*!
Lazy enumeration of every simple path between two nodes.

The number of simple paths in a graph can be factorial in the number
of nodes, so the paths are never collected up front. Instead the
depth-first search keeps its state in an explicit stack of neighbor
cursors, one per node on the current path prefix, and suspends after
each emitted path until the next one is requested.

Two traversals exist, and [`all_simple_paths`] picks one depending on
[`GraphKind::is_multigraph`]:

* [`SimpleEdgePaths`] walks the distinct neighbors of each node
* [`MultiEdgePaths`] walks every edge leaving each node, so that a
  path ending in one of several parallel edges into the target is
  produced once per edge

# Source equal to target

The zero-edge path `[source]` is never produced, even when `source ==
target`. In that case the traversal yields the cycles through
`source` instead, every path starting and ending with `source`. In an
undirected graph that includes going out and back along a single
edge, e.g. `[0, 1, 0]`.
*/

use fnv::FnvHashSet;

use crate::{
    graph::*,
    node::{NodeId, Path},
};

#[allow(unused_imports)]
use log::{debug, trace};

/// Errors reported by the checked path operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathsError {
    /// An endpoint is not a node of the graph.
    MissingNode(NodeId),
    /// A path broke one of the simple path properties.
    InvalidPath(String),
}

impl std::fmt::Display for PathsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathsError::MissingNode(id) => {
                write!(f, "node {} does not exist in the graph", id)
            }
            PathsError::InvalidPath(reason) => {
                write!(f, "invalid path: {}", reason)
            }
        }
    }
}

impl std::error::Error for PathsError {}

/// The maximum number of edges in a produced path, given the number
/// of nodes in the graph and the cutoff requested by the caller.
///
/// Without a cutoff, the longest possible simple path, `node_count -
/// 1`, is used. Returns `None` when the cutoff is less than 1, in
/// which case no path is produced.
#[inline]
pub fn effective_cutoff(
    node_count: usize,
    cutoff: Option<isize>,
) -> Option<usize> {
    match cutoff {
        None => Some(node_count.saturating_sub(1)).filter(|&c| c >= 1),
        Some(c) if c >= 1 => Some(c as usize),
        Some(_) => None,
    }
}

/// The traversal state shared by both path iterators: the current
/// path prefix, and one cursor over unexplored children per node on
/// the prefix.
///
/// `stack` and `visited` are always the same length; the last
/// cursor on `stack` belongs to the last node of `visited`.
#[derive(Debug, Clone)]
struct Traversal<I> {
    target: NodeId,
    cutoff: usize,
    visited: Vec<NodeId>,
    on_path: FnvHashSet<NodeId>,
    stack: Vec<I>,
}

impl<I> Traversal<I>
where
    I: Iterator<Item = NodeId>,
{
    fn new<F>(
        source: NodeId,
        target: NodeId,
        cutoff: Option<usize>,
        children: F,
    ) -> Self
    where
        F: FnOnce(NodeId) -> I,
    {
        let mut traversal = Traversal {
            target,
            cutoff: cutoff.unwrap_or(0),
            visited: Vec::new(),
            on_path: FnvHashSet::default(),
            stack: Vec::new(),
        };

        // an empty stack is an exhausted traversal
        if cutoff.is_some() {
            traversal.descend(source, children(source));
        }

        traversal
    }

    #[inline]
    fn descend(&mut self, node: NodeId, children: I) {
        trace!("descending into node {} at depth {}", node, self.depth());
        self.visited.push(node);
        self.on_path.insert(node);
        self.stack.push(children);
        debug_assert_eq!(self.stack.len(), self.visited.len());
    }

    #[inline]
    fn backtrack(&mut self) {
        self.stack.pop();
        if let Some(node) = self.visited.pop() {
            self.on_path.remove(&node);
        }
        debug_assert_eq!(self.stack.len(), self.visited.len());
    }

    /// Number of nodes on the current prefix.
    #[inline]
    fn depth(&self) -> usize {
        self.visited.len()
    }

    /// `true` if extending the prefix by one more node would produce
    /// a path longer than the cutoff, once the target is appended.
    #[inline]
    fn at_frontier(&self) -> bool {
        self.depth() >= self.cutoff
    }

    #[inline]
    fn on_path(&self, node: NodeId) -> bool {
        self.on_path.contains(&node)
    }

    #[inline]
    fn path_to_target(&self) -> Path {
        let mut path = Vec::with_capacity(self.visited.len() + 1);
        path.extend_from_slice(&self.visited);
        path.push(self.target);
        trace!("found path of length {}", self.visited.len());
        path
    }
}

/// Iterator over the simple paths of a graph with at most one edge
/// between each ordered pair of nodes.
pub struct SimpleEdgePaths<G>
where
    G: NodeNeighbors + Copy,
{
    graph: G,
    paths: Traversal<G::Neighbors>,
}

impl<G> SimpleEdgePaths<G>
where
    G: NodeNeighbors + AllNodes + Copy,
{
    pub fn new(
        graph: G,
        source: NodeId,
        target: NodeId,
        cutoff: Option<isize>,
    ) -> Self {
        let cutoff = effective_cutoff(graph.node_count(), cutoff);
        let paths =
            Traversal::new(source, target, cutoff, |n| graph.neighbors(n));
        Self { graph, paths }
    }
}

impl<G> Iterator for SimpleEdgePaths<G>
where
    G: NodeNeighbors + Copy,
{
    type Item = Path;

    fn next(&mut self) -> Option<Path> {
        let target = self.paths.target;

        loop {
            let at_frontier = self.paths.at_frontier();
            let children = self.paths.stack.last_mut()?;

            let child = match children.next() {
                Some(child) => child,
                None => {
                    self.paths.backtrack();
                    continue;
                }
            };

            if !at_frontier {
                if child == target {
                    return Some(self.paths.path_to_target());
                } else if !self.paths.on_path(child) {
                    let next = self.graph.neighbors(child);
                    self.paths.descend(child, next);
                }
            } else {
                // nothing at the frontier can be descended into, so
                // the whole frame is resolved here
                let found = child == target || children.any(|c| c == target);
                let path = if found {
                    Some(self.paths.path_to_target())
                } else {
                    None
                };
                self.paths.backtrack();
                if path.is_some() {
                    return path;
                }
            }
        }
    }
}

impl<G> std::iter::FusedIterator for SimpleEdgePaths<G> where
    G: NodeNeighbors + Copy
{
}

/// Iterator over the simple paths of a multigraph. A path whose last
/// step has `k` parallel edges into the target is produced `k` times.
pub struct MultiEdgePaths<G>
where
    G: NodeEdges + Copy,
{
    graph: G,
    paths: Traversal<EdgeTargets<G::Edges>>,
    pending: Option<(Path, usize)>,
}

impl<G> MultiEdgePaths<G>
where
    G: NodeEdges + AllNodes + Copy,
{
    pub fn new(
        graph: G,
        source: NodeId,
        target: NodeId,
        cutoff: Option<isize>,
    ) -> Self {
        let cutoff = effective_cutoff(graph.node_count(), cutoff);
        let paths =
            Traversal::new(source, target, cutoff, |n| graph.edge_targets(n));
        Self {
            graph,
            paths,
            pending: None,
        }
    }
}

impl<G> MultiEdgePaths<G>
where
    G: NodeEdges + Copy,
{
    /// Take one of the remaining copies of a path found at the
    /// frontier.
    #[inline]
    fn next_pending(&mut self) -> Option<Path> {
        let (path, count) = self.pending.as_mut()?;
        *count -= 1;
        if *count == 0 {
            self.pending.take().map(|(path, _)| path)
        } else {
            Some(path.clone())
        }
    }
}

impl<G> Iterator for MultiEdgePaths<G>
where
    G: NodeEdges + Copy,
{
    type Item = Path;

    fn next(&mut self) -> Option<Path> {
        if let Some(path) = self.next_pending() {
            return Some(path);
        }

        let target = self.paths.target;

        loop {
            let at_frontier = self.paths.at_frontier();
            let children = self.paths.stack.last_mut()?;

            let child = match children.next() {
                Some(child) => child,
                None => {
                    self.paths.backtrack();
                    continue;
                }
            };

            if !at_frontier {
                if child == target {
                    return Some(self.paths.path_to_target());
                } else if !self.paths.on_path(child) {
                    let next = self.graph.edge_targets(child);
                    self.paths.descend(child, next);
                }
            } else {
                // one path per parallel edge into the target
                let count = std::iter::once(child)
                    .chain(children)
                    .filter(|&c| c == target)
                    .count();
                if count > 0 {
                    self.pending = Some((self.paths.path_to_target(), count));
                }
                self.paths.backtrack();
                if let Some(path) = self.next_pending() {
                    return Some(path);
                }
            }
        }
    }
}

impl<G> std::iter::FusedIterator for MultiEdgePaths<G> where
    G: NodeEdges + Copy
{
}

/// The iterator returned by [`all_simple_paths`], wrapping the
/// traversal that fits the graph.
pub enum SimplePaths<G>
where
    G: PathGraphRef,
{
    Simple(SimpleEdgePaths<G>),
    Multi(MultiEdgePaths<G>),
}

impl<G> Iterator for SimplePaths<G>
where
    G: PathGraphRef,
{
    type Item = Path;

    #[inline]
    fn next(&mut self) -> Option<Path> {
        match self {
            SimplePaths::Simple(paths) => paths.next(),
            SimplePaths::Multi(paths) => paths.next(),
        }
    }
}

impl<G> std::iter::FusedIterator for SimplePaths<G> where G: PathGraphRef {}

/// Generate all simple paths in `graph` from `source` to `target`.
///
/// Only paths with at most `cutoff` edges are produced. Without a
/// cutoff, `node_count - 1` is used, which places no limit on simple
/// paths. A cutoff less than 1 produces no paths.
///
/// Paths are produced in depth-first order, following the neighbor
/// order of the graph, and the same inputs always give the same
/// sequence. Nothing is computed until the iterator is advanced;
/// dropping the iterator abandons the search.
///
/// An endpoint that is not in the graph is not checked for, and is
/// treated however the graph's lookups treat a missing node. See
/// [`try_all_simple_paths`] for a version that checks.
///
/// ```
/// use simple_paths::algorithms::all_simple_paths;
/// use simple_paths::construction::path_graph;
/// use simple_paths::node::path_from;
///
/// let graph = path_graph(5);
/// let paths = all_simple_paths(&graph, 0u64.into(), 4u64.into(), None)
///     .collect::<Vec<_>>();
/// assert_eq!(paths, vec![path_from(0u64..5)]);
/// ```
pub fn all_simple_paths<G>(
    graph: G,
    source: NodeId,
    target: NodeId,
    cutoff: Option<isize>,
) -> SimplePaths<G>
where
    G: PathGraphRef,
{
    debug!(
        "enumerating simple paths from {} to {}, cutoff {:?}, multigraph: {}",
        source,
        target,
        cutoff,
        graph.is_multigraph()
    );

    if graph.is_multigraph() {
        SimplePaths::Multi(MultiEdgePaths::new(graph, source, target, cutoff))
    } else {
        SimplePaths::Simple(SimpleEdgePaths::new(
            graph, source, target, cutoff,
        ))
    }
}

/// Like [`all_simple_paths`], but fails with
/// [`PathsError::MissingNode`] if `source` or `target` is not in the
/// graph.
pub fn try_all_simple_paths<G>(
    graph: G,
    source: NodeId,
    target: NodeId,
    cutoff: Option<isize>,
) -> Result<SimplePaths<G>, PathsError>
where
    G: PathGraphRef,
{
    if let Some(&missing) =
        [source, target].iter().find(|&&n| !graph.has_node(n))
    {
        debug!("endpoint {} missing from graph", missing);
        return Err(PathsError::MissingNode(missing));
    }
    Ok(all_simple_paths(graph, source, target, cutoff))
}

/// Count the simple paths from `source` to `target`, without keeping
/// them around.
pub fn count_simple_paths<G>(
    graph: G,
    source: NodeId,
    target: NodeId,
    cutoff: Option<isize>,
) -> usize
where
    G: PathGraphRef,
{
    all_simple_paths(graph, source, target, cutoff).count()
}
