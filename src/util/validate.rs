use fnv::FnvHashSet;

use crate::{
    algorithms::PathsError,
    graph::*,
    node::{path_length, NodeId},
};

#[allow(unused_imports)]
use log::{debug, error, info, trace};

/// `true` if `nodes` is a non-empty sequence of distinct nodes, each
/// connected by an edge to the next.
pub fn is_simple_path<G>(graph: G, nodes: &[NodeId]) -> bool
where
    G: AllNodes + NodeNeighbors + Copy,
{
    if nodes.is_empty() {
        debug!("empty sequence is not a path");
        return false;
    }

    if let Some(&missing) = nodes.iter().find(|&&n| !graph.has_node(n)) {
        debug!("node {} on path does not exist", missing);
        return false;
    }

    let mut seen: FnvHashSet<NodeId> = FnvHashSet::default();
    if let Some(repeated) = nodes.iter().find(|&&n| !seen.insert(n)) {
        debug!("node {} repeated on path", repeated);
        return false;
    }

    steps_are_edges(graph, nodes)
}

fn steps_are_edges<G>(graph: G, nodes: &[NodeId]) -> bool
where
    G: NodeNeighbors + Copy,
{
    nodes.windows(2).all(|step| {
        let (from, to) = (step[0], step[1]);
        let connected = graph.neighbors(from).any(|n| n == to);
        if !connected {
            debug!("no edge from {} to {}", from, to);
        }
        connected
    })
}

/// Check a path produced by a search from `source` to `target`: it
/// must start at `source`, end at `target`, have at most `cutoff`
/// edges, follow edges of the graph, and not repeat a node.
///
/// The one exception to the last rule is a path with `source ==
/// target`, whose first and last nodes are the same.
pub fn validate_path<G>(
    graph: G,
    path: &[NodeId],
    source: NodeId,
    target: NodeId,
    cutoff: Option<usize>,
) -> Result<(), PathsError>
where
    G: AllNodes + NodeNeighbors + Copy,
{
    let invalid = |reason: String| {
        debug!("{}", reason);
        Err(PathsError::InvalidPath(reason))
    };

    let (first, last) = match (path.first(), path.last()) {
        (Some(&first), Some(&last)) if path.len() >= 2 => (first, last),
        _ => return invalid(format!("path {:?} has no edges", path)),
    };

    if first != source {
        return invalid(format!("path starts at {}, not {}", first, source));
    }

    if last != target {
        return invalid(format!("path ends at {}, not {}", last, target));
    }

    if let Some(cutoff) = cutoff {
        if path_length(path) > cutoff {
            return invalid(format!(
                "path has {} edges, more than the cutoff {}",
                path_length(path),
                cutoff
            ));
        }
    }

    let inner = if source == target {
        &path[..path.len() - 1]
    } else {
        path
    };

    if !is_simple_path(graph, inner) {
        return invalid(format!("path {:?} is not simple", path));
    }

    if !steps_are_edges(graph, path) {
        return invalid(format!("path {:?} does not follow edges", path));
    }

    Ok(())
}
