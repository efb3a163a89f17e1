//! Breadth-first proximity queries.
//!
//! These rank by hop count, not by kilometres: a receiver two short hops away
//! comes after a receiver one long hop away.  Use the [`router`](crate::router)
//! when physical distance matters.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use dr_core::NodeId;

use crate::graph::{Graph, LocationNode};
use crate::{GraphError, GraphResult};

/// Up to `count` receivers closest to `officer` by hop count.
///
/// Neighbors are explored in adjacency order; the start node is never part of
/// the result.  Fewer than `count` receivers are returned when the start's
/// component is small.
pub fn find_nearest_receivers(
    graph:   &Graph,
    officer: NodeId,
    count:   usize,
) -> GraphResult<Vec<&LocationNode>> {
    let start = graph.node(officer).ok_or(GraphError::NodeNotFound(officer))?;

    let mut found = Vec::with_capacity(count.min(graph.node_count()));
    let mut visited: FxHashSet<NodeId> = FxHashSet::default();
    let mut queue = VecDeque::new();

    visited.insert(start.id);
    queue.push_back(start);

    while found.len() < count {
        let Some(current) = queue.pop_front() else { break };

        if current.id != officer && current.is_receiver() {
            found.push(current);
        }

        for edge in graph.neighbors(current.id) {
            let Some(next) = graph.node(edge.to) else { continue };
            if visited.insert(next.id) {
                queue.push_back(next);
            }
        }
    }

    Ok(found)
}

/// Every cycle-free path of 2 to `max_depth` nodes starting at `start`, in
/// breadth-first order (shorter paths first).
///
/// The number of paths grows exponentially with depth on dense graphs; keep
/// `max_depth` small.
pub fn find_all_paths(
    graph:     &Graph,
    start:     NodeId,
    max_depth: usize,
) -> GraphResult<Vec<Vec<&LocationNode>>> {
    let root = graph.node(start).ok_or(GraphError::NodeNotFound(start))?;

    let mut paths = Vec::new();
    let mut queue: VecDeque<Vec<&LocationNode>> = VecDeque::new();
    queue.push_back(vec![root]);

    while let Some(path) = queue.pop_front() {
        if path.len() >= max_depth {
            if path.len() > 1 {
                paths.push(path);
            }
            continue;
        }

        let Some(last) = path.last().map(|n| n.id) else { continue };
        for edge in graph.neighbors(last) {
            let Some(next) = graph.node(edge.to) else { continue };
            if path.iter().any(|n| n.id == next.id) {
                continue;
            }
            let mut extended = path.clone();
            extended.push(next);
            queue.push_back(extended);
        }

        if path.len() > 1 {
            paths.push(path);
        }
    }

    Ok(paths)
}
