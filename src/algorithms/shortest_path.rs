//! Single-pair shortest path (Dijkstra).
//!
//! Edge weights must be non-negative; with negative weights the result is
//! unspecified.

use crate::error::{GraphError, Result};
use crate::graph::{Graph, Weight};
use serde::Serialize;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;
use std::hash::Hash;
use tracing::debug;

/// A path together with its total weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPath<V> {
    /// Vertices from source to target, both included.
    pub path: Vec<V>,
    /// Sum of the edge weights along `path`.
    pub cost: Weight,
}

/// Find a minimum-weight path from `source` to `target`.
///
/// Returns `NotFound` if either endpoint is missing and `Unreachable` if
/// no path exists.
pub fn shortest_path<V>(graph: &Graph<V>, source: &V, target: &V) -> Result<Vec<V>>
where
    V: Eq + Hash + Clone + Debug,
{
    shortest_path_with_cost(graph, source, target).map(|found| found.path)
}

/// Like [`shortest_path`], also reporting the path's total weight.
pub fn shortest_path_with_cost<V>(
    graph: &Graph<V>,
    source: &V,
    target: &V,
) -> Result<ShortestPath<V>>
where
    V: Eq + Hash + Clone + Debug,
{
    let src = graph
        .slot(source)
        .ok_or_else(|| GraphError::not_found(source))?;
    let dst = graph
        .slot(target)
        .ok_or_else(|| GraphError::not_found(target))?;

    let (dist, prev) = relax_from(graph, src, dst);

    let Some(cost) = dist[dst] else {
        debug!(?source, ?target, "target unreachable");
        return Err(GraphError::Unreachable {
            from: format!("{source:?}"),
            to: format!("{target:?}"),
        });
    };

    // Walk predecessors back from the target
    let mut path = vec![graph.vertex_at(dst).clone()];
    let mut current = dst;
    // Bounded so a predecessor loop (possible only with negative weights) cannot spin
    while current != src && path.len() <= graph.len() {
        let Some(p) = prev[current] else {
            break;
        };
        path.push(graph.vertex_at(p).clone());
        current = p;
    }
    path.reverse();

    debug!(hops = path.len() - 1, cost, "shortest path found");
    Ok(ShortestPath { path, cost })
}

/// Run the relaxation from `src` until the frontier is exhausted.
///
/// Returns tentative distances (`None` = infinity) and predecessor slots.
fn relax_from<V>(
    graph: &Graph<V>,
    src: usize,
    dst: usize,
) -> (Vec<Option<Weight>>, Vec<Option<usize>>) {
    let n = graph.len();
    let mut dist: Vec<Option<Weight>> = vec![None; n];
    let mut prev: Vec<Option<usize>> = vec![None; n];
    let mut settled = vec![false; n];
    let mut heap: BinaryHeap<Reverse<(Weight, usize)>> = BinaryHeap::new();

    dist[src] = Some(0);
    heap.push(Reverse((0, src)));

    while let Some(Reverse((d, v))) = heap.pop() {
        // Stale queue entry
        if settled[v] {
            continue;
        }
        settled[v] = true;

        for &(w, weight) in graph.successors_slice(v) {
            if settled[w] && w != dst {
                continue;
            }
            let candidate = d.saturating_add(weight);
            if dist[w].map_or(true, |current| candidate < current) {
                dist[w] = Some(candidate);
                prev[w] = Some(v);
                heap.push(Reverse((candidate, w)));
            }
        }
    }

    (dist, prev)
}
