//! Bipartiteness via breadth-first 2-coloring.

use super::traversal::{breadth_first, Visit};
use crate::graph::Graph;
use std::ops::ControlFlow;
use tracing::debug;

/// Color of a vertex that has not been reached yet.
const UNCOLORED: u8 = u8::MAX;

/// Check whether the vertices can be split into two sides with every
/// edge crossing between them.
///
/// Each component is seeded with color 0 and discovered vertices take the
/// opposite color of their discoverer. Stops at the first edge joining two
/// vertices of the same color. The empty graph is not bipartite by
/// convention.
pub fn is_bipartite<V>(graph: &Graph<V>) -> bool {
    let n = graph.len();
    if n == 0 {
        return false;
    }

    let mut visited = vec![false; n];
    let mut color = vec![UNCOLORED; n];

    for start in 0..n {
        if visited[start] {
            continue;
        }
        let flow = breadth_first(graph, start, &mut visited, |event| match event {
            Visit::Discover { vertex, parent } => {
                let c = parent.map_or(0, |p| 1 - color[p]);
                color[vertex] = c;
                ControlFlow::Continue(())
            }
            Visit::Revisit { vertex, from } if color[vertex] == color[from] => {
                debug!(from, to = vertex, "edge joins two vertices of the same color");
                ControlFlow::Break(())
            }
            Visit::Revisit { .. } => ControlFlow::Continue(()),
        });
        if flow.is_break() {
            return false;
        }
    }

    true
}
