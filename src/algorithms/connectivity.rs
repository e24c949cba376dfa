//! Connectivity check.
//!
//! Only edges the caller actually added are followed, so a graph built
//! with one-directional edges can be weakly connected and still report
//! `false` here.

use super::traversal::{breadth_first, Visit};
use crate::graph::Graph;
use std::ops::ControlFlow;
use tracing::debug;

/// Returns true if every vertex is reachable from the first inserted vertex.
///
/// The empty graph is not connected by convention.
pub fn is_connected<V>(graph: &Graph<V>) -> bool {
    let n = graph.len();
    if n == 0 {
        debug!("connectivity check on empty graph");
        return false;
    }

    let mut visited = vec![false; n];
    let mut reached = 0usize;
    let _ = breadth_first(graph, 0, &mut visited, |event| {
        if let Visit::Discover { .. } = event {
            reached += 1;
        }
        ControlFlow::Continue(())
    });

    debug!(vertices = n, reached, "connectivity check finished");
    reached == n
}
