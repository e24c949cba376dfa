//! Cycle detection for graphs stored with both edge directions.
//!
//! A depth-first walk flags any edge into an already visited vertex
//! other than the one the walk just arrived from. With every logical edge
//! stored in both directions that is exactly the undirected back-edge
//! test. On a purely directed graph it also flags cross edges, so it
//! over-reports there; a directed cycle test needs recursion-stack
//! membership instead, which this module does not provide.

use super::traversal::{depth_first, Visit};
use crate::error::{GraphError, Result};
use crate::graph::Graph;
use std::ops::ControlFlow;
use tracing::debug;

/// Check whether the graph contains a cycle.
///
/// Every component is walked. Returns `EmptyGraph` when there is nothing
/// to walk.
pub fn has_cycle<V>(graph: &Graph<V>) -> Result<bool> {
    let n = graph.len();
    if n == 0 {
        return Err(GraphError::EmptyGraph);
    }

    let mut visited = vec![false; n];
    // usize::MAX means no parent (walk root)
    let mut parent = vec![usize::MAX; n];

    for start in 0..n {
        if visited[start] {
            continue;
        }
        let flow = depth_first(graph, start, &mut visited, |event| match event {
            Visit::Discover {
                vertex,
                parent: Some(p),
            } => {
                parent[vertex] = p;
                ControlFlow::Continue(())
            }
            Visit::Discover { .. } => ControlFlow::Continue(()),
            Visit::Revisit { vertex, from } if parent[from] != vertex => {
                debug!(from, to = vertex, "back edge closes a cycle");
                ControlFlow::Break(())
            }
            Visit::Revisit { .. } => ControlFlow::Continue(()),
        });
        if flow.is_break() {
            return Ok(true);
        }
    }

    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn undirected(edges: &[(&'static str, &'static str)]) -> Graph<&'static str> {
        let mut g = Graph::new();
        for &(a, b) in edges {
            g.add_undirected_edge(a, b, 1);
        }
        g
    }

    #[test]
    fn test_empty_graph() {
        let g: Graph<u32> = Graph::new();
        assert_eq!(has_cycle(&g), Err(GraphError::EmptyGraph));
    }

    #[test]
    fn test_single_vertex() {
        let mut g = Graph::new();
        g.add_vertex(1);
        assert_eq!(has_cycle(&g), Ok(false));
    }

    #[test]
    fn test_single_edge_is_not_cycle() {
        let g = undirected(&[("a", "b")]);
        assert_eq!(has_cycle(&g), Ok(false));
    }

    #[test]
    fn test_tree() {
        //     a
        //    / \
        //   b   c
        //  / \
        // d   e
        let g = undirected(&[("a", "b"), ("a", "c"), ("b", "d"), ("b", "e")]);
        assert_eq!(has_cycle(&g), Ok(false));
    }

    #[test]
    fn test_tree_plus_edge() {
        let mut g = undirected(&[("a", "b"), ("a", "c"), ("b", "d"), ("b", "e")]);
        g.add_undirected_edge("d", "c", 1);
        assert_eq!(has_cycle(&g), Ok(true));
    }

    #[test]
    fn test_triangle() {
        let g = undirected(&[("a", "b"), ("b", "c"), ("c", "a")]);
        assert_eq!(has_cycle(&g), Ok(true));
    }

    #[test]
    fn test_cycle_in_second_component() {
        let mut g = undirected(&[("a", "b")]);
        g.add_undirected_edge("x", "y", 1);
        g.add_undirected_edge("y", "z", 1);
        assert_eq!(has_cycle(&g), Ok(false));

        g.add_undirected_edge("z", "x", 1);
        assert_eq!(has_cycle(&g), Ok(true));
    }

    #[test]
    fn test_self_loop() {
        let mut g = Graph::new();
        g.add_edge("a", "a", 1);
        assert_eq!(has_cycle(&g), Ok(true));
    }

    #[test]
    fn test_directed_cross_edge_is_flagged() {
        // a -> b, a -> c, c -> b: acyclic as a directed graph, but the
        // walk reaches b a second time from c
        let mut g = Graph::new();
        g.add_edge("a", "b", 1);
        g.add_edge("a", "c", 1);
        g.add_edge("c", "b", 1);
        assert_eq!(has_cycle(&g), Ok(true));
    }

    #[test]
    fn test_long_path_does_not_overflow() {
        let mut g = Graph::new();
        for i in 0..100_000u32 {
            g.add_undirected_edge(i, i + 1, 1);
        }
        assert_eq!(has_cycle(&g), Ok(false));
    }
}
