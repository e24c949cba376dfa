//! Breadth-first and depth-first walks over vertex slots.
//!
//! Both walks report what they see through a `Visit` callback so the
//! connectivity, cycle and bipartite checks can share one traversal.
//! The visited array belongs to the caller, which lets a single array be
//! reused while walking every component of a graph.

use crate::error::{GraphError, Result};
use crate::graph::Graph;
use std::collections::VecDeque;
use std::fmt::Debug;
use std::hash::Hash;
use std::ops::ControlFlow;

/// Something a walk observed while expanding a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Visit {
    /// `vertex` was reached for the first time, from `parent` (`None` for the start).
    Discover { vertex: usize, parent: Option<usize> },
    /// Edge `from -> vertex` led to a vertex that was already visited.
    Revisit { vertex: usize, from: usize },
}

/// Breadth-first walk from `start`, skipping slots already marked in `visited`.
///
/// Neighbors are discovered in adjacency insertion order.
pub(crate) fn breadth_first<V, F>(
    graph: &Graph<V>,
    start: usize,
    visited: &mut [bool],
    mut visit: F,
) -> ControlFlow<()>
where
    F: FnMut(Visit) -> ControlFlow<()>,
{
    let mut queue = VecDeque::new();

    visited[start] = true;
    visit(Visit::Discover {
        vertex: start,
        parent: None,
    })?;
    queue.push_back(start);

    while let Some(v) = queue.pop_front() {
        for &(w, _) in graph.successors_slice(v) {
            if !visited[w] {
                visited[w] = true;
                visit(Visit::Discover {
                    vertex: w,
                    parent: Some(v),
                })?;
                queue.push_back(w);
            } else {
                visit(Visit::Revisit { vertex: w, from: v })?;
            }
        }
    }

    ControlFlow::Continue(())
}

/// One level of the explicit depth-first stack.
struct Frame {
    vertex: usize,
    /// Next adjacency position to examine.
    cursor: usize,
}

/// Depth-first walk from `start` using an explicit stack.
///
/// Events come out in the same order as the recursive formulation:
/// a vertex's neighbors are examined one by one and each unvisited one is
/// fully explored before the next is looked at.
pub(crate) fn depth_first<V, F>(
    graph: &Graph<V>,
    start: usize,
    visited: &mut [bool],
    mut visit: F,
) -> ControlFlow<()>
where
    F: FnMut(Visit) -> ControlFlow<()>,
{
    visited[start] = true;
    visit(Visit::Discover {
        vertex: start,
        parent: None,
    })?;
    let mut stack = vec![Frame {
        vertex: start,
        cursor: 0,
    }];

    while let Some(frame) = stack.last_mut() {
        let v = frame.vertex;
        let Some(&(w, _)) = graph.successors_slice(v).get(frame.cursor) else {
            stack.pop();
            continue;
        };
        frame.cursor += 1;

        if visited[w] {
            visit(Visit::Revisit { vertex: w, from: v })?;
        } else {
            visited[w] = true;
            visit(Visit::Discover {
                vertex: w,
                parent: Some(v),
            })?;
            stack.push(Frame {
                vertex: w,
                cursor: 0,
            });
        }
    }

    ControlFlow::Continue(())
}

impl<V: Eq + Hash + Clone + Debug> Graph<V> {
    /// Vertices reachable from `start`, in breadth-first discovery order.
    pub fn bfs(&self, start: &V) -> Result<Vec<&V>> {
        let start = self.slot(start).ok_or_else(|| GraphError::not_found(start))?;
        let mut visited = vec![false; self.len()];
        let mut order = Vec::new();
        let _ = breadth_first(self, start, &mut visited, |event| record(&mut order, event));
        Ok(order.into_iter().map(|slot| self.vertex_at(slot)).collect())
    }

    /// Vertices reachable from `start`, in depth-first discovery order.
    pub fn dfs(&self, start: &V) -> Result<Vec<&V>> {
        let start = self.slot(start).ok_or_else(|| GraphError::not_found(start))?;
        let mut visited = vec![false; self.len()];
        let mut order = Vec::new();
        let _ = depth_first(self, start, &mut visited, |event| record(&mut order, event));
        Ok(order.into_iter().map(|slot| self.vertex_at(slot)).collect())
    }
}

fn record(order: &mut Vec<usize>, event: Visit) -> ControlFlow<()> {
    if let Visit::Discover { vertex, .. } = event {
        order.push(vertex);
    }
    ControlFlow::Continue(())
}
