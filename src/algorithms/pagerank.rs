//! PageRank by plain power iteration.
//!
//! There is no damping factor: each round a vertex hands its whole rank to
//! its out-neighbors in equal shares. A vertex without outgoing edges
//! would swallow rank with nowhere to send it, so the caller picks a
//! [`SinkPolicy`] for that case.
//!
//! Vertices are indexed by sorting them, which gives the dense 0..N-1
//! numbering the iteration runs on. For a graph whose vertices are the
//! integers 0..N-1 the index of a vertex is the vertex itself.

use crate::error::{GraphError, Result};
use crate::graph::Graph;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;
use tracing::{debug, trace, warn};

/// What to do with vertices that have no outgoing edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SinkPolicy {
    /// Fail with `DegenerateInput` if a sink would be read.
    #[default]
    Reject,
    /// Spread a sink's rank evenly over every vertex each round.
    Redistribute,
}

/// Configuration for PageRank computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageRankConfig {
    /// Number of rounds, counting the uniform initial round.
    pub rounds: u32,
    pub sink_policy: SinkPolicy,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        PageRankConfig {
            rounds: 20,
            sink_policy: SinkPolicy::Reject,
        }
    }
}

/// Final ranks, one per vertex, in vertex index order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageRankScores<V> {
    vertices: Vec<V>,
    scores: Vec<f64>,
}

impl<V: Ord> PageRankScores<V> {
    /// Rank vector indexed by vertex index.
    pub fn scores(&self) -> &[f64] {
        &self.scores
    }

    /// Vertices in index order.
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Rank of a single vertex.
    pub fn score(&self, vertex: &V) -> Option<f64> {
        let idx = self.vertices.binary_search(vertex).ok()?;
        Some(self.scores[idx])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&V, f64)> + '_ {
        self.vertices.iter().zip(self.scores.iter().copied())
    }

    /// Sum of all ranks (1.0 up to rounding when no rank is lost).
    pub fn total(&self) -> f64 {
        self.scores.iter().sum()
    }

    pub fn into_scores(self) -> Vec<f64> {
        self.scores
    }
}

/// Compute PageRank scores for all vertices.
pub fn pagerank<V>(graph: &Graph<V>, config: &PageRankConfig) -> Result<PageRankScores<V>>
where
    V: Ord + Eq + Hash + Clone + Debug,
{
    let n = graph.len();
    if n == 0 {
        return Err(GraphError::EmptyGraph);
    }

    // Vertex <-> index bijection, local to this call
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| graph.vertex_at(a).cmp(graph.vertex_at(b)));
    let mut index_of = vec![0usize; n];
    for (idx, &slot) in order.iter().enumerate() {
        index_of[slot] = idx;
    }

    // Out-degree per index, fixed for the whole run
    let contribution: Vec<f64> = order
        .iter()
        .map(|&slot| graph.successors_slice(slot).len() as f64)
        .collect();

    if config.rounds > 1 && config.sink_policy == SinkPolicy::Reject {
        if let Some(idx) = contribution.iter().position(|&c| c == 0.0) {
            let vertex = graph.vertex_at(order[idx]);
            warn!(?vertex, "pagerank rejected: vertex has no outgoing edges");
            return Err(GraphError::DegenerateInput {
                vertex: format!("{vertex:?}"),
            });
        }
    }

    let mut rank = vec![1.0 / n as f64; n];
    let mut next = vec![0.0; n];

    for round in 2..=config.rounds {
        next.fill(0.0);
        let mut sink_mass = 0.0;

        for (u, &slot) in order.iter().enumerate() {
            if contribution[u] == 0.0 {
                sink_mass += rank[u];
                continue;
            }
            let share = rank[u] / contribution[u];
            for &(w, _) in graph.successors_slice(slot) {
                next[index_of[w]] += share;
            }
        }

        if sink_mass > 0.0 {
            let spread = sink_mass / n as f64;
            next.iter_mut().for_each(|r| *r += spread);
        }

        std::mem::swap(&mut rank, &mut next);
        trace!(round, total = rank.iter().sum::<f64>(), "pagerank round");
    }

    debug!(vertices = n, rounds = config.rounds, "pagerank finished");
    Ok(PageRankScores {
        vertices: order.iter().map(|&slot| graph.vertex_at(slot).clone()).collect(),
        scores: rank,
    })
}

/// Compute PageRank for a fixed number of rounds, rejecting sinks.
pub fn pagerank_rounds<V>(graph: &Graph<V>, rounds: u32) -> Result<PageRankScores<V>>
where
    V: Ord + Eq + Hash + Clone + Debug,
{
    let config = PageRankConfig {
        rounds,
        ..PageRankConfig::default()
    };
    pagerank(graph, &config)
}

/// Compute PageRank with default parameters (20 rounds, sinks rejected).
pub fn pagerank_default<V>(graph: &Graph<V>) -> Result<PageRankScores<V>>
where
    V: Ord + Eq + Hash + Clone + Debug,
{
    pagerank(graph, &PageRankConfig::default())
}
