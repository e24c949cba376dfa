//! Core weighted directed graph structure with adjacency lists.

use crate::error::{GraphError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use tracing::trace;

/// Edge weight.
pub type Weight = i64;

/// Directed, weighted graph over caller-chosen vertex values.
///
/// Vertices live in insertion order and each one owns a dense slot, so
/// algorithms can keep their scratch state in plain vectors.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    /// Vertex values in insertion order; the position is the slot.
    vertices: Vec<V>,

    /// Reverse lookup: vertex -> slot
    slots: HashMap<V, usize>,

    /// Forward adjacency: adj[u] = (target slot, weight) in insertion order
    adj: Vec<Vec<(usize, Weight)>>,

    edge_count: usize,
}

/// Serializable graph snapshot for import/export.
///
/// Edge endpoints are positions in `vertices`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot<V> {
    pub vertices: Vec<V>,
    pub edges: Vec<(usize, usize, Weight)>,
}

impl<V> Graph<V> {
    /// Create an empty graph.
    pub fn new() -> Self {
        Graph {
            vertices: Vec::new(),
            slots: HashMap::new(),
            adj: Vec::new(),
            edge_count: 0,
        }
    }

    /// Create a graph with pre-allocated vertex capacity.
    pub fn with_capacity(vertex_capacity: usize) -> Self {
        Graph {
            vertices: Vec::with_capacity(vertex_capacity),
            slots: HashMap::with_capacity(vertex_capacity),
            adj: Vec::with_capacity(vertex_capacity),
            edge_count: 0,
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// All vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> + '_ {
        self.vertices.iter()
    }
}

impl<V: Eq + Hash + Clone> Graph<V> {
    /// Add a vertex, returns its slot. Idempotent - returns the existing slot if already present.
    pub fn add_vertex(&mut self, vertex: V) -> usize {
        if let Some(&slot) = self.slots.get(&vertex) {
            return slot;
        }
        let slot = self.vertices.len();
        self.vertices.push(vertex.clone());
        self.slots.insert(vertex, slot);
        self.adj.push(Vec::new());
        slot
    }

    /// Add or overwrite the directed edge from -> to. Missing endpoints are inserted first.
    pub fn add_edge(&mut self, from: V, to: V, weight: Weight) {
        let from = self.add_vertex(from);
        let to = self.add_vertex(to);
        self.insert_edge(from, to, weight);
    }

    fn insert_edge(&mut self, from: usize, to: usize, weight: Weight) {
        // Linear scan is fine for typical degree
        if let Some(edge) = self.adj[from].iter_mut().find(|(t, _)| *t == to) {
            trace!(from, to, old = edge.1, new = weight, "overwriting edge weight");
            edge.1 = weight;
            return;
        }

        self.adj[from].push((to, weight));
        self.edge_count += 1;
    }

    /// Add `a -> b` and `b -> a` with the same weight.
    ///
    /// The store stays directed; this is the two-directions convention the
    /// undirected algorithms expect.
    pub fn add_undirected_edge(&mut self, a: V, b: V, weight: Weight) {
        self.add_edge(a.clone(), b.clone(), weight);
        self.add_edge(b, a, weight);
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.slots.contains_key(vertex)
    }

    /// Outgoing edges of `vertex` in insertion order.
    pub fn neighbors(&self, vertex: &V) -> Result<Neighbors<'_, V>>
    where
        V: fmt::Debug,
    {
        let slot = self
            .slot(vertex)
            .ok_or_else(|| GraphError::not_found(vertex))?;
        Ok(Neighbors {
            vertices: &self.vertices,
            edges: self.adj[slot].iter(),
        })
    }

    /// Weight of the directed edge from -> to, if present.
    pub fn weight(&self, from: &V, to: &V) -> Option<Weight> {
        let from = self.slot(from)?;
        let to = self.slot(to)?;
        self.adj[from]
            .iter()
            .find(|(t, _)| *t == to)
            .map(|&(_, w)| w)
    }

    /// Out-degree of a vertex, `None` if absent.
    pub fn out_degree(&self, vertex: &V) -> Option<usize> {
        self.slot(vertex).map(|slot| self.adj[slot].len())
    }

    /// Export the graph as a snapshot.
    pub fn snapshot(&self) -> GraphSnapshot<V> {
        GraphSnapshot {
            vertices: self.vertices.clone(),
            edges: self.edges().collect(),
        }
    }

    /// Rebuild a graph from a snapshot, rejecting out-of-range edge endpoints.
    pub fn from_snapshot(snapshot: GraphSnapshot<V>) -> Result<Self> {
        let mut graph = Graph::with_capacity(snapshot.vertices.len());
        let slots: Vec<usize> = snapshot
            .vertices
            .iter()
            .map(|v| graph.add_vertex(v.clone()))
            .collect();

        for (from, to, weight) in snapshot.edges {
            let (Some(&from), Some(&to)) = (slots.get(from), slots.get(to)) else {
                return Err(GraphError::InvalidSnapshot(format!(
                    "edge ({from}, {to}) references a missing vertex"
                )));
            };
            graph.insert_edge(from, to, weight);
        }
        Ok(graph)
    }

    /// Export graph as JSON snapshot.
    pub fn to_json(&self) -> Result<String>
    where
        V: Serialize,
    {
        Ok(serde_json::to_string(&self.snapshot())?)
    }

    /// Import graph from JSON snapshot.
    pub fn from_json(json: &str) -> Result<Self>
    where
        V: DeserializeOwned,
    {
        let snapshot: GraphSnapshot<V> = serde_json::from_str(json)?;
        Self::from_snapshot(snapshot)
    }

    /// Slot of a vertex (internal use).
    pub(crate) fn slot(&self, vertex: &V) -> Option<usize> {
        self.slots.get(vertex).copied()
    }
}

// Slot-level access for the algorithms
impl<V> Graph<V> {
    pub(crate) fn len(&self) -> usize {
        self.vertices.len()
    }

    pub(crate) fn vertex_at(&self, slot: usize) -> &V {
        &self.vertices[slot]
    }

    /// Get successors slice (internal use).
    pub(crate) fn successors_slice(&self, slot: usize) -> &[(usize, Weight)] {
        self.adj.get(slot).map_or(&[], |v| v.as_slice())
    }

    /// Iterate over all edges as (from, to, weight) slots.
    pub(crate) fn edges(&self) -> impl Iterator<Item = (usize, usize, Weight)> + '_ {
        self.adj
            .iter()
            .enumerate()
            .flat_map(|(from, tos)| tos.iter().map(move |&(to, w)| (from, to, w)))
    }
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over a vertex's outgoing edges as `(neighbor, weight)`.
#[derive(Debug, Clone)]
pub struct Neighbors<'a, V> {
    vertices: &'a [V],
    edges: std::slice::Iter<'a, (usize, Weight)>,
}

impl<'a, V> Iterator for Neighbors<'a, V> {
    type Item = (&'a V, Weight);

    fn next(&mut self) -> Option<Self::Item> {
        self.edges.next().map(|&(to, w)| (&self.vertices[to], w))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.edges.size_hint()
    }
}

impl<V> ExactSizeIterator for Neighbors<'_, V> {}

impl<V: fmt::Display> fmt::Display for Graph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.vertices.is_empty() {
            return write!(f, "The Graph is Empty");
        }
        for (slot, vertex) in self.vertices.iter().enumerate() {
            write!(f, "{vertex}: ")?;
            for &(to, w) in &self.adj[slot] {
                write!(f, "{} {}  ", self.vertices[to], w)?;
            }
            writeln!(f)?;
        }
        writeln!(f)
    }
}
