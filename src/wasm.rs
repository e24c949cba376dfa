//! JavaScript bindings.
//!
//! `WeightedGraph` exposes the general algorithms over string vertex ids.
//! `RankGraph` holds integer vertices for PageRank, where ranks come back
//! indexed by vertex number.

use crate::algorithms::{self, pagerank::{PageRankConfig, SinkPolicy}};
use crate::graph::{Graph, Weight};
use wasm_bindgen::prelude::*;

/// Install the panic hook once the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Weighted directed graph keyed by string ids.
#[wasm_bindgen]
pub struct WeightedGraph {
    inner: Graph<String>,
}

#[wasm_bindgen]
impl WeightedGraph {
    /// Create an empty graph.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WeightedGraph {
        WeightedGraph {
            inner: Graph::new(),
        }
    }

    /// Add a vertex, returns its slot. Idempotent.
    #[wasm_bindgen(js_name = addVertex)]
    pub fn add_vertex(&mut self, id: &str) -> usize {
        self.inner.add_vertex(id.to_string())
    }

    /// Add or overwrite the directed edge from -> to.
    #[wasm_bindgen(js_name = addEdge)]
    pub fn add_edge(&mut self, from: &str, to: &str, weight: i32) {
        self.inner
            .add_edge(from.to_string(), to.to_string(), Weight::from(weight));
    }

    /// Add the edge in both directions with the same weight.
    #[wasm_bindgen(js_name = addUndirectedEdge)]
    pub fn add_undirected_edge(&mut self, a: &str, b: &str, weight: i32) {
        self.inner
            .add_undirected_edge(a.to_string(), b.to_string(), Weight::from(weight));
    }

    #[wasm_bindgen(js_name = vertexCount)]
    pub fn vertex_count(&self) -> usize {
        self.inner.vertex_count()
    }

    #[wasm_bindgen(js_name = edgeCount)]
    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    #[wasm_bindgen(js_name = isEmpty)]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// All vertex ids in insertion order as a JSON array.
    pub fn vertices(&self) -> JsValue {
        let ids: Vec<&String> = self.inner.vertices().collect();
        serde_wasm_bindgen::to_value(&ids).unwrap_or(JsValue::NULL)
    }

    /// Outgoing edges as an array of `[id, weight]` pairs.
    pub fn neighbors(&self, id: &str) -> Result<js_sys::Array, JsError> {
        let neighbors = self.inner.neighbors(&id.to_string())?;
        Ok(neighbors
            .map(|(to, w)| js_sys::Array::of2(&JsValue::from_str(to), &JsValue::from_f64(w as f64)))
            .collect())
    }

    #[wasm_bindgen(js_name = isConnected)]
    pub fn is_connected(&self) -> bool {
        algorithms::is_connected(&self.inner)
    }

    /// Throws on an empty graph.
    #[wasm_bindgen(js_name = hasCycle)]
    pub fn has_cycle(&self) -> Result<bool, JsError> {
        Ok(algorithms::has_cycle(&self.inner)?)
    }

    #[wasm_bindgen(js_name = isBipartite)]
    pub fn is_bipartite(&self) -> bool {
        algorithms::is_bipartite(&self.inner)
    }

    /// Returns `{ path: string[], cost: number }`.
    /// Throws if an endpoint is missing or the target is unreachable.
    #[wasm_bindgen(js_name = shortestPath)]
    pub fn shortest_path(&self, from: &str, to: &str) -> Result<JsValue, JsError> {
        let found =
            algorithms::shortest_path_with_cost(&self.inner, &from.to_string(), &to.to_string())?;
        serde_wasm_bindgen::to_value(&found).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Human-readable adjacency listing.
    pub fn render(&self) -> String {
        self.inner.to_string()
    }

    /// Export graph as JSON snapshot.
    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json(&self) -> Result<String, JsError> {
        Ok(self.inner.to_json()?)
    }

    /// Import graph from JSON snapshot.
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Result<WeightedGraph, JsError> {
        Ok(WeightedGraph {
            inner: Graph::from_json(json)?,
        })
    }
}

impl Default for WeightedGraph {
    fn default() -> Self {
        Self::new()
    }
}

/// Graph over integer vertices for PageRank.
#[wasm_bindgen]
pub struct RankGraph {
    inner: Graph<u32>,
}

#[wasm_bindgen]
impl RankGraph {
    #[wasm_bindgen(constructor)]
    pub fn new() -> RankGraph {
        RankGraph {
            inner: Graph::new(),
        }
    }

    #[wasm_bindgen(js_name = addVertex)]
    pub fn add_vertex(&mut self, vertex: u32) {
        self.inner.add_vertex(vertex);
    }

    /// Add a directed link from -> to.
    #[wasm_bindgen(js_name = addEdge)]
    pub fn add_edge(&mut self, from: u32, to: u32) {
        self.inner.add_edge(from, to, 1);
    }

    #[wasm_bindgen(js_name = vertexCount)]
    pub fn vertex_count(&self) -> usize {
        self.inner.vertex_count()
    }

    /// Ranks after `rounds` rounds, in ascending vertex order.
    /// Throws on sinks unless `redistribute_sinks` is set.
    #[wasm_bindgen(js_name = pageRank)]
    pub fn page_rank(&self, rounds: u32, redistribute_sinks: bool) -> Result<Vec<f64>, JsError> {
        let sink_policy = if redistribute_sinks {
            SinkPolicy::Redistribute
        } else {
            SinkPolicy::Reject
        };
        Ok(self.ranks(&PageRankConfig {
            rounds,
            sink_policy,
        })?)
    }

    /// Same as `pageRank`, taking `{ rounds, sink_policy }` as an object.
    #[wasm_bindgen(js_name = pageRankWithConfig)]
    pub fn page_rank_with_config(&self, config: JsValue) -> Result<Vec<f64>, JsError> {
        let config: PageRankConfig =
            serde_wasm_bindgen::from_value(config).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(self.ranks(&config)?)
    }
}

impl RankGraph {
    fn ranks(&self, config: &PageRankConfig) -> crate::Result<Vec<f64>> {
        algorithms::pagerank(&self.inner, config).map(|scores| scores.into_scores())
    }
}

impl Default for RankGraph {
    fn default() -> Self {
        Self::new()
    }
}
