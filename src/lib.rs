//! Weighted directed graph store plus classical graph algorithms.
//!
//! The store is generic over the vertex type; algorithms borrow it
//! immutably and keep all of their scratch state local to the call.
//!
//! ```
//! use wgraph_wasm::{algorithms, Graph};
//!
//! let mut graph = Graph::new();
//! graph.add_undirected_edge("A", "B", 10);
//! graph.add_undirected_edge("B", "C", 5);
//!
//! assert!(algorithms::is_connected(&graph));
//! assert_eq!(
//!     algorithms::shortest_path(&graph, &"A", &"C").unwrap(),
//!     vec!["A", "B", "C"]
//! );
//! ```

pub mod algorithms;
pub mod error;
pub mod graph;
pub mod wasm;

pub use algorithms::pagerank::{PageRankConfig, PageRankScores, SinkPolicy};
pub use algorithms::shortest_path::ShortestPath;
pub use error::{GraphError, Result};
pub use graph::{Graph, GraphSnapshot, Neighbors, Weight};
