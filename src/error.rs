//! Error type shared by the graph store and every algorithm.

use thiserror::Error;

/// Failures surfaced by graph operations.
///
/// Vertices are carried as their `Debug` rendering so the error stays
/// independent of the caller's vertex type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("vertex {0} is not in the graph")]
    NotFound(String),

    #[error("no path from {from} to {to}")]
    Unreachable { from: String, to: String },

    #[error("graph is empty")]
    EmptyGraph,

    #[error("vertex {vertex} has no outgoing edges and sinks are rejected")]
    DegenerateInput { vertex: String },

    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),
}

impl GraphError {
    pub(crate) fn not_found<V: std::fmt::Debug>(vertex: &V) -> Self {
        Self::NotFound(format!("{vertex:?}"))
    }
}

impl From<serde_json::Error> for GraphError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidSnapshot(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;
