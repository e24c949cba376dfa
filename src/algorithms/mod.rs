//! Graph algorithm implementations.
//!
//! Every algorithm borrows the graph immutably and keeps its scratch state
//! local, so one graph can serve any number of queries.

pub mod bipartite;
pub mod connectivity;
pub mod cycles;
pub mod pagerank;
pub mod shortest_path;
mod traversal;

pub use bipartite::is_bipartite;
pub use connectivity::is_connected;
pub use cycles::has_cycle;
pub use pagerank::{pagerank, pagerank_default, pagerank_rounds};
pub use shortest_path::{shortest_path, shortest_path_with_cost};
