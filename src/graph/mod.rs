//! Social graph storage and construction
//!
//! This module provides:
//! - An undirected, unweighted friendship graph with adjacency-set storage
//! - Loading graphs from whitespace-separated edge-list files
//! - Small built-in graphs for demos and tests

pub mod fixtures;
pub mod loader;
pub mod store;

// Re-export main types
pub use fixtures::{practice_graph, romeo_and_juliet_graph};
pub use loader::{load_edge_list, parse_edge_list, parse_edge_list_with_summary, LoadError, LoadResult, LoadSummary};
pub use store::{GraphError, GraphResult, GraphStats, SocialGraph};
