//! FriendRec
//!
//! Friend recommendations over an undirected social graph, using two
//! competing scoring strategies:
//!
//! - **Common friends**: candidates ranked by how many friends they share
//!   with the user.
//! - **Influence**: each shared friend contributes `1 / degree`, so mutual
//!   friends with small circles count for more.
//!
//! Candidates are always the user's friends of friends. Ranked lists are
//! ordered by descending score, ties broken by ascending node identifier.
//!
//! ## Example Usage
//!
//! ```rust
//! use friendrec::graph::practice_graph;
//! use friendrec::algo::{recommend_by_number_of_common_friends, friends_of_friends};
//!
//! let graph = practice_graph().unwrap();
//! let user = "A".to_string();
//!
//! let fof = friends_of_friends(&graph, &user).unwrap();
//! assert_eq!(fof.len(), 2);
//!
//! let ranked = recommend_by_number_of_common_friends(&graph, &user).unwrap();
//! assert_eq!(ranked, vec!["D".to_string(), "F".to_string()]);
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod config;
pub mod error;
pub mod graph;

// Re-export main types for convenience
pub use graph::{
    load_edge_list, practice_graph, romeo_and_juliet_graph, GraphError, GraphResult, GraphStats,
    LoadError, LoadResult, LoadSummary, SocialGraph,
};

pub use algo::{
    compare_users, recommend, recommendation_table, sample_users, AlgoError, AlgoResult,
    ComparisonReport, GraphView, RecommendationRow, Strategy, StrategyComparison,
};

pub use config::{ConfigError, ConfigResult, ReportConfig};
pub use error::{FriendRecError, FriendRecResult};

/// Load an edge-list file and check it against known node and edge counts
pub fn load_verified_edge_list(
    path: impl AsRef<std::path::Path>,
    expected_nodes: usize,
    expected_edges: usize,
) -> FriendRecResult<SocialGraph<u64>> {
    let graph = load_edge_list(path)?;
    graph.verify_counts(expected_nodes, expected_edges)?;
    Ok(graph)
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let ver = version();
        assert!(!ver.is_empty());
        assert_eq!(ver, "0.1.0");
    }
}
