//! Recommendation algorithms module
//!
//! Algorithms are implemented in the `friendrec-algorithms` crate.
//! This module re-exports them and adds multi-user reporting on top.

pub mod report;

// Re-export algorithms
pub use friendrec_algorithms::{
    common_friends, compare_strategies, friends_of_friends, influence_map, neighbors,
    number_of_common_friends_map, rank_by_score, recommend, recommend_by_influence,
    recommend_by_number_of_common_friends, recommend_top_k, AlgoError, AlgoResult, GraphView,
    Node, Score, Strategy, StrategyComparison,
};

pub use report::{compare_users, recommendation_table, sample_users, ComparisonReport, RecommendationRow};
