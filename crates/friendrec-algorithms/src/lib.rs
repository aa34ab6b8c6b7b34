pub mod common;
pub mod neighborhood;
pub mod scoring;
pub mod ranking;

pub use common::{adjacency_from_edges, AlgoError, AlgoResult, GraphView, Node};
pub use neighborhood::{common_friends, friends_of_friends, neighbors};
pub use scoring::{influence_map, number_of_common_friends_map, Score};
pub use ranking::{
    compare_strategies, rank_by_score, recommend, recommend_by_influence,
    recommend_by_number_of_common_friends, recommend_top_k, Strategy, StrategyComparison,
};
