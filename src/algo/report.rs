//! Multi-user recommendation reports
//!
//! Users are independent of each other, so evaluation fans out over rayon
//! against the shared read-only graph. Results are sorted afterwards and do
//! not depend on scheduling.

use crate::config::{ConfigError, ConfigResult, ReportConfig};
use crate::graph::SocialGraph;
use friendrec_algorithms::{
    compare_strategies, recommend_top_k, AlgoResult, GraphView, Strategy, StrategyComparison,
};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

/// Which users get the same list from both strategies
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonReport<N> {
    pub unchanged: Vec<N>,
    pub changed: Vec<N>,
}

impl<N> ComparisonReport<N> {
    pub fn same_count(&self) -> usize {
        self.unchanged.len()
    }

    pub fn different_count(&self) -> usize {
        self.changed.len()
    }
}

/// Top recommendations for one user
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationRow<N> {
    pub user: N,
    pub strategy: Strategy,
    pub recommendations: Vec<N>,
}

/// Classify each user by whether the two strategies agree.
///
/// The full ranked lists are compared, not a prefix.
pub fn compare_users<G>(
    graph: &G,
    users: &[G::Node],
    config: &ReportConfig,
) -> AlgoResult<ComparisonReport<G::Node>>
where
    G: GraphView + Sync,
    G::Node: Send + Sync,
{
    info!("Comparing strategies for {} users", users.len());
    let compare = |user: &G::Node| compare_strategies(graph, user);

    let comparisons: Vec<StrategyComparison<G::Node>> = if config.parallel {
        users.par_iter().map(compare).collect::<AlgoResult<_>>()?
    } else {
        users.iter().map(compare).collect::<AlgoResult<_>>()?
    };

    let mut unchanged = Vec::new();
    let mut changed = Vec::new();
    for comparison in comparisons {
        if comparison.is_unchanged() {
            unchanged.push(comparison.user);
        } else {
            debug!(
                "User {} differs: common friends {:?}, influence {:?}",
                comparison.user,
                comparison.by_common_friends.iter().map(ToString::to_string).collect::<Vec<_>>(),
                comparison.by_influence.iter().map(ToString::to_string).collect::<Vec<_>>()
            );
            changed.push(comparison.user);
        }
    }
    unchanged.sort();
    changed.sort();

    info!("Same: {}, different: {}", unchanged.len(), changed.len());
    Ok(ComparisonReport { unchanged, changed })
}

/// Top `config.top_k` recommendations under `strategy` for each user, in
/// input order
pub fn recommendation_table<G>(
    graph: &G,
    users: &[G::Node],
    strategy: Strategy,
    config: &ReportConfig,
) -> AlgoResult<Vec<RecommendationRow<G::Node>>>
where
    G: GraphView + Sync,
    G::Node: Send + Sync,
{
    let top_k = config.top_k;
    let row = |user: &G::Node| -> AlgoResult<RecommendationRow<G::Node>> {
        Ok(RecommendationRow {
            user: user.clone(),
            strategy,
            recommendations: recommend_top_k(graph, user, strategy, top_k)?,
        })
    };

    if config.parallel {
        users.par_iter().map(row).collect()
    } else {
        users.iter().map(row).collect()
    }
}

/// Users whose id is a multiple of `every`, ascending.
///
/// Fails with [`ConfigError::Invalid`] when `every` is zero.
pub fn sample_users(graph: &SocialGraph<u64>, every: u64) -> ConfigResult<Vec<u64>> {
    if every == 0 {
        return Err(ConfigError::Invalid("sample_every must be at least 1".to_string()));
    }
    Ok(graph
        .sorted_nodes()
        .into_iter()
        .filter(|id| id % every == 0)
        .collect())
}
