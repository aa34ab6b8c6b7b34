//! Deterministic ranking and the recommendation entry points

use super::common::{AlgoResult, GraphView};
use super::scoring::{influence_map, number_of_common_friends_map, Score};
use std::collections::HashMap;
use std::fmt;

/// Order the keys of a score map: highest score first, ties broken by
/// ascending identifier.
pub fn rank_by_score<N: Ord + Clone, S: Score>(scores: &HashMap<N, S>) -> Vec<N> {
    let mut entries: Vec<(&N, &S)> = scores.iter().collect();
    entries.sort_by(|(a_id, a_score), (b_id, b_score)| {
        b_score.compare(a_score).then_with(|| a_id.cmp(b_id))
    });
    entries.into_iter().map(|(id, _)| id.clone()).collect()
}

/// Recommendations for `user`, most common friends first.
pub fn recommend_by_number_of_common_friends<G: GraphView>(
    graph: &G,
    user: &G::Node,
) -> AlgoResult<Vec<G::Node>> {
    Ok(rank_by_score(&number_of_common_friends_map(graph, user)?))
}

/// Recommendations for `user`, highest influence score first.
pub fn recommend_by_influence<G: GraphView>(
    graph: &G,
    user: &G::Node,
) -> AlgoResult<Vec<G::Node>> {
    Ok(rank_by_score(&influence_map(graph, user)?))
}

/// Scoring strategy used to rank candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Strategy {
    CommonFriends,
    Influence,
}

impl Strategy {
    pub const ALL: [Strategy; 2] = [Strategy::CommonFriends, Strategy::Influence];

    pub fn name(&self) -> &'static str {
        match self {
            Strategy::CommonFriends => "num_common_friends",
            Strategy::Influence => "influence",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Full ranked recommendation list for `user` under `strategy`.
pub fn recommend<G: GraphView>(
    graph: &G,
    user: &G::Node,
    strategy: Strategy,
) -> AlgoResult<Vec<G::Node>> {
    match strategy {
        Strategy::CommonFriends => recommend_by_number_of_common_friends(graph, user),
        Strategy::Influence => recommend_by_influence(graph, user),
    }
}

/// The first `k` recommendations (fewer if the list is shorter).
pub fn recommend_top_k<G: GraphView>(
    graph: &G,
    user: &G::Node,
    strategy: Strategy,
    k: usize,
) -> AlgoResult<Vec<G::Node>> {
    let mut ranked = recommend(graph, user, strategy)?;
    ranked.truncate(k);
    Ok(ranked)
}

/// Both ranked lists for one user
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StrategyComparison<N> {
    pub user: N,
    pub by_common_friends: Vec<N>,
    pub by_influence: Vec<N>,
}

impl<N: PartialEq> StrategyComparison<N> {
    /// True when both strategies produce the identical full list
    pub fn is_unchanged(&self) -> bool {
        self.by_common_friends == self.by_influence
    }
}

/// Rank `user`'s candidates under both strategies.
pub fn compare_strategies<G: GraphView>(
    graph: &G,
    user: &G::Node,
) -> AlgoResult<StrategyComparison<G::Node>> {
    Ok(StrategyComparison {
        user: user.clone(),
        by_common_friends: recommend_by_number_of_common_friends(graph, user)?,
        by_influence: recommend_by_influence(graph, user)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::test_graphs::practice;
    use crate::common::adjacency_from_edges;

    #[test]
    fn test_rank_tie_break() {
        let scores: HashMap<&str, usize> = [("Y", 2), ("Z", 1), ("W", 1)].into_iter().collect();
        assert_eq!(rank_by_score(&scores), vec!["Y", "W", "Z"]);
    }

    #[test]
    fn test_rank_integer_ids_numeric_order() {
        let scores: HashMap<u64, f64> =
            [(100, 0.5), (9, 0.5), (20, 1.0), (3, 0.25)].into_iter().collect();
        assert_eq!(rank_by_score(&scores), vec![20, 9, 100, 3]);
    }

    #[test]
    fn test_rank_empty() {
        let scores: HashMap<&str, usize> = HashMap::new();
        assert!(rank_by_score(&scores).is_empty());
    }

    #[test]
    fn test_recommend_practice_graph() {
        let graph = practice();
        assert_eq!(
            recommend_by_number_of_common_friends(&graph, &"A").unwrap(),
            vec!["D", "F"]
        );
        assert_eq!(recommend_by_influence(&graph, &"A").unwrap(), vec!["D", "F"]);
        assert_eq!(
            recommend(&graph, &"A", Strategy::CommonFriends).unwrap(),
            recommend_by_number_of_common_friends(&graph, &"A").unwrap()
        );
    }

    #[test]
    fn test_recommendations_exclude_user_and_friends() {
        let graph = practice();
        for user in ["A", "B", "C", "D", "E", "F"] {
            let friends = graph.neighbors(&user).unwrap();
            for strategy in Strategy::ALL {
                let ranked = recommend(&graph, &user, strategy).unwrap();
                assert!(!ranked.contains(&user));
                assert!(ranked.iter().all(|c| !friends.contains(c)));
            }
        }
    }

    #[test]
    fn test_recommend_is_deterministic() {
        let graph = practice();
        for user in ["A", "B", "C", "D", "E", "F"] {
            for strategy in Strategy::ALL {
                assert_eq!(
                    recommend(&graph, &user, strategy).unwrap(),
                    recommend(&graph, &user, strategy).unwrap()
                );
            }
        }
    }

    #[test]
    fn test_strategies_diverge() {
        // Y hangs off a degree-2 connector, B, C and D off a degree-4 hub
        let graph = adjacency_from_edges(&[
            ("X", "lo"),
            ("lo", "Y"),
            ("X", "hub"),
            ("hub", "B"),
            ("hub", "C"),
            ("hub", "D"),
        ]);

        let comparison = compare_strategies(&graph, &"X").unwrap();
        assert_eq!(comparison.by_common_friends, vec!["B", "C", "D", "Y"]);
        assert_eq!(comparison.by_influence, vec!["Y", "B", "C", "D"]);
        assert!(!comparison.is_unchanged());
    }

    #[test]
    fn test_recommend_top_k() {
        let graph = practice();
        assert_eq!(
            recommend_top_k(&graph, &"A", Strategy::Influence, 1).unwrap(),
            vec!["D"]
        );
        assert_eq!(
            recommend_top_k(&graph, &"A", Strategy::CommonFriends, 10).unwrap(),
            vec!["D", "F"]
        );
        assert!(recommend_top_k(&graph, &"nobody", Strategy::Influence, 3).is_err());
    }

    #[test]
    fn test_strategy_names() {
        assert_eq!(Strategy::CommonFriends.to_string(), "num_common_friends");
        assert_eq!(Strategy::Influence.to_string(), "influence");
    }
}
