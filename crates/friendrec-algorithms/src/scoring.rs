//! Candidate scoring
//!
//! Both strategies key their score map by exactly the friends-of-friends set
//! of the user, so every entry has at least one common friend.

use super::common::{AlgoResult, GraphView};
use super::neighborhood::{friends_of_friends, intersect};
use std::cmp::Ordering;
use std::collections::HashMap;

/// A score that can be ranked.
pub trait Score: Copy {
    /// Total order over scores, smaller first
    fn compare(&self, other: &Self) -> Ordering;
}

impl Score for usize {
    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl Score for f64 {
    fn compare(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

/// Number of friends each candidate has in common with `user`.
pub fn number_of_common_friends_map<G: GraphView>(
    graph: &G,
    user: &G::Node,
) -> AlgoResult<HashMap<G::Node, usize>> {
    let friends = graph.neighbors(user)?;
    let candidates = friends_of_friends(graph, user)?;
    let mut scores = HashMap::with_capacity(candidates.len());

    for candidate in candidates {
        let shared = intersect(friends, graph.neighbors(&candidate)?).count();
        scores.insert(candidate, shared);
    }

    Ok(scores)
}

/// Influence score of each candidate with respect to `user`.
///
/// Each common friend `j` contributes `1 / degree(j)`: a mutual friend with
/// few friends of their own is a stronger signal than one who knows everyone.
pub fn influence_map<G: GraphView>(
    graph: &G,
    user: &G::Node,
) -> AlgoResult<HashMap<G::Node, f64>> {
    let friends = graph.neighbors(user)?;
    let candidates = friends_of_friends(graph, user)?;
    let mut scores = HashMap::with_capacity(candidates.len());

    for candidate in candidates {
        let mut shared: Vec<&G::Node> = intersect(friends, graph.neighbors(&candidate)?).collect();
        // Fixed summation order keeps the float result reproducible
        shared.sort_unstable();

        let mut score = 0.0;
        for connector in shared {
            score += 1.0 / graph.degree(connector)? as f64;
        }
        scores.insert(candidate, score);
    }

    Ok(scores)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::test_graphs::practice;
    use crate::common::adjacency_from_edges;
    use crate::neighborhood::{common_friends, friends_of_friends};

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_common_friends_map() {
        let graph = practice();
        let scores = number_of_common_friends_map(&graph, &"A").unwrap();

        assert_eq!(scores.len(), 2);
        assert_eq!(scores[&"D"], 2);
        assert_eq!(scores[&"F"], 1);
    }

    #[test]
    fn test_score_keys_match_friends_of_friends() {
        let graph = practice();
        for user in ["A", "B", "C", "D", "E", "F"] {
            let fof = friends_of_friends(&graph, &user).unwrap();
            let counts = number_of_common_friends_map(&graph, &user).unwrap();
            let influence = influence_map(&graph, &user).unwrap();

            assert_eq!(counts.keys().copied().collect::<std::collections::HashSet<_>>(), fof);
            assert_eq!(influence.keys().copied().collect::<std::collections::HashSet<_>>(), fof);
            for (candidate, count) in &counts {
                assert!(*count >= 1);
                assert_eq!(*count, common_friends(&graph, &user, candidate).unwrap().len());
            }
            assert!(influence.values().all(|score| *score > 0.0));
        }
    }

    #[test]
    fn test_influence_map() {
        let graph = practice();
        let scores = influence_map(&graph, &"A").unwrap();

        // D shares B (degree 3) and C (degree 4); F shares only C
        assert!((scores[&"D"] - (1.0 / 3.0 + 1.0 / 4.0)).abs() < EPSILON);
        assert!((scores[&"F"] - 0.25).abs() < EPSILON);
    }

    #[test]
    fn test_influence_weights_low_degree_connectors() {
        // X reaches Y through "lo" (degree 2) and B through "hub" (degree 4)
        let graph = adjacency_from_edges(&[
            ("X", "lo"),
            ("lo", "Y"),
            ("X", "hub"),
            ("hub", "B"),
            ("hub", "C"),
            ("hub", "D"),
        ]);

        assert_eq!(graph.degree(&"hub").unwrap(), 4);

        let counts = number_of_common_friends_map(&graph, &"X").unwrap();
        assert_eq!(counts[&"Y"], counts[&"B"]);

        let influence = influence_map(&graph, &"X").unwrap();
        assert!((influence[&"Y"] - 0.5).abs() < EPSILON);
        assert!((influence[&"B"] - 0.25).abs() < EPSILON);
        assert!((influence[&"D"] - 0.25).abs() < EPSILON);
    }

    #[test]
    fn test_user_without_friends() {
        let mut graph = practice();
        graph.insert("Z", std::collections::HashSet::new());

        assert!(number_of_common_friends_map(&graph, &"Z").unwrap().is_empty());
        assert!(influence_map(&graph, &"Z").unwrap().is_empty());
        assert!(influence_map(&graph, &"missing").is_err());
    }

    #[test]
    fn test_score_ordering() {
        assert_eq!(2usize.compare(&1), Ordering::Greater);
        assert_eq!(0.25f64.compare(&0.5), Ordering::Less);
        assert_eq!((1.0f64 / 3.0).compare(&(1.0 / 3.0)), Ordering::Equal);
    }
}
