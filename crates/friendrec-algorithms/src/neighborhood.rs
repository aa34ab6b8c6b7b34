//! Neighborhood queries: direct friends, two-hop friends and common friends

use super::common::{AlgoResult, GraphView};
use std::collections::HashSet;

/// Friends of `user`.
pub fn neighbors<G: GraphView>(graph: &G, user: &G::Node) -> AlgoResult<HashSet<G::Node>> {
    graph.neighbors(user).cloned()
}

/// Friends of friends of `user`.
///
/// Every node reachable through exactly one intermediate friend, excluding
/// `user` and its direct friends. Each node appears once no matter how many
/// two-hop paths lead to it.
pub fn friends_of_friends<G: GraphView>(
    graph: &G,
    user: &G::Node,
) -> AlgoResult<HashSet<G::Node>> {
    let friends = graph.neighbors(user)?;
    let mut result = HashSet::new();

    for friend in friends {
        for candidate in graph.neighbors(friend)? {
            if candidate != user && !friends.contains(candidate) {
                result.insert(candidate.clone());
            }
        }
    }

    Ok(result)
}

/// Friends shared by `user1` and `user2`. Symmetric in its arguments.
pub fn common_friends<G: GraphView>(
    graph: &G,
    user1: &G::Node,
    user2: &G::Node,
) -> AlgoResult<HashSet<G::Node>> {
    let a = graph.neighbors(user1)?;
    let b = graph.neighbors(user2)?;
    Ok(intersect(a, b).cloned().collect())
}

/// Intersection driven by the smaller of the two sets.
pub(crate) fn intersect<'a, N: std::hash::Hash + Eq>(
    a: &'a HashSet<N>,
    b: &'a HashSet<N>,
) -> impl Iterator<Item = &'a N> {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    small.iter().filter(move |n| large.contains(*n))
}
