//! Shared utilities for recommendation algorithms
//!
//! Provides the read-only graph capability every algorithm runs against.

use std::collections::{HashMap, HashSet};
use std::fmt::Display;
use std::hash::Hash;
use thiserror::Error;

/// Bounds required of a node identifier.
///
/// Identifiers must be hashable (for set algebra) and totally ordered (for
/// the ranking tie-break). Strings and integers both qualify.
pub trait Node: Clone + Eq + Hash + Ord + Display {}

impl<T: Clone + Eq + Hash + Ord + Display> Node for T {}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlgoError {
    #[error("Node {0} not found")]
    NodeNotFound(String),
}

pub type AlgoResult<T> = Result<T, AlgoError>;

/// A read-only view of an undirected, unweighted graph.
///
/// Implementations must keep adjacency symmetric: if `v` is in
/// `neighbors(u)` then `u` is in `neighbors(v)`.
pub trait GraphView {
    type Node: Node;

    /// Number of nodes in the graph
    fn node_count(&self) -> usize;

    /// Iterate over every node, in no particular order
    fn nodes(&self) -> Box<dyn Iterator<Item = &Self::Node> + '_>;

    /// Neighbor set of `node`.
    ///
    /// Fails with [`AlgoError::NodeNotFound`] if `node` is absent. A present
    /// node with no edges yields an empty set.
    fn neighbors(&self, node: &Self::Node) -> AlgoResult<&HashSet<Self::Node>>;

    fn contains(&self, node: &Self::Node) -> bool {
        self.neighbors(node).is_ok()
    }

    fn degree(&self, node: &Self::Node) -> AlgoResult<usize> {
        self.neighbors(node).map(HashSet::len)
    }
}

/// Plain adjacency lists: node -> set of neighbors.
impl<N: Node> GraphView for HashMap<N, HashSet<N>> {
    type Node = N;

    fn node_count(&self) -> usize {
        self.len()
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = &N> + '_> {
        Box::new(self.keys())
    }

    fn neighbors(&self, node: &N) -> AlgoResult<&HashSet<N>> {
        self.get(node)
            .ok_or_else(|| AlgoError::NodeNotFound(node.to_string()))
    }
}

/// Build a symmetric adjacency map from an edge list (test support).
pub fn adjacency_from_edges<N: Node>(edges: &[(N, N)]) -> HashMap<N, HashSet<N>> {
    let mut adjacency: HashMap<N, HashSet<N>> = HashMap::new();
    for (u, v) in edges {
        adjacency.entry(u.clone()).or_default().insert(v.clone());
        adjacency.entry(v.clone()).or_default().insert(u.clone());
    }
    adjacency
}

#[cfg(test)]
pub(crate) mod test_graphs {
    use super::*;

    /// The worked-example graph: A-C, A-B, B-C, B-D, D-C, D-E, D-F, C-F
    pub fn practice() -> HashMap<&'static str, HashSet<&'static str>> {
        adjacency_from_edges(&[
            ("A", "C"),
            ("A", "B"),
            ("B", "C"),
            ("B", "D"),
            ("D", "C"),
            ("D", "E"),
            ("D", "F"),
            ("C", "F"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacency_is_symmetric() {
        let graph = test_graphs::practice();
        for u in graph.nodes() {
            for v in graph.neighbors(u).unwrap() {
                assert!(graph.neighbors(v).unwrap().contains(u));
            }
        }
        assert_eq!(graph.node_count(), 6);
        assert_eq!(graph.degree(&"D").unwrap(), 4);
    }

    #[test]
    fn test_missing_node() {
        let graph = test_graphs::practice();
        assert!(!graph.contains(&"Z"));
        assert_eq!(
            graph.neighbors(&"Z"),
            Err(AlgoError::NodeNotFound("Z".to_string()))
        );
    }
}
