//! In-memory social graph storage

use friendrec_algorithms::{AlgoError, AlgoResult, GraphView, Node};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Graph errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error(transparent)]
    Algo(#[from] AlgoError),

    #[error("Invalid edge: self-loop on node {0}")]
    SelfLoop(String),

    #[error("Graph has {actual_nodes} nodes and {actual_edges} edges, expected {expected_nodes} nodes and {expected_edges} edges")]
    CountMismatch {
        expected_nodes: usize,
        expected_edges: usize,
        actual_nodes: usize,
        actual_edges: usize,
    },
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Undirected simple graph of friendships
///
/// Uses an adjacency map for O(1) neighbor lookup:
/// - adjacency: node -> set of friends (kept symmetric)
/// - edge_count: number of undirected edges, each counted once
#[derive(Debug, Clone)]
pub struct SocialGraph<N: Node> {
    adjacency: HashMap<N, HashSet<N>>,
    edge_count: usize,
}

/// Summary statistics for a graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub nodes: usize,
    pub edges: usize,
    pub max_degree: usize,
    /// Nodes with no friends
    pub isolated: usize,
}

impl<N: Node> SocialGraph<N> {
    /// Create a new empty graph
    pub fn new() -> Self {
        SocialGraph {
            adjacency: HashMap::new(),
            edge_count: 0,
        }
    }

    /// Build a graph from a list of friendships
    pub fn from_edges<I>(edges: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = (N, N)>,
    {
        let mut graph = Self::new();
        for (u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Add a node with no friends. Returns false if it already existed.
    pub fn add_node(&mut self, node: N) -> bool {
        if self.adjacency.contains_key(&node) {
            return false;
        }
        self.adjacency.insert(node, HashSet::new());
        true
    }

    /// Add an undirected friendship, creating either endpoint as needed.
    ///
    /// Returns `Ok(false)` if the edge was already present. Self-loops are
    /// rejected and leave the graph unchanged.
    pub fn add_edge(&mut self, u: N, v: N) -> GraphResult<bool> {
        if u == v {
            return Err(GraphError::SelfLoop(u.to_string()));
        }

        let inserted = self.adjacency.entry(u.clone()).or_default().insert(v.clone());
        self.adjacency.entry(v).or_default().insert(u);

        if inserted {
            self.edge_count += 1;
        }
        Ok(inserted)
    }

    pub fn has_node(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    pub fn has_edge(&self, u: &N, v: &N) -> bool {
        self.adjacency.get(u).map_or(false, |friends| friends.contains(v))
    }

    /// Get total number of nodes
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Get total number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// All nodes in ascending order
    pub fn sorted_nodes(&self) -> Vec<N> {
        let mut nodes: Vec<N> = self.adjacency.keys().cloned().collect();
        nodes.sort();
        nodes
    }

    /// Every edge once, as `(smaller, larger)`, sorted
    pub fn edges(&self) -> Vec<(N, N)> {
        let mut edges: Vec<(N, N)> = self
            .adjacency
            .iter()
            .flat_map(|(u, friends)| {
                friends
                    .iter()
                    .filter(move |v| u < *v)
                    .map(move |v| (u.clone(), v.clone()))
            })
            .collect();
        edges.sort();
        edges
    }

    pub fn stats(&self) -> GraphStats {
        let mut max_degree = 0;
        let mut isolated = 0;
        for friends in self.adjacency.values() {
            max_degree = max_degree.max(friends.len());
            if friends.is_empty() {
                isolated += 1;
            }
        }

        GraphStats {
            nodes: self.node_count(),
            edges: self.edge_count,
            max_degree,
            isolated,
        }
    }

    /// Check node and edge counts against known values
    pub fn verify_counts(&self, expected_nodes: usize, expected_edges: usize) -> GraphResult<()> {
        let (actual_nodes, actual_edges) = (self.node_count(), self.edge_count());
        if actual_nodes != expected_nodes || actual_edges != expected_edges {
            return Err(GraphError::CountMismatch {
                expected_nodes,
                expected_edges,
                actual_nodes,
                actual_edges,
            });
        }
        Ok(())
    }
}

impl<N: Node> Default for SocialGraph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Node> GraphView for SocialGraph<N> {
    type Node = N;

    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = &N> + '_> {
        Box::new(self.adjacency.keys())
    }

    fn neighbors(&self, node: &N) -> AlgoResult<&HashSet<N>> {
        self.adjacency
            .get(node)
            .ok_or_else(|| AlgoError::NodeNotFound(node.to_string()))
    }
}
