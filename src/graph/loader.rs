//! Edge-list file loading
//!
//! One friendship per line: two whitespace-separated integer node ids.
//! Extra columns are ignored, as are blank lines and `#` comments.

use super::store::{GraphError, SocialGraph};
use serde::Serialize;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, warn};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed edge list at line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),
}

pub type LoadResult<T> = Result<T, LoadError>;

/// What a load pass saw
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    /// Lines read, including skipped ones
    pub lines: usize,
    pub edges_added: usize,
    pub duplicates: usize,
    pub self_loops: usize,
}

/// Load an edge-list file into a graph
pub fn load_edge_list(path: impl AsRef<Path>) -> LoadResult<SocialGraph<u64>> {
    let path = path.as_ref();
    info!("Loading edge list from {}", path.display());
    let file = File::open(path)?;
    let (graph, summary) = parse_edge_list_with_summary(BufReader::new(file))?;
    info!(
        "Loaded {} nodes, {} edges ({} duplicate, {} self-loop lines skipped)",
        graph.node_count(),
        graph.edge_count(),
        summary.duplicates,
        summary.self_loops
    );
    Ok(graph)
}

pub fn parse_edge_list<R: BufRead>(reader: R) -> LoadResult<SocialGraph<u64>> {
    parse_edge_list_with_summary(reader).map(|(graph, _)| graph)
}

pub fn parse_edge_list_with_summary<R: BufRead>(
    reader: R,
) -> LoadResult<(SocialGraph<u64>, LoadSummary)> {
    let mut graph = SocialGraph::new();
    let mut summary = LoadSummary::default();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = idx + 1;
        summary.lines = line_no;

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let (u, v) = parse_line(trimmed, line_no)?;
        match graph.add_edge(u, v) {
            Ok(true) => summary.edges_added += 1,
            Ok(false) => {
                debug!("Duplicate edge {} {} at line {}", u, v, line_no);
                summary.duplicates += 1;
            }
            Err(GraphError::SelfLoop(_)) => {
                warn!("Skipping self-loop on node {} at line {}", u, line_no);
                summary.self_loops += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok((graph, summary))
}

fn parse_line(line: &str, line_no: usize) -> LoadResult<(u64, u64)> {
    let mut fields = line.split_whitespace();
    let (Some(first), Some(second)) = (fields.next(), fields.next()) else {
        return Err(LoadError::Malformed {
            line: line_no,
            reason: format!("expected two node ids, got '{}'", line),
        });
    };

    let parse = |field: &str| {
        field.parse::<u64>().map_err(|e| LoadError::Malformed {
            line: line_no,
            reason: format!("invalid node id '{}': {}", field, e),
        })
    };

    Ok((parse(first)?, parse(second)?))
}
