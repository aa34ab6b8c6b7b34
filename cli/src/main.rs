//! FriendRec CLI — friend recommendations from the command line
//!
//! Works on the built-in fixture graphs or on an edge-list file.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use friendrec::algo::{
    common_friends, friends_of_friends, influence_map, neighbors, number_of_common_friends_map,
    Node,
};
use friendrec::{
    compare_users, recommend, recommendation_table, sample_users, ReportConfig, SocialGraph,
    Strategy,
};
use serde::Serialize;
use std::str::FromStr;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// Node and edge counts of the reference Facebook links dataset
const REFERENCE_NODES: usize = 63731;
const REFERENCE_EDGES: usize = 817090;

#[derive(Parser)]
#[command(name = "friendrec", version, about = "Friend recommendations over social graphs")]
struct Cli {
    /// Graph to use: `practice`, `romeo-juliet`, or a path to an edge-list file
    #[arg(long, default_value = "practice", global = true, env = "FRIENDREC_GRAPH")]
    graph: String,

    /// YAML report configuration
    #[arg(long, global = true)]
    config: Option<String>,

    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum StrategyArg {
    Common,
    Influence,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Common => Strategy::CommonFriends,
            StrategyArg::Influence => Strategy::Influence,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend friends for one user, or for every sampled user
    Recommend {
        /// User to recommend for (omit to list sampled users)
        #[arg(long)]
        user: Option<String>,

        /// Scoring strategy (omit to show both)
        #[arg(long)]
        strategy: Option<StrategyArg>,

        /// Number of recommendations to show
        #[arg(long)]
        top: Option<usize>,
    },
    /// Show a user's friends, friends of friends and candidate scores
    Friends {
        #[arg(long)]
        user: String,
    },
    /// Count users whose recommendations differ between the two strategies
    Compare {
        /// Sample users whose id is a multiple of N (edge-list graphs only)
        #[arg(long)]
        sample_every: Option<u64>,

        /// Compare every user instead of a sample
        #[arg(long)]
        all: bool,
    },
    /// Show graph statistics
    Stats {
        /// Fail unless node and edge counts match the expected values
        #[arg(long)]
        verify: bool,

        #[arg(long, default_value_t = REFERENCE_NODES)]
        expect_nodes: usize,

        #[arg(long, default_value_t = REFERENCE_EDGES)]
        expect_edges: usize,
    },
}

/// A graph from either source; fixtures use names, files use integer ids
enum LoadedGraph {
    Named(SocialGraph<String>),
    Numeric(SocialGraph<u64>),
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => ReportConfig::from_yaml_file(path)
            .with_context(|| format!("failed to read config {}", path))?,
        None => ReportConfig::default(),
    };

    let graph = load_graph(&cli.graph)?;

    match cli.command {
        Commands::Recommend { user, strategy, top } => {
            if let Some(top) = top {
                config.top_k = top;
            }
            config.validate()?;
            let strategies: Vec<Strategy> = match strategy {
                Some(s) => vec![s.into()],
                None => Strategy::ALL.to_vec(),
            };
            match &graph {
                LoadedGraph::Named(g) => run_recommend(g, user, &strategies, &config, &cli.format, None),
                LoadedGraph::Numeric(g) => {
                    let sampled = sample_users(g, config.sample_every)?;
                    run_recommend(g, user, &strategies, &config, &cli.format, Some(sampled))
                }
            }
        }
        Commands::Friends { user } => match &graph {
            LoadedGraph::Named(g) => run_friends(g, &user, &cli.format),
            LoadedGraph::Numeric(g) => run_friends(g, &user, &cli.format),
        },
        Commands::Compare { sample_every, all } => {
            if let Some(every) = sample_every {
                config.sample_every = every;
            }
            config.validate()?;
            match &graph {
                LoadedGraph::Named(g) => run_compare(g, g.sorted_nodes(), &config, &cli.format),
                LoadedGraph::Numeric(g) => {
                    let users = if all {
                        g.sorted_nodes()
                    } else {
                        sample_users(g, config.sample_every)?
                    };
                    run_compare(g, users, &config, &cli.format)
                }
            }
        }
        Commands::Stats { verify, expect_nodes, expect_edges } => match &graph {
            LoadedGraph::Named(g) => run_stats(g, verify.then_some((expect_nodes, expect_edges)), &cli.format),
            LoadedGraph::Numeric(g) => run_stats(g, verify.then_some((expect_nodes, expect_edges)), &cli.format),
        },
    }
}

fn load_graph(source: &str) -> Result<LoadedGraph> {
    let graph = match source {
        "practice" => LoadedGraph::Named(friendrec::practice_graph()?),
        "romeo-juliet" | "rj" => LoadedGraph::Named(friendrec::romeo_and_juliet_graph()?),
        path => LoadedGraph::Numeric(
            friendrec::load_edge_list(path)
                .with_context(|| format!("failed to load edge list {}", path))?,
        ),
    };
    Ok(graph)
}

fn parse_user<N>(raw: &str) -> Result<N>
where
    N: FromStr,
    N::Err: std::error::Error + Send + Sync + 'static,
{
    raw.parse::<N>()
        .with_context(|| format!("invalid user id '{}'", raw))
}

fn run_recommend<N>(
    graph: &SocialGraph<N>,
    user: Option<String>,
    strategies: &[Strategy],
    config: &ReportConfig,
    format: &OutputFormat,
    sampled: Option<Vec<N>>,
) -> Result<()>
where
    N: Node + Serialize + FromStr + Send + Sync,
    N::Err: std::error::Error + Send + Sync + 'static,
{
    let users = match user {
        Some(raw) => vec![parse_user::<N>(&raw)?],
        None => sampled.unwrap_or_else(|| graph.sorted_nodes()),
    };

    let mut rows = Vec::new();
    for &strategy in strategies {
        rows.extend(recommendation_table(graph, &users, strategy, config)?);
    }

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        OutputFormat::Table => {
            let mut table = new_table(&["user", "strategy", "recommendations"]);
            for row in &rows {
                table.add_row(vec![
                    row.user.to_string(),
                    row.strategy.to_string(),
                    join(&row.recommendations),
                ]);
            }
            println!("{}", table);
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct CandidateScore<N> {
    candidate: N,
    common_friends: Vec<N>,
    count: usize,
    influence: f64,
}

#[derive(Serialize)]
struct FriendsReport<N> {
    user: N,
    friends: Vec<N>,
    friends_of_friends: Vec<N>,
    candidates: Vec<CandidateScore<N>>,
}

fn run_friends<N>(graph: &SocialGraph<N>, raw_user: &str, format: &OutputFormat) -> Result<()>
where
    N: Node + Serialize + FromStr,
    N::Err: std::error::Error + Send + Sync + 'static,
{
    let user = parse_user::<N>(raw_user)?;
    let counts = number_of_common_friends_map(graph, &user)?;
    let influence = influence_map(graph, &user)?;

    let mut candidates = Vec::with_capacity(counts.len());
    for candidate in recommend(graph, &user, Strategy::CommonFriends)? {
        let mut shared: Vec<N> = common_friends(graph, &user, &candidate)?.into_iter().collect();
        shared.sort();
        candidates.push(CandidateScore {
            count: counts[&candidate],
            influence: influence[&candidate],
            common_friends: shared,
            candidate,
        });
    }

    let report = FriendsReport {
        friends: sorted(neighbors(graph, &user)?),
        friends_of_friends: sorted(friends_of_friends(graph, &user)?),
        candidates,
        user,
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Table => {
            println!("User:               {}", report.user);
            println!("Friends:            {}", join(&report.friends));
            println!("Friends of friends: {}", join(&report.friends_of_friends));

            if report.candidates.is_empty() {
                println!("(no candidates)");
                return Ok(());
            }
            let mut table = new_table(&["candidate", "common friends", "count", "influence"]);
            for c in &report.candidates {
                table.add_row(vec![
                    c.candidate.to_string(),
                    join(&c.common_friends),
                    c.count.to_string(),
                    format!("{:.4}", c.influence),
                ]);
            }
            println!("{}", table);
        }
    }
    Ok(())
}

fn run_compare<N>(
    graph: &SocialGraph<N>,
    users: Vec<N>,
    config: &ReportConfig,
    format: &OutputFormat,
) -> Result<()>
where
    N: Node + Serialize + Send + Sync,
{
    info!("Comparing {} users", users.len());
    let report = compare_users(graph, &users, config)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Table => {
            println!("Unchanged Recommendations: [{}]", join(&report.unchanged));
            println!("Changed Recommendations:   [{}]", join(&report.changed));
            println!();
            println!("Same      {}", report.same_count());
            println!("Different {}", report.different_count());
        }
    }
    Ok(())
}

fn run_stats<N: Node>(
    graph: &SocialGraph<N>,
    expected: Option<(usize, usize)>,
    format: &OutputFormat,
) -> Result<()> {
    let stats = graph.stats();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&stats)?),
        OutputFormat::Table => {
            println!("Nodes:      {}", stats.nodes);
            println!("Edges:      {}", stats.edges);
            println!("Max degree: {}", stats.max_degree);
            println!("Isolated:   {}", stats.isolated);
        }
    }

    if let Some((nodes, edges)) = expected {
        graph.verify_counts(nodes, edges)?;
        info!("Counts verified: {} nodes, {} edges", nodes, edges);
    }
    Ok(())
}

fn new_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header.to_vec());
    table
}

fn sorted<N: Ord>(items: impl IntoIterator<Item = N>) -> Vec<N> {
    let mut items: Vec<N> = items.into_iter().collect();
    items.sort();
    items
}

fn join<N: ToString>(items: &[N]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
