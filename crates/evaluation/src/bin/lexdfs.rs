use clap::Parser;
use common::io::{read_edge_list, read_metis, read_ordering, write_ordering, GraphFileType};
use lex_dfs::{find_lex_dfs_violation, lex_dfs, lex_dfs_checked};
use petgraph::graph::NodeIndex;
use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, Level};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::FmtSubscriber;

#[derive(Debug, Parser)]
struct Cli {
    #[arg(long)]
    input_type: GraphFileType,
    #[arg(long)]
    input: PathBuf,
    /// Umbrella-free ordering of the vertices. Defaults to the vertex indices in increasing order.
    #[arg(long)]
    sigma: Option<PathBuf>,
    /// Output file for the ordering. Defaults to stdout.
    #[arg(long)]
    output: Option<PathBuf>,
    #[arg(long)]
    stats: Option<PathBuf>,
    /// Reject orderings with an umbrella. Takes O(n m) time.
    #[arg(long)]
    check_sigma: bool,
    /// Check that the output is a Lex-DFS ordering. Takes O(n^3) time.
    #[arg(long)]
    verify: bool,
    #[arg(long)]
    log_level: Option<Level>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if let Some(level) = cli.log_level {
        let subscriber = FmtSubscriber::builder().with_max_level(level).with_span_events(FmtSpan::CLOSE).finish();

        subscriber.init();
    };

    let graph = match cli.input_type {
        GraphFileType::Metis => read_metis(&cli.input)?,
        GraphFileType::EdgeList => read_edge_list(&cli.input)?,
    };
    let sigma: Vec<NodeIndex> = match &cli.sigma {
        Some(path) => read_ordering(path)?.into_iter().map(NodeIndex::new).collect(),
        None => graph.node_indices().collect(),
    };
    info!(n = graph.node_count(), m = graph.edge_count(), "read input");

    let start = Instant::now();
    let order = if cli.check_sigma { lex_dfs_checked(&graph, &sigma)? } else { lex_dfs(&graph, &sigma)? };
    let t = start.elapsed();

    if cli.verify {
        if let Some(violation) = find_lex_dfs_violation(&graph, &order) {
            return Err(format!("output is not a Lex-DFS ordering ({violation})").into());
        }
        info!("verified output");
    }

    let order: Vec<usize> = order.iter().map(|u| u.index()).collect();
    match &cli.output {
        Some(output) => write_ordering(&mut BufWriter::new(File::create(output)?), &order)?,
        None => write_ordering(&mut std::io::stdout().lock(), &order)?,
    }

    if let Some(stats) = cli.stats {
        let mut out = BufWriter::new(File::create(stats)?);
        writeln!(out, "input {}", cli.input.display())?;
        writeln!(out, "num_vertices {}", graph.node_count())?;
        writeln!(out, "num_edges {}", graph.edge_count())?;
        writeln!(out, "check_sigma {}", cli.check_sigma)?;
        writeln!(out, "verified {}", cli.verify)?;
        writeln!(out, "time {}", t.as_micros())?;
        out.flush()?;
    }
    Ok(())
}
