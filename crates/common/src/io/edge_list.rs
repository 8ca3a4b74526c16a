use petgraph::graph::UnGraph;
use petgraph::visit::EdgeRef;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::num::ParseIntError;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadEdgeListError {
    #[error("invalid line {line} (expected 'u v', got '{content}')")]
    InvalidLine { line: usize, content: String },
    #[error("parse int error")]
    ParseInt(#[from] ParseIntError),
    #[error("io error")]
    IoError(#[from] std::io::Error),
}

/// Reads a graph from a file with one 0-based edge `u v` per line.
///
/// Empty lines and lines starting with `#` are skipped. The number of vertices is one more than the largest
/// index, so trailing isolated vertices cannot be represented. Self loops and repeated edges are kept as
/// they are.
pub fn read_edge_list<P>(path: P) -> Result<UnGraph<(), ()>, ReadEdgeListError>
where
    P: AsRef<Path>,
{
    parse_edge_list(BufReader::new(File::open(path)?))
}

/// Like [read_edge_list], but reads from any buffered reader.
pub fn parse_edge_list<R>(reader: R) -> Result<UnGraph<(), ()>, ReadEdgeListError>
where
    R: BufRead,
{
    let mut edges = vec![];
    for (line_idx, line) in reader.lines().enumerate() {
        let line = line?;
        let content = line.trim();
        if content.is_empty() || content.starts_with('#') {
            continue;
        }
        let invalid = || ReadEdgeListError::InvalidLine { line: line_idx + 1, content: content.to_string() };
        let mut tokens = content.split_ascii_whitespace();
        let (Some(a), Some(b), None) = (tokens.next(), tokens.next(), tokens.next()) else {
            return Err(invalid());
        };
        let u: u32 = a.parse()?;
        let v: u32 = b.parse()?;
        edges.push((u, v));
    }

    let n = edges.iter().map(|&(u, v)| u.max(v) as usize + 1).max().unwrap_or(0);
    let mut graph = UnGraph::with_capacity(n, edges.len());
    graph.extend_with_edges(edges);
    Ok(graph)
}

/// Writes every edge of `graph` as a line `u v` with `u < v`.
pub fn write_edge_list<W>(out: &mut W, graph: &UnGraph<(), ()>) -> std::io::Result<()>
where
    W: Write,
{
    for edge in graph.edge_references() {
        let (u, v) = (edge.source().index(), edge.target().index());
        writeln!(out, "{} {}", u.min(v), u.max(v))?;
    }
    out.flush()
}
