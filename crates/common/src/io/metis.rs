use petgraph::graph::{NodeIndex, UnGraph};
use std::cmp::Ordering;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::num::ParseIntError;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadMetisError {
    #[error("missing header")]
    MissingHeader,
    #[error("invalid header (expected '(n) (m)', got '{0}')")]
    WrongHeader(String),
    #[error("wrong n given in header (expected {expected}, got {actual})")]
    WrongN { expected: usize, actual: usize },
    #[error("wrong m given in header (expected {expected}, got {actual})")]
    WrongM { expected: usize, actual: usize },
    #[error("vertex {vertex} is out of range (indices must be in 1..={n})")]
    IndexOutOfRange { vertex: usize, n: usize },
    #[error("number of reverse edges not matching (expected {expected}, got {actual})")]
    NumReverseEdgesNotMatching { expected: usize, actual: usize },
    #[error("found self loop at vertex {0}")]
    SelfLoop(usize),
    #[error("parse error")]
    ParseInt(#[from] ParseIntError),
    #[error("io error")]
    IoError(#[from] std::io::Error),
}

/// Implements a subset of the metis graph format. See [metis].
///
/// The format supports undirected, unweighted, loop-less graphs and specifies
/// the number of nodes and the number edges in its header. The vertices indices
/// start with 1. Every edge is listed at both endpoints.
///
/// The restrictions are
/// + lines starting with '%' are comments and are skipped
/// + does only allow '(n) (m)' as header
/// + does not support vertex and edge weights
///
/// [metis]: https://people.sc.fsu.edu/~jburkardt/data/metis_graph/metis_graph.html
pub fn read_metis<P>(path: P) -> Result<UnGraph<(), ()>, ReadMetisError>
where
    P: AsRef<Path>,
{
    parse_metis(BufReader::new(File::open(path)?))
}

/// Like [read_metis], but reads from any buffered reader.
pub fn parse_metis<R>(reader: R) -> Result<UnGraph<(), ()>, ReadMetisError>
where
    R: BufRead,
{
    let mut lines = reader.lines().filter(|line| !matches!(line, Ok(line) if line.starts_with('%')));

    let first_line = lines.next().ok_or(ReadMetisError::MissingHeader)??;
    let (n, m) = {
        let err = || ReadMetisError::WrongHeader(first_line.clone());
        let mut iter = first_line.split_ascii_whitespace();
        let n: usize = iter.next().ok_or_else(err)?.parse().map_err(|_| err())?;
        let m: usize = iter.next().ok_or_else(err)?.parse().map_err(|_| err())?;
        if iter.next().is_some() || n >= u32::MAX as usize || m >= u32::MAX as usize {
            return Err(err());
        }
        (n, m)
    };

    let mut graph = UnGraph::with_capacity(n, m);
    for _ in 0..n {
        graph.add_node(());
    }

    let mut m_reverse = 0;
    let mut n_actual = 0;
    for line in lines {
        let line = line?;
        let u = n_actual;
        n_actual += 1;
        if n_actual > n {
            if line.trim().is_empty() {
                continue;
            }
            return Err(ReadMetisError::WrongN { expected: n, actual: n_actual });
        }
        for v in line.split_ascii_whitespace() {
            let v: usize = v.parse()?;
            if v == 0 || v > n {
                return Err(ReadMetisError::IndexOutOfRange { vertex: v, n });
            }
            let v = v - 1;
            match u.cmp(&v) {
                Ordering::Less => {
                    graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), ());
                }
                Ordering::Equal => return Err(ReadMetisError::SelfLoop(u + 1)),
                Ordering::Greater => {
                    m_reverse += 1;
                }
            }
        }
    }

    if n_actual < n {
        return Err(ReadMetisError::WrongN { expected: n, actual: n_actual });
    }
    if graph.edge_count() != m {
        return Err(ReadMetisError::WrongM { expected: m, actual: graph.edge_count() });
    }
    if m_reverse != m {
        return Err(ReadMetisError::NumReverseEdgesNotMatching { expected: m, actual: m_reverse });
    }

    Ok(graph)
}

/// Writes `graph` in the metis format with neighbors in increasing order.
pub fn write_metis<W>(out: &mut W, graph: &UnGraph<(), ()>) -> std::io::Result<()>
where
    W: Write,
{
    writeln!(out, "{} {}", graph.node_count(), graph.edge_count())?;
    let mut neighbors = vec![];
    for u in graph.node_indices() {
        neighbors.clear();
        neighbors.extend(graph.neighbors(u).map(|v| v.index() + 1));
        neighbors.sort_unstable();
        let line: Vec<String> = neighbors.iter().map(|v| v.to_string()).collect();
        writeln!(out, "{}", line.join(" "))?;
    }
    out.flush()
}
