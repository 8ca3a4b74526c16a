use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::num::ParseIntError;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadOrderingError {
    #[error("invalid vertex '{token}' in line {line}")]
    ParseInt {
        line: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },
    #[error("io error")]
    IoError(#[from] std::io::Error),
}

/// Reads a vertex ordering given as whitespace separated, 0-based vertex indices.
///
/// Lines starting with `#` are skipped. Whether the ordering is a permutation is checked by the consumer.
pub fn read_ordering<P>(path: P) -> Result<Vec<usize>, ReadOrderingError>
where
    P: AsRef<Path>,
{
    parse_ordering(BufReader::new(File::open(path)?))
}

/// Like [read_ordering], but reads from any buffered reader.
pub fn parse_ordering<R>(reader: R) -> Result<Vec<usize>, ReadOrderingError>
where
    R: BufRead,
{
    let mut ordering = vec![];
    for (line_idx, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim_start().starts_with('#') {
            continue;
        }
        for token in line.split_ascii_whitespace() {
            let u = token.parse().map_err(|source| ReadOrderingError::ParseInt {
                line: line_idx + 1,
                token: token.to_string(),
                source,
            })?;
            ordering.push(u);
        }
    }
    Ok(ordering)
}

/// Writes one vertex per line.
pub fn write_ordering<W>(out: &mut W, ordering: &[usize]) -> std::io::Result<()>
where
    W: Write,
{
    for u in ordering {
        writeln!(out, "{u}")?;
    }
    out.flush()
}
