use std::fmt;
use std::fs;
use std::num::{IntErrorKind, ParseIntError};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::trace;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("could not read {}: {source}", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("missing header")]
    MissingHeader,
    #[error("invalid token {token:?} on line {line}")]
    Parse {
        line: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },
    #[error("could not write {}: {source}", .path.display())]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// An undirected edge `source -- target` with `source < target`.
///
/// `target` is the neighbor token exactly as it appears in the instance, so
/// `+2`, `03` and ids beyond `i64::MAX` are written back unchanged.
#[derive(Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct EdgeRecord {
    pub source: u64,
    pub target: String,
    pub weight: u32,
}

impl EdgeRecord {
    /// Every emitted edge carries this weight.
    pub const WEIGHT: u32 = 1;

    pub fn new(source: u64, target: impl Into<String>) -> Self {
        Self { source, target: target.into(), weight: Self::WEIGHT }
    }
}

impl fmt::Display for EdgeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.source, self.target, self.weight)
    }
}

/// The result of reading an instance: its header line and the edges in
/// discovery order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Transformed {
    header: String,
    edges: Vec<EdgeRecord>,
    num_vertices: usize,
    num_tokens: usize,
}

impl Transformed {
    /// The first line of the instance, including its line terminator if it had one.
    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn edges(&self) -> &[EdgeRecord] {
        &self.edges
    }

    /// Number of adjacency lines, i.e. the largest vertex id that has a line.
    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    /// Number of neighbor tokens, including the ones that were dropped.
    pub fn num_tokens(&self) -> usize {
        self.num_tokens
    }
}

/// Extracts the edge list from the contents of an instance file.
///
/// The first line is the header and is kept verbatim. Every following line
/// lists the neighbors of one vertex; the line after the header belongs to
/// vertex 1. A neighbor `v` of vertex `u` produces the edge `u v 1` only if
/// `v > u`, so the reverse entry of an edge, loops and non-positive ids are
/// dropped without an error.
pub fn transform(content: &str) -> Result<Transformed, ConvertError> {
    let mut lines = content.split_inclusive('\n');
    let header = lines.next().ok_or(ConvertError::MissingHeader)?;

    let mut edges = vec![];
    let mut num_vertices = 0;
    let mut num_tokens = 0;
    for (i, line) in lines.enumerate() {
        let u = i as u64 + 1;
        trace!(u, line = line.trim_end());
        for token in line.split_whitespace() {
            let greater = exceeds(token, u).map_err(|source| ConvertError::Parse {
                line: i + 2,
                token: token.to_string(),
                source,
            })?;
            num_tokens += 1;
            if greater {
                edges.push(EdgeRecord::new(u, token));
            }
        }
        num_vertices += 1;
    }

    Ok(Transformed { header: header.to_string(), edges, num_vertices, num_tokens })
}

/// Whether the integer `token` is greater than the vertex id `u`.
///
/// Integers that do not fit into an `i64` are still integers: a positive one
/// is larger than any vertex id, a negative one is smaller.
fn exceeds(token: &str, u: u64) -> Result<bool, ParseIntError> {
    match token.parse::<i64>() {
        Ok(v) => Ok(v > 0 && v as u64 > u),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Ok(true),
            IntErrorKind::NegOverflow => Ok(false),
            _ => Err(err),
        },
    }
}

/// Reads an instance file and extracts its edge list. See [`transform`].
pub fn read_instance<P>(path: P) -> Result<Transformed, ConvertError>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let content =
        fs::read_to_string(path).map_err(|source| ConvertError::NotFound { path: path.to_path_buf(), source })?;
    transform(&content)
}

#[cfg(test)]
mod test {
    use super::*;

    fn edge_set(transformed: &Transformed) -> Vec<(u64, &str, u32)> {
        transformed.edges().iter().map(|e| (e.source, e.target.as_str(), e.weight)).collect()
    }

    #[test]
    fn small_instance() {
        let transformed = transform("5 4\n2 3\n1 4\n1\n2\n\n").unwrap();
        assert_eq!(transformed.header(), "5 4\n");
        assert_eq!(edge_set(&transformed), [(1, "2", 1), (1, "3", 1), (2, "4", 1)]);
        assert_eq!(transformed.num_vertices(), 5);
        assert_eq!(transformed.num_tokens(), 6);
    }

    #[test]
    fn symmetric_adjacency() {
        // path 1 - 2 - 3 - 4 listed from both ends
        let transformed = transform("4 3\n2\n1 3\n2 4\n3\n").unwrap();
        assert_eq!(edge_set(&transformed), [(1, "2", 1), (2, "3", 1), (3, "4", 1)]);
    }

    #[test]
    fn discovery_order() {
        let transformed = transform("x\n4 2 3\n\n4 1\n").unwrap();
        assert_eq!(edge_set(&transformed), [(1, "4", 1), (1, "2", 1), (1, "3", 1), (3, "4", 1)]);
    }

    #[test]
    fn loops_are_dropped() {
        let transformed = transform("3 1\n1 2\n1 2\n3\n").unwrap();
        assert_eq!(edge_set(&transformed), [(1, "2", 1)]);
    }

    #[test]
    fn non_positive_ids_are_dropped() {
        let transformed = transform("2 1\n0 -3 +2\n1\n").unwrap();
        assert_eq!(edge_set(&transformed), [(1, "+2", 1)]);
        assert_eq!(transformed.num_tokens(), 4);
    }

    #[test]
    fn neighbor_text_is_kept() {
        let transformed = transform("3 2\n+2 03\n").unwrap();
        assert_eq!(edge_set(&transformed), [(1, "+2", 1), (1, "03", 1)]);
        assert_eq!(transformed.edges()[1].to_string(), "1 03 1");
    }

    #[test]
    fn ids_beyond_i64() {
        let transformed = transform("2 1\n99999999999999999999\n-99999999999999999999 +99999999999999999999\n").unwrap();
        assert_eq!(edge_set(&transformed), [(1, "99999999999999999999", 1), (2, "+99999999999999999999", 1)]);
        assert_eq!(transformed.num_tokens(), 3);
    }

    #[test]
    fn sign_without_digits() {
        assert!(matches!(transform("2 1\n+\n"), Err(ConvertError::Parse { line: 2, .. })));
        assert!(matches!(transform("2 1\n2 -\n"), Err(ConvertError::Parse { line: 2, .. })));
    }

    #[test]
    fn empty_adjacency_lines() {
        let transformed = transform("3 0\n\n   \n\t\n").unwrap();
        assert!(transformed.edges().is_empty());
        assert_eq!(transformed.num_vertices(), 3);
    }

    #[test]
    fn header_is_kept_verbatim() {
        let transformed = transform("p  edge 3 2 \r\n2 3\r\n1\r\n1\r\n").unwrap();
        assert_eq!(transformed.header(), "p  edge 3 2 \r\n");
        assert_eq!(edge_set(&transformed), [(1, "2", 1), (1, "3", 1)]);
    }

    #[test]
    fn carriage_return_is_not_a_line_break() {
        let transformed = transform("2 1\r2\n2\n").unwrap();
        assert_eq!(transformed.header(), "2 1\r2\n");
        assert_eq!(transformed.num_vertices(), 1);
        assert_eq!(edge_set(&transformed), [(1, "2", 1)]);
    }

    #[test]
    fn header_only() {
        let transformed = transform("0 0").unwrap();
        assert_eq!(transformed.header(), "0 0");
        assert_eq!(transformed.num_vertices(), 0);
        assert!(transformed.edges().is_empty());
    }

    #[test]
    fn missing_header() {
        assert!(matches!(transform(""), Err(ConvertError::MissingHeader)));
    }

    #[test]
    fn malformed_token() {
        let err = transform("3 2\n2 3\n1 abc\n1\n").unwrap_err();
        match err {
            ConvertError::Parse { line, token, .. } => {
                assert_eq!(line, 3);
                assert_eq!(token, "abc");
            }
            err => panic!("unexpected error {err:?}"),
        }
    }

    #[test]
    fn edges_are_canonical() {
        let content = "6 9\n2 3 4\n1 3 5\n1 2 6\n1 5 6\n2 4 6\n3 4 5\n";
        let transformed = transform(content).unwrap();
        let expected = content
            .lines()
            .skip(1)
            .enumerate()
            .map(|(i, line)| line.split_whitespace().filter(|v| v.parse::<usize>().unwrap() > i + 1).count())
            .sum::<usize>();
        assert_eq!(transformed.edges().len(), expected);
        assert_eq!(transformed.edges().len(), 9);
        assert!(transformed.edges().iter().all(|e| e.source < e.target.parse::<u64>().unwrap()));
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_instance(dir.path().join("instance_1.txt")).unwrap_err();
        assert!(matches!(err, ConvertError::NotFound { .. }));
    }
}
