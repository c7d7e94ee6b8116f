use crate::io::{OutputLayout, Transformed};
use petgraph::graph::UnGraph;
use std::fs::File;
use std::io::{BufRead, Write};
use std::num::ParseIntError;
use std::path::Path;
use thiserror::Error;

/// Writes the header followed by the edges in the given layout.
///
/// With [`OutputLayout::Joined`] the header and every `"u v w\n"` entry are
/// separated by a single space, so every edge line after the header starts
/// with a space. With [`OutputLayout::Lines`] the header terminator is
/// normalized to `\n` and every edge is on its own line.
pub fn write_edge_list<W: Write>(out: &mut W, transformed: &Transformed, layout: OutputLayout) -> std::io::Result<()> {
    match layout {
        OutputLayout::Joined => {
            write!(out, "{}", transformed.header())?;
            for e in transformed.edges() {
                writeln!(out, " {e}")?;
            }
        }
        OutputLayout::Lines => {
            writeln!(out, "{}", transformed.header().trim_end_matches(|c: char| c == '\n' || c == '\r'))?;
            for e in transformed.edges() {
                writeln!(out, "{e}")?;
            }
        }
    }
    out.flush()
}

#[derive(Error, Debug)]
pub enum ReadEdgeListError {
    #[error("missing header")]
    MissingHeader,
    #[error("invalid line (expected '(u) (v) (w)', got {0})")]
    InvalidLine(String),
    #[error("found zero index (indices must be at least 1)")]
    ZeroIndex,
    #[error("parse int error")]
    ParseInt(#[from] ParseIntError),
    #[error("io error")]
    IoError(#[from] std::io::Error),
}

/// A weighted edge list as written by [`write_edge_list`].
#[derive(Debug)]
pub struct EdgeListFile {
    /// The header line without its terminator.
    pub header: String,
    /// Vertex `u` of the file is node `u - 1`.
    pub graph: UnGraph<(), u32>,
}

/// Reads a file written by [`write_edge_list`] in either layout.
///
/// Blank lines are skipped. The graph has as many nodes as the largest
/// vertex id that appears in an edge.
pub fn read_edge_list<P>(path: P) -> Result<EdgeListFile, ReadEdgeListError>
where
    P: AsRef<Path>,
{
    let file = File::open(path)?;
    let mut lines = std::io::BufReader::new(file).lines();
    let header = lines.next().ok_or(ReadEdgeListError::MissingHeader)??;

    let mut n = 0;
    let mut edges = vec![];
    for line in lines {
        let line = line?;
        let mut tokens = line.split_ascii_whitespace();
        let Some(a) = tokens.next() else {
            continue;
        };
        let Some(b) = tokens.next() else {
            return Err(ReadEdgeListError::InvalidLine(line));
        };
        let Some(w) = tokens.next() else {
            return Err(ReadEdgeListError::InvalidLine(line));
        };
        if tokens.next().is_some() {
            return Err(ReadEdgeListError::InvalidLine(line));
        }

        let u: u32 = a.parse()?;
        let v: u32 = b.parse()?;
        let w: u32 = w.parse()?;
        if u == 0 || v == 0 {
            return Err(ReadEdgeListError::ZeroIndex);
        }
        edges.push((u - 1, v - 1, w));
        n = n.max(u).max(v);
    }

    let mut graph = UnGraph::with_capacity(n as usize, edges.len());
    graph.extend_with_edges(edges);
    Ok(EdgeListFile { header, graph })
}
