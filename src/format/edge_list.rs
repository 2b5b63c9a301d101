//! Reads plain-text edge lists into a `Graph<String>`.
//!
//! Format, one entry per line:
//!
//! ```text
//! # comment
//! Alice Bob      <- undirected edge
//! Zed            <- isolated vertex
//! ```
//!
//! Tokens are whitespace-separated. Blank lines and anything after `#` are
//! ignored. Lines are applied in file order, which fixes neighbor order.

use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::graph::Graph;
use crate::types::{WalkError, WalkResult};

/// Reader for edge-list files.
pub struct EdgeListReader;

impl EdgeListReader {
    /// Read an edge-list file into a graph.
    pub fn read_from_file(path: &Path) -> WalkResult<Graph<String>> {
        let file = std::fs::File::open(path)?;
        let graph = Self::read_from(file)?;
        log::info!(
            "loaded {} ({} vertices, {} edges)",
            path.display(),
            graph.vertex_count(),
            graph.edge_count()
        );
        Ok(graph)
    }

    /// Read from any reader into a graph.
    pub fn read_from(reader: impl Read) -> WalkResult<Graph<String>> {
        let mut graph = Graph::new();
        for (idx, line) in BufReader::new(reader).lines().enumerate() {
            apply_line(&mut graph, idx + 1, &line?)?;
        }
        Ok(graph)
    }

    /// Parse an in-memory edge list.
    pub fn parse_str(text: &str) -> WalkResult<Graph<String>> {
        let mut graph = Graph::new();
        for (idx, line) in text.lines().enumerate() {
            apply_line(&mut graph, idx + 1, line)?;
        }
        Ok(graph)
    }
}

fn apply_line(graph: &mut Graph<String>, line_no: usize, line: &str) -> WalkResult<()> {
    let content = match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    };
    let tokens: Vec<&str> = content.split_whitespace().collect();

    match tokens.as_slice() {
        [] => {}
        [vertex] => graph.add_vertex(vertex.to_string()),
        [u, v] => {
            let (u, v) = (u.to_string(), v.to_string());
            if graph.neighbors(&u).contains(&v) {
                log::warn!("line {}: repeated edge {} - {} kept as a multi-edge", line_no, u, v);
            }
            graph.add_edge(u, v);
        }
        _ => {
            return Err(WalkError::Parse {
                line: line_no,
                message: format!("expected 1 or 2 vertices, found {}", tokens.len()),
            })
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let g = EdgeListReader::parse_str("# people\n\nA B   # first\nC\n").unwrap();
        assert_eq!(g.vertex_count(), 3);
        assert_eq!(g.edge_count(), 1);
        assert!(g.neighbors(&"C".to_string()).is_empty());
    }

    #[test]
    fn too_many_tokens_reports_line() {
        let err = EdgeListReader::parse_str("A B\nA B C\n").unwrap_err();
        match err {
            WalkError::Parse { line, .. } => assert_eq!(line, 2),
            e => panic!("Expected Parse error, got {:?}", e),
        }
    }
}
