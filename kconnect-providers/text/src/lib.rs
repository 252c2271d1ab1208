//! Text provider for adjacency-list graph files implementing `GraphSource`.
//!
//! Each significant line describes one vertex, in label order, by listing its
//! neighbours separated by whitespace or commas:
//!
//! ```text
//! # a path on three vertices
//! 1
//! 0, 2
//! 1
//! ```
//!
//! A line holding only `-` describes an isolated vertex. Blank lines and lines
//! starting with `#` are ignored.
use std::io::BufRead;

use kconnect_core::{Graph, GraphError, GraphSource, Vertex};
use thiserror::Error;

/// Marker for a vertex without neighbours.
const ISOLATED: &str = "-";

/// Errors raised while reading an adjacency-list text file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TextGraphError {
    /// A token could not be parsed as a vertex label.
    #[error("line {line}: `{token}` is not a vertex label")]
    InvalidLabel {
        /// 1-based line number in the input.
        line: usize,
        /// The offending token.
        token: String,
    },
    /// The input described no vertices.
    #[error("input describes no vertices")]
    EmptyInput,
    /// Reading the input failed.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
    /// The adjacency lists do not form a simple undirected graph.
    #[error("invalid graph: {0}")]
    Graph(#[from] GraphError),
}

/// Graph loaded from an adjacency-list text file.
#[derive(Clone, Debug)]
pub struct TextGraphProvider {
    name: String,
    graph: Graph,
}

impl TextGraphProvider {
    /// Parses adjacency lists from `reader`.
    ///
    /// # Errors
    /// Returns [`TextGraphError::InvalidLabel`] for tokens that are not
    /// non-negative integers, [`TextGraphError::EmptyInput`] when no vertex
    /// lines are present, [`TextGraphError::Io`] on read failures and
    /// [`TextGraphError::Graph`] when the lists are asymmetric, out of range
    /// or otherwise malformed.
    ///
    /// # Examples
    /// ```
    /// use std::io::Cursor;
    ///
    /// use kconnect_core::GraphSource;
    /// use kconnect_providers_text::TextGraphProvider;
    ///
    /// let input = "1 2\n0 2\n0,1\n";
    /// let provider = TextGraphProvider::try_from_reader("triangle", Cursor::new(input))
    ///     .expect("triangle parses");
    /// assert_eq!(provider.name(), "triangle");
    /// assert_eq!(provider.graph().edge_count(), 3);
    /// ```
    pub fn try_from_reader<R: BufRead>(
        name: impl Into<String>,
        reader: R,
    ) -> Result<Self, TextGraphError> {
        let mut adjacency = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if let Some(row) = parse_line(index + 1, &line)? {
                adjacency.push(row);
            }
        }
        if adjacency.is_empty() {
            return Err(TextGraphError::EmptyInput);
        }
        Ok(Self {
            name: name.into(),
            graph: Graph::from_adjacency(adjacency)?,
        })
    }

    /// Consumes the provider, returning the parsed graph.
    #[must_use]
    pub fn into_graph(self) -> Graph {
        self.graph
    }
}

impl GraphSource for TextGraphProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn graph(&self) -> &Graph {
        &self.graph
    }
}

/// Returns `None` for lines that describe no vertex.
fn parse_line(line: usize, raw: &str) -> Result<Option<Vec<Vertex>>, TextGraphError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    if trimmed == ISOLATED {
        return Ok(Some(Vec::new()));
    }
    trimmed
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<Vertex>()
                .map_err(|_| TextGraphError::InvalidLabel {
                    line,
                    token: token.to_owned(),
                })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}
