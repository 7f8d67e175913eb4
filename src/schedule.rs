//! Reader for schedule descriptions.
//!
//! A schedule lists how many nodes there are, one name per line, how
//! many edges there are and one `from,to` pair per line:
//!
//! ```text
//! 3
//! fetch
//! build
//! test
//! 2
//! fetch,build
//! build,test
//! ```
use std::io::BufRead;

use crate::prelude::*;

struct Lines<I> {
    inner: I,
    line: usize,
}

impl<I> Lines<I>
where
    I: Iterator<Item = std::io::Result<String>>,
{
    fn next_line(&mut self, expected: &'static str) -> Result<String, ParseError> {
        self.line += 1;
        match self.inner.next() {
            Some(line) => Ok(line?.trim().to_owned()),
            None => Err(ParseError::MissingLine {
                line: self.line,
                expected,
            }),
        }
    }

    fn next_count(&mut self, expected: &'static str) -> Result<usize, ParseError> {
        let value = self.next_line(expected)?;
        value.parse().map_err(|_| ParseError::InvalidCount {
            line: self.line,
            value: value.into(),
        })
    }
}

/// Reads a schedule. Anything after the declared edges is ignored.
pub fn read_schedule(reader: impl BufRead) -> Result<NamedGraph, ParseError> {
    let mut lines = Lines {
        inner: reader.lines(),
        line: 0,
    };
    let mut builder = GraphBuilder::new();

    let n_nodes = lines.next_count("a node count")?;
    for _ in 0..n_nodes {
        let name = lines.next_line("a node name")?;
        if builder.add_node(&name).is_err() {
            return Err(ParseError::DuplicateNode {
                line: lines.line,
                name: name.into(),
            });
        }
    }

    let n_edges = lines.next_count("an edge count")?;
    for _ in 0..n_edges {
        let edge = lines.next_line("an edge")?;
        let (from, to) = edge
            .split_once(',')
            .ok_or(ParseError::MalformedEdge { line: lines.line })?;
        let (from, to) = (from.trim(), to.trim());
        for name in [from, to] {
            if builder.get(name).is_none() {
                return Err(ParseError::UnknownNode {
                    line: lines.line,
                    name: name.into(),
                });
            }
        }
        builder.add_edge(from, to);
    }

    let graph = builder.build();
    log::debug!(
        "Read schedule with {} nodes and {} distinct edges",
        graph.n_nodes(),
        graph.n_edges()
    );

    Ok(graph)
}

pub fn parse_schedule(input: &str) -> Result<NamedGraph, ParseError> {
    read_schedule(input.as_bytes())
}
