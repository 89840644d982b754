//! Graphviz layout adapter.
//!
//! Hands the graph to one of the Graphviz layout programs as DOT on stdin
//! and reads node centres back from its `-Tplain` output. Nodes are named
//! by their petgraph index, so the positions map straight back.

use grapht_core::error::{GraphtError, Result};
use grapht_core::layout::LayoutEngine;
use grapht_core::types::{Position, Positions};
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::io::Write as _;
use std::path::PathBuf;
use std::process::{Command, Stdio};
use tracing::{debug, warn};

/// Which Graphviz layout program to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphvizProgram {
    /// Stress majorization.
    Neato,
    /// Force-directed placement.
    Fdp,
    /// Multiscale force-directed placement, for large graphs.
    Sfdp,
}

impl GraphvizProgram {
    pub fn command(&self) -> &'static str {
        match self {
            GraphvizProgram::Neato => "neato",
            GraphvizProgram::Fdp => "fdp",
            GraphvizProgram::Sfdp => "sfdp",
        }
    }
}

/// Layout computed by an external Graphviz program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphvizLayout {
    pub program: GraphvizProgram,
    /// Explicit executable; the program name on `PATH` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binary: Option<PathBuf>,
}

impl GraphvizLayout {
    pub fn new(program: GraphvizProgram) -> Self {
        Self { program, binary: None }
    }

    pub fn neato() -> Self {
        Self::new(GraphvizProgram::Neato)
    }

    pub fn fdp() -> Self {
        Self::new(GraphvizProgram::Fdp)
    }

    pub fn sfdp() -> Self {
        Self::new(GraphvizProgram::Sfdp)
    }

    pub fn with_binary(mut self, binary: impl Into<PathBuf>) -> Self {
        self.binary = Some(binary.into());
        self
    }

    fn run(&self, dot: String) -> Result<String> {
        let binary = self
            .binary
            .clone()
            .unwrap_or_else(|| PathBuf::from(self.program.command()));
        debug!(binary = %binary.display(), bytes = dot.len(), "running graphviz");

        let mut child = Command::new(&binary)
            .arg("-Tplain")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                warn!(binary = %binary.display(), error = %e, "graphviz failed to start");
                GraphtError::EngineUnavailable(format!("{}: {}", binary.display(), e))
            })?;

        // Feed stdin from a separate thread so a full stdout pipe cannot stall us.
        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| GraphtError::EngineUnavailable("stdin not captured".into()))?;
        let writer = std::thread::spawn(move || stdin.write_all(dot.as_bytes()));

        let output = child
            .wait_with_output()
            .map_err(|e| GraphtError::LayoutOutput(e.to_string()))?;
        let written = writer
            .join()
            .map_err(|_| GraphtError::LayoutOutput("stdin writer panicked".into()))?;

        // A failed exit explains a broken stdin pipe, so report it first.
        if !output.status.success() {
            return Err(GraphtError::LayoutOutput(format!(
                "{} exited with {}: {}",
                binary.display(),
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }
        written.map_err(|e| GraphtError::LayoutOutput(e.to_string()))?;
        String::from_utf8(output.stdout).map_err(|e| GraphtError::LayoutOutput(e.to_string()))
    }
}

impl LayoutEngine for GraphvizLayout {
    fn name(&self) -> &str {
        self.program.command()
    }

    fn layout<N, E>(&self, graph: &UnGraph<N, E>) -> Result<Positions> {
        let plain = self.run(to_dot(graph))?;
        parse_plain(&plain, graph.node_count())
    }
}

/// Undirected DOT with nodes named by index.
pub fn to_dot<N, E>(graph: &UnGraph<N, E>) -> String {
    let mut dot = String::from("graph G {\n");
    for idx in graph.node_indices() {
        let _ = writeln!(dot, "  {};", idx.index());
    }
    for edge in graph.edge_references() {
        let _ = writeln!(dot, "  {} -- {};", edge.source().index(), edge.target().index());
    }
    dot.push_str("}\n");
    dot
}

/// Read node centres from Graphviz `-Tplain` output.
///
/// Every node `0..node_count` must appear exactly once.
pub fn parse_plain(text: &str, node_count: usize) -> Result<Positions> {
    let mut positions = Positions::with_capacity(node_count);
    for line in text.lines() {
        let mut fields = line.split_whitespace();
        if fields.next() != Some("node") {
            continue;
        }
        let (name, x, y) = match (fields.next(), fields.next(), fields.next()) {
            (Some(name), Some(x), Some(y)) => (name, x, y),
            _ => return Err(GraphtError::LayoutOutput(format!("short node line: {}", line))),
        };
        let index: usize = name
            .trim_matches('"')
            .parse()
            .map_err(|_| GraphtError::LayoutOutput(format!("unknown node name: {}", name)))?;
        if index >= node_count {
            return Err(GraphtError::LayoutOutput(format!("node {} out of range", index)));
        }
        let parse = |v: &str| {
            v.parse::<f64>()
                .map_err(|_| GraphtError::LayoutOutput(format!("bad coordinate: {}", v)))
        };
        if positions
            .insert(NodeIndex::new(index), Position::new(parse(x)?, parse(y)?))
            .is_some()
        {
            return Err(GraphtError::LayoutOutput(format!("node {} listed twice", index)));
        }
    }

    if positions.len() != node_count {
        let missing = (0..node_count)
            .find(|i| !positions.contains_key(&NodeIndex::new(*i)))
            .unwrap_or_default();
        return Err(GraphtError::LayoutOutput(format!("no position for node {}", missing)));
    }
    Ok(positions)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: &str = "graph 1 2.75 1.5\n\
        node 0 0.27 0.27 0.75 0.5 0 solid ellipse black lightgrey\n\
        node 1 1.375 1.23 0.75 0.5 1 solid ellipse black lightgrey\n\
        node 2 2.48 0.27 0.75 0.5 2 solid ellipse black lightgrey\n\
        edge 0 1 4 0.5 0.5 0.8 0.8 1 1 1.1 1.1 solid black\n\
        stop\n";

    #[test]
    fn dot_lists_nodes_and_edges() {
        let g: UnGraph<(), ()> = UnGraph::from_edges([(0, 1), (1, 2)]);
        let dot = to_dot(&g);
        assert!(dot.starts_with("graph G {"));
        assert!(dot.contains("  2;\n"));
        assert!(dot.contains("  0 -- 1;\n"));
        assert!(dot.contains("  1 -- 2;\n"));
    }

    #[test]
    fn plain_output_is_parsed() {
        let positions = parse_plain(PLAIN, 3).unwrap();
        assert_eq!(positions.len(), 3);
        assert_eq!(positions[&NodeIndex::new(1)], Position::new(1.375, 1.23));
    }

    #[test]
    fn plain_output_must_cover_every_node() {
        let err = parse_plain(PLAIN, 4).unwrap_err();
        assert_eq!(err, GraphtError::LayoutOutput("no position for node 3".into()));

        let err = parse_plain(PLAIN, 2).unwrap_err();
        assert!(matches!(err, GraphtError::LayoutOutput(_)));

        let err = parse_plain("node 0 nan-ish 1\n", 1).unwrap_err();
        assert_eq!(err, GraphtError::LayoutOutput("bad coordinate: nan-ish".into()));
    }

    #[test]
    fn missing_binary_is_reported() {
        let g: UnGraph<(), ()> = UnGraph::from_edges([(0, 1)]);
        let engine = GraphvizLayout::sfdp().with_binary("/nonexistent/grapht-test/sfdp");
        assert_eq!(engine.name(), "sfdp");
        assert!(matches!(
            engine.layout(&g),
            Err(GraphtError::EngineUnavailable(_))
        ));
    }
}
