//! Draw a graph with a chosen subset of edges highlighted.

use crate::render_err;
use grapht_core::error::{GraphtError, Result};
use grapht_core::types::{bounds, Position, Positions};
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use plotters::coord::Shift;
use plotters::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Colours and sizes for [`highlight_edges`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightStyle {
    /// Node marker radius in pixels.
    #[serde(default = "default_node_size")]
    pub node_size: u32,
    #[serde(default = "default_node_color")]
    pub node_color: (u8, u8, u8),
    #[serde(default = "default_edge_color")]
    pub edge_color: (u8, u8, u8),
    #[serde(default = "default_highlight_color")]
    pub highlight_color: (u8, u8, u8),
    #[serde(default = "default_edge_width")]
    pub edge_width: u32,
}

fn default_node_size() -> u32 { 3 }
fn default_node_color() -> (u8, u8, u8) { (31, 119, 180) }
fn default_edge_color() -> (u8, u8, u8) { (0, 0, 0) }
fn default_highlight_color() -> (u8, u8, u8) { (255, 0, 0) }
fn default_edge_width() -> u32 { 1 }

impl Default for HighlightStyle {
    fn default() -> Self {
        Self {
            node_size: default_node_size(),
            node_color: default_node_color(),
            edge_color: default_edge_color(),
            highlight_color: default_highlight_color(),
            edge_width: default_edge_width(),
        }
    }
}

fn rgb((r, g, b): (u8, u8, u8)) -> RGBColor {
    RGBColor(r, g, b)
}

/// Undirected edge key.
fn key(a: NodeIndex, b: NodeIndex) -> (NodeIndex, NodeIndex) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Draw every node, the edges of `graph` not listed in `highlighted` in the
/// base colour, and the listed edges in the highlight colour. No axes.
pub fn highlight_edges<DB, N, E>(
    area: &DrawingArea<DB, Shift>,
    graph: &UnGraph<N, E>,
    positions: &Positions,
    highlighted: &[(NodeIndex, NodeIndex)],
    style: &HighlightStyle,
) -> Result<()>
where
    DB: DrawingBackend,
{
    let position = |idx: NodeIndex| -> Result<Position> {
        positions
            .get(&idx)
            .copied()
            .ok_or(GraphtError::MissingPosition(idx.index()))
    };

    let nodes = graph
        .node_indices()
        .map(|idx| position(idx).map(|p| (p.x, p.y)))
        .collect::<Result<Vec<_>>>()?;

    // Drawn in the caller's order; repeats and reversed pairs only once.
    let mut highlight_keys = HashSet::with_capacity(highlighted.len());
    let mut red = Vec::with_capacity(highlighted.len());
    for &(a, b) in highlighted {
        if highlight_keys.insert(key(a, b)) {
            red.push(segment(position(a)?, position(b)?));
        }
    }

    let mut base = Vec::new();
    for edge in graph.edge_references() {
        if !highlight_keys.contains(&key(edge.source(), edge.target())) {
            base.push(segment(position(edge.source())?, position(edge.target())?));
        }
    }

    let (min, max) = bounds(positions).unwrap_or_default();
    let pad_x = ((max.x - min.x) * 0.05).max(1e-3);
    let pad_y = ((max.y - min.y) * 0.05).max(1e-3);

    let mut chart = ChartBuilder::on(area)
        .margin(10)
        .build_cartesian_2d((min.x - pad_x)..(max.x + pad_x), (min.y - pad_y)..(max.y + pad_y))
        .map_err(render_err)?;

    let base_style = rgb(style.edge_color).stroke_width(style.edge_width);
    chart
        .draw_series(base.into_iter().map(|line| PathElement::new(line, base_style)))
        .map_err(render_err)?;

    let red_style = rgb(style.highlight_color).stroke_width(style.edge_width);
    chart
        .draw_series(red.into_iter().map(|line| PathElement::new(line, red_style)))
        .map_err(render_err)?;

    let node_style = rgb(style.node_color).filled();
    chart
        .draw_series(
            nodes
                .into_iter()
                .map(|p| Circle::new(p, style.node_size, node_style)),
        )
        .map_err(render_err)?;

    Ok(())
}

fn segment(a: Position, b: Position) -> Vec<(f64, f64)> {
    vec![(a.x, a.y), (b.x, b.y)]
}

/// [`highlight_edges`] onto a fresh SVG surface; returns the markup.
pub fn render_highlight_svg<N, E>(
    graph: &UnGraph<N, E>,
    positions: &Positions,
    highlighted: &[(NodeIndex, NodeIndex)],
    style: &HighlightStyle,
    size: (u32, u32),
) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
        root.fill(&WHITE).map_err(render_err)?;
        highlight_edges(&root, graph, positions, highlighted, style)?;
        root.present().map_err(render_err)?;
    }
    Ok(svg)
}
