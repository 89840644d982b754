//! End-to-end rendering
//!
//! Sample edges from a graph, lay it out, and draw it with the sampled
//! edges highlighted; then render a heatmap of per-node statistics.

use grapht_core::prelude::*;
use grapht_viz::{render_highlight_svg, Heatmap, HighlightStyle};
use petgraph::graph::UnGraph;
use petgraph::visit::EdgeRef;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// A 4x4 grid graph.
fn lattice() -> UnGraph<(), ()> {
    let mut edges = Vec::new();
    for row in 0..4u32 {
        for col in 0..4u32 {
            let id = row * 4 + col;
            if col < 3 {
                edges.push((id, id + 1));
            }
            if row < 3 {
                edges.push((id, id + 4));
            }
        }
    }
    UnGraph::from_edges(edges)
}

#[test]
fn sampled_edges_are_highlighted() {
    let g = lattice();
    let mut rng = StdRng::seed_from_u64(21);
    let sampled = sample_edges(&g, 3, &mut rng).unwrap();
    let highlighted: Vec<_> = sampled
        .iter()
        .map(|e| g.edge_endpoints(*e).unwrap())
        .collect();

    let positions = SpringLayout::default().with_seed(2).layout(&g).unwrap();
    let svg = render_highlight_svg(&g, &positions, &highlighted, &HighlightStyle::default(), (400, 400)).unwrap();

    assert_eq!(svg.matches("#FF0000").count(), 3);
    assert_eq!(svg.matches("<circle").count(), 16);
}

#[test]
fn node_statistics_heatmap() {
    let g = lattice();
    let positions = CircularLayout::default().layout(&g).unwrap();

    let mut xs = Vec::new();
    let mut ys = Vec::new();
    let mut degrees = Vec::new();
    for idx in g.node_indices() {
        let p = positions[&idx];
        xs.push(p.x);
        ys.push(p.y);
        degrees.push(g.edges(idx).count() as f64);
    }
    let table = ObservationTable::new()
        .with_column("x", xs)
        .unwrap()
        .with_column("y", ys)
        .unwrap()
        .with_column("degree", degrees)
        .unwrap();

    let heatmap = Heatmap::new(&table, "x", "y", "degree").with_options(
        HeatmapOptions::default()
            .with_bins(4, 4)
            .with_bin_numbers(true)
            .with_color_range(Some(0.0), Some(4.0)),
    );
    let grid = heatmap.build_grid().unwrap();
    assert_eq!(grid.total_count(), 16);
    assert_eq!(grid.color_range(Some(0.0), Some(4.0)), Some((0.0, 4.0)));

    let svg = heatmap.render_svg().unwrap();
    assert!(svg.contains("<rect"));
    assert!(svg.contains("degree"));
}

#[test]
fn edge_count_matches_non_pendant_split() {
    let mut g = lattice();
    let a = g.add_node(());
    let corner = petgraph::graph::NodeIndex::new(0);
    g.add_edge(corner, a, ());

    let keep = non_pendant_edges(&g);
    assert_eq!(keep.len(), g.edge_count() - 1);
    let pendant = g
        .edge_references()
        .find(|e| is_pendant(&g, e.id()))
        .unwrap();
    assert_eq!(pendant.target(), a);
}
