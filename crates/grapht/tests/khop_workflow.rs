//! k-hop workflow through the facade
//!
//! Pick a random centre, cut out its neighbourhood, lay the piece out and
//! draw it with the centre's own edges highlighted.

use grapht::prelude::*;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn path(n: u32) -> UnGraph<u32, ()> {
    let mut g = UnGraph::new_undirected();
    let nodes: Vec<_> = (0..n).map(|i| g.add_node(i)).collect();
    for pair in nodes.windows(2) {
        g.add_edge(pair[0], pair[1], ());
    }
    g
}

#[test]
fn khop_piece_can_be_drawn() {
    let g = path(9);
    let mut rng = StdRng::seed_from_u64(5);
    let piece = khop_subgraph(&g, 2, &mut rng).unwrap();

    assert!(piece.graph.node_count() <= 5);
    assert!(!has_isolated_nodes(&piece.graph));

    let centre = piece
        .mapping
        .iter()
        .position(|original| *original == piece.centre)
        .map(NodeIndex::new)
        .unwrap();
    let highlighted: Vec<(NodeIndex, NodeIndex)> = piece
        .graph
        .edges(centre)
        .map(|e| (e.source(), e.target()))
        .collect();

    let positions = SpringLayout::default().with_seed(9).layout(&piece.graph).unwrap();
    let svg = render_highlight_svg(
        &piece.graph,
        &positions,
        &highlighted,
        &HighlightStyle::default(),
        (200, 200),
    )
    .unwrap();
    assert_eq!(svg.matches("#FF0000").count(), highlighted.len());
}

#[test]
fn labelled_positions_survive_interop() {
    let g = path(4);
    let positions = CircularLayout::default().layout(&g).unwrap();
    let by_label = positions_by_label(&g, &positions).unwrap();
    let back = positions_by_index(&g, &by_label).unwrap();
    assert_eq!(back, positions);
}
