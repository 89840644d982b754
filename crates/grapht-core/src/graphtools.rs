//! Structural predicates on undirected graphs.

use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};

/// Degree of a node; self-loops count once.
pub fn degree<N, E>(graph: &UnGraph<N, E>, node: NodeIndex) -> usize {
    graph.edges(node).count()
}

/// Whether either endpoint of `edge` has degree 1.
///
/// Returns `false` for an edge index not in the graph.
pub fn is_pendant<N, E>(graph: &UnGraph<N, E>, edge: EdgeIndex) -> bool {
    match graph.edge_endpoints(edge) {
        Some((a, b)) => degree(graph, a) == 1 || degree(graph, b) == 1,
        None => false,
    }
}

/// Edges whose removal would not leave a node stranded.
pub fn non_pendant_edges<N, E>(graph: &UnGraph<N, E>) -> Vec<EdgeIndex> {
    graph
        .edge_indices()
        .filter(|&edge| !is_pendant(graph, edge))
        .collect()
}

pub fn has_isolated_nodes<N, E>(graph: &UnGraph<N, E>) -> bool {
    graph.node_indices().any(|node| degree(graph, node) == 0)
}
