//! Conversions between the two graph representations grapht deals in.
//!
//! Index-based `petgraph::Graph` is what the samplers, layouts and
//! renderers work on. Label-keyed `GraphMap` is what external engines and
//! callers tend to hand around, keyed by whatever identifies a node for
//! them. Position maps are converted the same way.

use crate::error::{GraphtError, Result};
use crate::types::{Position, Positions};
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::graphmap::{NodeTrait, UnGraphMap};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Re-key an index-based graph by its node weights.
///
/// Nodes sharing a label collapse into one, and parallel edges keep the
/// last weight seen.
pub fn to_graph_map<N, E>(graph: &UnGraph<N, E>) -> UnGraphMap<N, E>
where
    N: NodeTrait,
    E: Clone,
{
    let mut map = UnGraphMap::with_capacity(graph.node_count(), graph.edge_count());
    for label in graph.node_weights() {
        map.add_node(*label);
    }
    for edge in graph.edge_references() {
        map.add_edge(graph[edge.source()], graph[edge.target()], edge.weight().clone());
    }
    map
}

/// Build an index-based graph from a label-keyed one.
///
/// Returns the graph and the index assigned to each label; labels are
/// indexed in the map's node iteration order.
pub fn from_graph_map<N, E>(map: &UnGraphMap<N, E>) -> (UnGraph<N, E>, HashMap<N, NodeIndex>)
where
    N: NodeTrait,
    E: Clone,
{
    let mut graph = UnGraph::with_capacity(map.node_count(), map.edge_count());
    let mut index = HashMap::with_capacity(map.node_count());
    for label in map.nodes() {
        index.insert(label, graph.add_node(label));
    }
    for (a, b, weight) in map.all_edges() {
        graph.add_edge(index[&a], index[&b], weight.clone());
    }
    (graph, index)
}

/// Convert label-keyed positions into positions keyed by node index.
///
/// Every node of `graph` needs a position; extra labels are ignored.
pub fn positions_by_index<N, E>(
    graph: &UnGraph<N, E>,
    by_label: &HashMap<N, Position>,
) -> Result<Positions>
where
    N: Hash + Eq + Debug,
{
    graph
        .node_indices()
        .map(|idx| {
            let label = &graph[idx];
            by_label
                .get(label)
                .map(|p| (idx, *p))
                .ok_or_else(|| GraphtError::node_not_found(format!("{:?}", label)))
        })
        .collect()
}

/// Convert index-keyed positions back into label-keyed positions.
pub fn positions_by_label<N, E>(graph: &UnGraph<N, E>, positions: &Positions) -> Result<HashMap<N, Position>>
where
    N: Hash + Eq + Clone,
{
    positions
        .iter()
        .map(|(idx, p)| {
            graph
                .node_weight(*idx)
                .map(|label| (label.clone(), *p))
                .ok_or_else(|| GraphtError::node_not_found(idx.index().to_string()))
        })
        .collect()
}
