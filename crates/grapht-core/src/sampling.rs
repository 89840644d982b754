//! Uniform random sampling of nodes, edges and k-hop neighbourhoods.
//!
//! Every sampler takes the random number generator explicitly so runs
//! can be made reproducible with a seeded `StdRng`.

use crate::error::{GraphtError, Result};
use petgraph::graph::{EdgeIndex, NodeIndex, UnGraph};
use rand::seq::{IteratorRandom, SliceRandom};
use rand::Rng;
use std::collections::{BTreeSet, VecDeque};
use tracing::debug;

/// Sample `n` distinct nodes uniformly, without replacement.
pub fn sample_nodes<N, E, R>(graph: &UnGraph<N, E>, n: usize, rng: &mut R) -> Result<Vec<NodeIndex>>
where
    R: Rng + ?Sized,
{
    let available = graph.node_count();
    if n > available {
        return Err(GraphtError::SampleTooLarge {
            requested: n,
            available,
        });
    }
    let nodes: Vec<NodeIndex> = graph.node_indices().collect();
    Ok(nodes.choose_multiple(rng, n).copied().collect())
}

/// Sample a single node uniformly.
pub fn sample_node<N, E, R>(graph: &UnGraph<N, E>, rng: &mut R) -> Result<NodeIndex>
where
    R: Rng + ?Sized,
{
    graph.node_indices().choose(rng).ok_or(GraphtError::EmptyGraph)
}

/// Sample `n` distinct edges uniformly, without replacement.
pub fn sample_edges<N, E, R>(graph: &UnGraph<N, E>, n: usize, rng: &mut R) -> Result<Vec<EdgeIndex>>
where
    R: Rng + ?Sized,
{
    let available = graph.edge_count();
    if n > available {
        return Err(GraphtError::SampleTooLarge {
            requested: n,
            available,
        });
    }
    let edges: Vec<EdgeIndex> = graph.edge_indices().collect();
    Ok(edges.choose_multiple(rng, n).copied().collect())
}

/// All nodes within `k` hops of any seed, seeds included.
///
/// Seeds not present in the graph fail with `NodeNotFound`.
pub fn khop_neighbourhood<N, E>(
    graph: &UnGraph<N, E>,
    seeds: &[NodeIndex],
    k: usize,
) -> Result<BTreeSet<NodeIndex>> {
    let mut seen = BTreeSet::new();
    let mut frontier = VecDeque::new();
    for &seed in seeds {
        if graph.node_weight(seed).is_none() {
            return Err(GraphtError::node_not_found(seed.index().to_string()));
        }
        if seen.insert(seed) {
            frontier.push_back((seed, 0));
        }
    }

    while let Some((node, depth)) = frontier.pop_front() {
        if depth == k {
            continue;
        }
        for neighbour in graph.neighbors(node) {
            if seen.insert(neighbour) {
                frontier.push_back((neighbour, depth + 1));
            }
        }
    }
    Ok(seen)
}

/// The node set grown by one hop.
pub fn dilate<N, E>(graph: &UnGraph<N, E>, nodes: &[NodeIndex]) -> Result<BTreeSet<NodeIndex>> {
    khop_neighbourhood(graph, nodes, 1)
}

/// A subgraph induced by the k-hop neighbourhood of a sampled node.
#[derive(Debug, Clone)]
pub struct KhopSubgraph<N, E> {
    /// The sampled centre, as an index into the original graph.
    pub centre: NodeIndex,
    /// The induced subgraph.
    pub graph: UnGraph<N, E>,
    /// `mapping[i]` is the original index of subgraph node `i`.
    pub mapping: Vec<NodeIndex>,
}

/// Sample a node uniformly and extract the subgraph induced by its k-hop
/// neighbourhood.
pub fn khop_subgraph<N, E, R>(graph: &UnGraph<N, E>, k: usize, rng: &mut R) -> Result<KhopSubgraph<N, E>>
where
    N: Clone,
    E: Clone,
    R: Rng + ?Sized,
{
    let centre = sample_node(graph, rng)?;
    let members = khop_neighbourhood(graph, &[centre], k)?;
    let sub = graph.filter_map(
        |idx, weight| members.contains(&idx).then(|| weight.clone()),
        |_, weight| Some(weight.clone()),
    );
    // filter_map keeps surviving nodes in their original order.
    let mapping: Vec<NodeIndex> = members.into_iter().collect();

    debug!(
        centre = centre.index(),
        k,
        nodes = sub.node_count(),
        edges = sub.edge_count(),
        "extracted k-hop subgraph"
    );

    Ok(KhopSubgraph {
        centre,
        graph: sub,
        mapping,
    })
}
