//! Layout engines: 2D node positions for drawing.
//!
//! Engines sit behind the [`LayoutEngine`] trait so callers can swap an
//! in-process simulation for an external program (see the Graphviz
//! adapter in `grapht-viz`) without touching the drawing code.

use crate::error::Result;
use crate::types::{Position, Positions};
use petgraph::graph::{NodeIndex, UnGraph};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use tracing::debug;

/// Something that can place the nodes of a graph in the plane.
pub trait LayoutEngine {
    /// Engine name, for logs and errors.
    fn name(&self) -> &str;

    /// Compute a position for every node of `graph`.
    fn layout<N, E>(&self, graph: &UnGraph<N, E>) -> Result<Positions>;
}

/// Nodes evenly spaced on a circle, in index order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircularLayout {
    pub radius: f64,
}

impl Default for CircularLayout {
    fn default() -> Self {
        Self { radius: 1.0 }
    }
}

impl LayoutEngine for CircularLayout {
    fn name(&self) -> &str {
        "circular"
    }

    fn layout<N, E>(&self, graph: &UnGraph<N, E>) -> Result<Positions> {
        let n = graph.node_count().max(1) as f64;
        Ok(graph
            .node_indices()
            .map(|idx| {
                let angle = TAU * idx.index() as f64 / n;
                (
                    idx,
                    Position::new(self.radius * angle.cos(), self.radius * angle.sin()),
                )
            })
            .collect())
    }
}

/// Force-directed layout: every pair of nodes repels, every edge attracts.
///
/// Velocities are damped by `cooloff` each step, so the system settles with
/// connected nodes roughly `scale` apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpringLayout {
    #[serde(default = "default_iterations")]
    pub iterations: usize,
    /// Natural edge length.
    #[serde(default = "default_scale")]
    pub scale: f64,
    /// Velocity damping per step (0.0-1.0).
    #[serde(default = "default_cooloff")]
    pub cooloff: f64,
    #[serde(default = "default_dt")]
    pub dt: f64,
    /// Seed for the initial scatter.
    #[serde(default)]
    pub seed: u64,
}

fn default_iterations() -> usize { 200 }
fn default_scale() -> f64 { 1.0 }
fn default_cooloff() -> f64 { 0.85 }
fn default_dt() -> f64 { 0.1 }

/// Distances are floored here so coincident nodes still push apart.
const MIN_DISTANCE: f64 = 0.01;

impl Default for SpringLayout {
    fn default() -> Self {
        Self {
            iterations: default_iterations(),
            scale: default_scale(),
            cooloff: default_cooloff(),
            dt: default_dt(),
            seed: 0,
        }
    }
}

impl SpringLayout {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    fn step<N, E>(&self, graph: &UnGraph<N, E>, positions: &mut [Position], velocities: &mut [Position]) {
        let old = positions.to_vec();
        for (i, here) in old.iter().enumerate() {
            let mut force = Position::default();

            for (j, there) in old.iter().enumerate() {
                if i == j {
                    continue;
                }
                let (ux, uy, d) = unit_vector(here, there);
                let push = self.scale * self.scale / d;
                force.x -= push * ux;
                force.y -= push * uy;
            }

            for neighbour in graph.neighbors(NodeIndex::new(i)) {
                if neighbour.index() == i {
                    continue;
                }
                let (ux, uy, d) = unit_vector(here, &old[neighbour.index()]);
                let pull = d * d / self.scale;
                force.x += pull * ux;
                force.y += pull * uy;
            }

            let velocity = &mut velocities[i];
            velocity.x = (velocity.x + force.x * self.dt) * self.cooloff;
            velocity.y = (velocity.y + force.y * self.dt) * self.cooloff;
            positions[i].x = here.x + velocity.x * self.dt;
            positions[i].y = here.y + velocity.y * self.dt;
        }
    }
}

/// Direction from `a` to `b` and the (floored) distance between them.
fn unit_vector(a: &Position, b: &Position) -> (f64, f64, f64) {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let raw = (dx * dx + dy * dy).sqrt();
    if raw == 0.0 {
        return (0.0, 0.0, MIN_DISTANCE);
    }
    (dx / raw, dy / raw, raw.max(MIN_DISTANCE))
}

impl LayoutEngine for SpringLayout {
    fn name(&self) -> &str {
        "spring"
    }

    fn layout<N, E>(&self, graph: &UnGraph<N, E>) -> Result<Positions> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let n = graph.node_count();
        let mut positions: Vec<Position> = (0..n)
            .map(|_| Position::new(rng.gen::<f64>() * self.scale, rng.gen::<f64>() * self.scale))
            .collect();
        let mut velocities = vec![Position::default(); n];

        for _ in 0..self.iterations {
            self.step(graph, &mut positions, &mut velocities);
        }

        debug!(nodes = n, iterations = self.iterations, "spring layout settled");

        Ok(positions
            .into_iter()
            .enumerate()
            .map(|(i, p)| (NodeIndex::new(i), p))
            .collect())
    }
}
