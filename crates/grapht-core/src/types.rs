//! Shared types used across grapht crates.

use petgraph::graph::NodeIndex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A point in 2D layout space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Position) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Node positions keyed by petgraph node index.
pub type Positions = HashMap<NodeIndex, Position>;

/// Axis-aligned bounding box of a set of positions, as `(min, max)`.
///
/// Returns `None` for an empty map.
pub fn bounds(positions: &Positions) -> Option<(Position, Position)> {
    let mut iter = positions.values();
    let first = *iter.next()?;
    let (min, max) = iter.fold((first, first), |(lo, hi), p| {
        (
            Position::new(lo.x.min(p.x), lo.y.min(p.y)),
            Position::new(hi.x.max(p.x), hi.y.max(p.y)),
        )
    });
    Some((min, max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_is_euclidean() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert_eq!(a.distance_to(&b), 5.0);
    }

    #[test]
    fn bounds_cover_all_points() {
        let mut positions = Positions::new();
        positions.insert(NodeIndex::new(0), Position::new(-1.0, 2.0));
        positions.insert(NodeIndex::new(1), Position::new(3.0, -4.0));
        let (min, max) = bounds(&positions).unwrap();
        assert_eq!(min, Position::new(-1.0, -4.0));
        assert_eq!(max, Position::new(3.0, 2.0));
        assert!(bounds(&Positions::new()).is_none());
    }
}
