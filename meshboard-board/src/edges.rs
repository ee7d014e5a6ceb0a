//! Edge derivation over the visible points.
//!
//! Every ordered pair of distinct points is an edge, so each undirected
//! connection shows up twice. The two lines overlap exactly on screen.

use meshboard_core::PlacedPoint;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: PlacedPoint,
    pub to: PlacedPoint,
}

/// All ordered pairs `(v[i], v[j])` with `i != j`, row-major.
///
/// Self-exclusion is positional: two points at the same coordinates still
/// get an edge between them.
pub fn derive_edges(visible: &[PlacedPoint]) -> Vec<Edge> {
    let mut edges = Vec::with_capacity(edge_count(visible.len()));
    for (i, from) in visible.iter().enumerate() {
        for (j, to) in visible.iter().enumerate() {
            if i != j {
                edges.push(Edge {
                    from: *from,
                    to: *to,
                });
            }
        }
    }
    debug!(points = visible.len(), edges = edges.len(), "derived edges");
    edges
}

/// Number of edges `derive_edges` yields for `n` points.
pub fn edge_count(n: usize) -> usize {
    n * n.saturating_sub(1)
}
