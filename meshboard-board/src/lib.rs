//! meshboard-board: point history, edge derivation and the render scene.
//!
//! Design rules:
//! - The history is append-only; the only removal is the truncation a new
//!   placement performs after undo.
//! - Visible points are always a prefix of the history.
//! - Edges and the scene are derived on demand and never stored.

pub mod edges;
pub mod history;
pub mod scene;

pub use edges::{derive_edges, edge_count, Edge};
pub use history::PointHistory;
pub use scene::{edge_dump, Dot, Line, Scene};
