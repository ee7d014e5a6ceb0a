//! meshboard-core: geometry and style types shared by the board and the UI.
//!
//! Design rules:
//! - Coordinates are viewport pixels, f32, origin top-left.
//! - A placed point is identified by its position in the history, never by value.
//! - All structs are serializable so the board can be dumped for debugging.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

pub mod style;

pub use style::{BoardStyle, StyleError};

/// A viewport-relative pixel coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Result<Self, GeometryError> {
        if !x.is_finite() || !y.is_finite() {
            tracing::warn!(x, y, "rejected non-finite point");
            return Err(GeometryError::NonFinite { x, y });
        }
        Ok(Self { x, y })
    }
}

/// Width/height of the window, and therefore of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Result<Self, GeometryError> {
        if !(width.is_finite() && height.is_finite() && width >= 0.0 && height >= 0.0) {
            tracing::warn!(width, height, "rejected invalid size");
            return Err(GeometryError::InvalidSize { width, height });
        }
        Ok(Self { width, height })
    }

    /// Zero-sized surface, the state before the first window measurement.
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };
}

/// A point as it lives in the history.
///
/// The id only keys per-dot render state; two placements at the same
/// coordinates are still two distinct points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacedPoint {
    pub id: Uuid,
    pub at: Point,
}

impl PlacedPoint {
    pub fn new(at: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            at,
        }
    }
}

impl From<Point> for PlacedPoint {
    fn from(at: Point) -> Self {
        PlacedPoint::new(at)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("point coordinates must be finite: x={x} y={y}")]
    NonFinite { x: f32, y: f32 },

    #[error("size must be finite and non-negative: {width}x{height}")]
    InvalidSize { width: f32, height: f32 },
}
