//! Board styling configuration.
//!
//! Mirrors the look of the page: small black dots, hairline black edges and
//! two square navigation buttons in the top-left corner.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardStyle {
    pub dot_radius: f32,        // px, 8px dot
    pub line_width: f32,        // px
    pub hover_ring_width: f32,  // px, drawn around a hovered dot
    pub button_size: f32,       // px, square
    pub button_inset: f32,      // px from the top-left corner
    pub button_gap: f32,        // px between the two buttons
    pub show_edge_dump: bool,   // overlay the edge list as JSON
}

impl Default for BoardStyle {
    fn default() -> Self {
        Self {
            dot_radius: 4.0,
            line_width: 1.0,
            hover_ring_width: 2.0,
            button_size: 32.0,
            button_inset: 16.0,
            button_gap: 8.0,
            show_edge_dump: false,
        }
    }
}

impl BoardStyle {
    /// Same look with the edge dump overlay switched on.
    pub fn debug() -> Self {
        Self {
            show_edge_dump: true,
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), StyleError> {
        let positive = [
            ("dot_radius", self.dot_radius),
            ("line_width", self.line_width),
            ("button_size", self.button_size),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                tracing::error!(field, value, "style value must be positive");
                return Err(StyleError::NotPositive { field, value });
            }
        }

        let non_negative = [
            ("hover_ring_width", self.hover_ring_width),
            ("button_inset", self.button_inset),
            ("button_gap", self.button_gap),
        ];
        for (field, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                tracing::error!(field, value, "style value must not be negative");
                return Err(StyleError::Negative { field, value });
            }
        }

        Ok(())
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum StyleError {
    #[error("{field} must be a positive finite number, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("{field} must be a non-negative finite number, got {value}")]
    Negative { field: &'static str, value: f32 },
}
