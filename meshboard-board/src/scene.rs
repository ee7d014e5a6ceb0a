//! Render model for one frame of the board.
//!
//! A scene is composed from the history, the current surface size and the
//! board style. The GUI paints it directly; `to_svg` writes the same scene as
//! an SVG document sized exactly to the surface.

use std::fmt::Write as _;

use meshboard_core::{BoardStyle, Point, Size};
use serde::{Deserialize, Serialize};
use tracing::trace;
use uuid::Uuid;

use crate::edges::{derive_edges, Edge};
use crate::history::PointHistory;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// One filled disc per visible point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dot {
    pub id: Uuid,
    pub center: Point,
    pub radius: f32,
}

/// One straight segment per derived edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub from: Point,
    pub to: Point,
    pub width: f32,
}

impl From<(&Edge, f32)> for Line {
    fn from((edge, width): (&Edge, f32)) -> Self {
        Self {
            from: edge.from.at,
            to: edge.to.at,
            width,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub surface: Size,
    pub dots: Vec<Dot>,
    pub lines: Vec<Line>,
}

impl Scene {
    pub fn compose(history: &PointHistory, surface: Size, style: &BoardStyle) -> Self {
        let visible = history.visible();

        let dots = visible
            .iter()
            .map(|p| Dot {
                id: p.id,
                center: p.at,
                radius: style.dot_radius,
            })
            .collect::<Vec<_>>();

        let lines = derive_edges(visible)
            .iter()
            .map(|edge| Line::from((edge, style.line_width)))
            .collect::<Vec<_>>();

        trace!(
            width = surface.width,
            height = surface.height,
            dots = dots.len(),
            lines = lines.len(),
            "composed scene"
        );

        Self {
            surface,
            dots,
            lines,
        }
    }

    /// SVG markup: surface-sized root, one `<line>` per edge, one `<circle>` per dot.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            r#"<svg xmlns="{}" width="{}" height="{}">"#,
            SVG_NS, self.surface.width, self.surface.height
        );
        for line in &self.lines {
            let _ = writeln!(
                out,
                r#"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="black" stroke-width="{}"/>"#,
                line.from.x, line.from.y, line.to.x, line.to.y, line.width
            );
        }
        for dot in &self.dots {
            let _ = writeln!(
                out,
                r#"  <circle cx="{}" cy="{}" r="{}" fill="black"/>"#,
                dot.center.x, dot.center.y, dot.radius
            );
        }
        out.push_str("</svg>\n");
        out
    }
}

/// Pretty JSON of the derived edge list, for the debug overlay.
pub fn edge_dump(history: &PointHistory) -> serde_json::Result<String> {
    let edges = derive_edges(history.visible());
    let pairs = edges
        .iter()
        .map(|e| [e.from.at, e.to.at])
        .collect::<Vec<_>>();
    serde_json::to_string_pretty(&pairs)
}
