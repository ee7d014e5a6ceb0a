// This is the drawing surface for meshboard
// It covers the whole window, places a point per click and paints the scene

use egui::{pos2, vec2, Color32, Painter, Pos2, Response, Sense, Stroke, Ui};
use meshboard_board::{PointHistory, Scene};
use meshboard_core::{BoardStyle, Point, Size};
use tracing::{debug, info, trace, warn};
use uuid::Uuid;

use super::viewport::{ViewportTracker, WindowEvents};

const INK: Color32 = Color32::BLACK;
const HOVER_RING: Color32 = Color32::from_rgba_premultiplied(30, 65, 123, 128);

pub struct Canvas {
    viewport: ViewportTracker,
}

impl Canvas {
    /// Mount the surface against a window. It follows the window size until dropped.
    pub fn mount(window: &WindowEvents) -> Self {
        let viewport = ViewportTracker::mount(window);
        let size = viewport.size();
        info!(
            "Mounting canvas of size {}x{}",
            size.width, size.height
        );
        Self { viewport }
    }

    pub fn size(&self) -> Size {
        self.viewport.size()
    }

    pub fn width(&self) -> f32 {
        self.size().width
    }

    pub fn height(&self) -> f32 {
        self.size().height
    }

    // Check if a point lies on the surface
    pub fn contains(&self, at: Point) -> bool {
        let size = self.size();
        let inside = at.x >= 0.0 && at.y >= 0.0 && at.x <= size.width && at.y <= size.height;
        trace!("Point ({}, {}) inside canvas: {}", at.x, at.y, inside);
        inside
    }

    // Turn a click position into a placed point
    pub fn place_click(&self, history: &mut PointHistory, pos: Pos2) -> bool {
        let at = match Point::new(pos.x, pos.y) {
            Ok(at) => at,
            Err(err) => {
                warn!("Ignoring click: {}", err);
                return false;
            }
        };
        if !self.contains(at) {
            debug!("Click at ({}, {}) landed outside the canvas", at.x, at.y);
        }

        let discarded = history.place(at);
        info!(
            visible = history.visible().len(),
            discarded, "Placed point at ({}, {})", at.x, at.y
        );
        true
    }

    /// Allocate the full surface, handle a click and paint the current scene.
    pub fn show(&self, ui: &mut Ui, history: &mut PointHistory, style: &BoardStyle) -> Response {
        let size = self.size();
        let (response, painter) =
            ui.allocate_painter(vec2(size.width, size.height), Sense::click());

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.place_click(history, pos);
            }
        }

        let scene = Scene::compose(history, size, style);
        let hovered = response
            .hover_pos()
            .and_then(|pos| hovered_dot(&scene, pos));
        paint(&painter, &scene, style, hovered);

        response
    }
}

/// Topmost dot under the pointer.
pub fn hovered_dot(scene: &Scene, pos: Pos2) -> Option<Uuid> {
    scene
        .dots
        .iter()
        .rev()
        .find(|dot| pos.distance(to_pos(dot.center)) <= dot.radius)
        .map(|dot| dot.id)
}

pub fn paint(painter: &Painter, scene: &Scene, style: &BoardStyle, hovered: Option<Uuid>) {
    for line in &scene.lines {
        painter.line_segment(
            [to_pos(line.from), to_pos(line.to)],
            Stroke::new(line.width, INK),
        );
    }

    for dot in &scene.dots {
        let center = to_pos(dot.center);
        painter.circle_filled(center, dot.radius, INK);
        if hovered == Some(dot.id) && style.hover_ring_width > 0.0 {
            painter.circle_stroke(
                center,
                dot.radius + style.hover_ring_width / 2.0,
                Stroke::new(style.hover_ring_width, HOVER_RING),
            );
        }
    }

    trace!(
        "Painted {} lines and {} dots",
        scene.lines.len(),
        scene.dots.len()
    );
}

fn to_pos(at: Point) -> Pos2 {
    pos2(at.x, at.y)
}
