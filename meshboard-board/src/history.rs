// Undo/redo history for placed points.
//
// Undo hides trailing points instead of removing them, so they can be redone.
// Placing a point while anything is hidden forks the history: the hidden
// suffix is dropped for good and the new point continues from the visible
// prefix.

use meshboard_core::{PlacedPoint, Point};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PointHistory {
    points: Vec<PlacedPoint>,
    steps_back: usize,
}

impl PointHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a point, discarding any undone points first.
    /// Returns how many hidden points were discarded.
    pub fn place(&mut self, at: Point) -> usize {
        let discarded = self.steps_back;
        if discarded > 0 {
            let keep = self.visible_len();
            self.points.truncate(keep);
            self.steps_back = 0;
            info!(discarded, keep, "placing after undo, dropped hidden points");
        }

        let point = PlacedPoint::new(at);
        self.points.push(point);
        debug!(
            x = at.x,
            y = at.y,
            total = self.points.len(),
            "placed point {}",
            point.id
        );
        discarded
    }

    /// Hide the most recently visible point. No-op when nothing is visible.
    pub fn undo(&mut self) -> bool {
        if self.visible_len() == 0 {
            trace!("undo ignored, nothing visible");
            return false;
        }
        self.steps_back += 1;
        debug!(steps_back = self.steps_back, "undo");
        true
    }

    /// Reveal the next hidden point. No-op when nothing is hidden.
    pub fn redo(&mut self) -> bool {
        if self.steps_back == 0 {
            trace!("redo ignored, nothing hidden");
            return false;
        }
        self.steps_back -= 1;
        debug!(steps_back = self.steps_back, "redo");
        true
    }

    fn visible_len(&self) -> usize {
        self.points.len() - self.steps_back
    }

    /// Points not hidden by undo, oldest first.
    pub fn visible(&self) -> &[PlacedPoint] {
        &self.points[..self.visible_len()]
    }

    /// Points hidden by undo, still available to redo.
    pub fn hidden(&self) -> &[PlacedPoint] {
        &self.points[self.visible_len()..]
    }

    /// Every retained point, visible or hidden.
    pub fn points(&self) -> &[PlacedPoint] {
        &self.points
    }

    pub fn steps_back(&self) -> usize {
        self.steps_back
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        self.visible_len() > 0
    }

    pub fn can_redo(&self) -> bool {
        self.steps_back > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f32, y: f32) -> Point {
        Point { x, y }
    }

    fn coords(points: &[PlacedPoint]) -> Vec<(f32, f32)> {
        points.iter().map(|p| (p.at.x, p.at.y)).collect()
    }

    #[test]
    fn test_placement_grows_visible_set() {
        let mut history = PointHistory::new();
        for i in 0..7 {
            history.place(pt(i as f32, 0.0));
            assert_eq!(history.visible().len(), i + 1);
        }
        assert_eq!(history.steps_back(), 0);
        assert_eq!(history.len(), 7);
    }

    #[test]
    fn test_undo_on_empty_is_noop() {
        let mut history = PointHistory::new();
        let before = history.clone();

        assert!(!history.undo());
        assert_eq!(history, before);
    }

    #[test]
    fn test_undo_stops_when_everything_hidden() {
        let mut history = PointHistory::new();
        history.place(pt(1.0, 1.0));
        history.place(pt(2.0, 2.0));

        assert!(history.undo());
        assert!(history.undo());
        let before = history.clone();
        assert!(!history.undo());

        assert_eq!(history, before);
        assert_eq!(history.steps_back(), 2);
        assert!(history.visible().is_empty());
        assert_eq!(history.hidden().len(), 2);
    }

    #[test]
    fn test_redo_at_boundary_is_noop() {
        let mut history = PointHistory::new();
        history.place(pt(1.0, 1.0));
        let before = history.clone();

        assert!(!history.redo());
        assert_eq!(history, before);
    }

    #[test]
    fn test_undo_then_redo_restores_visible() {
        let mut history = PointHistory::new();
        history.place(pt(1.0, 1.0));
        history.place(pt(2.0, 2.0));
        history.place(pt(3.0, 3.0));
        let visible = history.visible().to_vec();

        assert!(history.undo());
        assert_eq!(history.visible().len(), 2);
        assert!(history.redo());

        assert_eq!(history.visible(), visible.as_slice());
    }

    #[test]
    fn test_place_after_undo_truncates() {
        let mut history = PointHistory::new();
        history.place(pt(1.0, 1.0)); // A
        history.place(pt(2.0, 2.0)); // B
        history.place(pt(3.0, 3.0)); // C
        history.undo();
        history.undo();
        assert_eq!(coords(history.visible()), vec![(1.0, 1.0)]);

        let discarded = history.place(pt(4.0, 4.0)); // D

        assert_eq!(discarded, 2);
        assert_eq!(history.steps_back(), 0);
        assert_eq!(coords(history.points()), vec![(1.0, 1.0), (4.0, 4.0)]);
        // B and C are gone, not waiting for redo
        assert!(!history.can_redo());
        assert!(!history.redo());
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_place_after_full_undo_starts_over() {
        let mut history = PointHistory::new();
        history.place(pt(1.0, 1.0));
        history.place(pt(2.0, 2.0));
        history.undo();
        history.undo();

        history.place(pt(9.0, 9.0));

        assert_eq!(coords(history.points()), vec![(9.0, 9.0)]);
    }

    #[test]
    fn test_visible_is_prefix_of_history() {
        let mut history = PointHistory::new();
        for i in 0..5 {
            history.place(pt(i as f32, i as f32));
        }
        history.undo();
        history.undo();

        let visible = history.visible();
        assert_eq!(visible, &history.points()[..visible.len()]);
        assert_eq!(visible.len() + history.hidden().len(), history.len());
    }
}
