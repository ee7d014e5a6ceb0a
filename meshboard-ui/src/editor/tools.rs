// Navigation controls for the board.

use meshboard_board::PointHistory;
use tracing::{debug, trace};

pub trait Control {
    /// Run the control. Returns false when it was a no-op.
    fn apply(&self, history: &mut PointHistory) -> bool;

    fn name(&self) -> &str;

    fn glyph(&self) -> &str;

    // Only a display hint; a disabled control still accepts clicks.
    fn enabled(&self, _history: &PointHistory) -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavControl {
    Undo,
    Redo,
}

impl NavControl {
    /// In the order they appear, left to right.
    pub const ALL: [NavControl; 2] = [NavControl::Undo, NavControl::Redo];
}

impl Control for NavControl {
    fn apply(&self, history: &mut PointHistory) -> bool {
        trace!("Applying {} control", self.name());
        let changed = match self {
            NavControl::Undo => history.undo(),
            NavControl::Redo => history.redo(),
        };
        debug!(
            changed,
            steps_back = history.steps_back(),
            visible = history.visible().len(),
            "{} applied",
            self.name()
        );
        changed
    }

    fn name(&self) -> &str {
        match self {
            NavControl::Undo => "Undo",
            NavControl::Redo => "Redo",
        }
    }

    fn glyph(&self) -> &str {
        match self {
            NavControl::Undo => "↩",
            NavControl::Redo => "↪",
        }
    }

    fn enabled(&self, history: &PointHistory) -> bool {
        match self {
            NavControl::Undo => history.can_undo(),
            NavControl::Redo => history.can_redo(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meshboard_core::Point;

    fn board(n: usize) -> PointHistory {
        let mut history = PointHistory::new();
        for i in 0..n {
            history.place(Point {
                x: i as f32,
                y: i as f32,
            });
        }
        history
    }

    #[test]
    fn test_undo_control() {
        let mut history = board(2);

        assert!(NavControl::Undo.apply(&mut history));
        assert_eq!(history.visible().len(), 1);
        assert_eq!(history.steps_back(), 1);
    }

    #[test]
    fn test_redo_control() {
        let mut history = board(2);
        NavControl::Undo.apply(&mut history);

        assert!(NavControl::Redo.apply(&mut history));
        assert_eq!(history.visible().len(), 2);
    }

    #[test]
    fn test_controls_at_boundaries() {
        let mut history = board(0);
        assert!(!NavControl::Undo.apply(&mut history));
        assert!(!NavControl::Redo.apply(&mut history));
        assert!(!NavControl::Undo.enabled(&history));
        assert!(!NavControl::Redo.enabled(&history));
    }

    #[test]
    fn test_enabled_tracks_history() {
        let mut history = board(1);
        assert!(NavControl::Undo.enabled(&history));
        assert!(!NavControl::Redo.enabled(&history));

        NavControl::Undo.apply(&mut history);
        assert!(!NavControl::Undo.enabled(&history));
        assert!(NavControl::Redo.enabled(&history));
    }

    #[test]
    fn test_glyphs() {
        let glyphs: Vec<&str> = NavControl::ALL.iter().map(|c| c.glyph()).collect();
        assert_eq!(glyphs, vec!["↩", "↪"]);
    }
}
