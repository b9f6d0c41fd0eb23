//! Nested submenu behavior: hover-open, horizontal-only placement.
//!
//! A submenu lives inside a parent overlay, opens on hover with no delay,
//! and positions itself on the left or right of its parent item using the
//! same single-axis flip rule as the full placement engine. It is not an
//! "outside" target for the parent's dismissal: entering the submenu keeps
//! the parent open, because the hierarchy is hover-based rather than
//! click-based.

use plinth_core::geometry::{Rect, Viewport};
use serde::{Deserialize, Serialize};

/// Which side of the parent item the submenu opens toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SubmenuSide {
    #[default]
    Right,
    Left,
}

/// State machine for one nested submenu.
#[derive(Debug, Clone, Default)]
pub struct Submenu {
    is_open: bool,
    side: SubmenuSide,
    measured: bool,
}

impl Submenu {
    /// Create a closed submenu preferring the right side.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the submenu is visible.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Side the submenu currently opens toward.
    #[must_use]
    pub fn side(&self) -> SubmenuSide {
        self.side
    }

    /// Pointer entered the parent item: open immediately.
    pub fn pointer_enter(&mut self) {
        if !self.is_open {
            self.is_open = true;
            self.side = SubmenuSide::Right;
            self.measured = false;
        }
    }

    /// Pointer left the parent item and submenu: close.
    pub fn pointer_leave(&mut self) {
        self.is_open = false;
        self.measured = false;
    }

    /// Correct the side from the submenu's measured rectangle.
    ///
    /// Flips to the left when the right-side panel would cross the viewport
    /// margin. Runs at most once per open.
    pub fn measure(&mut self, panel: Rect, viewport: Viewport, margin: f32) -> SubmenuSide {
        if self.is_open && !self.measured {
            self.side = if panel.right() > viewport.width - margin {
                SubmenuSide::Left
            } else {
                SubmenuSide::Right
            };
            self.measured = true;
        }
        self.side
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_on_enter_closes_on_leave() {
        let mut s = Submenu::new();
        s.pointer_enter();
        assert!(s.is_open());
        s.pointer_leave();
        assert!(!s.is_open());
    }

    #[test]
    fn flips_left_when_panel_overflows() {
        let mut s = Submenu::new();
        s.pointer_enter();
        let side = s.measure(
            Rect::new(900.0, 50.0, 240.0, 300.0),
            Viewport::new(1000.0, 800.0),
            10.0,
        );
        assert_eq!(side, SubmenuSide::Left);
    }

    #[test]
    fn stays_right_when_panel_fits() {
        let mut s = Submenu::new();
        s.pointer_enter();
        let side = s.measure(
            Rect::new(300.0, 50.0, 240.0, 300.0),
            Viewport::new(1000.0, 800.0),
            10.0,
        );
        assert_eq!(side, SubmenuSide::Right);
    }

    #[test]
    fn measure_runs_once_per_open() {
        let mut s = Submenu::new();
        s.pointer_enter();
        s.measure(
            Rect::new(900.0, 50.0, 240.0, 300.0),
            Viewport::new(1000.0, 800.0),
            10.0,
        );
        // A later frame with different geometry does not re-flip.
        let side = s.measure(
            Rect::new(100.0, 50.0, 240.0, 300.0),
            Viewport::new(1000.0, 800.0),
            10.0,
        );
        assert_eq!(side, SubmenuSide::Left);
        // Re-opening resets the correction.
        s.pointer_leave();
        s.pointer_enter();
        let side = s.measure(
            Rect::new(100.0, 50.0, 240.0, 300.0),
            Viewport::new(1000.0, 800.0),
            10.0,
        );
        assert_eq!(side, SubmenuSide::Right);
    }
}
