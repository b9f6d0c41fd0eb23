//! Normalized input events consumed by the overlay layer.
//!
//! The host event loop (browser, shell, test harness) translates its native
//! input into these canonical shapes. The overlay controller never sees raw
//! host events, so trigger and dismissal semantics stay testable without a
//! rendering surface attached.

use crate::geometry::Point;

/// Which pointer button an event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// A pointer event at a viewport position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub position: Point,
    pub button: PointerButton,
}

impl PointerEvent {
    /// Primary-button pointer event at a position.
    #[must_use]
    pub const fn primary(position: Point) -> Self {
        Self {
            position,
            button: PointerButton::Primary,
        }
    }
}

/// Keys the overlay layer interprets.
///
/// Everything else is carried opaquely so hosts can forward their full key
/// stream without pre-filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Escape,
    Enter,
    Other,
}

/// A key press event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub code: KeyCode,
}

impl KeyEvent {
    /// Create a key event.
    #[must_use]
    pub const fn new(code: KeyCode) -> Self {
        Self { code }
    }

    /// The Escape key.
    #[must_use]
    pub const fn escape() -> Self {
        Self {
            code: KeyCode::Escape,
        }
    }
}

/// A touch contact at a viewport position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    pub position: Point,
}

/// Canonical input event for the overlay layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// A button went down on the trigger or anywhere in the document.
    PointerDown(PointerEvent),
    /// A button was released.
    PointerUp(PointerEvent),
    /// The pointer entered the trigger region.
    PointerEnter(PointerEvent),
    /// The pointer left the trigger region.
    PointerLeave(PointerEvent),
    /// A context-menu gesture (right click) on the trigger region.
    ContextClick(PointerEvent),
    /// A touch contact started on the trigger region.
    TouchStart(TouchEvent),
    /// The touch contact moved.
    TouchMove(TouchEvent),
    /// The touch contact ended.
    TouchEnd(TouchEvent),
    /// A key was pressed while the document had focus.
    Key(KeyEvent),
    /// The viewport was resized to the given dimensions.
    Resize { width: f32, height: f32 },
}

impl Event {
    /// Whether this is an Escape key press.
    #[must_use]
    pub fn is_escape(&self) -> bool {
        matches!(
            self,
            Event::Key(KeyEvent {
                code: KeyCode::Escape
            })
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_detection() {
        assert!(Event::Key(KeyEvent::escape()).is_escape());
        assert!(!Event::Key(KeyEvent::new(KeyCode::Enter)).is_escape());
        assert!(!Event::PointerDown(PointerEvent::primary(Point::new(0.0, 0.0))).is_escape());
    }
}
