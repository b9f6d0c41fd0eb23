//! Generic overlay controller: trigger handling, dismissal, and lifecycle.
//!
//! One controller type serves every trigger flavor (click-toggle dropdowns,
//! right-click/long-press context menus, hover tooltips) via the tagged
//! [`TriggerKind`] configuration, so the listener-balance and timer
//! invariants hold uniformly instead of per ad hoc implementation.
//!
//! # Invariants
//!
//! 1. `is_open == true` implies both dismissal listeners (outside
//!    pointer-down, key-down) are registered; `is_open == false` implies
//!    neither is. Registration balances exactly per open/close cycle.
//! 2. `close()` on a closed overlay is a no-op, never an error.
//! 3. A pending open-delay or long-press timer never fires after its
//!    cancelling gesture (pointer-leave, touch-end, touch-move, close).
//! 4. The measured placement correction runs at most once per open event.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Dismissal event while closed | stray host event | ignored (listeners off) |
//! | `measure` after correction | extra frame callback | returns `None` |
//! | Re-trigger while open | second right-click | anchor updated, listeners unchanged |

use bitflags::bitflags;
use plinth_core::event::{Event, KeyCode, PointerButton};
use plinth_core::geometry::{Point, Rect, Size, Viewport};
use plinth_core::timing::Deadline;
use tracing::debug;

use crate::placement::{
    Anchor, MeasurePhase, Placement, PlacementConfig, ResolvedPlacement, resolve,
};

bitflags! {
    /// The document-level listener pair an open overlay holds.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct DismissalListeners: u8 {
        /// Outside pointer-down dismissal.
        const POINTER_DOWN = 1 << 0;
        /// Escape-key dismissal.
        const KEY_DOWN = 1 << 1;
    }
}

/// Default long-press threshold in milliseconds.
pub const DEFAULT_LONG_PRESS_MS: u64 = 500;
/// Default hover open delay in milliseconds.
pub const DEFAULT_HOVER_DELAY_MS: u64 = 200;

/// How an overlay is triggered open.
///
/// Thresholds are tuning constants, not contracts; callers override them per
/// instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerKind {
    /// A primary click on the trigger toggles the overlay (dropdown).
    ClickToggle,
    /// Right-click opens at the cursor; touch long-press opens at the
    /// contact point (context menu).
    ContextClick { long_press_ms: u64 },
    /// Pointer-enter opens after a delay; pointer-leave closes immediately
    /// (tooltip, submenu).
    Hover { open_delay_ms: u64 },
}

impl TriggerKind {
    /// Context-click trigger with the default long-press threshold.
    #[must_use]
    pub const fn context_click() -> Self {
        Self::ContextClick {
            long_press_ms: DEFAULT_LONG_PRESS_MS,
        }
    }

    /// Hover trigger with the default open delay.
    #[must_use]
    pub const fn hover() -> Self {
        Self::Hover {
            open_delay_ms: DEFAULT_HOVER_DELAY_MS,
        }
    }

    /// Hover trigger that opens immediately (submenus).
    #[must_use]
    pub const fn hover_immediate() -> Self {
        Self::Hover { open_delay_ms: 0 }
    }
}

/// Per-instance overlay configuration.
#[derive(Debug, Clone)]
pub struct OverlayConfig {
    pub trigger: TriggerKind,
    /// Alignment guess used until the overlay is measurable.
    pub preferred: Placement,
    pub placement: PlacementConfig,
    /// Close when a click bubbles up from inside the overlay body.
    pub close_on_item_click: bool,
}

impl OverlayConfig {
    /// Config for the given trigger kind with default placement tuning.
    #[must_use]
    pub fn new(trigger: TriggerKind) -> Self {
        Self {
            trigger,
            preferred: Placement::default(),
            placement: PlacementConfig::default(),
            close_on_item_click: matches!(
                trigger,
                TriggerKind::ClickToggle | TriggerKind::ContextClick { .. }
            ),
        }
    }

    /// Set the preferred alignment guess.
    #[must_use]
    pub fn preferred(mut self, preferred: Placement) -> Self {
        self.preferred = preferred;
        self
    }

    /// Set the placement tuning constants.
    #[must_use]
    pub fn placement(mut self, placement: PlacementConfig) -> Self {
        self.placement = placement;
        self
    }

    /// Set the close-on-item-click policy.
    #[must_use]
    pub fn close_on_item_click(mut self, close: bool) -> Self {
        self.close_on_item_click = close;
        self
    }
}

/// What a controller step did to the overlay state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Nothing changed.
    None,
    /// A delayed open was armed (hover delay, long press).
    OpenPending,
    /// The overlay opened.
    Opened,
    /// The overlay closed.
    Closed,
}

/// State machine for one overlay instance.
///
/// The host forwards normalized [`Event`]s with an explicit `now_ms` clock,
/// calls [`poll`](Self::poll) on its frame cadence for pending timers, and
/// calls [`measure`](Self::measure) once the rendered surface size is known.
#[derive(Debug, Clone)]
pub struct OverlayController {
    config: OverlayConfig,
    trigger_bounds: Rect,
    is_open: bool,
    anchor: Option<Anchor>,
    phase: MeasurePhase,
    placement: Placement,
    /// Measured surface rect, used for outside-dismissal containment.
    surface: Option<Rect>,
    listeners: DismissalListeners,
    pending_open: Deadline,
    pending_anchor: Option<Anchor>,
}

impl OverlayController {
    /// Create a closed controller.
    #[must_use]
    pub fn new(config: OverlayConfig) -> Self {
        let placement = config.preferred;
        Self {
            config,
            trigger_bounds: Rect::default(),
            is_open: false,
            anchor: None,
            phase: MeasurePhase::Guessed,
            placement,
            surface: None,
            listeners: DismissalListeners::empty(),
            pending_open: Deadline::idle(),
            pending_anchor: None,
        }
    }

    /// Update the trigger element's rendered rectangle.
    pub fn set_trigger_bounds(&mut self, bounds: Rect) {
        self.trigger_bounds = bounds;
    }

    /// Replace the trigger kind, keeping bounds and lifecycle state.
    pub fn set_trigger_kind(&mut self, trigger: TriggerKind) {
        self.config.trigger = trigger;
    }

    /// Override the close-on-item-click policy in place.
    pub fn set_close_on_item_click(&mut self, close: bool) {
        self.config.close_on_item_click = close;
    }

    /// Whether the overlay is currently visible.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Current anchor, if open or opening.
    #[must_use]
    pub fn anchor(&self) -> Option<Anchor> {
        self.anchor
    }

    /// Current placement (the guess until measured).
    #[must_use]
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// Current measure phase.
    #[must_use]
    pub fn phase(&self) -> MeasurePhase {
        self.phase
    }

    /// Measured surface rectangle, if the correction pass has run.
    #[must_use]
    pub fn surface(&self) -> Option<Rect> {
        self.surface
    }

    /// Currently registered dismissal listeners.
    #[must_use]
    pub fn active_listeners(&self) -> DismissalListeners {
        self.listeners
    }

    /// Whether a delayed open is armed.
    #[must_use]
    pub fn has_pending_open(&self) -> bool {
        self.pending_open.is_pending()
    }

    /// Open at the given anchor.
    ///
    /// Idempotent with respect to listeners: re-opening while open updates
    /// the anchor and resets the measure phase without registering a second
    /// listener pair.
    pub fn open(&mut self, anchor: Anchor) -> Transition {
        self.pending_open.cancel();
        self.pending_anchor = None;
        self.anchor = Some(anchor);
        self.phase = MeasurePhase::Guessed;
        self.placement = self.config.preferred;
        self.surface = None;
        self.is_open = true;
        self.listeners = DismissalListeners::all();
        debug!(?anchor, "overlay opened");
        Transition::Opened
    }

    /// Close the overlay, cancelling timers and unregistering listeners.
    ///
    /// A no-op when already closed with nothing pending.
    pub fn close(&mut self) -> Transition {
        self.pending_open.cancel();
        self.pending_anchor = None;
        if !self.is_open {
            return Transition::None;
        }
        self.is_open = false;
        self.anchor = None;
        self.surface = None;
        self.phase = MeasurePhase::Guessed;
        self.placement = self.config.preferred;
        self.listeners = DismissalListeners::empty();
        debug!("overlay closed");
        Transition::Closed
    }

    /// Toggle between open (at the trigger rect) and closed.
    pub fn toggle(&mut self) -> Transition {
        if self.is_open {
            self.close()
        } else {
            self.open(Anchor::Rect(self.trigger_bounds))
        }
    }

    /// Run the pass-2 placement correction once the surface is measurable.
    ///
    /// Returns `None` when closed or already measured, so the correction
    /// fires at most once per open event.
    pub fn measure(&mut self, overlay: Size, viewport: Viewport) -> Option<ResolvedPlacement> {
        if !self.is_open || self.phase == MeasurePhase::Measured {
            return None;
        }
        let anchor = self.anchor?;
        let resolved = resolve(
            anchor,
            self.config.preferred,
            overlay,
            viewport,
            &self.config.placement,
        );
        self.placement = resolved.placement;
        self.surface = Some(resolved.rect);
        self.phase = MeasurePhase::Measured;
        Some(resolved)
    }

    /// Record the surface rectangle for a fixed-position overlay that skips
    /// flip correction, so outside-dismissal containment still works.
    ///
    /// Ignored while closed; marks the measure phase done.
    pub fn set_surface(&mut self, rect: Rect) {
        if self.is_open {
            self.surface = Some(rect);
            self.phase = MeasurePhase::Measured;
        }
    }

    /// A click bubbled up from inside the overlay body.
    pub fn item_clicked(&mut self) -> Transition {
        if self.is_open && self.config.close_on_item_click {
            self.close()
        } else {
            Transition::None
        }
    }

    /// Fire any due pending-open timer.
    pub fn poll(&mut self, now_ms: u64) -> Transition {
        if self.pending_open.fire_if_due(now_ms) {
            if let Some(anchor) = self.pending_anchor.take() {
                return self.open(anchor);
            }
        }
        Transition::None
    }

    /// Feed one normalized input event through the state machine.
    pub fn handle_event(&mut self, event: &Event, now_ms: u64) -> Transition {
        match (self.config.trigger, event) {
            // ── Click-toggle trigger ─────────────────────────────────
            (TriggerKind::ClickToggle, Event::PointerDown(p))
                if p.button == PointerButton::Primary
                    && self.trigger_bounds.contains(p.position) =>
            {
                self.toggle()
            }

            // ── Context-click trigger ────────────────────────────────
            (TriggerKind::ContextClick { .. }, Event::ContextClick(p))
                if self.trigger_bounds.contains(p.position) =>
            {
                self.open(Anchor::Point(p.position))
            }
            (TriggerKind::ContextClick { long_press_ms }, Event::TouchStart(t))
                if self.trigger_bounds.contains(t.position) =>
            {
                self.pending_anchor = Some(Anchor::Point(t.position));
                self.pending_open.arm(now_ms, long_press_ms);
                Transition::OpenPending
            }
            (TriggerKind::ContextClick { .. }, Event::TouchEnd(_) | Event::TouchMove(_)) => {
                self.pending_open.cancel();
                self.pending_anchor = None;
                Transition::None
            }

            // ── Hover trigger ────────────────────────────────────────
            (TriggerKind::Hover { open_delay_ms }, Event::PointerEnter(_)) => {
                if self.is_open {
                    Transition::None
                } else if open_delay_ms == 0 {
                    self.open(Anchor::Rect(self.trigger_bounds))
                } else {
                    self.pending_anchor = Some(Anchor::Rect(self.trigger_bounds));
                    self.pending_open.arm(now_ms, open_delay_ms);
                    Transition::OpenPending
                }
            }
            (TriggerKind::Hover { .. }, Event::PointerLeave(_)) => {
                // A close always wins over a pending open: cancel, not race.
                self.close()
            }

            // ── Shared dismissal ─────────────────────────────────────
            (_, Event::Key(k))
                if k.code == KeyCode::Escape
                    && self.listeners.contains(DismissalListeners::KEY_DOWN) =>
            {
                self.close()
            }
            (_, Event::PointerDown(p))
                if self
                    .listeners
                    .contains(DismissalListeners::POINTER_DOWN)
                    && self.is_outside(p.position) =>
            {
                self.close()
            }

            _ => Transition::None,
        }
    }

    /// Containment test against this instance's own subtree only.
    ///
    /// Element-anchored overlays (dropdown, tooltip) count the trigger as
    /// inside; point-anchored ones (context menu) test the surface alone.
    fn is_outside(&self, p: Point) -> bool {
        if let Some(surface) = self.surface {
            if surface.contains(p) {
                return false;
            }
        }
        let trigger_is_inside = !matches!(self.config.trigger, TriggerKind::ContextClick { .. });
        if trigger_is_inside && self.trigger_bounds.contains(p) {
            return false;
        }
        true
    }
}
