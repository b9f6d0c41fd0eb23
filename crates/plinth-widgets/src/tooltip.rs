//! Hover tooltip with viewport-aware side correction.
//!
//! The tooltip opens after a configurable hover delay, closes immediately on
//! pointer-leave (no delay on close), and corrects its side once the rendered
//! surface is measurable: a `Top` tooltip that would poke above the viewport
//! flips to `Bottom`, a `Right` one that would cross the right margin flips
//! to `Left`, and so on. Correction happens at most once per open.

use plinth_core::event::Event;
use plinth_core::geometry::{Rect, Viewport};
use plinth_overlay::{MeasurePhase, OverlayConfig, OverlayController, Transition, TriggerKind};
use serde::{Deserialize, Serialize};

/// Side of the trigger the tooltip renders on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TooltipSide {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

impl TooltipSide {
    /// Flip correction from the tooltip's measured rectangle.
    ///
    /// Single-axis: only the preferred side's own overflow direction is
    /// checked, matching the one-flip-per-axis rule of the placement engine.
    #[must_use]
    pub fn corrected(self, measured: Rect, viewport: Viewport, margin: f32) -> Self {
        match self {
            TooltipSide::Top if measured.y < margin => TooltipSide::Bottom,
            TooltipSide::Bottom if measured.bottom() > viewport.height - margin => {
                TooltipSide::Top
            }
            TooltipSide::Left if measured.x < margin => TooltipSide::Right,
            TooltipSide::Right if measured.right() > viewport.width - margin => TooltipSide::Left,
            side => side,
        }
    }
}

/// Tooltip configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipConfig {
    /// Preferred side.
    pub side: TooltipSide,
    /// Hover delay before showing, in milliseconds (default: 200).
    pub delay_ms: u64,
    /// Gap between tooltip and trigger, in pixels (default: 8).
    pub offset: f32,
    /// Viewport margin used for flip correction (default: 10).
    pub margin: f32,
    /// Never show while disabled.
    pub disabled: bool,
    /// Render the pointer arrow.
    pub show_arrow: bool,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            side: TooltipSide::Top,
            delay_ms: 200,
            offset: 8.0,
            margin: 10.0,
            disabled: false,
            show_arrow: true,
        }
    }
}

impl TooltipConfig {
    /// Set the preferred side.
    #[must_use]
    pub fn side(mut self, side: TooltipSide) -> Self {
        self.side = side;
        self
    }

    /// Set the hover delay in milliseconds.
    #[must_use]
    pub fn delay_ms(mut self, ms: u64) -> Self {
        self.delay_ms = ms;
        self
    }

    /// Set the trigger gap.
    #[must_use]
    pub fn offset(mut self, offset: f32) -> Self {
        self.offset = offset;
        self
    }

    /// Disable the tooltip.
    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set arrow visibility.
    #[must_use]
    pub fn show_arrow(mut self, show: bool) -> Self {
        self.show_arrow = show;
        self
    }
}

/// Snapshot for the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipView {
    pub side: TooltipSide,
    pub offset: f32,
    pub show_arrow: bool,
}

/// Hover tooltip anchored to a trigger element.
#[derive(Debug, Clone)]
pub struct Tooltip {
    content: String,
    config: TooltipConfig,
    controller: OverlayController,
    side: TooltipSide,
}

impl Tooltip {
    /// Create a tooltip with the given content and default configuration.
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self::with_config(content, TooltipConfig::default())
    }

    /// Create a tooltip with an explicit configuration.
    #[must_use]
    pub fn with_config(content: impl Into<String>, config: TooltipConfig) -> Self {
        let controller = OverlayController::new(
            OverlayConfig::new(TriggerKind::Hover {
                open_delay_ms: config.delay_ms,
            })
            // Clicks inside a tooltip never dismiss it; leave does.
            .close_on_item_click(false),
        );
        let side = config.side;
        Self {
            content: content.into(),
            config,
            controller,
            side,
        }
    }

    /// Tooltip text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Whether the tooltip is currently visible.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.controller.is_open()
    }

    /// Update the trigger element's rendered rectangle.
    pub fn set_trigger_bounds(&mut self, bounds: Rect) {
        self.controller.set_trigger_bounds(bounds);
    }

    /// Feed one input event through the tooltip.
    ///
    /// Disabled tooltips ignore everything except close-producing events.
    pub fn handle_event(&mut self, event: &Event, now_ms: u64) -> Transition {
        if self.config.disabled && matches!(event, Event::PointerEnter(_)) {
            return Transition::None;
        }
        let transition = self.controller.handle_event(event, now_ms);
        if transition == Transition::Opened {
            self.side = self.config.side;
        }
        transition
    }

    /// Hide immediately, cancelling a pending delay (unmount path).
    pub fn close(&mut self) -> Transition {
        self.controller.close()
    }

    /// Fire a due hover-delay timer.
    pub fn poll(&mut self, now_ms: u64) -> Transition {
        let transition = self.controller.poll(now_ms);
        if transition == Transition::Opened {
            self.side = self.config.side;
        }
        transition
    }

    /// Correct the side from the measured tooltip rectangle; at most once
    /// per open.
    pub fn measure(&mut self, measured: Rect, viewport: Viewport) {
        if !self.controller.is_open() || self.controller.phase() == MeasurePhase::Measured {
            return;
        }
        self.side = self
            .config
            .side
            .corrected(measured, viewport, self.config.margin);
        self.controller.measure(measured.size(), viewport);
    }

    /// Snapshot for the presentation layer; `None` while hidden.
    #[must_use]
    pub fn view(&self) -> Option<TooltipView> {
        if !self.is_visible() || self.config.disabled {
            return None;
        }
        Some(TooltipView {
            side: self.side,
            offset: self.config.offset,
            show_arrow: self.config.show_arrow,
        })
    }
}
