//! Click-toggle dropdown menu anchored to its trigger element.

use plinth_core::event::Event;
use plinth_core::geometry::{Rect, Size, Viewport};
use plinth_overlay::{
    Anchor, AnchorOffsets, HorizontalAlign, OverlayConfig, OverlayController, Placement,
    PlacementConfig, ResolvedPlacement, Transition, TriggerKind, VerticalSide, anchor_offsets,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::item::{Activation, MenuItem};
use crate::tooltip::{Tooltip, TooltipConfig, TooltipSide};

/// One row of the dropdown body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DropdownEntry {
    Item(MenuItem),
    Divider,
}

/// Snapshot for the presentation layer while the menu is open.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropdownView {
    pub placement: Placement,
    pub offsets: AnchorOffsets,
}

/// Dropdown menu: a click on the trigger toggles the overlay, items close it
/// by default, and the menu flips sides near viewport edges.
#[derive(Debug, Clone)]
pub struct Dropdown {
    controller: OverlayController,
    entries: Vec<DropdownEntry>,
    trigger_tooltip: Option<Tooltip>,
    viewport: Viewport,
    measured_size: Option<Size>,
}

impl Dropdown {
    /// Create an empty right-aligned dropdown.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self::aligned(viewport, HorizontalAlign::Right)
    }

    /// Create an empty dropdown with an explicit preferred alignment.
    #[must_use]
    pub fn aligned(viewport: Viewport, align: HorizontalAlign) -> Self {
        let config = OverlayConfig::new(TriggerKind::ClickToggle)
            .preferred(Placement::new(align, VerticalSide::Bottom))
            .placement(PlacementConfig::default());
        Self {
            controller: OverlayController::new(config),
            entries: Vec::new(),
            trigger_tooltip: None,
            viewport,
            measured_size: None,
        }
    }

    /// Append an item.
    #[must_use]
    pub fn item(mut self, item: MenuItem) -> Self {
        self.entries.push(DropdownEntry::Item(item));
        self
    }

    /// Append a divider.
    #[must_use]
    pub fn divider(mut self) -> Self {
        self.entries.push(DropdownEntry::Divider);
        self
    }

    /// Attach a hover tooltip to the trigger.
    #[must_use]
    pub fn trigger_tooltip(mut self, content: impl Into<String>, side: TooltipSide) -> Self {
        self.trigger_tooltip = Some(Tooltip::with_config(
            content,
            TooltipConfig::default().side(side),
        ));
        self
    }

    /// Disable the close-on-item-click policy. Trigger bounds and placement
    /// tuning set earlier are kept.
    #[must_use]
    pub fn keep_open_on_item_click(mut self) -> Self {
        self.controller.set_close_on_item_click(false);
        self
    }

    /// The dropdown body rows.
    #[must_use]
    pub fn entries(&self) -> &[DropdownEntry] {
        &self.entries
    }

    /// Whether the menu is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.controller.is_open()
    }

    /// Access the trigger tooltip, if configured.
    #[must_use]
    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.trigger_tooltip.as_ref()
    }

    /// Update the trigger element's rendered rectangle.
    pub fn set_trigger_bounds(&mut self, bounds: Rect) {
        self.controller.set_trigger_bounds(bounds);
        if let Some(tooltip) = &mut self.trigger_tooltip {
            tooltip.set_trigger_bounds(bounds);
        }
    }

    /// Record a viewport resize; the breakpoint and flip logic read the new
    /// dimensions on the next measure.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Feed one input event through the menu and its trigger tooltip.
    pub fn handle_event(&mut self, event: &Event, now_ms: u64) -> Transition {
        if let Event::Resize { width, height } = event {
            self.viewport = Viewport::new(*width, *height);
        }
        if let Some(tooltip) = &mut self.trigger_tooltip {
            tooltip.handle_event(event, now_ms);
        }
        self.controller.handle_event(event, now_ms)
    }

    /// Close the menu and its trigger tooltip (unmount path); idempotent.
    pub fn close(&mut self) -> Transition {
        if let Some(tooltip) = &mut self.trigger_tooltip {
            tooltip.close();
        }
        self.controller.close()
    }

    /// Fire due timers (the trigger tooltip's hover delay).
    pub fn poll(&mut self, now_ms: u64) -> Transition {
        if let Some(tooltip) = &mut self.trigger_tooltip {
            tooltip.poll(now_ms);
        }
        self.controller.poll(now_ms)
    }

    /// Pass-2 placement correction from the rendered menu size.
    pub fn measure(&mut self, menu: Size) -> Option<ResolvedPlacement> {
        let resolved = self.controller.measure(menu, self.viewport)?;
        self.measured_size = Some(menu);
        Some(resolved)
    }

    /// Activate the item with the given id.
    ///
    /// Disabled and unknown ids are swallowed; a successful activation
    /// closes the menu under the default policy.
    pub fn activate(&mut self, id: &str) -> Activation {
        let Some(item) = self.entries.iter().find_map(|e| match e {
            DropdownEntry::Item(item) if item.id == id => Some(item),
            _ => None,
        }) else {
            return Activation::Ignored;
        };
        if item.disabled || !self.controller.is_open() {
            return Activation::Ignored;
        }
        debug!(id, "dropdown item activated");
        self.controller.item_clicked();
        Activation::Activated
    }

    /// Snapshot for the presentation layer; `None` while closed.
    #[must_use]
    pub fn view(&self) -> Option<DropdownView> {
        if !self.controller.is_open() {
            return None;
        }
        let anchor = self
            .controller
            .anchor()
            .unwrap_or(Anchor::Rect(Rect::default()));
        let placement = self.controller.placement();
        let size = self.measured_size.unwrap_or_default();
        let offsets = anchor_offsets(
            anchor,
            placement,
            size,
            self.viewport,
            &PlacementConfig::default(),
        );
        Some(DropdownView { placement, offsets })
    }
}
