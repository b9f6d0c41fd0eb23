//! Right-click / long-press context menu opened at the cursor.
//!
//! The menu anchors to the cursor or touch point, flips away from viewport
//! edges after measurement (unless `PositionMode::Fixed`), and nests hover
//! submenus that flip horizontally only. Entering a submenu keeps the parent
//! open: submenus are part of the parent's subtree, not an outside target.

use plinth_core::event::Event;
use plinth_core::geometry::{Rect, Size, Viewport};
use plinth_overlay::{
    AnchorOffsets, OverlayConfig, OverlayController, Placement, PlacementConfig,
    ResolvedPlacement, Submenu, SubmenuSide, Transition, TriggerKind, anchor_offsets,
};

use tracing::debug;

use crate::item::{Activation, MenuItem};

/// Whether flip correction applies or the menu stays at the raw cursor
/// offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PositionMode {
    /// Two-pass corrected placement.
    #[default]
    Auto,
    /// Raw `cursor + offset` position, no correction.
    Fixed,
}

/// A titled group of entries with an optional trailing divider.
#[derive(Debug, Clone)]
pub struct MenuGroup {
    pub entries: Vec<MenuEntry>,
    pub has_divider: bool,
}

/// A hover submenu nested under a parent item.
#[derive(Debug, Clone)]
pub struct SubmenuEntry {
    pub trigger: MenuItem,
    pub entries: Vec<MenuEntry>,
    state: Submenu,
}

impl SubmenuEntry {
    /// Create a closed submenu under the given trigger item.
    #[must_use]
    pub fn new(trigger: MenuItem, entries: Vec<MenuEntry>) -> Self {
        Self {
            trigger,
            entries,
            state: Submenu::new(),
        }
    }

    /// Whether the submenu panel is visible.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Side the panel currently opens toward.
    #[must_use]
    pub fn side(&self) -> SubmenuSide {
        self.state.side()
    }
}

/// One row of the context menu body.
#[derive(Debug, Clone)]
pub enum MenuEntry {
    Item(MenuItem),
    Divider,
    Group(MenuGroup),
    Submenu(SubmenuEntry),
}

/// Snapshot for the presentation layer while the menu is open.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContextMenuView {
    pub placement: Placement,
    pub offsets: AnchorOffsets,
}

/// Context menu over a trigger region.
#[derive(Debug, Clone)]
pub struct ContextMenu {
    controller: OverlayController,
    entries: Vec<MenuEntry>,
    mode: PositionMode,
    config: PlacementConfig,
    viewport: Viewport,
    measured_size: Option<Size>,
}

impl ContextMenu {
    /// Create an empty auto-positioned menu with default offsets `(0, 8)`.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self::with_mode(viewport, PositionMode::Auto)
    }

    /// Create an empty menu with an explicit positioning mode.
    #[must_use]
    pub fn with_mode(viewport: Viewport, mode: PositionMode) -> Self {
        let config = PlacementConfig::default();
        Self {
            controller: OverlayController::new(
                OverlayConfig::new(TriggerKind::context_click()).placement(config),
            ),
            entries: Vec::new(),
            mode,
            config,
            viewport,
            measured_size: None,
        }
    }

    /// Override the long-press threshold. Trigger bounds set earlier are
    /// kept.
    #[must_use]
    pub fn long_press_ms(mut self, ms: u64) -> Self {
        self.controller
            .set_trigger_kind(TriggerKind::ContextClick { long_press_ms: ms });
        self
    }

    /// Append an item.
    #[must_use]
    pub fn item(mut self, item: MenuItem) -> Self {
        self.entries.push(MenuEntry::Item(item));
        self
    }

    /// Append a divider.
    #[must_use]
    pub fn divider(mut self) -> Self {
        self.entries.push(MenuEntry::Divider);
        self
    }

    /// Append a group.
    #[must_use]
    pub fn group(mut self, entries: Vec<MenuEntry>, has_divider: bool) -> Self {
        self.entries.push(MenuEntry::Group(MenuGroup {
            entries,
            has_divider,
        }));
        self
    }

    /// Append a hover submenu.
    #[must_use]
    pub fn submenu(mut self, trigger: MenuItem, entries: Vec<MenuEntry>) -> Self {
        self.entries
            .push(MenuEntry::Submenu(SubmenuEntry::new(trigger, entries)));
        self
    }

    /// The menu body rows.
    #[must_use]
    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Whether the menu is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.controller.is_open()
    }

    /// Update the trigger region's rendered rectangle.
    pub fn set_trigger_bounds(&mut self, bounds: Rect) {
        self.controller.set_trigger_bounds(bounds);
    }

    /// Feed one input event through the menu.
    pub fn handle_event(&mut self, event: &Event, now_ms: u64) -> Transition {
        if let Event::Resize { width, height } = event {
            self.viewport = Viewport::new(*width, *height);
        }
        let transition = self.controller.handle_event(event, now_ms);
        if transition == Transition::Closed {
            self.close_submenus();
        }
        transition
    }

    /// Fire a due long-press timer.
    pub fn poll(&mut self, now_ms: u64) -> Transition {
        self.controller.poll(now_ms)
    }

    /// Close the menu directly (unmount path); idempotent.
    pub fn close(&mut self) -> Transition {
        let transition = self.controller.close();
        self.close_submenus();
        transition
    }

    /// Pass-2 correction from the rendered menu size.
    ///
    /// In `Fixed` mode no flip happens; the surface is recorded at the raw
    /// cursor offset so outside-dismissal containment still works.
    pub fn measure(&mut self, menu: Size) -> Option<ResolvedPlacement> {
        if !self.controller.is_open() {
            return None;
        }
        self.measured_size = Some(menu);
        match self.mode {
            PositionMode::Auto => self.controller.measure(menu, self.viewport),
            PositionMode::Fixed => {
                let anchor = self.controller.anchor()?;
                let rect = Rect::new(
                    anchor.left_x() + self.config.offset_x,
                    anchor.top_y() + self.config.offset_y,
                    menu.width,
                    menu.height,
                );
                self.controller.set_surface(rect);
                Some(ResolvedPlacement {
                    placement: Placement::default(),
                    rect,
                })
            }
        }
    }

    /// Activate the item with the given id, searching groups and submenus.
    pub fn activate(&mut self, id: &str) -> Activation {
        if !self.controller.is_open() {
            return Activation::Ignored;
        }
        match find_item(&self.entries, id) {
            Some(item) if !item.disabled => {
                debug!(id, "context menu item activated");
                let transition = self.controller.item_clicked();
                if transition == Transition::Closed {
                    self.close_submenus();
                }
                Activation::Activated
            }
            _ => Activation::Ignored,
        }
    }

    /// Pointer entered the submenu trigger with the given item id.
    pub fn submenu_enter(&mut self, id: &str) {
        if let Some(sub) = find_submenu(&mut self.entries, id) {
            sub.state.pointer_enter();
        }
    }

    /// Pointer left the submenu trigger and panel.
    pub fn submenu_leave(&mut self, id: &str) {
        if let Some(sub) = find_submenu(&mut self.entries, id) {
            sub.state.pointer_leave();
        }
    }

    /// Correct a submenu's side from its measured panel rectangle.
    pub fn submenu_measure(&mut self, id: &str, panel: Rect) -> Option<SubmenuSide> {
        let viewport = self.viewport;
        let margin = self.config.margin;
        find_submenu(&mut self.entries, id).map(|sub| sub.state.measure(panel, viewport, margin))
    }

    /// Snapshot for the presentation layer; `None` while closed.
    #[must_use]
    pub fn view(&self) -> Option<ContextMenuView> {
        if !self.controller.is_open() {
            return None;
        }
        let anchor = self.controller.anchor()?;
        let placement = match self.mode {
            PositionMode::Auto => self.controller.placement(),
            PositionMode::Fixed => Placement::default(),
        };
        let offsets = anchor_offsets(
            anchor,
            placement,
            self.measured_size.unwrap_or_default(),
            self.viewport,
            &self.config,
        );
        Some(ContextMenuView { placement, offsets })
    }

    fn close_submenus(&mut self) {
        close_submenus_in(&mut self.entries);
    }
}

fn close_submenus_in(entries: &mut [MenuEntry]) {
    for entry in entries {
        match entry {
            MenuEntry::Submenu(sub) => {
                sub.state.pointer_leave();
                close_submenus_in(&mut sub.entries);
            }
            MenuEntry::Group(group) => close_submenus_in(&mut group.entries),
            _ => {}
        }
    }
}

fn find_item<'a>(entries: &'a [MenuEntry], id: &str) -> Option<&'a MenuItem> {
    for entry in entries {
        match entry {
            MenuEntry::Item(item) if item.id == id => return Some(item),
            MenuEntry::Group(group) => {
                if let Some(item) = find_item(&group.entries, id) {
                    return Some(item);
                }
            }
            MenuEntry::Submenu(sub) => {
                if let Some(item) = find_item(&sub.entries, id) {
                    return Some(item);
                }
            }
            _ => {}
        }
    }
    None
}

fn find_submenu<'a>(entries: &'a mut [MenuEntry], id: &str) -> Option<&'a mut SubmenuEntry> {
    for entry in entries {
        match entry {
            MenuEntry::Submenu(sub) => {
                if sub.trigger.id == id {
                    return Some(sub);
                }
                if let Some(found) = find_submenu(&mut sub.entries, id) {
                    return Some(found);
                }
            }
            MenuEntry::Group(group) => {
                if let Some(found) = find_submenu(&mut group.entries, id) {
                    return Some(found);
                }
            }
            _ => {}
        }
    }
    None
}
