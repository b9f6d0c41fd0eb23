//! Sidebar slice: collapse state plus ephemeral hover/mobile flags.
//!
//! Only `is_collapsed` is persisted. Hover expansion and the mobile drawer
//! are session-local and always start closed.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::store::{SIDEBAR_STATE_KEY, StateStore, load_or_default, persist};

/// Persisted payload: `{"is_collapsed": true}`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
struct SidebarPayload {
    is_collapsed: bool,
}

/// Sidebar slice state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SidebarState {
    /// Whether the sidebar is collapsed to its narrow rail.
    pub is_collapsed: bool,
    /// Pointer is over the collapsed rail; hosts render expanded while set.
    pub is_hovered: bool,
    /// Mobile drawer is open; irrelevant on desktop widths.
    pub is_mobile_open: bool,
    pub is_hydrated: bool,
}

impl SidebarState {
    /// Pre-hydration state: expanded, nothing hovered or open.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Effective expansion: collapsed but hovered still renders expanded.
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        !self.is_collapsed || self.is_hovered
    }

    /// One-time hydration from the store; corrupt or missing data keeps
    /// the expanded default without writing back.
    pub fn hydrate(&mut self, store: &dyn StateStore) {
        let payload: SidebarPayload = load_or_default(store, SIDEBAR_STATE_KEY);
        self.is_collapsed = payload.is_collapsed;
        self.is_hydrated = true;
        debug!(collapsed = self.is_collapsed, "sidebar hydrated");
    }

    /// Flip collapsed state and persist it. Clears the hover flag so the
    /// sidebar does not stay visually expanded after collapsing.
    pub fn toggle(&mut self, store: &mut dyn StateStore) {
        self.set_collapsed(!self.is_collapsed, store);
    }

    /// Set collapsed state explicitly and persist it.
    pub fn set_collapsed(&mut self, collapsed: bool, store: &mut dyn StateStore) {
        self.is_collapsed = collapsed;
        self.is_hovered = false;
        persist(
            store,
            SIDEBAR_STATE_KEY,
            &SidebarPayload {
                is_collapsed: self.is_collapsed,
            },
        );
    }

    /// Pointer entered the collapsed rail. No-op while expanded.
    pub fn pointer_enter(&mut self) {
        if self.is_collapsed {
            self.is_hovered = true;
        }
    }

    /// Pointer left the rail.
    pub fn pointer_leave(&mut self) {
        self.is_hovered = false;
    }

    /// Open or close the mobile drawer. Not persisted.
    pub fn set_mobile_open(&mut self, open: bool) {
        self.is_mobile_open = open;
    }

    pub fn toggle_mobile(&mut self) {
        self.is_mobile_open = !self.is_mobile_open;
    }
}
