#![forbid(unsafe_code)]

//! Plinth: a headless UI kit for web-style dashboards.
//!
//! This crate re-exports the workspace under one roof:
//!
//! - [`core`] — geometry, normalized input events, explicit-clock timing.
//! - [`overlay`] — viewport-aware placement and the overlay lifecycle
//!   controller shared by every floating surface.
//! - [`widgets`] — dropdown, context menu (with submenus), and tooltip
//!   built on the overlay controller.
//! - [`state`] — persisted theme and sidebar slices with fail-soft
//!   hydration.
//! - [`i18n`] — locale message catalogs with fallback and interpolation.
//!
//! # Example
//!
//! ```
//! use plinth::core::geometry::{Rect, Viewport};
//! use plinth::widgets::{Dropdown, MenuItem};
//!
//! let mut menu = Dropdown::new(Viewport::new(1280.0, 800.0))
//!     .item(MenuItem::new("profile", "Profile"))
//!     .item(MenuItem::new("logout", "Log out").danger());
//! menu.set_trigger_bounds(Rect::new(1180.0, 16.0, 80.0, 32.0));
//! ```

pub use plinth_core as core;
pub use plinth_i18n as i18n;
pub use plinth_overlay as overlay;
pub use plinth_state as state;
pub use plinth_widgets as widgets;

/// Commonly used types, importable in one line.
pub mod prelude {
    pub use plinth_core::event::{Event, KeyEvent, PointerButton, PointerEvent, TouchEvent};
    pub use plinth_core::geometry::{Point, Rect, Size, Viewport};
    pub use plinth_i18n::{LoadState, LocaleSession, MessageCatalog};
    pub use plinth_overlay::{
        Anchor, HorizontalAlign, OverlayController, Placement, PlacementConfig, Transition,
        TriggerKind, VerticalSide,
    };
    pub use plinth_state::{SidebarState, StateStore, ThemeMode, ThemeState};
    pub use plinth_widgets::{ContextMenu, Dropdown, MenuEntry, MenuItem, Tooltip};
}
