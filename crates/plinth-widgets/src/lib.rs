#![forbid(unsafe_code)]

//! Overlay widgets: dropdown menu, context menu, and tooltip.
//!
//! Each widget wires a [`plinth_overlay::OverlayController`] to its trigger
//! semantics, carries its item model, and exposes a view-state snapshot
//! (`is_open`, corrected alignment, anchor offsets) for a presentation layer
//! to draw. Pixel rendering, animation easing, and accessibility attributes
//! live outside this crate.

pub mod context_menu;
pub mod dropdown;
pub mod item;
pub mod tooltip;

pub use context_menu::{ContextMenu, MenuEntry, MenuGroup, PositionMode, SubmenuEntry};
pub use dropdown::{Dropdown, DropdownEntry, DropdownView};
pub use item::{Activation, ItemVariant, MenuItem};
pub use tooltip::{Tooltip, TooltipConfig, TooltipSide, TooltipView};
