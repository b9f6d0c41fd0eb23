#![forbid(unsafe_code)]

//! Positioned-overlay core: placement geometry and open/close lifecycle.
//!
//! # Role in Plinth
//! `plinth-overlay` is the behavioral heart of every floating surface in the
//! toolkit. A single generic [`OverlayController`] handles click-toggle,
//! right-click, long-press, and hover triggers; a pure
//! [`placement`](crate::placement) module decides which side of its anchor an
//! overlay renders on so it stays inside the viewport.
//!
//! # Invariants
//!
//! 1. An open overlay always holds exactly one dismissal listener pair
//!    (outside pointer-down + key-down); a closed overlay holds none.
//! 2. Placement is total: every input, including zero-size overlays and
//!    overlays larger than the viewport, yields a valid alignment.
//! 3. The measure correction runs at most once per open event.
//! 4. No pending timer survives its cancelling gesture.

pub mod controller;
pub mod placement;
pub mod submenu;

pub use controller::{
    DismissalListeners, OverlayConfig, OverlayController, Transition, TriggerKind,
};
pub use placement::{
    Anchor, AnchorOffsets, HorizontalAlign, MeasurePhase, Placement, PlacementConfig,
    ResolvedPlacement, VerticalSide, anchor_offsets, compute_placement, resolve,
};
pub use submenu::{Submenu, SubmenuSide};
