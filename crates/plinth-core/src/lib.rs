#![forbid(unsafe_code)]

//! Core: geometry, normalized input events, and timing for Plinth.
//!
//! # Role in Plinth
//! `plinth-core` is the input layer. It owns the pixel-space geometry types,
//! the normalized event vocabulary the overlay controller consumes, and the
//! explicit-millisecond timing helpers that keep the whole stack free of
//! background timers.
//!
//! # Primary responsibilities
//! - **Geometry**: `Point`, `Size`, `Rect`, and the read-only `Viewport`.
//! - **Event**: canonical input events (pointer, key, touch, resize).
//! - **Timing**: `Deadline` for hover-delay and long-press timers driven by
//!   an explicit `now_ms` clock.
//!
//! # How it fits in the system
//! The overlay layer (`plinth-overlay`) consumes `plinth_core::Event` values
//! and drives overlay state machines. The presentation layer is independent
//! of input, so `plinth-core` is the clean bridge between the host's event
//! loop and the deterministic placement pipeline.

pub mod event;
pub mod geometry;
pub mod timing;

#[cfg(feature = "tracing")]
pub mod logging;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};

pub use event::{Event, KeyCode, KeyEvent, PointerButton, PointerEvent, TouchEvent};
pub use geometry::{Point, Rect, Size, Viewport};
pub use timing::Deadline;
