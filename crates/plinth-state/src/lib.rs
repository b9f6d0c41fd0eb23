#![forbid(unsafe_code)]

//! Persisted UI state for Plinth: theme and sidebar slices.
//!
//! State lives behind a tiny key-value [`StateStore`] abstraction keyed by
//! fixed strings and JSON-encoded payloads. Hydration happens once after
//! mount and fails soft: corrupt or missing data falls back to hardcoded
//! defaults and never surfaces an error to the caller. Every mutating action
//! writes back through the store and pushes the resolved theme through a
//! single side-effect seam ([`theme::ThemeSink`]) instead of scattering
//! global mutations.

pub mod sidebar;
pub mod store;
pub mod theme;

pub use sidebar::SidebarState;
pub use store::{MemoryStore, SIDEBAR_STATE_KEY, StateStore, THEME_STATE_KEY};
pub use theme::{ResolvedTheme, ThemeMode, ThemeSink, ThemeState};
