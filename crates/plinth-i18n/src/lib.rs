#![forbid(unsafe_code)]

//! Locale message catalogs for Plinth.
//!
//! Messages are flat JSON maps, one per locale, registered into a
//! [`MessageCatalog`] that falls back to a default locale for missing keys
//! and performs single-pass `{name}` interpolation. Locale resolution is an
//! explicit state machine: requesting an unregistered locale lands in a
//! terminal [`LoadState::NotFound`] rather than silently retrying or
//! substituting the default.

pub mod catalog;
pub mod loader;

pub use catalog::{I18nError, Locale, MessageCatalog};
pub use loader::{LoadState, LocaleSession};
