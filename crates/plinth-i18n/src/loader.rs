//! Locale resolution as an explicit state machine.
//!
//! A [`LocaleSession`] starts in `Loading` and resolves a requested locale
//! against the registered catalog exactly once. An unregistered locale is a
//! terminal `NotFound`: the session stays there until it is explicitly reset,
//! so callers render a not-found surface instead of looping on retries or
//! quietly swapping in the default locale.

use tracing::warn;

use crate::catalog::{Locale, MessageCatalog};

/// Resolution state for a locale request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// No locale has been requested yet.
    #[default]
    Loading,
    /// The locale is registered and its messages are available.
    Ready(Locale),
    /// The locale is not registered. Terminal until `reset`.
    NotFound(Locale),
}

/// One locale-resolution lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LocaleSession {
    state: LoadState,
}

impl LocaleSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Resolve `locale` against the catalog.
    ///
    /// `NotFound` is sticky: once entered, later requests are ignored until
    /// [`reset`](Self::reset). A `Ready` session may resolve again to switch
    /// locales.
    pub fn resolve(&mut self, catalog: &MessageCatalog, locale: &str) -> &LoadState {
        if matches!(self.state, LoadState::NotFound(_)) {
            return &self.state;
        }
        if catalog.has_locale(locale) {
            self.state = LoadState::Ready(locale.to_string());
        } else {
            warn!(locale, "requested locale is not registered");
            self.state = LoadState::NotFound(locale.to_string());
        }
        &self.state
    }

    /// Return to `Loading`, allowing a fresh resolution.
    pub fn reset(&mut self) {
        self.state = LoadState::Loading;
    }

    /// The active locale, if resolution succeeded.
    #[must_use]
    pub fn locale(&self) -> Option<&str> {
        match self.state() {
            LoadState::Ready(locale) => Some(locale),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> MessageCatalog {
        let mut catalog = MessageCatalog::new("en");
        catalog.add_locale_json("en", "{}").expect("valid json");
        catalog.add_locale_json("de", "{}").expect("valid json");
        catalog
    }

    #[test]
    fn starts_loading() {
        let session = LocaleSession::new();
        assert_eq!(*session.state(), LoadState::Loading);
        assert_eq!(session.locale(), None);
    }

    #[test]
    fn known_locale_becomes_ready() {
        let catalog = catalog();
        let mut session = LocaleSession::new();
        assert_eq!(
            *session.resolve(&catalog, "de"),
            LoadState::Ready("de".into())
        );
        assert_eq!(session.locale(), Some("de"));
    }

    #[test]
    fn unknown_locale_is_terminal_not_found() {
        let catalog = catalog();
        let mut session = LocaleSession::new();
        assert_eq!(
            *session.resolve(&catalog, "xx"),
            LoadState::NotFound("xx".into())
        );
        // A later request for a valid locale does not escape NotFound.
        assert_eq!(
            *session.resolve(&catalog, "en"),
            LoadState::NotFound("xx".into())
        );
        assert_eq!(session.locale(), None);
    }

    #[test]
    fn ready_session_can_switch_locales() {
        let catalog = catalog();
        let mut session = LocaleSession::new();
        session.resolve(&catalog, "en");
        assert_eq!(
            *session.resolve(&catalog, "de"),
            LoadState::Ready("de".into())
        );
    }

    #[test]
    fn reset_allows_fresh_resolution() {
        let catalog = catalog();
        let mut session = LocaleSession::new();
        session.resolve(&catalog, "xx");
        session.reset();
        assert_eq!(*session.state(), LoadState::Loading);
        assert_eq!(
            *session.resolve(&catalog, "en"),
            LoadState::Ready("en".into())
        );
    }
}
