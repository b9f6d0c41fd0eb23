//! Theme slice: light/dark/system mode with a single side-effect seam.
//!
//! The mode is an explicit state object; every transition resolves against
//! the host's dark-preference signal and pushes the result through one
//! [`ThemeSink::apply`] call. Hosts implement the sink with whatever their
//! global side effect is (a root CSS class, a repaint), so mutations never
//! scatter.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::store::{StateStore, THEME_STATE_KEY, load_or_default, persist};

/// User-selected theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

/// Concrete theme after resolving `System` against the host preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedTheme {
    Light,
    Dark,
}

/// The single side-effect seam invoked on every theme transition.
pub trait ThemeSink {
    fn apply(&mut self, resolved: ResolvedTheme);
}

/// Persisted payload: `{"theme": "dark"}`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
struct ThemePayload {
    theme: ThemeMode,
}

/// Theme slice state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeState {
    pub mode: ThemeMode,
    pub is_hydrated: bool,
}

impl ThemeState {
    /// Pre-hydration state: `System`, not yet hydrated.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the mode against the host's dark-preference signal.
    #[must_use]
    pub fn resolved(&self, system_prefers_dark: bool) -> ResolvedTheme {
        match self.mode {
            ThemeMode::Light => ResolvedTheme::Light,
            ThemeMode::Dark => ResolvedTheme::Dark,
            ThemeMode::System => {
                if system_prefers_dark {
                    ResolvedTheme::Dark
                } else {
                    ResolvedTheme::Light
                }
            }
        }
    }

    /// One-time hydration from the store; corrupt data falls back to
    /// `System`. Applies the sink but does not write back.
    pub fn hydrate(
        &mut self,
        store: &dyn StateStore,
        system_prefers_dark: bool,
        sink: &mut dyn ThemeSink,
    ) {
        let payload: ThemePayload = load_or_default(store, THEME_STATE_KEY);
        self.mode = payload.theme;
        self.is_hydrated = true;
        debug!(mode = ?self.mode, "theme hydrated");
        sink.apply(self.resolved(system_prefers_dark));
    }

    /// Set an explicit mode, persist it, and apply the sink.
    pub fn set(
        &mut self,
        mode: ThemeMode,
        store: &mut dyn StateStore,
        system_prefers_dark: bool,
        sink: &mut dyn ThemeSink,
    ) {
        self.mode = mode;
        persist(store, THEME_STATE_KEY, &ThemePayload { theme: self.mode });
        sink.apply(self.resolved(system_prefers_dark));
    }

    /// Toggle between light and dark.
    ///
    /// From `System`, toggles to the opposite of the currently resolved
    /// theme, so the visible result always changes.
    pub fn toggle(
        &mut self,
        store: &mut dyn StateStore,
        system_prefers_dark: bool,
        sink: &mut dyn ThemeSink,
    ) {
        let next = match self.resolved(system_prefers_dark) {
            ResolvedTheme::Light => ThemeMode::Dark,
            ResolvedTheme::Dark => ThemeMode::Light,
        };
        self.set(next, store, system_prefers_dark, sink);
    }

    /// The host's dark-preference signal changed.
    ///
    /// Only re-applies while in `System` mode; explicit modes ignore it.
    pub fn system_preference_changed(&self, system_prefers_dark: bool, sink: &mut dyn ThemeSink) {
        if self.mode == ThemeMode::System {
            sink.apply(self.resolved(system_prefers_dark));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    /// Sink recording every applied theme.
    #[derive(Debug, Default)]
    struct RecordingSink {
        applied: Vec<ResolvedTheme>,
    }

    impl ThemeSink for RecordingSink {
        fn apply(&mut self, resolved: ResolvedTheme) {
            self.applied.push(resolved);
        }
    }

    #[test]
    fn hydrate_defaults_to_system_on_missing_data() {
        let store = MemoryStore::new();
        let mut sink = RecordingSink::default();
        let mut state = ThemeState::new();
        state.hydrate(&store, true, &mut sink);
        assert_eq!(state.mode, ThemeMode::System);
        assert!(state.is_hydrated);
        assert_eq!(sink.applied, vec![ResolvedTheme::Dark]);
    }

    #[test]
    fn hydrate_fails_soft_on_corrupt_data() {
        let mut store = MemoryStore::new();
        store.write(THEME_STATE_KEY, "][");
        let mut sink = RecordingSink::default();
        let mut state = ThemeState::new();
        state.hydrate(&store, false, &mut sink);
        assert_eq!(state.mode, ThemeMode::System);
        assert_eq!(sink.applied, vec![ResolvedTheme::Light]);
    }

    #[test]
    fn hydrate_reads_persisted_mode() {
        let mut store = MemoryStore::new();
        store.write(THEME_STATE_KEY, "{\"theme\":\"dark\"}");
        let mut sink = RecordingSink::default();
        let mut state = ThemeState::new();
        state.hydrate(&store, false, &mut sink);
        assert_eq!(state.mode, ThemeMode::Dark);
        assert_eq!(sink.applied, vec![ResolvedTheme::Dark]);
    }

    #[test]
    fn set_persists_and_applies() {
        let mut store = MemoryStore::new();
        let mut sink = RecordingSink::default();
        let mut state = ThemeState::new();
        state.set(ThemeMode::Dark, &mut store, false, &mut sink);
        assert_eq!(
            store.read(THEME_STATE_KEY).as_deref(),
            Some("{\"theme\":\"dark\"}")
        );
        assert_eq!(sink.applied, vec![ResolvedTheme::Dark]);
    }

    #[test]
    fn toggle_from_system_inverts_resolved_theme() {
        let mut store = MemoryStore::new();
        let mut sink = RecordingSink::default();
        let mut state = ThemeState::new();
        // System + prefers dark resolves dark, so toggle lands on light.
        state.toggle(&mut store, true, &mut sink);
        assert_eq!(state.mode, ThemeMode::Light);
        state.toggle(&mut store, true, &mut sink);
        assert_eq!(state.mode, ThemeMode::Dark);
    }

    #[test]
    fn preference_change_applies_only_in_system_mode() {
        let mut sink = RecordingSink::default();
        let state = ThemeState {
            mode: ThemeMode::System,
            is_hydrated: true,
        };
        state.system_preference_changed(true, &mut sink);
        assert_eq!(sink.applied, vec![ResolvedTheme::Dark]);

        let mut sink = RecordingSink::default();
        let state = ThemeState {
            mode: ThemeMode::Light,
            is_hydrated: true,
        };
        state.system_preference_changed(true, &mut sink);
        assert!(sink.applied.is_empty());
    }

    #[test]
    fn every_transition_applies_the_sink_exactly_once() {
        let mut store = MemoryStore::new();
        let mut sink = RecordingSink::default();
        let mut state = ThemeState::new();
        state.hydrate(&store, false, &mut sink);
        state.set(ThemeMode::Dark, &mut store, false, &mut sink);
        state.toggle(&mut store, false, &mut sink);
        assert_eq!(sink.applied.len(), 3);
    }
}
