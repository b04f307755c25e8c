//! Persisted preferences behind a small key-value seam.
//!
//! # Design
//! - The browser layer implements [`KeyValueStore`] over `localStorage`;
//!   tests use [`MemoryStore`].
//! - Values are raw strings so existing entries (`"dark"`, the settings JSON
//!   blob) stay readable across versions.
//! - Reads never fail: missing or malformed entries yield `None`/defaults.

use crate::core::config::{LOCALE_KEY, READER_SETTINGS_KEY, THEME_KEY};
use crate::core::settings::ReaderSettings;
use crate::core::theme::ThemeMode;
use crate::i18n::LocaleCode;
use gloo::storage::errors::StorageError;
use std::cell::RefCell;
use std::collections::HashMap;
use thiserror::Error;

/// Failure writing to a key-value store.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The backing store rejected the write (quota, privacy mode).
    #[error("storage write for '{key}' failed: {reason}")]
    Write {
        /// Key being written.
        key: &'static str,
        /// Backend-provided reason.
        reason: String,
    },
    /// The backing store is not available in this context.
    #[error("storage is unavailable")]
    Unavailable,
}

impl StoreError {
    /// Wrap a browser storage failure for `key`.
    #[must_use]
    pub fn storage(key: &'static str, err: &StorageError) -> Self {
        Self::Write {
            key,
            reason: err.to_string(),
        }
    }
}

/// Minimal string store used for preferences.
pub trait KeyValueStore {
    /// Raw value for `key`.
    fn get(&self, key: &'static str) -> Option<String>;
    /// Overwrite `key`.
    ///
    /// # Errors
    /// Returns [`StoreError`] when the backend rejects the write.
    fn set(&self, key: &'static str, value: &str) -> Result<(), StoreError>;
    /// Remove `key` if present.
    fn remove(&self, key: &'static str);
}

/// In-memory store for tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<&'static str, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &'static str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &'static str, value: &str) -> Result<(), StoreError> {
        self.entries.borrow_mut().insert(key, value.to_string());
        Ok(())
    }

    fn remove(&self, key: &'static str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Typed accessors over a [`KeyValueStore`].
pub struct Preferences<'a, S: KeyValueStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: KeyValueStore + ?Sized> Preferences<'a, S> {
    /// Wrap a store.
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Explicit theme choice, `None` when the OS preference applies.
    #[must_use]
    pub fn theme(&self) -> Option<ThemeMode> {
        self.store
            .get(THEME_KEY)
            .and_then(|raw| ThemeMode::parse(&raw))
    }

    /// Record an explicit theme choice.
    ///
    /// # Errors
    /// Propagates the store's write failure.
    pub fn set_theme(&self, mode: ThemeMode) -> Result<(), StoreError> {
        self.store.set(THEME_KEY, mode.as_str())
    }

    /// Persisted reader settings merged over defaults.
    #[must_use]
    pub fn reader_settings(&self) -> ReaderSettings {
        self.store
            .get(READER_SETTINGS_KEY)
            .map(|raw| ReaderSettings::from_stored(&raw))
            .unwrap_or_default()
    }

    /// Whether a settings blob exists but does not parse as a JSON object.
    #[must_use]
    pub fn reader_settings_corrupt(&self) -> bool {
        self.store
            .get(READER_SETTINGS_KEY)
            .is_some_and(|raw| {
                !matches!(
                    serde_json::from_str::<serde_json::Value>(&raw),
                    Ok(serde_json::Value::Object(_))
                )
            })
    }

    /// Persist reader settings.
    ///
    /// # Errors
    /// Propagates the store's write failure.
    pub fn set_reader_settings(&self, settings: &ReaderSettings) -> Result<(), StoreError> {
        self.store.set(READER_SETTINGS_KEY, &settings.to_stored())
    }

    /// Persisted locale, if recognised.
    #[must_use]
    pub fn locale(&self) -> Option<LocaleCode> {
        self.store
            .get(LOCALE_KEY)
            .and_then(|raw| LocaleCode::from_lang_tag(&raw))
    }

    /// Persist the locale.
    ///
    /// # Errors
    /// Propagates the store's write failure.
    pub fn set_locale(&self, locale: LocaleCode) -> Result<(), StoreError> {
        self.store.set(LOCALE_KEY, locale.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::settings::ReaderTheme;

    #[test]
    fn storage_failures_keep_the_key_and_reason() {
        let err = StoreError::storage(THEME_KEY, &StorageError::KeyNotFound(THEME_KEY.into()));
        let StoreError::Write { key, reason } = &err else {
            panic!("expected a write error, got {err:?}");
        };
        assert_eq!(*key, THEME_KEY);
        assert!(reason.contains(THEME_KEY));
        assert!(err.to_string().starts_with("storage write for 'rss_studio_theme' failed"));
    }

    #[test]
    fn theme_is_absent_until_chosen() {
        let store = MemoryStore::default();
        let prefs = Preferences::new(&store);
        assert_eq!(prefs.theme(), None);
        prefs.set_theme(ThemeMode::Dark).unwrap();
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(prefs.theme(), Some(ThemeMode::Dark));
    }

    #[test]
    fn unknown_theme_value_is_ignored() {
        let store = MemoryStore::default();
        store.set(THEME_KEY, "purple").unwrap();
        assert_eq!(Preferences::new(&store).theme(), None);
    }

    #[test]
    fn reader_settings_round_trip_through_store() {
        let store = MemoryStore::default();
        let prefs = Preferences::new(&store);
        assert_eq!(prefs.reader_settings(), ReaderSettings::default());

        let settings = ReaderSettings {
            theme: ReaderTheme::Sepia,
            ..ReaderSettings::default()
        }
        .larger();
        prefs.set_reader_settings(&settings).unwrap();
        assert_eq!(prefs.reader_settings(), settings);
        assert!(!prefs.reader_settings_corrupt());
    }

    #[test]
    fn corrupt_settings_fall_back_to_defaults() {
        let store = MemoryStore::default();
        store.set(READER_SETTINGS_KEY, "not json").unwrap();
        let prefs = Preferences::new(&store);
        assert!(prefs.reader_settings_corrupt());
        assert_eq!(prefs.reader_settings(), ReaderSettings::default());
    }

    #[test]
    fn locale_round_trips_and_remove_clears() {
        let store = MemoryStore::default();
        let prefs = Preferences::new(&store);
        prefs.set_locale(LocaleCode::En).unwrap();
        assert_eq!(prefs.locale(), Some(LocaleCode::En));
        store.remove(LOCALE_KEY);
        assert_eq!(prefs.locale(), None);
    }
}
