//! Persistence and environment helpers for the app shell.

use crate::core::config::{API_BASE_ATTRIBUTE, normalize_api_base};
use crate::core::prefs::{KeyValueStore, Preferences, StoreError};
use crate::i18n::{DEFAULT_LOCALE, LocaleCode};
use gloo::console;
use gloo::storage::errors::StorageError;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::errors::JsError;
use gloo::utils::{document, window};
use js_sys::Date;
use wasm_bindgen::JsValue;

/// Media query tracking the OS colour scheme.
pub(crate) const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// `localStorage` behind the [`KeyValueStore`] seam.
///
/// Values go through [`LocalStorage::raw`] so they stay unquoted. Missing
/// storage (privacy mode, sandboxed frames) reads as empty and rejects
/// writes.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct LocalStore;

impl LocalStore {
    fn storage() -> Option<web_sys::Storage> {
        // `LocalStorage::raw` throws when storage is disabled.
        window().local_storage().ok().flatten()?;
        Some(LocalStorage::raw())
    }
}

fn write_error(key: &'static str, err: JsValue) -> StoreError {
    match JsError::try_from(err) {
        Ok(err) => StoreError::storage(key, &StorageError::JsError(err)),
        Err(_) => StoreError::Write {
            key,
            reason: "storage rejected the write".into(),
        },
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &'static str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &'static str, value: &str) -> Result<(), StoreError> {
        let storage = Self::storage().ok_or(StoreError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|err| write_error(key, err))
    }

    fn remove(&self, key: &'static str) {
        if Self::storage().is_some() {
            LocalStorage::delete(key);
        }
    }
}

/// Log a failed preference write; the in-memory value still applies.
pub(crate) fn log_storage_error(operation: &'static str, err: &StoreError) {
    console::error!("storage operation failed", operation, err.to_string());
}

/// Persisted locale, then the browser language, then the default.
pub(crate) fn load_locale() -> LocaleCode {
    if let Some(locale) = Preferences::new(&LocalStore).locale() {
        return locale;
    }
    if let Some(nav) = window().navigator().language() {
        if let Some(locale) = LocaleCode::from_lang_tag(&nav) {
            return locale;
        }
    }
    DEFAULT_LOCALE
}

/// API base from the mount element's `data-api-base`; empty means same origin.
pub(crate) fn api_base_url() -> String {
    document()
        .get_element_by_id("root")
        .and_then(|root| root.get_attribute(API_BASE_ATTRIBUTE))
        .map(|raw| normalize_api_base(&raw))
        .unwrap_or_default()
}

/// Whether the OS currently asks for a dark scheme.
pub(crate) fn prefers_dark() -> bool {
    window()
        .match_media(DARK_QUERY)
        .ok()
        .flatten()
        .is_some_and(|query| query.matches())
}

/// Minutes east of UTC for the browser's local zone.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn local_offset_minutes() -> i32 {
    -(Date::new_0().get_timezone_offset() as i32)
}
