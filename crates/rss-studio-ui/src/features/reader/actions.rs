//! Reader flows: opening an article and adjusting display settings.

use crate::core::http::{ApiError, StudioApi};
use crate::core::prefs::{KeyValueStore, Preferences, StoreError};
use crate::core::settings::{ColumnWidth, FontFamily, ReaderSettings, ReaderTheme};
use crate::core::store::StoreSink;
use crate::models::Episode;

/// What happened while opening the reader, for the caller to log.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReaderOutcome {
    /// Whether the response was still current when it arrived.
    pub applied: bool,
    /// Full-content failure that triggered the summary fallback.
    pub fetch_error: Option<ApiError>,
    /// Image sources left relative.
    pub unresolved_images: Vec<String>,
}

/// Show `episode` in the reader and resolve its body. Closes the player.
pub async fn open_reader<A: StudioApi, S: StoreSink>(
    api: &A,
    sink: &S,
    episode: Episode,
    settings: ReaderSettings,
) -> ReaderOutcome {
    let id = episode.id;
    let generation = sink.update(|store| {
        if store.player.is_open() {
            store.player.close();
        }
        store.reader.open(episode, settings)
    });
    let (full, fetch_error) = match api.full_content(id).await {
        Ok(content) => (content, None),
        Err(err) => (None, Some(err)),
    };
    let applied = sink.update(|store| store.reader.resolve(generation, full.as_deref()));
    ReaderOutcome {
        applied: applied.applied,
        fetch_error,
        unresolved_images: applied.unresolved_images,
    }
}

/// Hide the reader.
pub fn close_reader<S: StoreSink>(sink: &S) {
    sink.update(|store| store.reader.close());
}

/// One adjustment from the settings bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingsChange {
    /// Font size up one step.
    Larger,
    /// Font size down one step.
    Smaller,
    /// Pick a colour scheme.
    Theme(ReaderTheme),
    /// Pick a typeface family.
    Font(FontFamily),
    /// Pick a column width.
    Width(ColumnWidth),
}

impl SettingsChange {
    /// Apply to `settings`.
    #[must_use]
    pub fn apply(self, settings: ReaderSettings) -> ReaderSettings {
        match self {
            Self::Larger => settings.larger(),
            Self::Smaller => settings.smaller(),
            Self::Theme(theme) => ReaderSettings { theme, ..settings },
            Self::Font(font_family) => ReaderSettings {
                font_family,
                ..settings
            },
            Self::Width(width) => ReaderSettings { width, ..settings },
        }
    }
}

/// Apply a settings change to the open reader and persist it.
///
/// The displayed settings change even when persisting fails.
///
/// # Errors
/// Returns [`StoreError`] when the settings could not be written.
pub fn change_settings<S: StoreSink, K: KeyValueStore + ?Sized>(
    sink: &S,
    storage: &K,
    change: SettingsChange,
) -> Result<ReaderSettings, StoreError> {
    let next = sink.update(|store| {
        store.reader.settings = change.apply(store.reader.settings);
        store.reader.settings
    });
    Preferences::new(storage).set_reader_settings(&next)?;
    Ok(next)
}
