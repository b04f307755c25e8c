//! Tunables and storage keys shared by the UI.

/// `localStorage` key holding the explicit light/dark choice.
pub const THEME_KEY: &str = "rss_studio_theme";
/// `localStorage` key holding the JSON-encoded reader settings.
pub const READER_SETTINGS_KEY: &str = "rss_studio_reader_settings";
/// `localStorage` key holding the selected locale.
pub const LOCALE_KEY: &str = "rss_studio_locale";

/// How long a toast stays visible.
pub const TOAST_DURATION_MS: u32 = 2_500;
/// Plain-text length above which card bodies become collapsible.
pub const COLLAPSE_CHAR_THRESHOLD: usize = 180;
/// Maximum number of episodes rendered in the list.
pub const EPISODE_LIMIT: usize = 20;
/// Reading units (Han characters, half-weighted Latin words) per minute.
pub const READING_UNITS_PER_MINUTE: u32 = 300;

/// Attribute on the mount element that overrides the API base URL.
pub const API_BASE_ATTRIBUTE: &str = "data-api-base";

/// Normalise a configured API base: trims whitespace and trailing slashes.
///
/// An empty result means "same origin", so request paths stay relative.
#[must_use]
pub fn normalize_api_base(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}
