//! Reader display settings and their persisted JSON shape.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Smallest reader font size in pixels.
pub const FONT_SIZE_MIN: u8 = 12;
/// Largest reader font size in pixels.
pub const FONT_SIZE_MAX: u8 = 24;
/// Font size increment for the +/- controls.
pub const FONT_SIZE_STEP: u8 = 2;
/// Font size used when nothing is persisted.
pub const FONT_SIZE_DEFAULT: u8 = 18;

/// Reader colour scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReaderTheme {
    /// Dark text on white.
    #[default]
    Light,
    /// Warm paper tone.
    Sepia,
    /// Light text on dark.
    Dark,
}

/// Reader typeface family.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    /// Sans-serif stack.
    #[default]
    Sans,
    /// Serif stack.
    Serif,
}

/// Reader column width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnWidth {
    /// Narrow column.
    Narrow,
    /// Medium column.
    #[default]
    Medium,
    /// Wide column.
    Wide,
}

impl ReaderTheme {
    /// All themes in picker order.
    pub const ALL: [Self; 3] = [Self::Light, Self::Sepia, Self::Dark];

    /// Attribute value and translation key suffix.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Sepia => "sepia",
            Self::Dark => "dark",
        }
    }
}

impl FontFamily {
    /// All families in picker order.
    pub const ALL: [Self; 2] = [Self::Sans, Self::Serif];

    /// Attribute value and translation key suffix.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sans => "sans",
            Self::Serif => "serif",
        }
    }

    /// CSS `font-family` stack.
    #[must_use]
    pub const fn css_stack(self) -> &'static str {
        match self {
            Self::Sans => {
                "-apple-system, BlinkMacSystemFont, \"Segoe UI\", \"PingFang SC\", \"Noto Sans SC\", sans-serif"
            }
            Self::Serif => "\"Noto Serif SC\", \"Songti SC\", Georgia, serif",
        }
    }
}

impl ColumnWidth {
    /// All widths in picker order.
    pub const ALL: [Self; 3] = [Self::Narrow, Self::Medium, Self::Wide];

    /// Attribute value and translation key suffix.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Narrow => "narrow",
            Self::Medium => "medium",
            Self::Wide => "wide",
        }
    }

    /// CSS `max-width` for the article column.
    #[must_use]
    pub const fn max_width(self) -> &'static str {
        match self {
            Self::Narrow => "36rem",
            Self::Medium => "46rem",
            Self::Wide => "60rem",
        }
    }
}

/// User-adjustable reader presentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReaderSettings {
    /// Body font size in pixels, within [`FONT_SIZE_MIN`]..=[`FONT_SIZE_MAX`].
    pub font_size: u8,
    /// Colour scheme.
    pub theme: ReaderTheme,
    /// Typeface family.
    pub font_family: FontFamily,
    /// Column width.
    pub width: ColumnWidth,
}

impl Default for ReaderSettings {
    fn default() -> Self {
        Self {
            font_size: FONT_SIZE_DEFAULT,
            theme: ReaderTheme::default(),
            font_family: FontFamily::default(),
            width: ColumnWidth::default(),
        }
    }
}

impl ReaderSettings {
    /// Merge a persisted blob over the defaults, field by field.
    ///
    /// Fields that are missing or fail to parse keep their default; an
    /// unparseable blob yields the defaults outright.
    #[must_use]
    pub fn from_stored(raw: &str) -> Self {
        let mut settings = Self::default();
        let Ok(Value::Object(map)) = serde_json::from_str::<Value>(raw) else {
            return settings;
        };
        if let Some(size) = map.get("fontSize").and_then(Value::as_f64) {
            settings.font_size = clamp_font_size(size);
        }
        if let Some(theme) = field(&map, "theme") {
            settings.theme = theme;
        }
        if let Some(family) = field(&map, "fontFamily") {
            settings.font_family = family;
        }
        if let Some(width) = field(&map, "width") {
            settings.width = width;
        }
        settings
    }

    /// JSON blob for storage.
    #[must_use]
    pub fn to_stored(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// One step larger, clamped at [`FONT_SIZE_MAX`].
    #[must_use]
    pub fn larger(self) -> Self {
        Self {
            font_size: self
                .font_size
                .saturating_add(FONT_SIZE_STEP)
                .min(FONT_SIZE_MAX),
            ..self
        }
    }

    /// One step smaller, clamped at [`FONT_SIZE_MIN`].
    #[must_use]
    pub fn smaller(self) -> Self {
        Self {
            font_size: self
                .font_size
                .saturating_sub(FONT_SIZE_STEP)
                .max(FONT_SIZE_MIN),
            ..self
        }
    }

    /// Whether the larger control should be enabled.
    #[must_use]
    pub const fn can_grow(&self) -> bool {
        self.font_size < FONT_SIZE_MAX
    }

    /// Whether the smaller control should be enabled.
    #[must_use]
    pub const fn can_shrink(&self) -> bool {
        self.font_size > FONT_SIZE_MIN
    }

    /// Inline style for the article body.
    #[must_use]
    pub fn body_style(&self) -> String {
        format!(
            "font-size: {}px; font-family: {}; max-width: {};",
            self.font_size,
            self.font_family.css_stack(),
            self.width.max_width()
        )
    }
}

fn field<T: for<'de> Deserialize<'de>>(
    map: &serde_json::Map<String, Value>,
    key: &str,
) -> Option<T> {
    map.get(key)
        .and_then(|value| serde_json::from_value(value.clone()).ok())
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn clamp_font_size(raw: f64) -> u8 {
    if raw.is_nan() {
        return FONT_SIZE_DEFAULT;
    }
    raw.round()
        .clamp(f64::from(FONT_SIZE_MIN), f64::from(FONT_SIZE_MAX)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reader_baseline() {
        let settings = ReaderSettings::default();
        assert_eq!(settings.font_size, 18);
        assert_eq!(settings.theme, ReaderTheme::Light);
        assert_eq!(settings.font_family, FontFamily::Sans);
        assert_eq!(settings.width, ColumnWidth::Medium);
    }

    #[test]
    fn stored_blob_uses_camel_case_keys() {
        let stored = ReaderSettings {
            font_size: 20,
            theme: ReaderTheme::Sepia,
            font_family: FontFamily::Serif,
            width: ColumnWidth::Wide,
        }
        .to_stored();
        assert_eq!(
            stored,
            r#"{"fontSize":20,"theme":"sepia","fontFamily":"serif","width":"wide"}"#
        );
        assert_eq!(ReaderSettings::from_stored(&stored).font_size, 20);
    }

    #[test]
    fn partial_and_unknown_fields_merge_over_defaults() {
        let merged =
            ReaderSettings::from_stored(r#"{"theme":"dark","width":"huge","extra":true}"#);
        assert_eq!(merged.theme, ReaderTheme::Dark);
        assert_eq!(merged.width, ColumnWidth::Medium);
        assert_eq!(merged.font_size, FONT_SIZE_DEFAULT);
    }

    #[test]
    fn unparseable_blob_yields_defaults() {
        assert_eq!(ReaderSettings::from_stored("{oops"), ReaderSettings::default());
        assert_eq!(ReaderSettings::from_stored("[1,2]"), ReaderSettings::default());
    }

    #[test]
    fn persisted_font_size_is_clamped() {
        assert_eq!(ReaderSettings::from_stored(r#"{"fontSize":40}"#).font_size, 24);
        assert_eq!(ReaderSettings::from_stored(r#"{"fontSize":-3}"#).font_size, 12);
    }

    #[test]
    fn font_size_controls_clamp_at_bounds() {
        let max = ReaderSettings {
            font_size: FONT_SIZE_MAX,
            ..ReaderSettings::default()
        };
        assert_eq!(max.larger().font_size, 24);
        assert!(!max.can_grow());

        let min = ReaderSettings {
            font_size: FONT_SIZE_MIN,
            ..ReaderSettings::default()
        };
        assert_eq!(min.smaller().font_size, 12);
        assert!(!min.can_shrink());

        assert_eq!(ReaderSettings::default().larger().font_size, 20);
        assert_eq!(ReaderSettings::default().smaller().font_size, 16);
    }
}
