//! Pure UI helpers extracted from components for non-wasm testing.

use crate::core::config::COLLAPSE_CHAR_THRESHOLD;
use crate::core::markdown::{plain_text, render_markdown};
use crate::models::FeedId;
use chrono::{DateTime, FixedOffset, Utc};

/// Keyboard interactions handled at the document level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShortcutOutcome {
    /// Close whichever modal is open.
    CloseModal,
}

/// Interpret a document-level key press.
#[must_use]
pub fn interpret_shortcut(key: &str) -> Option<ShortcutOutcome> {
    match key {
        "Escape" | "Esc" => Some(ShortcutOutcome::CloseModal),
        _ => None,
    }
}

/// Count badge text, zero padded to two digits.
#[must_use]
pub fn format_count(count: usize) -> String {
    format!("{count:02}")
}

/// Whether a markdown body is long enough to start collapsed.
#[must_use]
pub fn needs_collapse(markdown: &str) -> bool {
    html_needs_collapse(&render_markdown(markdown))
}

/// Whether rendered HTML has more visible text than the collapse threshold.
#[must_use]
pub fn html_needs_collapse(html: &str) -> bool {
    plain_text(html).chars().count() > COLLAPSE_CHAR_THRESHOLD
}

/// Translation key for a collapse toggle in the given state.
#[must_use]
pub const fn collapse_label_key(expanded: bool) -> &'static str {
    if expanded {
        "collapse.collapse"
    } else {
        "collapse.expand"
    }
}

/// Format a timestamp in the viewer's zone as `YYYY-MM-DD HH:MM`.
///
/// `offset_minutes` is east of UTC. Out-of-range offsets fall back to UTC.
#[must_use]
pub fn format_timestamp(at: DateTime<Utc>, offset_minutes: i32) -> String {
    let offset = offset_minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .or_else(|| FixedOffset::east_opt(0));
    offset.map_or_else(
        || at.format("%Y-%m-%d %H:%M").to_string(),
        |offset| at.with_timezone(&offset).format("%Y-%m-%d %H:%M").to_string(),
    )
}

/// Value for the episode filter `<select>`: empty for "all".
#[must_use]
pub fn filter_value(filter: Option<FeedId>) -> String {
    filter.map(|id| id.to_string()).unwrap_or_default()
}

/// Parse an episode filter `<select>` value.
#[must_use]
pub fn parse_filter_value(raw: &str) -> Option<FeedId> {
    raw.trim().parse().ok()
}
