//! Reader modal state and content resolution.
//!
//! # Design
//! - Every `open` bumps a request generation; a content response is applied
//!   only when its generation is still current, so slow responses for a
//!   previously opened episode are dropped.
//! - Content resolution order: backend full content, episode body, then an
//!   explicit "no content" state pointing at the original link.

use crate::core::config::READING_UNITS_PER_MINUTE;
use crate::core::markdown::{Rendered, plain_text, render_article};
use crate::core::settings::ReaderSettings;
use crate::models::{Episode, EpisodeId};
use regex::Regex;
use std::sync::LazyLock;

static HAN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{Han}").expect("valid han regex"));
static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z]+(?:['’][A-Za-z]+)*").expect("valid word regex"));

/// Where the displayed article body came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReaderContent {
    /// Waiting for the backend.
    Loading,
    /// Sanitized HTML ready to display.
    Ready {
        /// Which source produced the body.
        source: ContentSource,
        /// Sanitized HTML.
        html: String,
        /// Estimated reading time, `None` when zero.
        minutes: Option<u32>,
    },
    /// Nothing to show; the view points at the original link.
    Missing,
}

/// Origin of a resolved article body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentSource {
    /// Backend full-content extraction.
    Full,
    /// The episode's own summary or description.
    Summary,
}

/// Reader modal state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReaderState {
    /// Episode currently shown; `None` while closed.
    pub episode: Option<Episode>,
    /// Body state.
    pub content: ReaderContent,
    /// Display settings.
    pub settings: ReaderSettings,
    generation: u64,
}

impl Default for ReaderState {
    fn default() -> Self {
        Self {
            episode: None,
            content: ReaderContent::Loading,
            settings: ReaderSettings::default(),
            generation: 0,
        }
    }
}

/// Outcome of applying fetched content.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Applied {
    /// Whether the response was still current.
    pub applied: bool,
    /// Image sources that failed to resolve.
    pub unresolved_images: Vec<String>,
}

impl ReaderState {
    /// Whether the modal is visible.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.episode.is_some()
    }

    /// Show `episode` in the loading state. Returns the request generation.
    pub fn open(&mut self, episode: Episode, settings: ReaderSettings) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.episode = Some(episode);
        self.settings = settings;
        self.content = ReaderContent::Loading;
        self.generation
    }

    /// Hide the modal; pending responses become stale.
    pub fn close(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.episode = None;
        self.content = ReaderContent::Loading;
    }

    /// Id of the open episode.
    #[must_use]
    pub fn episode_id(&self) -> Option<EpisodeId> {
        self.episode.as_ref().map(|episode| episode.id)
    }

    /// Apply a full-content result for request `generation`.
    ///
    /// `full` is `None` when the backend had nothing or the fetch failed; the
    /// episode body is used instead.
    pub fn resolve(&mut self, generation: u64, full: Option<&str>) -> Applied {
        if generation != self.generation {
            return Applied::default();
        }
        let Some(episode) = self.episode.as_ref() else {
            return Applied::default();
        };
        let full = full.filter(|content| !content.trim().is_empty());
        let (source, markdown) = match (full, episode.body()) {
            (Some(content), _) => (ContentSource::Full, content),
            (None, Some(body)) => (ContentSource::Summary, body),
            (None, None) => {
                self.content = ReaderContent::Missing;
                return Applied {
                    applied: true,
                    unresolved_images: Vec::new(),
                };
            }
        };
        let Rendered {
            html,
            unresolved_images,
        } = render_article(markdown, episode.original_link());
        let minutes = reading_minutes(&plain_text(&html));
        self.content = ReaderContent::Ready {
            source,
            html,
            minutes: (minutes > 0).then_some(minutes),
        };
        Applied {
            applied: true,
            unresolved_images,
        }
    }
}

/// Estimated reading minutes for plain text.
///
/// Han characters count one unit and Latin words half a unit; the total is
/// divided by [`READING_UNITS_PER_MINUTE`] and rounded up.
#[must_use]
pub fn reading_minutes(text: &str) -> u32 {
    let han = u32::try_from(HAN_RE.find_iter(text).count()).unwrap_or(u32::MAX);
    let words = u32::try_from(WORD_RE.find_iter(text).count()).unwrap_or(u32::MAX);
    // Half units are doubled to stay in integers.
    let doubled = han.saturating_mul(2).saturating_add(words);
    doubled.div_ceil(READING_UNITS_PER_MINUTE * 2)
}
