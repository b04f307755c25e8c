//! Shared DTOs and UI-only value types.

pub use rss_studio_api_models::{
    Episode, EpisodeId, ErrorBody, Feed, FeedCreate, FeedId, FeedRefreshResult, FullContent,
};

/// Toast variants used across the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ToastKind {
    /// Neutral status message.
    #[default]
    Default,
    /// Successful action.
    Success,
    /// Failed action.
    Danger,
}

impl ToastKind {
    /// Value written to the toast's `data-variant` attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Success => "success",
            Self::Danger => "danger",
        }
    }
}

/// A transient status message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Generation that produced this toast.
    pub id: u64,
    /// Visible text.
    pub message: String,
    /// Style variant.
    pub kind: ToastKind,
}
