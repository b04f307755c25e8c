//! Shared UI atoms used across the shell and views.

pub(crate) mod empty_state;
pub(crate) mod icon_button;
pub(crate) mod icons;
pub(crate) mod raw_html;

pub(crate) use empty_state::EmptyState;
pub(crate) use icon_button::IconButton;
pub(crate) use raw_html::RawHtml;
