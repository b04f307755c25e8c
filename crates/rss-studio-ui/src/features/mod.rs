//! Feature slices: each owns its state, async flows and views.

pub mod episodes;
pub mod feeds;
pub mod player;
pub mod reader;
pub mod subscribe;
