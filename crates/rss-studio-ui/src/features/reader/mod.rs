//! Reader modal wiring.
//!
//! # Design
//! - Content resolution and settings live in `core::reader` and
//!   `core::settings`; this slice sequences them against the API and storage.
//! - A response for an episode that is no longer open is dropped.

pub mod actions;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
