//! Subscribed feeds: list state, card view-models and feed mutations.
//!
//! # Design
//! - Mutations go through the flows in [`actions`]; views only spawn them.
//! - Every mutation ends with both lists reloaded.

pub mod actions;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
