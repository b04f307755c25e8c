//! Episode feature surface: state, routing and views.

pub mod actions;
pub mod state;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
