//! Subscribe overlay: form validation and the create flow.

pub mod actions;
pub mod logic;
#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
