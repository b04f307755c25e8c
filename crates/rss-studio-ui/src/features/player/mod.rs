//! Audio player modal. State transitions live in `core::player`.

#[cfg(target_arch = "wasm32")]
pub(crate) mod view;
