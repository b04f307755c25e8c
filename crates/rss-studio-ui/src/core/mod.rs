//! Core, DOM-free primitives and helpers for the Web UI.
pub mod config;
pub mod http;
pub mod logic;
pub mod markdown;
pub mod player;
pub mod prefs;
pub mod reader;
pub mod settings;
pub mod store;
pub mod theme;
pub mod toast;
pub mod ui;
#[cfg(test)]
pub(crate) mod testing;
