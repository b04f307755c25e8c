//! UI components for the dashboard shell.

pub(crate) mod atoms;
pub(crate) mod collapse;
pub(crate) mod dashboard;
pub(crate) mod locale_menu;
pub(crate) mod modal;
pub(crate) mod shell;
pub(crate) mod toast;
