//! I/O helpers for the launcher.

pub mod apps_file;
#[cfg(feature = "dialog")]
pub mod dialog;
pub mod prompt;
pub mod repair;
pub mod settings;
pub mod spawn;
