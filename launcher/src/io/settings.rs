//! Launcher settings stored in `launcher.toml` beside the executable.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::ValueEnum;
use serde::Deserialize;
use tracing::debug;

pub const SETTINGS_FILE_NAME: &str = "launcher.toml";
pub const DEFAULT_APPS_FILE_NAME: &str = "apps_to_open.txt";

/// How the launcher talks to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum PromptMode {
    /// Console prompts on stdin/stdout.
    Console,
    /// Modal dialogs (requires the `dialog` feature).
    Dialog,
}

/// Launcher settings (TOML).
///
/// Every field is optional in the file; missing fields take the defaults below.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LauncherSettings {
    /// Apps file, relative to the settings directory unless absolute.
    pub apps_file: PathBuf,

    pub prompt: PromptMode,

    /// Console answer that skips a missing entry (case-insensitive).
    pub skip_keyword: String,

    /// Lines starting with this prefix are ignored. Empty disables comments.
    pub comment_prefix: String,
}

impl Default for LauncherSettings {
    fn default() -> Self {
        Self {
            apps_file: PathBuf::from(DEFAULT_APPS_FILE_NAME),
            prompt: PromptMode::Console,
            skip_keyword: "skip".to_string(),
            comment_prefix: "#".to_string(),
        }
    }
}

impl LauncherSettings {
    pub fn validate(&self) -> Result<()> {
        if self.apps_file.as_os_str().is_empty() {
            return Err(anyhow!("apps_file must not be empty"));
        }
        if self.skip_keyword.trim().is_empty() {
            return Err(anyhow!("skip_keyword must not be empty"));
        }
        Ok(())
    }

    /// Absolute (or `base_dir`-relative) location of the apps file.
    pub fn apps_path(&self, base_dir: &Path) -> PathBuf {
        base_dir.join(&self.apps_file)
    }
}

/// Directory the launcher resolves its files against.
///
/// This is the directory of the running executable so the launcher behaves the
/// same whether started from a shell or from a desktop shortcut.
pub fn base_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("resolve launcher executable path")?;
    let dir = exe
        .parent()
        .with_context(|| format!("executable path missing parent {}", exe.display()))?;
    Ok(dir.to_path_buf())
}

/// Load settings from a TOML file.
///
/// If the file is missing, returns `LauncherSettings::default()`.
pub fn load_settings(path: &Path) -> Result<LauncherSettings> {
    if !path.exists() {
        debug!(path = %path.display(), "settings file missing, using defaults");
        let settings = LauncherSettings::default();
        settings.validate()?;
        return Ok(settings);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let settings: LauncherSettings =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    settings.validate()?;
    debug!(path = %path.display(), ?settings, "settings loaded");
    Ok(settings)
}
