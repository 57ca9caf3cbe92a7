//! Reading and rewriting the apps file.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::core::apps::{PLACEHOLDER, parse_apps, render_apps};

/// Result of loading the apps file. Every variant lets the run continue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Entries in file order.
    Loaded(Vec<String>),
    /// The file was missing; the placeholder template was written.
    Created,
    /// The file was missing and the template could not be written.
    CreateFailed { error: String },
    /// The file exists but could not be read.
    Unreadable { error: String },
}

impl LoadOutcome {
    pub fn into_entries(self) -> Vec<String> {
        match self {
            LoadOutcome::Loaded(entries) => entries,
            _ => Vec::new(),
        }
    }
}

/// Load the apps file, creating it from the template when missing.
pub fn load_apps(path: &Path, comment_prefix: &str) -> LoadOutcome {
    match fs::read_to_string(path) {
        Ok(contents) => {
            let entries = parse_apps(&contents, comment_prefix);
            debug!(path = %path.display(), count = entries.len(), "apps file loaded");
            LoadOutcome::Loaded(entries)
        }
        Err(err) if err.kind() == ErrorKind::NotFound => match create_template(path) {
            Ok(()) => {
                info!(path = %path.display(), "apps file created from template");
                LoadOutcome::Created
            }
            Err(err) => {
                let error = format!("{err:#}");
                warn!(path = %path.display(), err = %error, "failed to create apps file");
                LoadOutcome::CreateFailed { error }
            }
        },
        Err(err) => {
            warn!(path = %path.display(), err = %err, "apps file unreadable");
            LoadOutcome::Unreadable {
                error: err.to_string(),
            }
        }
    }
}

/// Overwrite the apps file with `entries`, one per line.
pub fn write_apps(path: &Path, entries: &[String]) -> Result<()> {
    debug!(path = %path.display(), count = entries.len(), "writing apps file");
    write_atomic(path, &render_apps(entries))
}

fn create_template(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    fs::write(path, PLACEHOLDER).with_context(|| format!("write {}", path.display()))
}

/// Replace `path` via a sibling temp file and rename.
///
/// A symlinked `path` is resolved first so the link keeps pointing at the
/// updated file. The temp file is removed if the rename fails.
fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let path = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let parent = path
        .parent()
        .with_context(|| format!("path missing parent {}", path.display()))?;
    if !parent.as_os_str().is_empty() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let mut tmp_name = path
        .file_name()
        .with_context(|| format!("path missing file name {}", path.display()))?
        .to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp file {}", tmp_path.display()))?;
    if let Err(err) = fs::rename(&tmp_path, &path) {
        if let Err(cleanup) = fs::remove_file(&tmp_path) {
            warn!(path = %tmp_path.display(), err = %cleanup, "failed to remove temp file");
        }
        return Err(err).with_context(|| format!("replace {}", path.display()));
    }
    Ok(())
}
