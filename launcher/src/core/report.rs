//! User-facing notices emitted during a run.
//!
//! Both prompters render the same `Display` text; the dialog prompter also
//! uses [`Notice::level`] to pick the icon.

use std::fmt;

/// Severity shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The apps file was missing and a template was written.
    AppsFileCreated { path: String },
    /// The apps file exists but could not be read; the run continues empty.
    AppsFileUnreadable { path: String, error: String },
    /// The apps file was missing and the template could not be written.
    AppsFileCreateFailed { path: String, error: String },
    Opened { path: String },
    LaunchFailed { path: String, error: String },
    Skipped { path: String },
    AppsFileUpdated { path: String },
    AppsFileWriteFailed { path: String, error: String },
    Summary { opened: u32, failed: u32, skipped: u32 },
}

impl Notice {
    pub fn level(&self) -> Level {
        match self {
            Notice::AppsFileCreated { .. }
            | Notice::Opened { .. }
            | Notice::AppsFileUpdated { .. }
            | Notice::Summary { .. } => Level::Info,
            Notice::Skipped { .. } => Level::Warning,
            Notice::AppsFileUnreadable { .. }
            | Notice::AppsFileCreateFailed { .. }
            | Notice::LaunchFailed { .. }
            | Notice::AppsFileWriteFailed { .. } => Level::Error,
        }
    }

    /// Short dialog title.
    pub fn title(&self) -> &'static str {
        match self {
            Notice::AppsFileCreated { .. } => "Apps file created",
            Notice::AppsFileUnreadable { .. } | Notice::AppsFileCreateFailed { .. } => {
                "Apps file error"
            }
            Notice::Opened { .. } => "Opened",
            Notice::LaunchFailed { .. } => "Launch failed",
            Notice::Skipped { .. } => "Skipped",
            Notice::AppsFileUpdated { .. } => "Apps file updated",
            Notice::AppsFileWriteFailed { .. } => "Apps file not saved",
            Notice::Summary { .. } => "Summary",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::AppsFileCreated { path } => write!(
                f,
                "Created {path}. Add one application path per line and run again."
            ),
            Notice::AppsFileUnreadable { path, error } => {
                write!(f, "Could not read {path}: {error}")
            }
            Notice::AppsFileCreateFailed { path, error } => {
                write!(f, "Could not create {path}: {error}")
            }
            Notice::Opened { path } => write!(f, "Opened: {path}"),
            Notice::LaunchFailed { path, error } => write!(f, "Failed to open {path}: {error}"),
            Notice::Skipped { path } => write!(f, "Skipping: {path}"),
            Notice::AppsFileUpdated { path } => write!(f, "Updated {path} with new file paths."),
            Notice::AppsFileWriteFailed { path, error } => {
                write!(f, "Failed to update {path}: {error}")
            }
            Notice::Summary {
                opened,
                failed,
                skipped,
            } => {
                write!(f, "Opened {opened} application(s), skipped {skipped}.")?;
                if *failed > 0 {
                    write!(f, " {failed} failed to start.")?;
                }
                Ok(())
            }
        }
    }
}
