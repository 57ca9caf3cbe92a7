//! Orchestration for a launcher run.
//!
//! A run loads the apps file, resolves every entry to a terminal outcome in
//! file order, rewrites the apps file if any entry was repaired, and finishes
//! with a summary. No failure inside a run stops it early.

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::core::outcome::{EntryOutcome, RunSummary};
use crate::core::report::Notice;
use crate::io::apps_file::{LoadOutcome, load_apps, write_apps};
use crate::io::prompt::UserPrompter;
use crate::io::spawn::Spawner;

/// Inputs for [`run_launcher`].
#[derive(Debug, Clone)]
pub struct LaunchConfig {
    pub apps_path: PathBuf,
    pub comment_prefix: String,
}

/// What happened to the apps file at the end of the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewriteStatus {
    /// Nothing was repaired; the file was not touched.
    NotNeeded,
    Rewritten,
    Failed { error: String },
}

/// Outcome of [`run_launcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub load: LoadOutcome,
    pub summary: RunSummary,
    pub rewrite: RewriteStatus,
}

/// Run the launcher once: load, launch/repair, rewrite, summarize.
#[instrument(skip_all, fields(apps_path = %config.apps_path.display()))]
pub fn run_launcher<S, P>(config: &LaunchConfig, spawner: &S, prompter: &mut P) -> RunReport
where
    S: Spawner + ?Sized,
    P: UserPrompter + ?Sized,
{
    let apps_path = config.apps_path.display().to_string();
    let load = load_apps(&config.apps_path, &config.comment_prefix);
    match &load {
        LoadOutcome::Loaded(_) => {}
        LoadOutcome::Created => notify(
            prompter,
            &Notice::AppsFileCreated {
                path: apps_path.clone(),
            },
        ),
        LoadOutcome::CreateFailed { error } => notify(
            prompter,
            &Notice::AppsFileCreateFailed {
                path: apps_path.clone(),
                error: error.clone(),
            },
        ),
        LoadOutcome::Unreadable { error } => notify(
            prompter,
            &Notice::AppsFileUnreadable {
                path: apps_path.clone(),
                error: error.clone(),
            },
        ),
    }

    let entries = load.clone().into_entries();
    let summary = drive_entries(&entries, spawner, prompter);

    let rewrite = if summary.needs_rewrite() {
        match write_apps(&config.apps_path, &summary.entries) {
            Ok(()) => {
                info!(count = summary.entries.len(), "apps file rewritten");
                notify(prompter, &Notice::AppsFileUpdated { path: apps_path });
                RewriteStatus::Rewritten
            }
            Err(err) => {
                let error = format!("{err:#}");
                warn!(err = %error, "failed to rewrite apps file");
                notify(
                    prompter,
                    &Notice::AppsFileWriteFailed {
                        path: apps_path,
                        error: error.clone(),
                    },
                );
                RewriteStatus::Failed { error }
            }
        }
    } else {
        RewriteStatus::NotNeeded
    };

    notify(
        prompter,
        &Notice::Summary {
            opened: summary.opened,
            failed: summary.failed,
            skipped: summary.skipped,
        },
    );

    RunReport {
        load,
        summary,
        rewrite,
    }
}

/// Resolve every entry, in order, to a terminal outcome.
pub fn drive_entries<S, P>(entries: &[String], spawner: &S, prompter: &mut P) -> RunSummary
where
    S: Spawner + ?Sized,
    P: UserPrompter + ?Sized,
{
    let mut summary = RunSummary::default();
    for entry in entries {
        let outcome = resolve_entry(entry, spawner, prompter);
        summary.record(&outcome);
    }
    debug!(?summary, "all entries resolved");
    summary
}

fn resolve_entry<S, P>(entry: &str, spawner: &S, prompter: &mut P) -> EntryOutcome
where
    S: Spawner + ?Sized,
    P: UserPrompter + ?Sized,
{
    if Path::new(entry).exists() {
        return launch(entry, false, spawner, prompter);
    }

    debug!(entry, "entry missing, requesting replacement");
    let replacement = match prompter.request_replacement(entry) {
        Ok(replacement) => replacement,
        Err(err) => {
            let error = format!("{err:#}");
            warn!(entry, err = %error, "replacement prompt failed, skipping");
            None
        }
    };
    match replacement {
        Some(path) => {
            info!(entry, replacement = %path, "entry repaired");
            launch(&path, true, spawner, prompter)
        }
        None => {
            notify(
                prompter,
                &Notice::Skipped {
                    path: entry.to_string(),
                },
            );
            EntryOutcome::Skipped {
                original: entry.to_string(),
            }
        }
    }
}

fn launch<S, P>(path: &str, replaced: bool, spawner: &S, prompter: &mut P) -> EntryOutcome
where
    S: Spawner + ?Sized,
    P: UserPrompter + ?Sized,
{
    match spawner.spawn(Path::new(path)) {
        Ok(()) => {
            notify(
                prompter,
                &Notice::Opened {
                    path: path.to_string(),
                },
            );
            EntryOutcome::Launched {
                path: path.to_string(),
                replaced,
            }
        }
        Err(err) => {
            let error = format!("{err:#}");
            notify(
                prompter,
                &Notice::LaunchFailed {
                    path: path.to_string(),
                    error: error.clone(),
                },
            );
            EntryOutcome::LaunchFailed {
                path: path.to_string(),
                replaced,
                error,
            }
        }
    }
}

fn notify<P: UserPrompter + ?Sized>(prompter: &mut P, notice: &Notice) {
    if let Err(err) = prompter.notify(notice) {
        warn!(err = ?err, ?notice, "failed to show notice");
    }
}
