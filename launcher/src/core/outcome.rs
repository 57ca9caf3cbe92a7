//! Per-entry outcomes and the run summary accumulator.
//!
//! Every configured entry ends in exactly one terminal outcome. The summary is
//! built by folding outcomes in entry order, so the surviving list keeps file
//! order and skipped entries never reach it.

/// Terminal state of a single apps file entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
    /// The process was started.
    Launched {
        path: String,
        /// `true` if `path` came from a repair.
        replaced: bool,
    },
    /// The path exists but the process could not be started.
    LaunchFailed {
        path: String,
        replaced: bool,
        error: String,
    },
    /// The path was missing and the user declined to replace it.
    Skipped { original: String },
}

impl EntryOutcome {
    /// Path that survives into the rewritten apps file, if any.
    pub fn surviving_path(&self) -> Option<&str> {
        match self {
            EntryOutcome::Launched { path, .. } | EntryOutcome::LaunchFailed { path, .. } => {
                Some(path.as_str())
            }
            EntryOutcome::Skipped { .. } => None,
        }
    }

    pub fn was_replaced(&self) -> bool {
        matches!(
            self,
            EntryOutcome::Launched { replaced: true, .. }
                | EntryOutcome::LaunchFailed { replaced: true, .. }
        )
    }
}

/// Counters and surviving entries for one launcher run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Launch attempts, successful or not.
    pub opened: u32,
    /// Launch attempts that failed to start a process.
    pub failed: u32,
    /// Missing entries the user skipped.
    pub skipped: u32,
    /// Missing entries replaced with a valid path.
    pub repaired: u32,
    /// Entries to persist, in entry order.
    pub entries: Vec<String>,
}

impl RunSummary {
    pub fn record(&mut self, outcome: &EntryOutcome) {
        match outcome {
            EntryOutcome::Launched { .. } => self.opened += 1,
            EntryOutcome::LaunchFailed { .. } => {
                self.opened += 1;
                self.failed += 1;
            }
            EntryOutcome::Skipped { .. } => self.skipped += 1,
        }
        if outcome.was_replaced() {
            self.repaired += 1;
        }
        if let Some(path) = outcome.surviving_path() {
            self.entries.push(path.to_string());
        }
    }

    /// The apps file is rewritten only when at least one entry was repaired.
    pub fn needs_rewrite(&self) -> bool {
        self.repaired > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn launched(path: &str, replaced: bool) -> EntryOutcome {
        EntryOutcome::Launched {
            path: path.to_string(),
            replaced,
        }
    }

    #[test]
    fn launch_failures_count_as_opened_and_survive() {
        let mut summary = RunSummary::default();
        summary.record(&EntryOutcome::LaunchFailed {
            path: "/opt/app".to_string(),
            replaced: false,
            error: "permission denied".to_string(),
        });
        assert_eq!(summary.opened, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.entries, vec!["/opt/app"]);
        assert!(!summary.needs_rewrite());
    }

    #[test]
    fn skipped_entries_are_dropped_without_rewrite() {
        let mut summary = RunSummary::default();
        summary.record(&launched("/bin/true", false));
        summary.record(&EntryOutcome::Skipped {
            original: "/nonexistent/app".to_string(),
        });
        summary.record(&launched("/bin/false", false));

        assert_eq!(summary.opened, 2);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.entries, vec!["/bin/true", "/bin/false"]);
        assert!(!summary.needs_rewrite());
    }

    #[test]
    fn replacement_keeps_position_and_requests_rewrite() {
        let mut summary = RunSummary::default();
        summary.record(&launched("/a", false));
        summary.record(&launched("/b-new", true));
        summary.record(&launched("/c", false));

        assert_eq!(summary.entries, vec!["/a", "/b-new", "/c"]);
        assert_eq!(summary.repaired, 1);
        assert!(summary.needs_rewrite());
    }
}
