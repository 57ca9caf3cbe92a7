//! Choice-driven path repair, independent of any dialog toolkit.
//!
//! The dialog prompter implements [`RepairDialogs`] with real dialogs; the
//! loop itself lives here so it can run against scripted answers.

use std::path::Path;

use tracing::debug;

/// Top-level choice offered for a missing entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepairChoice {
    Browse,
    Type,
    Skip,
}

/// The individual dialogs a graphical repair is made of.
pub trait RepairDialogs {
    fn choose(&mut self, missing: &str) -> RepairChoice;
    /// File picker. `None` when closed without a selection.
    fn browse(&mut self, missing: &str) -> Option<String>;
    /// Free-text entry. `None` when cancelled or empty.
    fn type_path(&mut self, missing: &str) -> Option<String>;
    fn show_error(&mut self, title: &str, text: &str);
}

/// Ask until the user picks or types an existing path, or skips.
///
/// A non-existent candidate is reported and the choice is offered again.
/// Closing the picker or the text box also returns to the choice.
pub fn repair_with_dialogs<D: RepairDialogs + ?Sized>(
    dialogs: &mut D,
    missing: &str,
) -> Option<String> {
    loop {
        let candidate = match dialogs.choose(missing) {
            RepairChoice::Skip => return None,
            RepairChoice::Browse => dialogs.browse(missing),
            RepairChoice::Type => dialogs.type_path(missing),
        };
        let Some(candidate) = candidate else {
            debug!(missing, "no path chosen, asking again");
            continue;
        };
        if Path::new(&candidate).exists() {
            return Some(candidate);
        }
        dialogs.show_error("File not found", &format!("File not found: {candidate}"));
    }
}
