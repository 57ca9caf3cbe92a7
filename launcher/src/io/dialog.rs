//! Modal-dialog prompter (`dialog` feature).
//!
//! Message boxes and the file picker come from `rfd`. `rfd` has no text-entry
//! dialog, so manual entry shells out to the platform's own input box.

use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result};
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use tracing::warn;

use crate::core::report::{Level, Notice};
use crate::io::prompt::UserPrompter;
use crate::io::repair::{RepairChoice, RepairDialogs, repair_with_dialogs};

const TITLE: &str = "Launcher";
const EXECUTABLE_EXTENSIONS: &[&str] = &["exe", "bat", "cmd", "com", "sh", "appimage", "app"];

pub struct DialogPrompter;

impl RepairDialogs for DialogPrompter {
    fn choose(&mut self, missing: &str) -> RepairChoice {
        let result = MessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title(TITLE)
            .set_description(format!(
                "File not found:\n{missing}\n\n\
                 Yes: browse for the application\n\
                 No: type the path\n\
                 Cancel: skip this app"
            ))
            .set_buttons(MessageButtons::YesNoCancel)
            .show();
        match result {
            MessageDialogResult::Yes => RepairChoice::Browse,
            MessageDialogResult::No => RepairChoice::Type,
            _ => RepairChoice::Skip,
        }
    }

    fn browse(&mut self, missing: &str) -> Option<String> {
        let mut dialog = FileDialog::new()
            .set_title(format!("Locate {missing}"))
            .add_filter("Applications", EXECUTABLE_EXTENSIONS)
            .add_filter("All files", &["*"]);
        if let Some(dir) = Path::new(missing).parent().filter(|d| d.is_dir()) {
            dialog = dialog.set_directory(dir);
        }
        dialog.pick_file().map(|p| p.display().to_string())
    }

    fn type_path(&mut self, missing: &str) -> Option<String> {
        match ask_text(&format!("Enter the correct path for:\n{missing}")) {
            Ok(answer) => answer.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()),
            Err(err) => {
                let error = format!("{err:#}");
                warn!(err = %error, "text entry dialog failed");
                show(Level::Error, "Input unavailable", &error);
                None
            }
        }
    }

    fn show_error(&mut self, title: &str, text: &str) {
        show(Level::Error, title, text);
    }
}

impl UserPrompter for DialogPrompter {
    fn request_replacement(&mut self, missing: &str) -> Result<Option<String>> {
        Ok(repair_with_dialogs(self, missing))
    }

    fn notify(&mut self, notice: &Notice) -> Result<()> {
        show(notice.level(), notice.title(), &notice.to_string());
        Ok(())
    }
}

fn show(level: Level, title: &str, text: &str) {
    let level = match level {
        Level::Info => MessageLevel::Info,
        Level::Warning => MessageLevel::Warning,
        Level::Error => MessageLevel::Error,
    };
    MessageDialog::new()
        .set_level(level)
        .set_title(format!("{TITLE}: {title}"))
        .set_description(text)
        .set_buttons(MessageButtons::Ok)
        .show();
}

/// Show a free-text input box. `Ok(None)` means the user cancelled.
fn ask_text(prompt: &str) -> Result<Option<String>> {
    let output = text_entry_command(prompt)
        .output()
        .context("spawn text entry dialog")?;
    if !output.status.success() {
        return Ok(None);
    }
    let answer = String::from_utf8(output.stdout).context("decode text entry answer")?;
    let answer = answer.trim_end_matches(['\r', '\n']).to_string();
    if answer.is_empty() {
        return Ok(None);
    }
    Ok(Some(answer))
}

#[cfg(windows)]
fn text_entry_command(prompt: &str) -> Command {
    let script = format!(
        "Add-Type -AssemblyName Microsoft.VisualBasic; \
         [Microsoft.VisualBasic.Interaction]::InputBox('{}', '{TITLE}')",
        prompt.replace('\'', "''")
    );
    let mut cmd = Command::new("powershell");
    cmd.args(["-NoProfile", "-Command", &script]);
    cmd
}

#[cfg(target_os = "macos")]
fn text_entry_command(prompt: &str) -> Command {
    let script = format!(
        "text returned of (display dialog \"{}\" default answer \"\" with title \"{TITLE}\")",
        prompt.replace('\\', "\\\\").replace('"', "\\\"")
    );
    let mut cmd = Command::new("osascript");
    cmd.args(["-e", &script]);
    cmd
}

#[cfg(all(unix, not(target_os = "macos")))]
fn text_entry_command(prompt: &str) -> Command {
    let mut cmd = Command::new("zenity");
    cmd.args(["--entry", "--title", TITLE, "--text", prompt]);
    cmd
}

#[cfg(not(any(unix, windows)))]
fn text_entry_command(_prompt: &str) -> Command {
    Command::new("false")
}

