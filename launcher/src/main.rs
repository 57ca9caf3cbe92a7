//! Personal application launcher.
//!
//! Starts every application listed in `apps_to_open.txt` (next to the
//! executable by default) and asks for a new path when one has moved.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use launcher::exit_codes;
use launcher::io::prompt::{ConsolePrompter, UserPrompter};
use launcher::io::settings::{
    LauncherSettings, PromptMode, SETTINGS_FILE_NAME, base_dir, load_settings,
};
use launcher::io::spawn::DetachedSpawner;
use launcher::launch::{LaunchConfig, run_launcher};
use launcher::logging;

#[derive(Parser, Debug)]
#[command(
    name = "launcher",
    version,
    about = "Start your usual applications and repair paths that moved"
)]
struct Cli {
    /// Settings file (default: `launcher.toml` beside the executable).
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,

    /// Apps file to use instead of the one named in the settings.
    #[arg(long, value_name = "PATH")]
    apps_file: Option<PathBuf>,

    /// How to ask for missing paths and report results.
    #[arg(long, value_enum)]
    prompt: Option<PromptMode>,
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
    std::process::exit(exit_codes::OK);
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let (settings_dir, settings_path) = match &cli.settings {
        Some(path) => {
            let dir = path
                .parent()
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("."));
            (dir, path.clone())
        }
        None => {
            let dir = base_dir()?;
            let path = dir.join(SETTINGS_FILE_NAME);
            (dir, path)
        }
    };
    let settings = load_settings(&settings_path).context("load launcher settings")?;

    let apps_path = cli
        .apps_file
        .clone()
        .unwrap_or_else(|| settings.apps_path(&settings_dir));
    let mode = cli.prompt.unwrap_or(settings.prompt);
    info!(apps_path = %apps_path.display(), ?mode, "starting launcher run");

    let config = LaunchConfig {
        apps_path,
        comment_prefix: settings.comment_prefix.clone(),
    };
    let mut prompter = build_prompter(mode, &settings);
    let report = run_launcher(&config, &DetachedSpawner, prompter.as_mut());
    info!(
        opened = report.summary.opened,
        failed = report.summary.failed,
        skipped = report.summary.skipped,
        rewrite = ?report.rewrite,
        "launcher run finished"
    );
    Ok(())
}

fn build_prompter(mode: PromptMode, settings: &LauncherSettings) -> Box<dyn UserPrompter> {
    match mode {
        PromptMode::Console => Box::new(ConsolePrompter::stdio(&settings.skip_keyword)),
        PromptMode::Dialog => dialog_prompter(settings),
    }
}

#[cfg(feature = "dialog")]
fn dialog_prompter(_settings: &LauncherSettings) -> Box<dyn UserPrompter> {
    Box::new(launcher::io::dialog::DialogPrompter)
}

#[cfg(not(feature = "dialog"))]
fn dialog_prompter(settings: &LauncherSettings) -> Box<dyn UserPrompter> {
    tracing::warn!("built without the `dialog` feature, falling back to console prompts");
    Box::new(ConsolePrompter::stdio(&settings.skip_keyword))
}
