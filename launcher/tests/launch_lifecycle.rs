//! Run-level harness tests for the launcher.
//!
//! These tests drive `run_launcher` end to end against a real apps file in a
//! temp dir, with a recording spawner and a scripted prompter standing in for
//! the OS and the user.

use std::fs;

use launcher::core::apps::PLACEHOLDER;
use launcher::core::report::Notice;
use launcher::io::apps_file::LoadOutcome;
use launcher::launch::{LaunchConfig, RewriteStatus, run_launcher};
use launcher::test_support::{RecordingSpawner, ScriptedPrompter, touch};

fn config(dir: &std::path::Path) -> LaunchConfig {
    LaunchConfig {
        apps_path: dir.join("apps_to_open.txt"),
        comment_prefix: "#".to_string(),
    }
}

fn summary_notice(notices: &[Notice]) -> Notice {
    notices.last().cloned().expect("summary notice")
}

/// Existing, missing (skipped), existing.
///
/// Both existing entries are opened, the missing one is skipped, and because
/// nothing was repaired the file is left exactly as it was.
#[test]
fn skipping_missing_entry_opens_the_rest_and_leaves_file_untouched() {
    let temp = tempfile::tempdir().expect("tempdir");
    let first = touch(temp.path(), "true");
    let last = touch(temp.path(), "false");
    let cfg = config(temp.path());
    let original = format!("{first}\n/nonexistent/app\n{last}\n");
    fs::write(&cfg.apps_path, &original).expect("write apps");

    let spawner = RecordingSpawner::default();
    let mut prompter = ScriptedPrompter::default().answer(None);
    let report = run_launcher(&cfg, &spawner, &mut prompter);

    assert_eq!(report.summary.opened, 2);
    assert_eq!(report.summary.skipped, 1);
    assert_eq!(report.summary.entries, vec![first.clone(), last.clone()]);
    assert_eq!(report.rewrite, RewriteStatus::NotNeeded);
    assert_eq!(spawner.calls(), vec![first, last]);
    assert_eq!(prompter.asked(), ["/nonexistent/app".to_string()]);
    assert_eq!(fs::read_to_string(&cfg.apps_path).expect("read"), original);
    assert_eq!(
        summary_notice(prompter.notices()),
        Notice::Summary {
            opened: 2,
            failed: 0,
            skipped: 1
        }
    );
}

/// A repair plus a skip in the same run.
///
/// The replacement takes the position of the entry it repaired, the skipped
/// entry disappears, and comments/blank lines are not carried over.
#[test]
fn repair_rewrites_file_in_survival_order() {
    let temp = tempfile::tempdir().expect("tempdir");
    let a = touch(temp.path(), "a");
    let fixed = touch(temp.path(), "b-fixed");
    let c = touch(temp.path(), "c");
    let cfg = config(temp.path());
    fs::write(
        &cfg.apps_path,
        format!("# my apps\n{a}\n\n/gone/b\n/gone/x\n{c}\n"),
    )
    .expect("write apps");

    let spawner = RecordingSpawner::default();
    let mut prompter = ScriptedPrompter::default()
        .answer(Some(&fixed))
        .answer(None);
    let report = run_launcher(&cfg, &spawner, &mut prompter);

    assert_eq!(report.rewrite, RewriteStatus::Rewritten);
    assert_eq!(report.summary.opened, 3);
    assert_eq!(report.summary.skipped, 1);
    assert_eq!(report.summary.repaired, 1);
    assert_eq!(
        fs::read_to_string(&cfg.apps_path).expect("read"),
        format!("{a}\n{fixed}\n{c}\n")
    );
    assert!(prompter.notices().contains(&Notice::AppsFileUpdated {
        path: cfg.apps_path.display().to_string()
    }));
    assert!(prompter.notices().contains(&Notice::Skipped {
        path: "/gone/x".to_string()
    }));
}

/// Launch failures are reported but the path stays in the list.
#[test]
fn launch_failure_is_reported_and_counted_as_opened() {
    let temp = tempfile::tempdir().expect("tempdir");
    let broken = touch(temp.path(), "broken");
    let cfg = config(temp.path());
    fs::write(&cfg.apps_path, format!("{broken}\n")).expect("write apps");

    let spawner = RecordingSpawner::default().failing(&broken);
    let mut prompter = ScriptedPrompter::default();
    let report = run_launcher(&cfg, &spawner, &mut prompter);

    assert_eq!(report.summary.opened, 1);
    assert_eq!(report.summary.failed, 1);
    assert_eq!(report.summary.entries, vec![broken.clone()]);
    assert_eq!(report.rewrite, RewriteStatus::NotNeeded);
    assert!(prompter.notices().iter().any(|n| matches!(
        n,
        Notice::LaunchFailed { path, .. } if *path == broken
    )));
}

#[test]
fn empty_apps_file_yields_zero_summary_and_stays_empty() {
    let temp = tempfile::tempdir().expect("tempdir");
    let cfg = config(temp.path());
    fs::write(&cfg.apps_path, "").expect("write apps");

    let spawner = RecordingSpawner::default();
    let mut prompter = ScriptedPrompter::default();
    let report = run_launcher(&cfg, &spawner, &mut prompter);

    assert_eq!(report.load, LoadOutcome::Loaded(Vec::new()));
    assert_eq!(report.summary.opened, 0);
    assert_eq!(report.summary.skipped, 0);
    assert_eq!(fs::read_to_string(&cfg.apps_path).expect("read"), "");
    assert_eq!(
        prompter.notices(),
        [Notice::Summary {
            opened: 0,
            failed: 0,
            skipped: 0
        }]
    );
}

#[test]
fn missing_apps_file_is_created_and_run_completes() {
    let temp = tempfile::tempdir().expect("tempdir");
    let cfg = config(temp.path());

    let spawner = RecordingSpawner::default();
    let mut prompter = ScriptedPrompter::default();
    let report = run_launcher(&cfg, &spawner, &mut prompter);

    assert_eq!(report.load, LoadOutcome::Created);
    assert_eq!(fs::read_to_string(&cfg.apps_path).expect("read"), PLACEHOLDER);
    assert_eq!(
        prompter.notices(),
        [
            Notice::AppsFileCreated {
                path: cfg.apps_path.display().to_string()
            },
            Notice::Summary {
                opened: 0,
                failed: 0,
                skipped: 0
            }
        ]
    );

    // The template is ignored on the next run.
    let mut again = ScriptedPrompter::default();
    let report = run_launcher(&cfg, &spawner, &mut again);
    assert_eq!(report.load, LoadOutcome::Loaded(Vec::new()));
    assert!(spawner.calls().is_empty());
}

#[test]
fn unreadable_apps_file_still_reaches_summary() {
    let temp = tempfile::tempdir().expect("tempdir");
    let cfg = config(temp.path());
    fs::create_dir(&cfg.apps_path).expect("mkdir in place of file");

    let spawner = RecordingSpawner::default();
    let mut prompter = ScriptedPrompter::default();
    let report = run_launcher(&cfg, &spawner, &mut prompter);

    assert!(matches!(report.load, LoadOutcome::Unreadable { .. }));
    let notices = prompter.notices();
    assert_eq!(notices.len(), 2);
    assert!(matches!(notices[0], Notice::AppsFileUnreadable { .. }));
    assert!(matches!(notices[1], Notice::Summary { .. }));
}

/// The apps file sits in a read-only directory when the repair is saved.
#[cfg(unix)]
#[test]
fn write_failure_is_reported_before_summary() {
    use std::os::unix::fs::PermissionsExt;

    let temp = tempfile::tempdir().expect("tempdir");
    let dir = temp.path().join("locked");
    fs::create_dir(&dir).expect("mkdir");
    let fixed = touch(temp.path(), "fixed");
    let cfg = config(&dir);
    fs::write(&cfg.apps_path, "/gone\n").expect("write apps");
    fs::set_permissions(&dir, fs::Permissions::from_mode(0o555)).expect("chmod");

    // Root ignores directory permissions; nothing to observe in that case.
    let write_check = dir.join("write_check");
    if fs::write(&write_check, "").is_ok() {
        let _ = fs::remove_file(&write_check);
        fs::set_permissions(&dir, fs::Permissions::from_mode(0o755)).expect("chmod back");
        return;
    }

    let spawner = RecordingSpawner::default();
    let mut prompter = ScriptedPrompter::default().answer(Some(&fixed));
    let report = run_launcher(&cfg, &spawner, &mut prompter);
    fs::set_permissions(&dir, fs::Permissions::from_mode(0o755)).expect("chmod back");

    assert!(matches!(report.rewrite, RewriteStatus::Failed { .. }));
    let notices = prompter.notices();
    assert!(matches!(
        notices[notices.len() - 2],
        Notice::AppsFileWriteFailed { .. }
    ));
    assert_eq!(
        notices[notices.len() - 1],
        Notice::Summary {
            opened: 1,
            failed: 0,
            skipped: 0
        }
    );
    assert_eq!(fs::read_to_string(&cfg.apps_path).expect("read"), "/gone\n");
}
