//! Apps file text format: one application path per line.

/// Content written when the apps file does not exist yet.
pub const PLACEHOLDER: &str =
    "# Add one application path per line. Lines starting with # are ignored.\n";

/// Parse apps file contents into the ordered list of entries.
///
/// Lines are trimmed. Blank lines are skipped, as are lines starting with
/// `comment_prefix` (trimmed; an empty prefix disables comment handling).
/// Order and duplicates are preserved.
pub fn parse_apps(contents: &str, comment_prefix: &str) -> Vec<String> {
    let comment_prefix = comment_prefix.trim();
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| comment_prefix.is_empty() || !line.starts_with(comment_prefix))
        .map(str::to_string)
        .collect()
}

/// Render entries back to apps file contents, one per line with a trailing newline.
///
/// Blank entries are never written.
pub fn render_apps(entries: &[String]) -> String {
    let mut out = String::new();
    for entry in entries {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        out.push_str(entry);
        out.push('\n');
    }
    out
}
