//! User interaction: path repair and notices.
//!
//! The launch driver only talks to [`UserPrompter`]. The console prompter lives
//! here; the dialog prompter lives in `io::dialog` behind the `dialog` feature.

use std::io::{BufRead, StdinLock, Stdout, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::report::Notice;

/// Front-end the launcher uses to ask for replacements and report outcomes.
pub trait UserPrompter {
    /// Ask for a replacement for `missing`.
    ///
    /// Returns `Some(path)` only for a path that exists; `None` means skip.
    fn request_replacement(&mut self, missing: &str) -> Result<Option<String>>;

    /// Show a notice to the user.
    fn notify(&mut self, notice: &Notice) -> Result<()>;
}

/// Line-oriented prompter over any reader/writer pair.
///
/// Re-prompts until the answer is an existing path or the skip keyword.
/// End of input counts as skip.
pub struct ConsolePrompter<R, W> {
    input: R,
    output: W,
    skip_keyword: String,
}

impl ConsolePrompter<StdinLock<'static>, Stdout> {
    pub fn stdio(skip_keyword: &str) -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout(), skip_keyword)
    }
}

impl<R: BufRead, W: Write> ConsolePrompter<R, W> {
    pub fn new(input: R, output: W, skip_keyword: &str) -> Self {
        Self {
            input,
            output,
            skip_keyword: skip_keyword.trim().to_string(),
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_answer(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let n = self.input.read_line(&mut line).context("read answer")?;
        if n == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

impl<R: BufRead, W: Write> UserPrompter for ConsolePrompter<R, W> {
    fn request_replacement(&mut self, missing: &str) -> Result<Option<String>> {
        writeln!(self.output, "\nFile not found: {missing}").context("write prompt")?;
        loop {
            write!(
                self.output,
                "Please enter the correct file path (or '{}' to skip this app): ",
                self.skip_keyword
            )
            .context("write prompt")?;
            self.output.flush().context("flush prompt")?;

            let Some(answer) = self.read_answer()? else {
                debug!(missing, "input closed, skipping");
                writeln!(self.output).context("write prompt")?;
                return Ok(None);
            };
            if answer.is_empty() {
                continue;
            }
            if answer.eq_ignore_ascii_case(&self.skip_keyword) {
                return Ok(None);
            }
            if Path::new(&answer).exists() {
                return Ok(Some(answer));
            }
            writeln!(self.output, "File not found: {answer}. Please try again.")
                .context("write prompt")?;
        }
    }

    fn notify(&mut self, notice: &Notice) -> Result<()> {
        if matches!(notice, Notice::AppsFileUpdated { .. }) {
            writeln!(self.output).context("write notice")?;
        }
        writeln!(self.output, "{notice}").context("write notice")?;
        self.output.flush().context("flush notice")
    }
}
