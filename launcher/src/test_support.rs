//! Test-only doubles for the spawner and prompter seams.

use std::cell::RefCell;
use std::collections::{HashSet, VecDeque};
use std::path::Path;

use anyhow::{Result, anyhow};

use crate::core::report::Notice;
use crate::io::prompt::UserPrompter;
use crate::io::spawn::Spawner;

/// Create an empty file `name` in `dir` and return its path as a string.
pub fn touch(dir: &Path, name: &str) -> String {
    let path = dir.join(name);
    std::fs::write(&path, "").expect("create test file");
    path.display().to_string()
}

/// Spawner that records every call instead of starting processes.
#[derive(Debug, Default)]
pub struct RecordingSpawner {
    calls: RefCell<Vec<String>>,
    failing: HashSet<String>,
}

impl RecordingSpawner {
    /// Make spawning `path` fail with a permission error.
    pub fn failing(mut self, path: &str) -> Self {
        self.failing.insert(path.to_string());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl Spawner for RecordingSpawner {
    fn spawn(&self, path: &Path) -> Result<()> {
        let path = path.display().to_string();
        self.calls.borrow_mut().push(path.clone());
        if self.failing.contains(&path) {
            return Err(anyhow!("permission denied"));
        }
        Ok(())
    }
}

/// Prompter with queued replacement answers and recorded notices.
///
/// Once the queue is empty every request is answered with skip.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Option<String>>,
    asked: Vec<String>,
    notices: Vec<Notice>,
    fail_prompts: bool,
}

impl ScriptedPrompter {
    /// Queue an answer; `None` is skip.
    pub fn answer(mut self, answer: Option<&str>) -> Self {
        self.answers.push_back(answer.map(str::to_string));
        self
    }

    /// Make every replacement request return an error.
    pub fn fail_prompts(mut self) -> Self {
        self.fail_prompts = true;
        self
    }

    /// Missing paths the prompter was asked about, in order.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }
}

impl UserPrompter for ScriptedPrompter {
    fn request_replacement(&mut self, missing: &str) -> Result<Option<String>> {
        self.asked.push(missing.to_string());
        if self.fail_prompts {
            return Err(anyhow!("prompt unavailable"));
        }
        Ok(self.answers.pop_front().flatten())
    }

    fn notify(&mut self, notice: &Notice) -> Result<()> {
        self.notices.push(notice.clone());
        Ok(())
    }
}
