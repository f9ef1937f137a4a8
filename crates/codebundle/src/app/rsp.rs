//! Interactive creation of `bundle.rsp` response files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::infra::prompt::Prompter;

/// Fixed name of the response file written into the root directory.
pub const RESPONSE_FILE: &str = "bundle.rsp";

const LANGUAGE_QUESTION: &str = "Languages to include (cs, js, ts, py, java, all): ";
const OUTPUT_QUESTION: &str = "Output file path: ";
const NOTE_QUESTION: &str = "Add a source note before each file? (true/false): ";
const SORT_QUESTION: &str = "Sort files by (name/type): ";
const REMOVE_EMPTY_QUESTION: &str = "Remove empty lines? (true/false): ";
const AUTHOR_QUESTION: &str = "Author name (leave empty to skip): ";

/// Answers collected from the interactive prompts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseFile {
    pub languages: String,
    pub output: String,
    pub note: bool,
    pub sort: String,
    pub remove_empty_lines: bool,
    pub author: String,
}

impl ResponseFile {
    /// Ask every question in order. Answers are taken as typed.
    pub fn gather(prompter: &mut dyn Prompter) -> Result<Self> {
        let languages = prompter.ask(LANGUAGE_QUESTION)?;
        let output = prompter.ask(OUTPUT_QUESTION)?;
        let note = parse_flag(&prompter.ask(NOTE_QUESTION)?);
        let sort = prompter.ask(SORT_QUESTION)?;
        let remove_empty_lines = parse_flag(&prompter.ask(REMOVE_EMPTY_QUESTION)?);
        let author = prompter.ask(AUTHOR_QUESTION)?;

        Ok(Self {
            languages: languages.trim().to_owned(),
            output: output.trim().to_owned(),
            note,
            sort: sort.trim().to_owned(),
            remove_empty_lines,
            author: author.trim().to_owned(),
        })
    }

    /// Single-line `bundle` invocation carrying only non-default options.
    pub fn to_command_line(&self) -> String {
        let mut line = format!(
            "bundle --language {} --output \"{}\"",
            self.languages, self.output
        );
        if self.note {
            line.push_str(" --note");
        }
        if !self.sort.is_empty() && !self.sort.eq_ignore_ascii_case("name") {
            line.push_str(&format!(" --sort {}", self.sort));
        }
        if self.remove_empty_lines {
            line.push_str(" --remove-empty-lines");
        }
        if !self.author.is_empty() {
            line.push_str(&format!(" --author \"{}\"", self.author));
        }
        line
    }

    /// Write the command line to `bundle.rsp` under `root`, replacing any existing file.
    pub fn write(&self, root: &Path) -> Result<PathBuf> {
        let path = root.join(RESPONSE_FILE);
        fs::write(&path, self.to_command_line())
            .with_context(|| format!("failed to write response file {}", path.display()))?;
        tracing::info!(path = %path.display(), "response file written");
        Ok(path)
    }
}

/// Free-text boolean: only `true` (any case) counts, everything else is false.
pub fn parse_flag(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("true")
}

/// Run the prompts and persist the resulting response file.
pub fn create(root: &Path, prompter: &mut dyn Prompter) -> Result<PathBuf> {
    let response = ResponseFile::gather(prompter)?;
    tracing::debug!(?response, "collected response file answers");
    response.write(root)
}
