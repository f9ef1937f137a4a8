//! Line input for interactive prompts.

use std::borrow::Cow;
use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::{Context, Result, bail};
use reedline::{
    Prompt, PromptEditMode, PromptHistorySearch, PromptHistorySearchStatus, Reedline, Signal,
};

/// Source of free-text answers.
pub trait Prompter {
    /// Ask a question and return the raw answer. End of input yields an empty answer.
    fn ask(&mut self, question: &str) -> Result<String>;
}

/// Reads answers from the terminal, falling back to plain stdin lines when piped.
pub enum TerminalPrompter {
    Interactive(Box<Reedline>),
    Piped,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        if io::stdin().is_terminal() {
            Self::Interactive(Box::new(Reedline::create()))
        } else {
            Self::Piped
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn ask(&mut self, question: &str) -> Result<String> {
        match self {
            Self::Interactive(editor) => {
                let prompt = QuestionPrompt { question };
                match editor.read_line(&prompt).context("failed to read input")? {
                    Signal::Success(line) => Ok(line),
                    Signal::CtrlC => bail!("cancelled"),
                    _ => Ok(String::new()),
                }
            }
            Self::Piped => {
                let mut stdout = io::stdout();
                write!(stdout, "{question}")?;
                stdout.flush()?;

                let mut line = String::new();
                io::stdin()
                    .lock()
                    .read_line(&mut line)
                    .context("failed to read input")?;
                writeln!(stdout)?;
                Ok(line.trim_end_matches(['\r', '\n']).to_owned())
            }
        }
    }
}

struct QuestionPrompt<'a> {
    question: &'a str,
}

impl Prompt for QuestionPrompt<'_> {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.question)
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_indicator(&self, _prompt_mode: PromptEditMode) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed("... ")
    }

    fn render_prompt_history_search_indicator(
        &self,
        history_search: PromptHistorySearch,
    ) -> Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };
        Cow::Owned(format!("({prefix}reverse-search: {}) ", history_search.term))
    }
}
