//! Interactive prompts.
//!
//! A terminal gets dialoguer widgets. Piped or redirected stdin is read line
//! by line, with EOF read as an empty answer.

use std::io::{self, BufRead, IsTerminal, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use dialoguer::{Confirm, Input};

pub trait Prompt {
    /// Yes/no question. Anything but an explicit yes is a no.
    fn confirm(&mut self, question: &str) -> Result<bool>;

    /// Free-text answer, trimmed. May be empty.
    fn input(&mut self, question: &str) -> Result<String>;
}

/// dialoguer prompts on the controlling terminal.
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn confirm(&mut self, question: &str) -> Result<bool> {
        Confirm::new()
            .with_prompt(question)
            .default(false)
            .interact()
            .context("Failed to read confirmation")
    }

    fn input(&mut self, question: &str) -> Result<String> {
        let answer = Input::<String>::new()
            .with_prompt(question)
            .allow_empty(true)
            .interact_text()
            .context("Failed to read input")?;
        Ok(answer.trim().to_string())
    }
}

/// Line-based prompts over any reader/writer pair.
pub struct ReaderPrompt<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ReaderPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }
}

impl<R: BufRead, W: Write> Prompt for ReaderPrompt<R, W> {
    fn confirm(&mut self, question: &str) -> Result<bool> {
        let answer = self.ask(&format!("{} (y/N): ", question))?;
        Ok(answer.eq_ignore_ascii_case("y"))
    }

    fn input(&mut self, question: &str) -> Result<String> {
        self.ask(&format!("{}: ", question))
    }
}

/// Prompt bound to the process stdin: dialoguer on a terminal, lines otherwise.
pub fn stdin_prompt() -> Box<dyn Prompt> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        Box::new(TerminalPrompt)
    } else {
        Box::new(ReaderPrompt::new(stdin.lock(), io::stdout()))
    }
}

pub fn confirm_overwrite(path: &Path, prompt: &mut dyn Prompt) -> Result<bool> {
    prompt.confirm(&format!("File {} already exists. Overwrite?", path.display()))
}

/// How the workflow description is obtained when `--description` is absent.
pub enum DescriptionInput<'a> {
    /// stdin is a pipe or file; its whole content is the description.
    Piped(&'a mut dyn Read),
    /// stdin is a terminal; ask for one line.
    Interactive(&'a mut dyn Prompt),
}

/// Resolve the workflow description: flag, then piped input or an
/// interactive prompt, then the `Multi-step workflow for <title>` fallback.
pub fn resolve_description(
    flag: Option<&str>,
    input: DescriptionInput<'_>,
    title: &str,
) -> Result<String> {
    let mut description = flag.unwrap_or_default().trim().to_string();

    if description.is_empty() {
        description = match input {
            DescriptionInput::Piped(reader) => io::read_to_string(reader)?.trim().to_string(),
            DescriptionInput::Interactive(prompt) => {
                prompt.input("Enter workflow description (optional)")?
            }
        };
    }

    if description.is_empty() {
        description = format!("Multi-step workflow for {}", title.to_lowercase());
    }
    Ok(description)
}
