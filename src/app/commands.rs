//! Menu commands.
//!
//! Each menu entry is a [`Command`] run against an [`EditorHost`]. Commands
//! never terminate the process themselves: failures come back as
//! [`AppError`] and leaving the application is signalled with
//! [`CommandOutcome::Exit`].

use std::path::{Path, PathBuf};

use super::error::{AppError, Result};
use super::file_io::{read_document, write_document};
use super::messages::Message;
use super::spelling::{SpellingReport, WordList, check_text};
use super::text_ops::window_title;

/// What a command needs from the application shell.
pub trait EditorHost {
    /// Current document text.
    fn text(&self) -> String;

    /// Replace the whole document.
    fn replace_text(&mut self, text: &str);

    /// Ask the user for a file to open. `None` when cancelled.
    fn choose_open_path(&mut self) -> Option<PathBuf>;

    /// Ask the user for a file to save to. `None` when cancelled.
    fn choose_save_path(&mut self) -> Option<PathBuf>;

    /// Remember the path the document now corresponds to.
    fn set_document_path(&mut self, path: &Path);

    /// Word list, loaded on first use.
    fn word_list(&mut self) -> Result<&WordList>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    Cancelled,
    Opened(PathBuf),
    Saved(PathBuf),
    Checked(SpellingReport),
    Exit,
}

pub trait Command {
    fn label(&self) -> &'static str;

    fn execute(&self, host: &mut dyn EditorHost) -> Result<CommandOutcome>;
}

pub struct OpenCommand;

impl Command for OpenCommand {
    fn label(&self) -> &'static str {
        "Open..."
    }

    fn execute(&self, host: &mut dyn EditorHost) -> Result<CommandOutcome> {
        let Some(path) = host.choose_open_path() else {
            return Ok(CommandOutcome::Cancelled);
        };
        let content = read_document(&path)?;
        host.replace_text(&content);
        host.set_document_path(&path);
        Ok(CommandOutcome::Opened(path))
    }
}

pub struct SaveCommand;

impl Command for SaveCommand {
    fn label(&self) -> &'static str {
        "Save..."
    }

    fn execute(&self, host: &mut dyn EditorHost) -> Result<CommandOutcome> {
        let Some(path) = host.choose_save_path() else {
            return Ok(CommandOutcome::Cancelled);
        };
        write_document(&path, &host.text())?;
        host.set_document_path(&path);
        Ok(CommandOutcome::Saved(path))
    }
}

pub struct SpellCheckCommand;

impl Command for SpellCheckCommand {
    fn label(&self) -> &'static str {
        "Check Spelling"
    }

    fn execute(&self, host: &mut dyn EditorHost) -> Result<CommandOutcome> {
        let text = host.text();
        let report = check_text(&text, host.word_list()?);
        host.replace_text(&report.marked);
        log::info!(
            "Spelling check: {} words, {} unknown",
            report.words_checked,
            report.unknown.len()
        );
        Ok(CommandOutcome::Checked(report))
    }
}

/// Leaves without asking about unsaved changes.
pub struct ExitCommand;

impl Command for ExitCommand {
    fn label(&self) -> &'static str {
        "Exit"
    }

    fn execute(&self, _host: &mut dyn EditorHost) -> Result<CommandOutcome> {
        Ok(CommandOutcome::Exit)
    }
}

/// Command bound to a menu message.
pub fn command_for(message: Message) -> &'static dyn Command {
    match message {
        Message::FileOpen => &OpenCommand,
        Message::FileSave => &SaveCommand,
        Message::CheckSpelling => &SpellCheckCommand,
        Message::FileExit | Message::WindowClose => &ExitCommand,
    }
}

/// New window title after a command, or `None` to keep the current one.
pub fn title_after(outcome: &CommandOutcome) -> Option<String> {
    match outcome {
        CommandOutcome::Opened(path) | CommandOutcome::Saved(path) => Some(window_title(Some(path.as_path()))),
        CommandOutcome::Cancelled | CommandOutcome::Checked(_) | CommandOutcome::Exit => None,
    }
}

/// Run the command for `message`, logging failures.
pub fn dispatch(message: Message, host: &mut dyn EditorHost) -> Result<CommandOutcome> {
    let command = command_for(message);
    log::debug!("Running command '{}'", command.label());
    command.execute(host).inspect_err(|e: &AppError| {
        log::warn!("Command '{}' failed: {}", command.label(), e);
    })
}
