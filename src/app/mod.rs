//! Application layer.
//!
//! - `commands` - the menu actions and the `EditorHost` they run against
//! - `spelling` - word list and whole-document check
//! - `file_io` - whole-file read/write
//! - `state` - the FLTK-backed shell that hosts the commands

pub mod buffer_utils;
pub mod commands;
pub mod error;
pub mod file_io;
pub mod messages;
pub mod settings;
pub mod spelling;
pub mod state;
pub mod text_ops;

pub use commands::{Command, CommandOutcome, EditorHost};
pub use error::{AppError, Result};
pub use messages::Message;
pub use settings::AppSettings;
pub use spelling::{SpellingReport, WordList};
