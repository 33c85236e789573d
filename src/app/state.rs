use std::path::{Path, PathBuf};

use fltk::{dialog, prelude::*, text::TextBuffer, window::Window};

use super::buffer_utils::buffer_text;
use super::commands::{CommandOutcome, EditorHost, dispatch, title_after};
use super::error::Result;
use super::messages::Message;
use super::settings::AppSettings;
use super::spelling::{WordList, WordListCache};
use super::text_ops::next_dialog_directory;
use crate::ui::dialogs::spelling_report::show_spelling_report;
use crate::ui::file_dialogs::{native_open_dialog, native_save_dialog};

pub struct AppState {
    pub window: Window,
    pub buffer: TextBuffer,
    pub settings: AppSettings,
    /// Path the document was last opened from or saved to.
    pub document_path: Option<PathBuf>,
    /// Last directory used in a file open/save dialog.
    pub last_directory: Option<PathBuf>,
    word_list: WordListCache,
}

impl AppState {
    pub fn new(window: Window, buffer: TextBuffer, settings: AppSettings) -> Self {
        let word_list = WordListCache::new(settings.word_list_path.clone());
        Self {
            window,
            buffer,
            settings,
            document_path: None,
            last_directory: None,
            word_list,
        }
    }

    /// Handle one menu message. Returns `false` when the app should exit.
    pub fn handle(&mut self, msg: Message) -> bool {
        match dispatch(msg, self) {
            Ok(CommandOutcome::Exit) => return false,
            Ok(outcome) => {
                if let Some(title) = title_after(&outcome) {
                    self.window.set_label(&title);
                }
                if let CommandOutcome::Checked(report) = &outcome {
                    show_spelling_report(report);
                }
            }
            Err(e) => dialog::alert_default(&e.to_string()),
        }
        true
    }

    fn remember_directory(&mut self, chosen: Option<&Path>) {
        self.last_directory = next_dialog_directory(self.last_directory.take(), chosen);
    }
}

impl EditorHost for AppState {
    fn text(&self) -> String {
        buffer_text(&self.buffer)
    }

    fn replace_text(&mut self, text: &str) {
        self.buffer.set_text(text);
    }

    fn choose_open_path(&mut self) -> Option<PathBuf> {
        let path = native_open_dialog(self.last_directory.as_deref());
        self.remember_directory(path.as_deref());
        path
    }

    fn choose_save_path(&mut self) -> Option<PathBuf> {
        let path = native_save_dialog(self.last_directory.as_deref());
        self.remember_directory(path.as_deref());
        path
    }

    fn set_document_path(&mut self, path: &Path) {
        self.document_path = Some(path.to_path_buf());
    }

    fn word_list(&mut self) -> Result<&WordList> {
        self.word_list.get()
    }
}
