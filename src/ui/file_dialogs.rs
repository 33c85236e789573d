use std::path::{Path, PathBuf};

use fltk::dialog;

/// Plain text first, everything else reachable from the filter list.
const FILE_FILTER: &str = "Text Files (*.txt)\tAll Files (*)";

fn start_dir(dir: Option<&Path>) -> String {
    dir.map(|d| d.to_string_lossy().into_owned())
        .unwrap_or_else(|| ".".to_string())
}

fn choose(title: &str, dir: Option<&Path>) -> Option<PathBuf> {
    dialog::file_chooser(title, FILE_FILTER, &start_dir(dir), false)
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}

pub fn native_open_dialog(dir: Option<&Path>) -> Option<PathBuf> {
    choose("Open File", dir)
}

pub fn native_save_dialog(dir: Option<&Path>) -> Option<PathBuf> {
    choose("Save File", dir)
}
