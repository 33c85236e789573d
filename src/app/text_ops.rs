use std::path::{Path, PathBuf};

/// Extract filename from a file path
///
/// Returns the filename component of a path, or "Unknown" if it can't be extracted.
pub fn extract_filename(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .filter(|s| !s.is_empty() && *s != ".")
        .map(|s| s.to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Window title for the given document path.
pub fn window_title(path: Option<&Path>) -> String {
    match path {
        Some(p) => format!("{} - NutPad", extract_filename(p)),
        None => "NutPad".to_string(),
    }
}

/// Directory the next file dialog starts in.
///
/// A cancelled dialog (`chosen` is `None`) keeps the previous directory.
pub fn next_dialog_directory(last: Option<PathBuf>, chosen: Option<&Path>) -> Option<PathBuf> {
    match chosen.and_then(Path::parent) {
        Some(parent) if !parent.as_os_str().is_empty() => Some(parent.to_path_buf()),
        _ => last,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_filename_from_path() {
        assert_eq!(extract_filename(Path::new("/home/user/test.txt")), "test.txt");
        assert_eq!(extract_filename(Path::new("test.txt")), "test.txt");
        assert_eq!(extract_filename(Path::new("/path/with/many/levels/file.rs")), "file.rs");
    }

    #[test]
    fn test_extract_filename_edge_cases() {
        assert_eq!(extract_filename(Path::new("/home/user/")), "user");
        assert_eq!(extract_filename(Path::new("")), "Unknown");
        assert_eq!(extract_filename(Path::new("/")), "Unknown");
    }

    #[test]
    fn test_window_title() {
        assert_eq!(window_title(None), "NutPad");
        assert_eq!(window_title(Some(Path::new("/tmp/letter.txt"))), "letter.txt - NutPad");
    }

    #[test]
    fn test_next_dialog_directory() {
        let last = Some(PathBuf::from("/home/me/docs"));
        assert_eq!(next_dialog_directory(last.clone(), None), last);
        assert_eq!(
            next_dialog_directory(last.clone(), Some(Path::new("/tmp/new.txt"))),
            Some(PathBuf::from("/tmp"))
        );
        assert_eq!(next_dialog_directory(last.clone(), Some(Path::new("bare.txt"))), last);
        assert_eq!(next_dialog_directory(None, None), None);
    }
}
