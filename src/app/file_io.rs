use std::fs;
use std::io;
use std::path::Path;

use super::error::{AppError, Result};

/// Read a whole file as UTF-8 text.
///
/// The editor buffer holds NUL-terminated text, so files containing a NUL
/// byte are refused rather than silently truncated.
pub fn read_document(path: &Path) -> Result<String> {
    let open_error = |source: io::Error| AppError::Open {
        path: path.to_path_buf(),
        source,
    };
    let content = fs::read_to_string(path).map_err(open_error)?;
    if content.contains('\0') {
        return Err(open_error(io::Error::new(
            io::ErrorKind::InvalidData,
            "file contains NUL bytes",
        )));
    }
    log::info!("Read {} bytes from {}", content.len(), path.display());
    Ok(content)
}

/// Write `text` to `path`, replacing whatever is there.
pub fn write_document(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).map_err(|source| AppError::Save {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Wrote {} bytes to {}", text.len(), path.display());
    Ok(())
}
