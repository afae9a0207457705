use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};
use tempfile::NamedTempFile;

use crate::error::generator::WriteError;

/// Writes a file by replacing it atomically.
///
/// The contents are written to a temporary file in the destination directory, which
/// is then renamed over `path`. Readers see either the previous file or the complete
/// new one, never a truncated file. Missing parent directories are created.
///
/// # Arguments
/// - `path` - Destination file
/// - `contents` - Full file contents
///
/// # Returns
/// - `Ok(())` - File written
/// - `Err(WriteError)` - Directory creation, writing or renaming failed
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), WriteError> {
    let write_error = |source| WriteError {
        path: path.to_path_buf(),
        source,
    };

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    fs::create_dir_all(&parent).map_err(write_error)?;

    let mut file = NamedTempFile::new_in(&parent).map_err(write_error)?;
    file.write_all(contents.as_bytes()).map_err(write_error)?;
    file.flush().map_err(write_error)?;

    // Temporary files are created owner-only; generated sources are regular files.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.as_file()
            .set_permissions(fs::Permissions::from_mode(0o644))
            .map_err(write_error)?;
    }

    file.persist(path).map_err(|e| write_error(e.error))?;

    Ok(())
}
