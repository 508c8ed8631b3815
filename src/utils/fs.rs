//! File system helpers for reading templates and writing generated prompts.
//!
//! Writes go through a temp file that is synced and then renamed over the
//! target, so a reader never sees a half-written prompt. Failures are reported
//! as [`CursorflowError::FileSystemError`] carrying the OS message.
//!
//! # Examples
//!
//! ```rust,no_run
//! use cursorflow::utils::fs::{ensure_dir, safe_write};
//! use std::path::Path;
//!
//! # fn example() -> Result<(), cursorflow::core::CursorflowError> {
//! ensure_dir(Path::new("out/prompts"))?;
//! safe_write(Path::new("out/prompts/research_plan_rust.prompt.md"), "# Plan")?;
//! # Ok(())
//! # }
//! ```

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::core::CursorflowError;

/// Create `path` and all missing parents.
///
/// Fails if `path` exists but is not a directory.
pub fn ensure_dir(path: &Path) -> Result<(), CursorflowError> {
    if !path.exists() {
        fs::create_dir_all(path)
            .map_err(|e| CursorflowError::file_system("create directory", path, &e))?;
    } else if !path.is_dir() {
        return Err(CursorflowError::FileSystemError {
            operation: "create directory".to_string(),
            path: path.display().to_string(),
            reason: "path exists but is not a directory".to_string(),
        });
    }
    Ok(())
}

/// Write a string to `path` atomically. See [`atomic_write`].
pub fn safe_write(path: &Path, content: &str) -> Result<(), CursorflowError> {
    atomic_write(path, content.as_bytes())
}

/// Write bytes to `path` with write-then-rename, creating parent directories.
///
/// The temp file is removed again if any step after its creation fails.
pub fn atomic_write(path: &Path, content: &[u8]) -> Result<(), CursorflowError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)?;
    }

    let temp_path = temp_path_for(path);
    let mut file = fs::File::create(&temp_path)
        .map_err(|e| CursorflowError::file_system("create temp file", &temp_path, &e))?;

    let result = write_and_sync(&mut file, content, &temp_path).and_then(|()| {
        drop(file);
        fs::rename(&temp_path, path).map_err(|e| CursorflowError::file_system("write", path, &e))
    });
    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

fn write_and_sync(file: &mut fs::File, content: &[u8], temp_path: &Path) -> Result<(), CursorflowError> {
    file.write_all(content)
        .map_err(|e| CursorflowError::file_system("write", temp_path, &e))?;
    file.sync_all().map_err(|e| CursorflowError::file_system("sync", temp_path, &e))
}

/// `foo.prompt.md` -> `foo.prompt.md.tmp`, next to the target.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Read a UTF-8 text file.
pub fn read_text_file(path: &Path) -> Result<String, CursorflowError> {
    fs::read_to_string(path).map_err(|e| CursorflowError::file_system("read", path, &e))
}

/// Expand a leading `~` and environment variables in a user-supplied path.
pub fn expand_user_path(input: &str) -> PathBuf {
    match shellexpand::full(input) {
        Ok(expanded) => PathBuf::from(expanded.as_ref()),
        Err(_) => PathBuf::from(shellexpand::tilde(input).as_ref()),
    }
}
