use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::storage::errors::StorageError;

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Creates the parent directory of `path` if it does not exist yet.
pub fn ensure_parent_dir(path: &Path) -> Result<(), StorageError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).map_err(|err| StorageError::io(parent, err))
        }
        _ => Ok(()),
    }
}

/// Hidden sibling of `path`, unique per process and call.
fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or_default());
    name.push(format!(
        ".{}.{}.tmp",
        std::process::id(),
        TEMP_COUNTER.fetch_add(1, Ordering::Relaxed)
    ));

    path.with_file_name(name)
}

/// Writes `bytes` next to `path` and renames the result into place.
///
/// Readers see either the previous file or the complete new one. The
/// temporary file is removed when any step fails.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), StorageError> {
    ensure_parent_dir(path)?;
    let temp = temp_sibling(path);

    let result = std::fs::write(&temp, bytes)
        .map_err(|err| StorageError::io(&temp, err))
        .and_then(|()| std::fs::rename(&temp, path).map_err(|err| StorageError::io(path, err)));

    if result.is_err() {
        let _ = std::fs::remove_file(&temp);
    }

    result
}
