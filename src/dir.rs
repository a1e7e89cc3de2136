//! Directory listing and empty-directory handling.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::FsError;

/// List the names of regular files directly inside `dir`.
///
/// Enumerates up to `max_entries` directory entries (all of them when
/// `max_entries` is 0), then keeps only regular files. An `ext` of `""` or
/// `"*"` keeps every file; any other value keeps only names ending in
/// `.` + `ext` (case-sensitive). Names are returned in enumeration order,
/// which is not guaranteed sorted.
///
/// Fails with [`FsError::NotADirectory`] when `dir` is not a directory; an
/// empty or fully-filtered directory yields an empty vec, not an error.
pub fn list_files<P: AsRef<Path>>(
    dir: P,
    ext: &str,
    max_entries: usize,
) -> Result<Vec<String>, FsError> {
    let full_ext = if ext.is_empty() || ext == "*" { None } else { Some(format!(".{ext}")) };

    let mut names = Vec::new();
    for entry in open_dir(dir.as_ref())?.take(entry_cap(max_entries)) {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if let Some(suffix) = &full_ext
            && !name.ends_with(suffix)
        {
            continue;
        }
        names.push(name);
    }
    Ok(names)
}

/// List the names of directories directly inside `dir`.
///
/// Same enumeration and error contract as [`list_files`], without the
/// extension concept.
pub fn list_subdirectories<P: AsRef<Path>>(
    dir: P,
    max_entries: usize,
) -> Result<Vec<String>, FsError> {
    let mut names = Vec::new();
    for entry in open_dir(dir.as_ref())?.take(entry_cap(max_entries)) {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            names.push(entry.file_name().to_string_lossy().to_string());
        }
    }
    Ok(names)
}

/// Return true if the directory at `path` has no entries.
///
/// Reads at most one entry. Fails with [`FsError::NotADirectory`] when
/// `path` is not a directory; other I/O failures pass through.
pub fn is_empty_dir<P: AsRef<Path>>(path: P) -> Result<bool, FsError> {
    let mut entries = open_dir(path.as_ref())?;
    match entries.next() {
        None => Ok(true),
        Some(Ok(_)) => Ok(false),
        Some(Err(err)) => Err(err.into()),
    }
}

/// Remove the directory at `path` if it is empty.
///
/// A non-empty directory is left intact and the call succeeds as a no-op.
pub fn remove_if_empty<P: AsRef<Path>>(path: P) -> Result<(), FsError> {
    let path = path.as_ref();
    if is_empty_dir(path)? {
        fs::remove_dir(path)?;
    }
    Ok(())
}

fn open_dir(path: &Path) -> Result<fs::ReadDir, FsError> {
    fs::read_dir(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotADirectory => FsError::NotADirectory,
        _ => FsError::Io(err),
    })
}

fn entry_cap(max_entries: usize) -> usize {
    if max_entries == 0 { usize::MAX } else { max_entries }
}
