//! Whole-file read, write, append, and removal.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::dir::remove_if_empty;
use crate::error::FsError;
use crate::path::{PathType, classify};

/// Read the whole file at `path` into memory.
///
/// A positive `max_bytes` opts into a size guard: the path is stat'ed first,
/// a directory is rejected with [`FsError::NotAFile`], and a size strictly
/// greater than `max_bytes` is rejected with [`FsError::FileTooLarge`]. A
/// `max_bytes` of 0 reads unconditionally, subject only to platform read
/// errors.
pub fn read_file<P: AsRef<Path>>(path: P, max_bytes: u64) -> Result<Vec<u8>, FsError> {
    let path = path.as_ref();
    if max_bytes > 0 {
        let meta = fs::metadata(path)?;
        if meta.is_dir() {
            return Err(FsError::NotAFile);
        }
        if meta.len() > max_bytes {
            return Err(FsError::FileTooLarge { size: meta.len(), limit: max_bytes });
        }
    }
    Ok(fs::read(path)?)
}

/// Overwrite the file at `path` with `data`, then set its permission bits to
/// `mode`.
///
/// The file is created if absent (its parent directory must already exist)
/// and truncated if present. The mode is applied after the content write in
/// every case, so the final mode reflects this call regardless of the file's
/// prior state. On non-Unix platforms the mode step is a no-op. The handle
/// is released on every exit path.
pub fn write_file<P: AsRef<Path>>(path: P, data: &[u8], mode: u32) -> Result<(), FsError> {
    let path = path.as_ref();
    let mut file = File::create(path)?;
    file.write_all(data)?;
    set_mode(path, mode)?;
    Ok(())
}

/// Append `data` to the file at `path`, creating it with `mode` if absent.
///
/// An existing file's permissions are left untouched; `mode` only applies at
/// creation. The parent directory must already exist.
pub fn append_file<P: AsRef<Path>>(path: P, data: &[u8], mode: u32) -> Result<(), FsError> {
    let mut options = OpenOptions::new();
    options.append(true).create(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;

    let mut file = options.open(path.as_ref())?;
    file.write_all(data)?;
    Ok(())
}

/// Delete the regular file at `path`.
///
/// Anything that does not classify as a regular file (directories, missing
/// paths, irregular entries) is rejected with [`FsError::NotAFile`] and
/// nothing is deleted. When `remove_empty_parent` is set, the parent
/// directory is also removed if the deletion left it empty; by then the file
/// deletion has already committed, so a cascade failure surfaces after the
/// fact.
pub fn remove_file<P: AsRef<Path>>(path: P, remove_empty_parent: bool) -> Result<(), FsError> {
    let path = path.as_ref();
    if classify(path) != PathType::File {
        return Err(FsError::NotAFile);
    }

    fs::remove_file(path)?;

    if !remove_empty_parent {
        return Ok(());
    }

    // A bare file name has the working directory as its parent.
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    remove_if_empty(parent)
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn set_mode(_path: &Path, _mode: u32) -> std::io::Result<()> {
    Ok(())
}
