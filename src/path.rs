//! Path classification and home-relative path resolution.

use std::env;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::error::FsError;

/// Classification of a filesystem path at the instant it was queried.
///
/// A classification is a snapshot, not a guarantee: the filesystem may change
/// between the query and any later operation. Nothing is cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathType {
    /// Nothing exists at this path.
    NotExist,
    /// A directory.
    Directory,
    /// A regular file.
    File,
    /// Exists, but is neither a directory nor a regular file (socket,
    /// device, ...).
    IrregularPath,
    /// Exists, but could not be fully characterized (e.g. a permission
    /// error during the metadata query).
    BadPath,
}

/// Classify the path.
///
/// Never fails: a metadata failure other than not-found classifies as
/// [`PathType::BadPath`]. The query follows symbolic links, so a link
/// resolving to a regular file classifies as `File` and a dangling link as
/// `NotExist`.
pub fn classify<P: AsRef<Path>>(path: P) -> PathType {
    let meta = match fs::metadata(path) {
        Ok(meta) => meta,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return PathType::NotExist,
        Err(_) => return PathType::BadPath,
    };

    let file_type = meta.file_type();
    if file_type.is_dir() {
        PathType::Directory
    } else if file_type.is_file() {
        PathType::File
    } else {
        PathType::IrregularPath
    }
}

/// Return true if the path classifies as any of `expected`.
///
/// An empty set accepts every path.
pub fn matches_any<P: AsRef<Path>>(path: P, expected: &[PathType]) -> bool {
    if expected.is_empty() {
        return true;
    }
    expected.contains(&classify(path))
}

/// The current user's home directory, or `None` if it cannot be determined.
pub fn home_dir() -> Option<PathBuf> {
    dirs::home_dir()
}

/// Expand home shorthand and normalize to an absolute, cleaned path.
///
/// A bare `~` or a leading `~/` is replaced with the home directory, failing
/// with [`FsError::HomeDirUnresolved`] when none can be determined. A
/// component that merely begins with `~` (e.g. `~backup`) is not shorthand
/// and is left alone. Relative paths are joined to the current working
/// directory; `.` and `..` segments are then resolved lexically. Beyond the
/// home lookup the filesystem is never consulted, so the result is not
/// guaranteed to exist.
pub fn resolve_absolute<P: AsRef<Path>>(path: P) -> Result<PathBuf, FsError> {
    let path = path.as_ref();

    let expanded = match path.strip_prefix("~") {
        Ok(rest) => home_dir().ok_or(FsError::HomeDirUnresolved)?.join(rest),
        Err(_) => path.to_path_buf(),
    };

    let absolute =
        if expanded.is_absolute() { expanded } else { env::current_dir()?.join(expanded) };
    Ok(normalize(&absolute))
}

/// Normalize a path by resolving `.` and `..` components lexically.
/// Does not access the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut components = path.components().peekable();
    let mut result = if let Some(Component::RootDir) = components.peek() {
        components.next();
        PathBuf::from("/")
    } else {
        PathBuf::new()
    };

    for component in components {
        match component {
            // Keep prefix as is (e.g., C:\ on Windows)
            Component::Prefix(..) | Component::RootDir => result.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                result.pop();
            }
            Component::Normal(part) => result.push(part),
        }
    }
    result
}
