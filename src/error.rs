use std::io;

use thiserror::Error;

/// Library-wide error type for fskit operations.
#[derive(Debug, Error)]
pub enum FsError {
    /// Underlying I/O failure, surfaced unchanged.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Operation required a directory, found something else.
    #[error("not a directory")]
    NotADirectory,

    /// Operation required a regular file, found something else.
    #[error("not a regular file")]
    NotAFile,

    /// Bounded read refused: the file exceeds the caller's ceiling.
    #[error("file is {size} bytes, larger than the {limit}-byte limit")]
    FileTooLarge { size: u64, limit: u64 },

    /// Home-shorthand expansion requested but no home directory could be
    /// determined for the current user.
    #[error("cannot resolve home directory")]
    HomeDirUnresolved,
}

impl FsError {
    /// Provide an `io::ErrorKind` view for callers branching on coarse error class.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            FsError::Io(err) => err.kind(),
            FsError::NotADirectory => io::ErrorKind::NotADirectory,
            FsError::NotAFile => io::ErrorKind::InvalidInput,
            FsError::FileTooLarge { .. } => io::ErrorKind::FileTooLarge,
            FsError::HomeDirUnresolved => io::ErrorKind::NotFound,
        }
    }
}
