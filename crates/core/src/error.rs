//! Greeting operation errors

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised by [`greet`](crate::greet)
#[derive(Error, Debug)]
pub enum GreeterError {
    #[error("Console write failed")]
    Console(#[source] io::Error),

    #[error("I/O failure at {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl GreeterError {
    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Path of the file the operation failed on, if the failure was on the file.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Io { path, .. } => Some(path),
            Self::Console(_) => None,
        }
    }
}
