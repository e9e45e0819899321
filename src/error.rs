//src/error.rs

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Everything that can stop a merge run.
#[derive(Debug, Error)]
pub enum MergeError {
    #[error("input file not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("{}:{line}: expected {expected} fields, found {found}", .path.display())]
    MalformedRow {
        path: PathBuf,
        line: usize,
        expected: String,
        found: usize,
    },

    #[error("output directory does not exist: {}", .path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("invalid column layout: {0}")]
    InvalidLayout(String),

    #[error("delimiter {0:?} is not a single ASCII character")]
    InvalidDelimiter(char),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, MergeError>;

impl MergeError {
    /// Wraps an I/O error raised while opening or reading `path` as an input.
    pub(crate) fn from_input(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            MergeError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            MergeError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    pub(crate) fn io(path: &Path, source: io::Error) -> Self {
        MergeError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
