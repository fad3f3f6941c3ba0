//! Error types for patch operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for patch operations.
pub type PatchResult<T> = Result<T, PatchError>;

/// Errors that can occur while editing or backing up a target file.
#[derive(Debug, Error)]
pub enum PatchError {
    /// Failed to read a target file.
    #[error("Failed to read file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a target file.
    #[error("Failed to write file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to copy a target file to its backup location.
    #[error("Backup failed for {path}: {source}")]
    Backup {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to copy a backup over its original file.
    #[error("Restore failed for {path}: {source}")]
    Restore {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No line matching the anchor pattern exists before end of file.
    ///
    /// The file is already migrated, in an unexpected format, or in a
    /// conflicting format; the whole file edit aborts without writing.
    #[error("Did not find expected line matching `{pattern}` in {path}")]
    AnchorNotFound { path: PathBuf, pattern: String },

    /// The line cursor moved past the end of the file.
    #[error("Line cursor out of range (line {line}) in {path}")]
    CursorOutOfRange { path: PathBuf, line: usize },
}

impl PatchError {
    /// Create a read error.
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Create a write error.
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// Create a backup error.
    pub fn backup(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Backup {
            path: path.into(),
            source,
        }
    }

    /// Create a restore error.
    pub fn restore(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Restore {
            path: path.into(),
            source,
        }
    }

    /// Create an anchor-not-found error.
    pub fn anchor_not_found(path: impl Into<PathBuf>, pattern: impl Into<String>) -> Self {
        Self::AnchorNotFound {
            path: path.into(),
            pattern: pattern.into(),
        }
    }

    /// Create a cursor-out-of-range error.
    pub fn cursor_out_of_range(path: impl Into<PathBuf>, line: usize) -> Self {
        Self::CursorOutOfRange {
            path: path.into(),
            line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PatchError::anchor_not_found("/project/build.gradle", r"^\s+compileSdkVersion\s");
        assert!(err.to_string().contains("build.gradle"));
        assert!(err.to_string().contains("compileSdkVersion"));

        let err = PatchError::cursor_out_of_range("/project/build.gradle", 42);
        assert!(err.to_string().contains("42"));
    }

    #[test]
    fn test_io_source_is_preserved() {
        use std::error::Error;

        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = PatchError::write("/project/build.gradle", io_err);
        assert!(err.source().is_some());
        assert!(err.to_string().contains("denied"));
    }
}
