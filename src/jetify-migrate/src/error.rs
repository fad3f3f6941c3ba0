//! Error types for the migration orchestration.

use std::path::PathBuf;

use jetify_patch::PatchError;
use thiserror::Error;

/// Result type for migration operations.
pub type MigrateResult<T> = Result<T, MigrateError>;

/// Errors that can abort a migration run.
#[derive(Debug, Error)]
pub enum MigrateError {
    /// A required target file is absent or not writable. Detected up
    /// front, before any backup or edit.
    #[error("{path} does not exist or is not writable")]
    MissingTarget { path: PathBuf },

    /// The primary build file already carries a compile-SDK version at
    /// or above the migration threshold; no changes were made.
    #[error(
        "compileSdkVersion is already {version} in {path}; the project looks already migrated, no changes made"
    )]
    AlreadyMigrated { path: PathBuf, version: u32 },

    /// A line-editing or backup failure from the patch layer.
    #[error(transparent)]
    Patch(#[from] PatchError),
}
