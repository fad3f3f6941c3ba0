//! Sibling `.ORIG` backups with best-effort rollback and cleanup.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{PatchError, PatchResult};
use crate::store::FileStore;

/// Suffix appended to a target path to form its backup path.
pub const BACKUP_SUFFIX: &str = ".ORIG";

/// Backup path for a target file.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut raw = path.as_os_str().to_owned();
    raw.push(BACKUP_SUFFIX);
    PathBuf::from(raw)
}

/// Outcome of one file's best-effort restore or cleanup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackupOutcome {
    /// The backup was copied over the original and then deleted.
    Restored,
    /// The backup was deleted.
    Removed,
    /// No backup existed for the file.
    NotPresent,
    /// The operation failed; any backup is left in place for manual recovery.
    Failed(String),
}

/// Per-file entry in a rollback or cleanup report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    /// The target file the entry refers to (not the backup path).
    pub path: PathBuf,
    /// What happened to its backup.
    pub outcome: BackupOutcome,
}

/// Manages `.ORIG` sibling backups for a set of target files.
pub struct BackupManager<'a> {
    store: &'a dyn FileStore,
}

impl<'a> BackupManager<'a> {
    /// Create a backup manager over the given store.
    pub fn new(store: &'a dyn FileStore) -> Self {
        Self { store }
    }

    /// Copy `path` to its backup location before the first edit.
    pub fn create(&self, path: &Path) -> PatchResult<()> {
        self.store
            .copy(path, &backup_path(path))
            .map_err(|source| PatchError::backup(path, source))
    }

    /// Whether a backup exists for `path`.
    pub fn exists(&self, path: &Path) -> bool {
        self.store.exists(&backup_path(path))
    }

    /// Copy the backup over the original, then delete the backup.
    ///
    /// The backup is deleted only once the restore copy succeeded, so a
    /// failed restore leaves it available for manual recovery.
    pub fn restore(&self, path: &Path) -> PatchResult<()> {
        let backup = backup_path(path);
        self.store
            .copy(&backup, path)
            .map_err(|source| PatchError::restore(path, source))?;
        self.store
            .remove(&backup)
            .map_err(|source| PatchError::restore(path, source))
    }

    /// Delete the backup for `path`.
    pub fn remove(&self, path: &Path) -> PatchResult<()> {
        self.store
            .remove(&backup_path(path))
            .map_err(|source| PatchError::backup(path, source))
    }

    /// Restore every file that has a backup, capturing per-file results
    /// instead of propagating them.
    pub fn rollback_all(&self, paths: &[PathBuf]) -> Vec<FileOutcome> {
        paths
            .iter()
            .map(|path| {
                let outcome = if !self.exists(path) {
                    BackupOutcome::NotPresent
                } else {
                    match self.restore(path) {
                        Ok(()) => BackupOutcome::Restored,
                        Err(err) => BackupOutcome::Failed(err.to_string()),
                    }
                };
                debug!(path = %path.display(), ?outcome, "rollback");
                FileOutcome {
                    path: path.clone(),
                    outcome,
                }
            })
            .collect()
    }

    /// Delete every backup that exists, capturing per-file results.
    pub fn cleanup_all(&self, paths: &[PathBuf]) -> Vec<FileOutcome> {
        paths
            .iter()
            .map(|path| {
                let outcome = if !self.exists(path) {
                    BackupOutcome::NotPresent
                } else {
                    match self.remove(path) {
                        Ok(()) => BackupOutcome::Removed,
                        Err(err) => BackupOutcome::Failed(err.to_string()),
                    }
                };
                debug!(path = %path.display(), ?outcome, "cleanup");
                FileOutcome {
                    path: path.clone(),
                    outcome,
                }
            })
            .collect()
    }
}
