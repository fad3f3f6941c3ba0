//! Filesystem capability used by the editor and backup manager.
//!
//! All disk access goes through [`FileStore`] so editing and rollback
//! logic can be exercised against an in-memory store in unit tests,
//! including injected failures on specific paths.

use std::collections::{HashMap, HashSet};
use std::fs::OpenOptions;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Read/write/copy/delete operations over paths.
pub trait FileStore {
    /// Read the full contents of a file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Overwrite a file with the given contents, creating it if absent.
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;

    /// Copy a file byte-for-byte.
    fn copy(&self, from: &Path, to: &Path) -> io::Result<()>;

    /// Delete a file.
    fn remove(&self, path: &Path) -> io::Result<()>;

    /// Whether a file exists at the path.
    fn exists(&self, path: &Path) -> bool;

    /// Whether the file can be opened for writing.
    fn is_writable(&self, path: &Path) -> bool;
}

/// [`FileStore`] backed by the real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskStore;

impl FileStore for DiskStore {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        std::fs::write(path, contents)
    }

    fn copy(&self, from: &Path, to: &Path) -> io::Result<()> {
        std::fs::copy(from, to).map(|_| ())
    }

    fn remove(&self, path: &Path) -> io::Result<()> {
        std::fs::remove_file(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_writable(&self, path: &Path) -> bool {
        // Open for append so the probe cannot truncate the file.
        OpenOptions::new().append(true).open(path).is_ok()
    }
}

/// In-memory [`FileStore`] for unit tests.
///
/// Paths marked read-only reject writes, copies onto them, and removals,
/// which lets tests inject I/O failures at exact points in a migration.
#[derive(Debug, Default)]
pub struct MemoryStore {
    files: Mutex<HashMap<PathBuf, String>>,
    read_only: Mutex<HashSet<PathBuf>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file with the given contents.
    pub fn insert(&self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        self.files.lock().unwrap().insert(path.into(), contents.into());
    }

    /// Mark a path read-only so subsequent mutations of it fail.
    pub fn set_read_only(&self, path: impl Into<PathBuf>) {
        self.read_only.lock().unwrap().insert(path.into());
    }

    /// Snapshot of a file's contents, if present.
    pub fn contents(&self, path: &Path) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }

    fn check_writable(&self, path: &Path) -> io::Result<()> {
        if self.read_only.lock().unwrap().contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("{} is read-only", path.display()),
            ));
        }
        Ok(())
    }
}

impl FileStore for MemoryStore {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files.lock().unwrap().get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} not found", path.display()),
            )
        })
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        self.check_writable(path)?;
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }

    fn copy(&self, from: &Path, to: &Path) -> io::Result<()> {
        let contents = self.read_to_string(from)?;
        self.check_writable(to)?;
        self.files.lock().unwrap().insert(to.to_path_buf(), contents);
        Ok(())
    }

    fn remove(&self, path: &Path) -> io::Result<()> {
        self.check_writable(path)?;
        self.files
            .lock()
            .unwrap()
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("{} not found", path.display()),
                )
            })
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }

    fn is_writable(&self, path: &Path) -> bool {
        self.exists(path) && !self.read_only.lock().unwrap().contains(path)
    }
}
