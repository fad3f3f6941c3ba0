//! Jetify Patch - line-cursor file editing with backup/restore.
//!
//! This crate provides the low-level pieces of the AndroidX migration:
//! - A forward-only line cursor over one text file, with anchored
//!   advance and first-match-only line substitution
//! - Sibling `.ORIG` backups with best-effort rollback and cleanup
//! - An injected filesystem capability so the editing logic can run
//!   against an in-memory store in tests
//!
//! # Example
//!
//! ```no_run
//! use jetify_patch::{DiskStore, LineEditor};
//! use regex::Regex;
//! use std::path::Path;
//!
//! let store = DiskStore;
//! let mut editor = LineEditor::open(&store, Path::new("build.gradle"))?;
//! editor.advance_to(&Regex::new(r"^\s+minSdkVersion\s")?)?;
//! editor.edit_current_line(&Regex::new(r"minSdkVersion\s.*$")?, "minSdkVersion 21")?;
//! editor.finish();
//! editor.write()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod backup;
mod editor;
mod error;
mod store;

pub use backup::{BACKUP_SUFFIX, BackupManager, BackupOutcome, FileOutcome, backup_path};
pub use editor::LineEditor;
pub use error::{PatchError, PatchResult};
pub use store::{DiskStore, FileStore, MemoryStore};
