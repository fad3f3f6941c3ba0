//! Migration orchestration: verify, edit in order, roll back on failure.

use std::path::Path;

use jetify_patch::{BackupManager, FileStore, LineEditor};
use regex::Regex;
use tracing::{debug, info, warn};

use crate::error::{MigrateError, MigrateResult};
use crate::recipe::{Recipe, Step, recipes};
use crate::targets::{TargetPaths, TargetRole};

/// Runs the AndroidX migration against one project root.
///
/// One [`Migrator::execute`] call performs the whole migration exactly
/// once: verify all targets up front, edit the four files in fixed
/// order, and on the first failure restore every backed-up file before
/// surfacing the original error.
pub struct Migrator<'a> {
    store: &'a dyn FileStore,
    paths: TargetPaths,
}

impl<'a> Migrator<'a> {
    /// Migrator over the four fixed target paths under `root`.
    pub fn new(store: &'a dyn FileStore, root: &Path) -> Self {
        Self {
            store,
            paths: TargetPaths::resolve(root),
        }
    }

    /// Run the whole migration.
    pub fn execute(&self) -> MigrateResult<()> {
        // Verification runs before any backup exists, so a failure here
        // leaves nothing to restore.
        self.verify_targets()?;

        let backups = BackupManager::new(self.store);
        let all_paths = self.paths.all();

        for recipe in recipes() {
            if let Err(err) = self.migrate_target(&backups, &recipe) {
                warn!(error = %err, "migration failed, rolling back");
                for entry in backups.rollback_all(&all_paths) {
                    warn!(path = %entry.path.display(), outcome = ?entry.outcome, "rollback");
                }
                return Err(err);
            }
        }

        for entry in backups.cleanup_all(&all_paths) {
            debug!(path = %entry.path.display(), outcome = ?entry.outcome, "cleanup");
        }
        info!("conversion to AndroidX complete");
        Ok(())
    }

    /// Check that every target exists and is writable before anything
    /// is backed up or edited. The first offender aborts the run.
    fn verify_targets(&self) -> MigrateResult<()> {
        for role in TargetRole::ALL {
            let path = self.paths.path(role);
            if !self.store.exists(&path) || !self.store.is_writable(&path) {
                return Err(MigrateError::MissingTarget { path });
            }
        }
        Ok(())
    }

    /// Run one recipe: open, back up, interpret the steps, write.
    fn migrate_target(&self, backups: &BackupManager<'_>, recipe: &Recipe) -> MigrateResult<()> {
        let path = self.paths.path(recipe.role);
        debug!(path = %path.display(), "migrating");

        let mut editor = LineEditor::open(self.store, &path)?;
        backups.create(&path)?;

        for step in recipe.steps {
            apply_step(&mut editor, &path, *step)?;
        }
        editor.finish();
        editor.write()?;

        info!(path = %path.display(), "migrated");
        Ok(())
    }
}

fn apply_step(editor: &mut LineEditor<'_>, path: &Path, step: Step) -> MigrateResult<()> {
    match step {
        Step::Advance { anchor } => editor.advance_to(&compile(anchor))?,
        Step::Replace {
            pattern,
            replacement,
        } => editor.edit_current_line(&compile(pattern), replacement)?,
        Step::Append { line } => {
            editor.finish();
            editor.append_line(line);
        }
        Step::VersionGuard { pattern, threshold } => {
            let line = editor.current_line()?;
            if let Some(version) = captured_version(&compile(pattern), line)
                && version >= threshold
            {
                return Err(MigrateError::AlreadyMigrated {
                    path: path.to_path_buf(),
                    version,
                });
            }
        }
    }
    Ok(())
}

// Recipe patterns are fixed table entries; compilation cannot fail for them.
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("recipe pattern is valid")
}

fn captured_version(pattern: &Regex, line: &str) -> Option<u32> {
    pattern.captures(line)?.get(1)?.as_str().parse().ok()
}
