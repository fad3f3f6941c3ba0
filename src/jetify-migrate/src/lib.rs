//! Jetify Migrate - AndroidX conversion for Flutter projects.
//!
//! Rewrites a Flutter project's Android build configuration from the
//! legacy `com.android.support` libraries to namespaced `androidx`
//! equivalents. Four fixed files are edited in order, each through an
//! anchored line-rewrite recipe; the whole operation is all-or-nothing,
//! with sibling `.ORIG` backups restored on any failure.
//!
//! # Example
//!
//! ```no_run
//! use jetify_migrate::convert_project;
//! use std::path::Path;
//!
//! convert_project(Path::new("/work/my_flutter_app"))?;
//! # Ok::<(), jetify_migrate::MigrateError>(())
//! ```

mod error;
mod migrator;
mod recipe;
mod targets;

pub use error::{MigrateError, MigrateResult};
pub use migrator::Migrator;
pub use recipe::{COMPILE_SDK_THRESHOLD, Recipe, Step, recipes};
pub use targets::{TargetPaths, TargetRole};

use std::path::Path;

use jetify_patch::DiskStore;

/// Convert the Flutter project at `root` on the real filesystem.
///
/// This is the main entry point. It verifies the four target files,
/// migrates them in order, and either cleans up its backups on success
/// or restores every file and surfaces the original error.
pub fn convert_project(root: &Path) -> MigrateResult<()> {
    let store = DiskStore;
    Migrator::new(&store, root).execute()
}
