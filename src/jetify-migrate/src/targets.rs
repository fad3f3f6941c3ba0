//! The four fixed configuration files the migration edits.

use std::path::{Path, PathBuf};

/// Logical role of a target file in the Flutter Android project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetRole {
    /// `android/app/build.gradle` - the primary build file.
    AppBuildGradle,
    /// `android/gradle/wrapper/gradle-wrapper.properties`.
    GradleWrapperProperties,
    /// `android/build.gradle` - the root build file.
    RootBuildGradle,
    /// `android/gradle.properties`.
    GradleProperties,
}

impl TargetRole {
    /// All roles in migration execution order.
    pub const ALL: [TargetRole; 4] = [
        TargetRole::AppBuildGradle,
        TargetRole::GradleWrapperProperties,
        TargetRole::RootBuildGradle,
        TargetRole::GradleProperties,
    ];

    /// Path relative to the project root. The mapping is static; there
    /// is no discovery or inference of paths.
    pub fn relative_path(self) -> &'static str {
        match self {
            TargetRole::AppBuildGradle => "android/app/build.gradle",
            TargetRole::GradleWrapperProperties => {
                "android/gradle/wrapper/gradle-wrapper.properties"
            }
            TargetRole::RootBuildGradle => "android/build.gradle",
            TargetRole::GradleProperties => "android/gradle.properties",
        }
    }
}

/// The four target paths under one project root.
#[derive(Debug, Clone)]
pub struct TargetPaths {
    root: PathBuf,
}

impl TargetPaths {
    /// Join the fixed relative paths onto `root`. Infallible; problems
    /// surface at verification time, not here.
    pub fn resolve(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }

    /// Path of the file filling one role.
    pub fn path(&self, role: TargetRole) -> PathBuf {
        self.root.join(role.relative_path())
    }

    /// All four paths in execution order.
    pub fn all(&self) -> Vec<PathBuf> {
        TargetRole::ALL.iter().map(|role| self.path(*role)).collect()
    }
}
