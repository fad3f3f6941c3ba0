//! Declarative per-file migration recipes.
//!
//! Each target file is described by an ordered list of [`Step`]s that the
//! migrator interprets; adding a fifth target file is a data change here,
//! not new control flow. Patterns and replacement literals are fixed and
//! not caller-configurable.

use crate::targets::TargetRole;

/// Compile-SDK version at or above which the primary build file is
/// considered already migrated.
pub const COMPILE_SDK_THRESHOLD: u32 = 28;

/// One edit step in a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Skip forward to the first line matching `anchor`, copying the
    /// skipped lines verbatim.
    Advance { anchor: &'static str },
    /// Substitute the first match of `pattern` in the current line and
    /// move past it.
    Replace {
        pattern: &'static str,
        replacement: &'static str,
    },
    /// Copy any remaining input verbatim, then add a literal line at the
    /// end of the output.
    Append { line: &'static str },
    /// Inspect the current line; if `pattern` captures a number at or
    /// above `threshold`, the project is already migrated and the whole
    /// attempt aborts without writing.
    VersionGuard {
        pattern: &'static str,
        threshold: u32,
    },
}

/// Ordered edit sequence for one target file.
#[derive(Debug, Clone)]
pub struct Recipe {
    /// Which target file the steps apply to.
    pub role: TargetRole,
    /// The steps, in order.
    pub steps: &'static [Step],
}

const APP_BUILD_GRADLE_STEPS: &[Step] = &[
    Step::Advance {
        anchor: r"^android\s*\{$",
    },
    Step::Advance {
        anchor: r"^\s+compileSdkVersion\s",
    },
    Step::VersionGuard {
        pattern: r"compileSdkVersion\s+(\d+)",
        threshold: COMPILE_SDK_THRESHOLD,
    },
    Step::Replace {
        pattern: r"compileSdkVersion\s.*$",
        replacement: "compileSdkVersion 28",
    },
    Step::Advance {
        anchor: r"^\s+defaultConfig\s+\{$",
    },
    Step::Advance {
        anchor: r"^\s+targetSdkVersion\s",
    },
    Step::Replace {
        pattern: r"targetSdkVersion\s.*$",
        replacement: "targetSdkVersion 28",
    },
    Step::Advance {
        anchor: r"android\.support\.test\.runner\.AndroidJUnitRunner",
    },
    Step::Replace {
        pattern: r"android\.support\.test\.runner\.AndroidJUnitRunner",
        replacement: "androidx.test.runner.AndroidJUnitRunner",
    },
    Step::Advance {
        anchor: r"^dependencies\s+\{$",
    },
    Step::Advance {
        anchor: r"com\.android\.support\.test:runner:",
    },
    Step::Replace {
        pattern: r"com\.android\.support\.test:runner:[\d.]+",
        replacement: "androidx.test.runner:1.1.1",
    },
    Step::Advance {
        anchor: r"com\.android\.support\.test\.espresso:espresso-core:",
    },
    Step::Replace {
        pattern: r"com\.android\.support\.test\.espresso:espresso-core:[\d.]+",
        replacement: "androidx.test.espresso:espresso-core:3.1.1",
    },
];

// The wrapper file literally contains `https\://`, hence the escaped
// backslash in the anchor.
const GRADLE_WRAPPER_PROPERTIES_STEPS: &[Step] = &[
    Step::Advance {
        anchor: r"^distributionUrl=https\\://services\.gradle\.org/distributions/gradle",
    },
    Step::Replace {
        pattern: r"/distributions/gradle.*$",
        replacement: "/distributions/gradle-4.10.1-all.zip",
    },
];

const ROOT_BUILD_GRADLE_STEPS: &[Step] = &[
    Step::Advance {
        anchor: r"^\s+dependencies\s*\{",
    },
    Step::Advance {
        anchor: r#"^\s+classpath\s+['"]?com\.android\.tools\.build:gradle:"#,
    },
    // The pattern starts at the keyword, so leading indentation survives.
    Step::Replace {
        pattern: r"classpath.*$",
        replacement: "classpath 'com.android.tools.build:gradle:3.3.0'",
    },
];

const GRADLE_PROPERTIES_STEPS: &[Step] = &[
    Step::Append {
        line: "android.enableJetifier=true",
    },
    Step::Append {
        line: "android.useAndroidX=true",
    },
];

/// The four recipes in fixed execution order.
pub fn recipes() -> [Recipe; 4] {
    [
        Recipe {
            role: TargetRole::AppBuildGradle,
            steps: APP_BUILD_GRADLE_STEPS,
        },
        Recipe {
            role: TargetRole::GradleWrapperProperties,
            steps: GRADLE_WRAPPER_PROPERTIES_STEPS,
        },
        Recipe {
            role: TargetRole::RootBuildGradle,
            steps: ROOT_BUILD_GRADLE_STEPS,
        },
        Recipe {
            role: TargetRole::GradleProperties,
            steps: GRADLE_PROPERTIES_STEPS,
        },
    ]
}
