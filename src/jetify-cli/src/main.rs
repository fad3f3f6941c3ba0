//! Jetify CLI - entry point.
//!
//! Converts a Flutter project's Android build configuration from the
//! legacy support libraries to AndroidX: four fixed files, anchored
//! line rewrites, all-or-nothing with `.ORIG` backups while in flight.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use jetify_migrate::convert_project;

/// Convert a Flutter project to AndroidX.
///
/// Edits android/app/build.gradle, the Gradle wrapper properties, the
/// root build.gradle and gradle.properties in place. On any failure all
/// four files are restored from backups and nothing is left modified.
#[derive(Debug, Parser)]
#[command(name = "jetify", version, about)]
struct Cli {
    /// Flutter project root (the directory containing `android/`).
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter.to_string());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let root = cli
        .path
        .canonicalize()
        .with_context(|| format!("could not resolve project root {}", cli.path.display()))?;

    convert_project(&root).context("Conversion to AndroidX failed")?;

    println!("Conversion to AndroidX succeeded!");
    Ok(())
}
