//! schemadoc CLI - YAML schema documentation builder.
//!
//! Running `schemadoc` renders every `src/*.yaml` schema of the project into
//! `docs/<stem>.html` and writes `docs/index.html` linking to all of them.

mod error;
mod output;
mod progress;

use std::path::{Path, PathBuf};

use clap::Parser;
use schemadoc_build::{BuildConfig, DocsBuilder};
use tracing_subscriber::EnvFilter;

use error::CliError;
use output::Output;
use progress::ConsoleProgress;

/// schemadoc - Render YAML schemas to HTML documentation.
#[derive(Parser)]
#[command(name = "schemadoc", version, about)]
struct Cli;

/// Project root holding `src/` and `docs/`.
///
/// This is the workspace the binary was built from, as recorded at compile
/// time. When that tree no longer exists (an installed binary whose build
/// checkout was removed), the root is derived from the executable's location
/// instead.
fn project_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let workspace = manifest_dir.ancestors().nth(2).unwrap_or(manifest_dir);
    let exe = std::env::current_exe().ok();
    resolve_root(workspace, exe.as_deref())
}

/// Pick the compile-time workspace if present, else the executable's root.
fn resolve_root(workspace: &Path, exe: Option<&Path>) -> PathBuf {
    if workspace.is_dir() {
        return workspace.to_path_buf();
    }
    exe.and_then(exe_root)
        .unwrap_or_else(|| workspace.to_path_buf())
}

/// Root for an executable: its directory, or the parent of a `bin/` directory.
fn exe_root(exe: &Path) -> Option<PathBuf> {
    let dir = exe.parent()?;
    let root = if dir.file_name().is_some_and(|n| n == "bin") {
        dir.parent().unwrap_or(dir)
    } else {
        dir
    };
    Some(root.to_path_buf())
}

fn run(output: &Output) -> Result<(), CliError> {
    let root = project_root();
    let config = BuildConfig::for_project(&root);
    tracing::debug!(
        source = %config.source_dir.display(),
        output = %config.output_dir.display(),
        "Building schema documentation"
    );

    DocsBuilder::new(config)
        .with_progress(ConsoleProgress::new(root))
        .build()?;

    output.success("Done.");
    Ok(())
}

fn main() {
    Cli::parse();
    let output = Output::new();

    // RUST_LOG controls diagnostics, warnings only by default
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(&output) {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_root_prefers_existing_workspace() {
        let dir = tempfile::tempdir().unwrap();
        let root = resolve_root(dir.path(), Some(Path::new("/opt/schemas/bin/schemadoc")));
        assert_eq!(root, dir.path());
    }

    #[test]
    fn test_resolve_root_falls_back_to_executable() {
        let dir = tempfile::tempdir().unwrap();
        let gone = dir.path().join("removed-checkout");
        let root = resolve_root(&gone, Some(Path::new("/opt/schemas/bin/schemadoc")));
        assert_eq!(root, PathBuf::from("/opt/schemas"));
    }

    #[test]
    fn test_resolve_root_without_executable_keeps_workspace() {
        let dir = tempfile::tempdir().unwrap();
        let gone = dir.path().join("removed-checkout");
        assert_eq!(resolve_root(&gone, None), gone);
    }

    #[test]
    fn test_exe_root_outside_bin() {
        assert_eq!(
            exe_root(Path::new("/srv/project/schemadoc")),
            Some(PathBuf::from("/srv/project"))
        );
    }
}
