//! Build command implementation
//!
//! Loads the graph, runs the orchestrator over the resolved order and
//! reports per-project outcomes. Failures never abort the run, but the
//! process exits non-zero when any project failed.

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

use crate::cli::output;
use crate::core::orchestrator::Orchestrator;
use crate::infra::cmake::CmakeToolchain;

/// Build options from the CLI
pub struct BuildArgs {
    /// Build only this project and its transitive dependencies
    pub target: Option<String>,
    /// Root directory containing the project sources
    pub source_root: PathBuf,
    /// Interpreter substituted for `${PYTHON_EXECUTABLE}` in flags
    pub python: Option<PathBuf>,
    /// Number of parallel jobs passed to the build tool
    pub jobs: usize,
    /// Explicit cmake executable
    pub cmake: Option<PathBuf>,
    /// Explicit make executable
    pub make: Option<PathBuf>,
}

/// Execute the build command
pub fn execute(graph_path: &Path, install_dir: &Path, args: BuildArgs, json: bool) -> Result<()> {
    let graph = super::load_graph(graph_path)?;

    let toolchain =
        resolve_toolchain(args.cmake, args.make).context("Build toolchain not available")?;
    let python = args.python.unwrap_or_else(default_python);

    tracing::info!(
        "Building {} project(s) from {}",
        graph.len(),
        graph_path.display()
    );

    let orchestrator = Orchestrator::new(graph, &args.source_root, install_dir)
        .with_toolchain(toolchain.with_jobs(args.jobs))
        .with_python(python);

    let report = orchestrator
        .run(args.target.as_deref())
        .context("Failed to resolve build order")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        output::print_report(&report);
    }

    if report.has_failures() {
        bail!("{} project(s) failed to build", report.failed().count());
    }
    Ok(())
}

/// Toolchain from explicit paths, falling back to PATH discovery
fn resolve_toolchain(
    cmake: Option<PathBuf>,
    make: Option<PathBuf>,
) -> Result<CmakeToolchain> {
    match (cmake, make) {
        (Some(cmake), Some(make)) => Ok(CmakeToolchain::new(cmake, make)),
        (cmake, make) => {
            let located = CmakeToolchain::locate()?;
            Ok(CmakeToolchain::new(
                cmake.unwrap_or_else(|| located.cmake_path().to_path_buf()),
                make.unwrap_or_else(|| located.make_path().to_path_buf()),
            ))
        }
    }
}

/// Interpreter from PATH, falling back to the bare command name
fn default_python() -> PathBuf {
    which::which(crate::config::defaults::DEFAULT_PYTHON)
        .unwrap_or_else(|_| PathBuf::from(crate::config::defaults::DEFAULT_PYTHON))
}
