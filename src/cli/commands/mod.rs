//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod build;
pub mod check;
pub mod order;

use anyhow::{bail, Context, Result};
use clap::Subcommand;
use std::path::{Path, PathBuf};

use crate::config::defaults;
use crate::core::graph::ProjectGraph;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build projects from the graph in dependency order
    Build {
        /// Path to the project graph file
        graph: PathBuf,

        /// Directory receiving installed artifacts
        install_dir: PathBuf,

        /// Build only this project and its transitive dependencies
        #[arg(short, long)]
        target: Option<String>,

        /// Root directory containing the project sources
        #[arg(long, default_value = ".")]
        source_root: PathBuf,

        /// Interpreter substituted for ${PYTHON_EXECUTABLE} in flags
        #[arg(long)]
        python: Option<PathBuf>,

        /// Number of parallel jobs passed to the build tool
        #[arg(short, long, default_value_t = defaults::DEFAULT_BUILD_JOBS)]
        jobs: usize,

        /// Path to the cmake executable (discovered on PATH by default)
        #[arg(long)]
        cmake: Option<PathBuf>,

        /// Path to the make executable (discovered on PATH by default)
        #[arg(long)]
        make: Option<PathBuf>,
    },

    /// Print the resolved build order without building
    Order {
        /// Path to the project graph file
        graph: PathBuf,

        /// Restrict to this project and its transitive dependencies
        #[arg(short, long)]
        target: Option<String>,
    },

    /// Validate the graph and environment without building
    Check {
        /// Path to the project graph file
        graph: PathBuf,

        /// Root directory containing the project sources
        #[arg(long, default_value = ".")]
        source_root: PathBuf,
    },
}

impl Commands {
    /// Execute the command
    pub fn run(self, json: bool) -> Result<()> {
        match self {
            Self::Build {
                graph,
                install_dir,
                target,
                source_root,
                python,
                jobs,
                cmake,
                make,
            } => {
                let args = build::BuildArgs {
                    target,
                    source_root,
                    python,
                    jobs,
                    cmake,
                    make,
                };
                build::execute(&graph, &install_dir, args, json)
            }
            Self::Order { graph, target } => order::execute(&graph, target.as_deref(), json),
            Self::Check { graph, source_root } => check::execute(&graph, &source_root),
        }
    }
}

/// Load and parse the project graph file
pub(crate) fn load_graph(path: &Path) -> Result<ProjectGraph> {
    if !path.exists() {
        bail!("Graph file not found: {}", path.display());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read graph at {}", path.display()))?;
    ProjectGraph::from_yaml(&content).with_context(|| "Failed to parse project graph")
}
