//! Check command implementation
//!
//! Validates the project graph and environment without building.

use anyhow::{bail, Result};
use std::path::Path;

use crate::cli::output::status;
use crate::core::check;
use crate::core::strategy::StrategyRegistry;

/// Execute the check command
pub fn execute(graph_path: &Path, source_root: &Path) -> Result<()> {
    let graph = super::load_graph(graph_path)?;

    tracing::info!("Checking project graph: {}", graph_path.display());

    let registry = StrategyRegistry::with_builtin_bundles();
    let result = check::check(&graph, &registry, source_root);

    println!("Checking project graph...\n");

    if result.dependencies_valid {
        println!("{} All dependencies are resolvable", status::SUCCESS);
    } else {
        println!("{} Dependency issues found", status::ERROR);
    }
    for dependency in &result.missing_dependencies {
        println!("  - Dangling dependency reference: {dependency}");
    }

    if result.toolchain_available {
        println!("{} cmake and make are available", status::SUCCESS);
    } else {
        println!("{} cmake or make not found in PATH", status::WARNING);
    }

    if !result.warnings.is_empty() {
        println!("\nWarnings:");
        for warning in &result.warnings {
            println!("  {} {warning}", status::WARNING);
        }
    }

    println!("\nProjects that would be built:");
    if result.build_order.is_empty() {
        println!("  (none)");
    }
    for name in &result.build_order {
        println!("  • {name}");
    }

    println!();
    if result.is_valid() {
        println!("{} Check passed - ready to build", status::SUCCESS);
        Ok(())
    } else {
        bail!("Check failed - please fix the issues above before building");
    }
}
