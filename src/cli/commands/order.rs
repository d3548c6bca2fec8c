//! Order command implementation
//!
//! Prints the resolved build order without invoking the toolchain.

use anyhow::{Context, Result};
use std::path::Path;

use crate::core::resolver;

/// Execute the order command
pub fn execute(graph_path: &Path, target: Option<&str>, json: bool) -> Result<()> {
    let graph = super::load_graph(graph_path)?;

    let order = match target {
        Some(target) => resolver::resolve_for(&graph, target),
        None => resolver::resolve_all(&graph),
    }
    .context("Failed to resolve build order")?;

    if json {
        println!("{}", serde_json::to_string(&order)?);
    } else {
        for name in &order {
            println!("{name}");
        }
    }
    Ok(())
}
