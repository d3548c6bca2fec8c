//! Graph validation logic
//!
//! Validates the project graph and environment without building: dangling
//! dependency references, cycles, toolchain availability and per-project
//! build manifest presence.

use std::collections::HashSet;
use std::path::Path;

use crate::config::defaults;
use crate::core::graph::ProjectGraph;
use crate::core::resolver;
use crate::core::strategy::StrategyRegistry;

/// Result of the check operation
#[derive(Debug)]
pub struct CheckResult {
    /// Whether the dependency graph resolves to a build order
    pub dependencies_valid: bool,
    /// Whether cmake and make are available on PATH
    pub toolchain_available: bool,
    /// Build order that a full run would use
    pub build_order: Vec<String>,
    /// Warnings encountered during check
    pub warnings: Vec<String>,
    /// Dependency identifiers with no matching descriptor
    pub missing_dependencies: Vec<String>,
}

impl CheckResult {
    /// Create a new check result with everything passing
    pub fn new() -> Self {
        Self {
            dependencies_valid: true,
            toolchain_available: true,
            build_order: Vec::new(),
            warnings: Vec::new(),
            missing_dependencies: Vec::new(),
        }
    }

    /// Check if all validations passed
    pub fn is_valid(&self) -> bool {
        self.dependencies_valid
    }
}

impl Default for CheckResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate the graph and environment without building anything
pub fn check(graph: &ProjectGraph, registry: &StrategyRegistry, source_root: &Path) -> CheckResult {
    let mut result = CheckResult::new();

    // Dangling references are tolerated by the resolver (they become skipped
    // leaves) but are worth surfacing before a long build.
    let known: HashSet<&str> = graph.names().collect();
    for descriptor in graph.iter() {
        for dependency in &descriptor.dependencies {
            if !known.contains(dependency.as_str())
                && !result.missing_dependencies.contains(dependency)
            {
                result.missing_dependencies.push(dependency.clone());
            }
        }
    }
    if !result.missing_dependencies.is_empty() {
        result.warnings.push(format!(
            "Dangling dependency references: {}",
            result.missing_dependencies.join(", ")
        ));
    }

    match resolver::resolve_all(graph) {
        Ok(order) => result.build_order = order,
        Err(e) => {
            result.dependencies_valid = false;
            result
                .warnings
                .push(format!("Dependency resolution failed: {e}"));
        }
    }

    // Bundle roots carry no top-level manifest; their sub-packages do.
    for descriptor in graph.iter() {
        if registry.is_registered(&descriptor.name) {
            continue;
        }
        let manifest = source_root
            .join(&descriptor.sub)
            .join(&descriptor.name)
            .join(defaults::BUILD_MANIFEST);
        if !manifest.is_file() {
            result.warnings.push(format!(
                "{}: no {} at {} (project would be skipped)",
                descriptor.name,
                defaults::BUILD_MANIFEST,
                manifest.display()
            ));
        }
    }

    result.toolchain_available = toolchain_available();
    if !result.toolchain_available {
        result
            .warnings
            .push("cmake or make not found in PATH".to_string());
    }

    result
}

/// Check if the cmake and make executables are available
fn toolchain_available() -> bool {
    which::which("cmake").is_ok() && which::which("make").is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::graph_of;
    use tempfile::TempDir;

    #[test]
    fn test_check_empty_graph() {
        let temp = TempDir::new().unwrap();
        let graph = ProjectGraph::default();
        let result = check(&graph, &StrategyRegistry::with_builtin_bundles(), temp.path());
        assert!(result.is_valid());
        assert!(result.build_order.is_empty());
        assert!(result.missing_dependencies.is_empty());
    }

    #[test]
    fn test_check_reports_dangling_dependencies() {
        let temp = TempDir::new().unwrap();
        let graph = graph_of(&[("a", &["ghost"]), ("b", &["ghost", "a"])]);
        let result = check(&graph, &StrategyRegistry::with_builtin_bundles(), temp.path());
        assert_eq!(result.missing_dependencies, vec!["ghost"]);
        // Dangling references do not invalidate the graph
        assert!(result.is_valid());
    }

    #[test]
    fn test_check_fails_on_cycle() {
        let temp = TempDir::new().unwrap();
        let graph = graph_of(&[("a", &["b"]), ("b", &["a"])]);
        let result = check(&graph, &StrategyRegistry::with_builtin_bundles(), temp.path());
        assert!(!result.is_valid());
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("Circular dependency")));
    }

    #[test]
    fn test_check_warns_about_missing_manifests() {
        let temp = TempDir::new().unwrap();
        let graph = graph_of(&[("a", &[])]);
        let result = check(&graph, &StrategyRegistry::with_builtin_bundles(), temp.path());
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("project would be skipped")));
        assert!(result.is_valid());
    }
}
