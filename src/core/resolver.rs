//! Dependency-first build order resolution
//!
//! Computes the linear order in which projects are built: a depth-first
//! reverse postorder over the dependency edges, so every dependency appears
//! before its dependents. Ties are broken by declaration order - of the
//! top-level project list and of each dependency list.

use std::collections::HashSet;

use crate::core::graph::ProjectGraph;
use crate::error::ResolverError;

/// Depth-first order resolver over a project graph
///
/// Identifiers without a descriptor stay in the order as leaves so the
/// driver can report and skip them. Cyclic graphs fail with the offending
/// cycle path instead of silently truncating traversal.
#[derive(Debug)]
pub struct OrderResolver<'a> {
    graph: &'a ProjectGraph,
    visited: HashSet<String>,
    in_progress: HashSet<String>,
    stack: Vec<String>,
    order: Vec<String>,
}

impl<'a> OrderResolver<'a> {
    /// Create a resolver for the given graph
    pub fn new(graph: &'a ProjectGraph) -> Self {
        Self {
            graph,
            visited: HashSet::new(),
            in_progress: HashSet::new(),
            stack: Vec::new(),
            order: Vec::new(),
        }
    }

    /// Build order covering every declared project
    pub fn resolve_all(mut self) -> Result<Vec<String>, ResolverError> {
        let names: Vec<String> = self.graph.names().map(str::to_string).collect();
        for name in names {
            self.visit(&name)?;
        }
        Ok(self.order)
    }

    /// Build order for one target and its transitive dependencies
    pub fn resolve_for(mut self, target: &str) -> Result<Vec<String>, ResolverError> {
        self.visit(target)?;
        Ok(self.order)
    }

    fn visit(&mut self, name: &str) -> Result<(), ResolverError> {
        if self.in_progress.contains(name) {
            // Found a cycle; report the path from its first occurrence
            let start = self.stack.iter().position(|n| n == name).unwrap_or(0);
            let mut cycle: Vec<String> = self.stack[start..].to_vec();
            cycle.push(name.to_string());
            return Err(ResolverError::CircularDependency { cycle });
        }

        if self.visited.contains(name) {
            return Ok(());
        }
        self.visited.insert(name.to_string());

        // Unknown identifiers contribute no further expansion
        if let Some(descriptor) = self.graph.get(name) {
            let dependencies = descriptor.dependencies.clone();
            self.in_progress.insert(name.to_string());
            self.stack.push(name.to_string());
            for dependency in &dependencies {
                self.visit(dependency)?;
            }
            self.stack.pop();
            self.in_progress.remove(name);
        }

        self.order.push(name.to_string());
        Ok(())
    }
}

/// Resolve the build order for every project in the graph
pub fn resolve_all(graph: &ProjectGraph) -> Result<Vec<String>, ResolverError> {
    OrderResolver::new(graph).resolve_all()
}

/// Resolve the build order for a single target and its dependency closure
pub fn resolve_for(graph: &ProjectGraph, target: &str) -> Result<Vec<String>, ResolverError> {
    OrderResolver::new(graph).resolve_for(target)
}
