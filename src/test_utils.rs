//! Shared helpers for unit tests

use crate::core::graph::{ProjectDescriptor, ProjectGraph};

/// Build a descriptor with empty flags and options
pub fn descriptor(name: &str, sub: &str, dependencies: &[&str]) -> ProjectDescriptor {
    ProjectDescriptor {
        name: name.to_string(),
        sub: sub.to_string(),
        dependencies: dependencies.iter().map(|d| (*d).to_string()).collect(),
        cmake_flags: Vec::new(),
        build_options: Vec::new(),
    }
}

/// Build a graph from `(name, dependencies)` pairs under one sub-path
pub fn graph_of(projects: &[(&str, &[&str])]) -> ProjectGraph {
    let descriptors = projects
        .iter()
        .map(|(name, dependencies)| descriptor(name, "src", dependencies))
        .collect();
    ProjectGraph::from_descriptors(descriptors).expect("valid test graph")
}
