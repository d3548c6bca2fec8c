//! Project graph loading and lookup
//!
//! Parses the declarative YAML project list into an indexed table. Field
//! presence is heterogeneous across records; absent dependency and flag
//! lists default to empty. Dependency references are not validated here -
//! the resolver treats unknown identifiers as leaves.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::GraphError;

/// One buildable project as declared in the graph file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectDescriptor {
    /// Unique project identifier
    pub name: String,

    /// Relative sub-path grouping the project under the source root
    pub sub: String,

    /// Identifiers of projects that must be built first
    #[serde(default)]
    pub dependencies: Vec<String>,

    /// Raw configure flags; may contain `${PYTHON_EXECUTABLE}` and
    /// `${INSTALL_DIR}` placeholder tokens
    #[serde(default)]
    pub cmake_flags: Vec<String>,

    /// Raw `KEY=VALUE` build options (`BUILD_TYPE`, `BUILD_TESTING`)
    #[serde(default)]
    pub build_options: Vec<String>,
}

/// Declaration-ordered project table indexed by identifier
///
/// Declaration order is significant: the resolver uses it to break ties, so
/// the table keeps the original sequence alongside the index.
#[derive(Debug, Clone, Default)]
pub struct ProjectGraph {
    projects: Vec<ProjectDescriptor>,
    index: HashMap<String, usize>,
}

impl ProjectGraph {
    /// Build the indexed table from an ordered descriptor list
    pub fn from_descriptors(descriptors: Vec<ProjectDescriptor>) -> Result<Self, GraphError> {
        let mut graph = Self {
            projects: Vec::with_capacity(descriptors.len()),
            index: HashMap::with_capacity(descriptors.len()),
        };
        for descriptor in descriptors {
            if graph.index.contains_key(&descriptor.name) {
                return Err(GraphError::DuplicateProject {
                    name: descriptor.name,
                });
            }
            graph
                .index
                .insert(descriptor.name.clone(), graph.projects.len());
            graph.projects.push(descriptor);
        }
        Ok(graph)
    }

    /// Parse the graph from its YAML representation
    pub fn from_yaml(content: &str) -> Result<Self, GraphError> {
        let descriptors: Vec<ProjectDescriptor> =
            serde_yaml::from_str(content).map_err(|source| GraphError::Parse { source })?;
        Self::from_descriptors(descriptors)
    }

    /// Look up a descriptor by identifier
    pub fn get(&self, name: &str) -> Option<&ProjectDescriptor> {
        self.index.get(name).map(|&i| &self.projects[i])
    }

    /// Whether the identifier is declared in the graph
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Descriptors in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &ProjectDescriptor> {
        self.projects.iter()
    }

    /// Identifiers in declaration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.projects.iter().map(|p| p.name.as_str())
    }

    /// Number of declared projects
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Whether the graph declares no projects
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
