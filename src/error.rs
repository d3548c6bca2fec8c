//! Error types for cmakestack
//!
//! Domain-specific error types using thiserror.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// One step of the external configure/build/install cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Generating the build system from the source tree
    Configure,
    /// Compiling the configured tree
    Build,
    /// Installing artifacts into the install prefix
    Install,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configure => write!(f, "configure"),
            Self::Build => write!(f, "build"),
            Self::Install => write!(f, "install"),
        }
    }
}

/// Project graph loading errors
#[derive(Error, Debug)]
pub enum GraphError {
    /// Graph file could not be parsed
    #[error("Failed to parse project graph: {source}")]
    Parse { source: serde_yaml::Error },

    /// Two descriptors share one identifier
    #[error("Duplicate project '{name}' in graph")]
    DuplicateProject { name: String },
}

/// Dependency resolution errors
#[derive(Error, Debug)]
pub enum ResolverError {
    /// Circular dependency detected
    #[error("Circular dependency detected: {}", cycle.join(" -> "))]
    CircularDependency { cycle: Vec<String> },
}

/// Build errors, tagged with the originating phase
///
/// Terminal for the failing project, non-fatal for the overall run.
#[derive(Error, Debug)]
pub enum BuildError {
    /// Configure invocation failed
    #[error("configure failed: {message}")]
    Configure { message: String },

    /// Build invocation failed
    #[error("build failed: {message}")]
    Build { message: String },

    /// Install invocation failed
    #[error("install failed: {message}")]
    Install { message: String },
}

impl BuildError {
    /// Create an error for the given phase
    pub fn in_phase(phase: Phase, message: impl Into<String>) -> Self {
        let message = message.into();
        match phase {
            Phase::Configure => Self::Configure { message },
            Phase::Build => Self::Build { message },
            Phase::Install => Self::Install { message },
        }
    }

    /// The phase that produced this error
    pub fn phase(&self) -> Phase {
        match self {
            Self::Configure { .. } => Phase::Configure,
            Self::Build { .. } => Phase::Build,
            Self::Install { .. } => Phase::Install,
        }
    }

    /// The tool's reported message, without the phase prefix
    pub fn message(&self) -> &str {
        match self {
            Self::Configure { message } | Self::Build { message } | Self::Install { message } => {
                message
            }
        }
    }
}

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to create directory
    #[error("Failed to create directory '{path}': {error}")]
    CreateDir { path: PathBuf, error: String },

    /// Failed to enumerate directory entries
    #[error("Failed to read directory '{path}': {error}")]
    ReadDir { path: PathBuf, error: String },
}

/// Toolchain discovery errors
#[derive(Error, Debug)]
pub enum ToolchainError {
    /// Required executable is not on PATH
    #[error("Required tool '{tool}' not found in PATH")]
    NotFound { tool: String },
}
