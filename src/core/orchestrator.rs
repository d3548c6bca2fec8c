//! Build orchestration
//!
//! Walks the resolved build order, dispatches each project to its strategy
//! and aggregates per-project outcomes. A failing project never aborts the
//! run; the aggregated report carries every failure so callers can surface
//! a non-zero exit status instead of unconditional success.

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::core::graph::ProjectGraph;
use crate::core::resolver;
use crate::core::strategy::StrategyRegistry;
use crate::core::unit::BuildUnit;
use crate::error::{Phase, ResolverError};
use crate::infra::cmake::CmakeToolchain;

/// Terminal state of one project in the run
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ProjectStatus {
    /// All units completed the full cycle
    Built {
        /// Number of build units processed
        units: usize,
    },
    /// A phase failed; the run continued with the next project
    Failed {
        /// The phase that failed
        phase: Phase,
        /// The tool's reported message
        message: String,
    },
    /// Nothing was built (missing descriptor or build manifest)
    Skipped {
        /// Why the project produced no units
        reason: String,
    },
}

/// Outcome for a single project in the build order
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProjectOutcome {
    /// Project identifier
    pub name: String,
    /// Terminal state
    #[serde(flatten)]
    pub status: ProjectStatus,
}

/// Aggregated result of a full orchestration run
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct BuildReport {
    /// Per-project outcomes in build order
    pub outcomes: Vec<ProjectOutcome>,
}

impl BuildReport {
    /// Outcomes that completed all units
    pub fn built(&self) -> impl Iterator<Item = &ProjectOutcome> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, ProjectStatus::Built { .. }))
    }

    /// Outcomes that failed a phase
    pub fn failed(&self) -> impl Iterator<Item = &ProjectOutcome> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, ProjectStatus::Failed { .. }))
    }

    /// Outcomes that produced no units
    pub fn skipped(&self) -> impl Iterator<Item = &ProjectOutcome> {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, ProjectStatus::Skipped { .. }))
    }

    /// Whether any project failed
    pub fn has_failures(&self) -> bool {
        self.failed().next().is_some()
    }
}

/// Sequential driver over the resolved build order
///
/// Projects are built one at a time, strictly in dependency order; the
/// driver blocks on each toolchain phase before proceeding.
pub struct Orchestrator {
    graph: ProjectGraph,
    registry: StrategyRegistry,
    toolchain: CmakeToolchain,
    source_root: PathBuf,
    install_dir: PathBuf,
    python: PathBuf,
}

impl Orchestrator {
    /// Create a driver with the built-in bundle registrations
    pub fn new(graph: ProjectGraph, source_root: &Path, install_dir: &Path) -> Self {
        Self {
            graph,
            registry: StrategyRegistry::with_builtin_bundles(),
            toolchain: CmakeToolchain::default(),
            source_root: source_root.to_path_buf(),
            install_dir: install_dir.to_path_buf(),
            python: PathBuf::from(crate::config::defaults::DEFAULT_PYTHON),
        }
    }

    /// Replace the toolchain wrapper
    #[must_use]
    pub fn with_toolchain(mut self, toolchain: CmakeToolchain) -> Self {
        self.toolchain = toolchain;
        self
    }

    /// Replace the strategy registry
    #[must_use]
    pub fn with_registry(mut self, registry: StrategyRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// Set the interpreter substituted for `${PYTHON_EXECUTABLE}`
    #[must_use]
    pub fn with_python(mut self, python: PathBuf) -> Self {
        self.python = python;
        self
    }

    /// Run the whole graph, or one target and its dependency closure
    ///
    /// Fails only when the order cannot be resolved; individual project
    /// failures are recorded in the report and the run continues.
    pub fn run(&self, target: Option<&str>) -> Result<BuildReport, ResolverError> {
        let order = match target {
            Some(target) => resolver::resolve_for(&self.graph, target)?,
            None => resolver::resolve_all(&self.graph)?,
        };
        tracing::info!("Build order: {}", order.join(", "));

        let mut report = BuildReport::default();
        for name in &order {
            let outcome = self.build_project(name);
            match &outcome.status {
                ProjectStatus::Built { units } => {
                    tracing::info!("Done compiling {name} ({units} unit(s))");
                }
                ProjectStatus::Failed { phase, message } => {
                    tracing::error!("{name}: {phase} phase failed: {message}");
                }
                ProjectStatus::Skipped { reason } => {
                    tracing::warn!("{name}: skipped ({reason})");
                }
            }
            report.outcomes.push(outcome);
        }
        Ok(report)
    }

    fn build_project(&self, name: &str) -> ProjectOutcome {
        let Some(descriptor) = self.graph.get(name) else {
            return ProjectOutcome {
                name: name.to_string(),
                status: ProjectStatus::Skipped {
                    reason: "no descriptor in project graph".to_string(),
                },
            };
        };

        let unit = BuildUnit::from_descriptor(
            descriptor,
            &self.source_root,
            &self.install_dir,
            &self.python,
        );
        let strategy = self.registry.select(name);
        tracing::info!("Compiling {name} ({} strategy)...", strategy.name());

        let status = match strategy.build(&unit, &self.toolchain) {
            Ok(stats) if stats.built == 0 => ProjectStatus::Skipped {
                reason: "no buildable units found".to_string(),
            },
            Ok(stats) => ProjectStatus::Built { units: stats.built },
            Err(e) => ProjectStatus::Failed {
                phase: e.phase(),
                message: e.message().to_string(),
            },
        };

        ProjectOutcome {
            name: name.to_string(),
            status,
        }
    }
}
