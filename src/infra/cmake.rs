//! CMake toolchain invocation
//!
//! Runs the three-phase configure/build/install cycle for one build unit.
//! Every invocation receives an explicit working directory and a per-unit
//! environment overlay; nothing here touches process-global state, so a
//! failed build cannot corrupt path resolution for the next one.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::defaults;
use crate::error::{BuildError, Phase, ToolchainError};

/// External build toolchain (cmake + make) wrapper
#[derive(Debug, Clone)]
pub struct CmakeToolchain {
    cmake: PathBuf,
    make: PathBuf,
    jobs: usize,
}

impl Default for CmakeToolchain {
    fn default() -> Self {
        Self::new(PathBuf::from("cmake"), PathBuf::from("make"))
    }
}

impl CmakeToolchain {
    /// Create a toolchain wrapper from explicit executable paths
    pub fn new(cmake: PathBuf, make: PathBuf) -> Self {
        Self {
            cmake,
            make,
            jobs: defaults::DEFAULT_BUILD_JOBS,
        }
    }

    /// Locate cmake and make on PATH
    pub fn locate() -> Result<Self, ToolchainError> {
        let cmake = which::which("cmake").map_err(|_| ToolchainError::NotFound {
            tool: "cmake".to_string(),
        })?;
        let make = which::which("make").map_err(|_| ToolchainError::NotFound {
            tool: "make".to_string(),
        })?;
        Ok(Self::new(cmake, make))
    }

    /// Set the number of parallel jobs passed to the build tool
    #[must_use]
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs;
        self
    }

    /// Path to the cmake executable
    pub fn cmake_path(&self) -> &Path {
        &self.cmake
    }

    /// Path to the make executable
    pub fn make_path(&self) -> &Path {
        &self.make
    }

    /// Run the configure/build/install cycle in `build_dir`
    ///
    /// Flags are passed as `-D` definitions to the configure invocation.
    /// The first failing phase short-circuits the rest; no phase is
    /// retried. Children inherit the ambient environment plus `env`.
    pub fn run_cycle(
        &self,
        source_dir: &Path,
        build_dir: &Path,
        flags: &[String],
        env: &HashMap<String, String>,
    ) -> Result<(), BuildError> {
        let mut configure = Command::new(&self.cmake);
        configure.arg(source_dir);
        for flag in flags {
            configure.arg(format!("-D{flag}"));
        }
        run_phase(configure, Phase::Configure, build_dir, env)?;

        let mut build = Command::new(&self.make);
        build.arg(format!("-j{}", self.jobs));
        run_phase(build, Phase::Build, build_dir, env)?;

        let mut install = Command::new(&self.make);
        install.arg("install");
        run_phase(install, Phase::Install, build_dir, env)
    }
}

fn run_phase(
    mut command: Command,
    phase: Phase,
    build_dir: &Path,
    env: &HashMap<String, String>,
) -> Result<(), BuildError> {
    command.current_dir(build_dir);
    for (key, value) in env {
        command.env(key, value);
    }

    let program = command.get_program().to_string_lossy().to_string();
    tracing::debug!("Running {phase} phase in {}: {command:?}", build_dir.display());

    let status = command
        .status()
        .map_err(|e| BuildError::in_phase(phase, format!("failed to run '{program}': {e}")))?;

    if status.success() {
        Ok(())
    } else {
        Err(BuildError::in_phase(
            phase,
            format!("'{program}' exited with {status}"),
        ))
    }
}
