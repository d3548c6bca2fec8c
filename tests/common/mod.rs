//! Common test utilities and helpers
//!
//! Provides a temporary workspace with project sources, a graph file and a
//! fake cmake/make toolchain that records every invocation instead of
//! compiling anything.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Test workspace context
///
/// Creates a temporary directory holding project sources and provides
/// utilities for setting up test scenarios.
pub struct TestWorkspace {
    /// Temporary directory for the test workspace
    pub dir: TempDir,
}

impl TestWorkspace {
    /// Create a new test workspace in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Get the path to the workspace directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Create a file in the workspace
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Write the graph file and return its path
    pub fn write_graph(&self, content: &str) -> PathBuf {
        self.create_file("graph.yaml", content);
        self.dir.path().join("graph.yaml")
    }

    /// Create `<sub>/<name>` under the workspace with a CMakeLists.txt
    #[allow(dead_code)]
    pub fn create_project(&self, sub: &str, name: &str) {
        self.create_file(
            &format!("{sub}/{name}/CMakeLists.txt"),
            "cmake_minimum_required(VERSION 3.10)\n",
        );
    }

    /// Create a bundle sub-package `<sub>/<bundle>/<package>` with a manifest
    #[allow(dead_code)]
    pub fn create_subpackage(&self, sub: &str, bundle: &str, package: &str) {
        self.create_file(
            &format!("{sub}/{bundle}/{package}/CMakeLists.txt"),
            "cmake_minimum_required(VERSION 3.10)\n",
        );
    }

    /// Install a fake toolchain; every invocation is appended to the log
    #[allow(dead_code)]
    pub fn fake_toolchain(&self) -> FakeToolchain {
        let bin = self.dir.path().join("bin");
        std::fs::create_dir_all(&bin).expect("Failed to create bin directory");
        let log = self.dir.path().join("tool.log");

        let cmake = bin.join("fake-cmake");
        write_script(
            &cmake,
            &format!(
                r#"#!/bin/sh
echo "cmake|$PWD|$CMAKE_PREFIX_PATH|$*" >> "{log}"
if [ -n "$FAKE_CMAKE_FAIL_IN" ]; then
  case "$PWD" in *"$FAKE_CMAKE_FAIL_IN"*) exit 1 ;; esac
fi
exit 0
"#,
                log = log.display()
            ),
        );

        let make = bin.join("fake-make");
        write_script(
            &make,
            &format!(
                r#"#!/bin/sh
echo "make|$PWD|$CMAKE_PREFIX_PATH|$*" >> "{log}"
if [ -n "$FAKE_MAKE_FAIL_ARG" ] && [ "$1" = "$FAKE_MAKE_FAIL_ARG" ]; then
  exit 1
fi
exit 0
"#,
                log = log.display()
            ),
        );

        FakeToolchain { cmake, make, log }
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
fn write_script(path: &Path, content: &str) {
    std::fs::write(path, content).expect("Failed to write script");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut permissions = std::fs::metadata(path)
            .expect("Failed to stat script")
            .permissions();
        permissions.set_mode(0o755);
        std::fs::set_permissions(path, permissions).expect("Failed to chmod script");
    }
}

/// Fake cmake/make executables plus their shared invocation log
#[allow(dead_code)]
pub struct FakeToolchain {
    /// Path to the fake cmake executable
    pub cmake: PathBuf,
    /// Path to the fake make executable
    pub make: PathBuf,
    /// Invocation log, one `tool|cwd|prefix_path|args` line per call
    pub log: PathBuf,
}

impl FakeToolchain {
    /// Lines of the invocation log
    #[allow(dead_code)]
    pub fn log_lines(&self) -> Vec<String> {
        std::fs::read_to_string(&self.log)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Log lines for one tool ("cmake" or "make")
    #[allow(dead_code)]
    pub fn lines_for(&self, tool: &str) -> Vec<String> {
        self.log_lines()
            .into_iter()
            .filter(|line| line.starts_with(&format!("{tool}|")))
            .collect()
    }
}

/// Run the cmakestack binary with the given arguments
pub fn run_cmakestack(workspace: &TestWorkspace, args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cmakestack"));
    cmd.current_dir(workspace.path());
    for arg in args {
        cmd.arg(arg);
    }
    cmd.output().expect("Failed to execute cmakestack")
}

/// Run a build against the fake toolchain, with extra env vars
#[allow(dead_code)]
pub fn run_build(
    workspace: &TestWorkspace,
    toolchain: &FakeToolchain,
    graph: &Path,
    extra_args: &[&str],
    env: &[(&str, &str)],
) -> Output {
    let install_dir = workspace.path().join("install");
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cmakestack"));
    cmd.current_dir(workspace.path());
    cmd.arg("build")
        .arg(graph)
        .arg(&install_dir)
        .arg("--source-root")
        .arg(workspace.path())
        .arg("--cmake")
        .arg(&toolchain.cmake)
        .arg("--make")
        .arg(&toolchain.make);
    for arg in extra_args {
        cmd.arg(arg);
    }
    for (key, value) in env {
        cmd.env(key, value);
    }
    cmd.output().expect("Failed to execute cmakestack build")
}
