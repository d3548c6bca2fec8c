//! Typed build options
//!
//! The graph file carries raw `KEY=VALUE` option strings per project. They
//! are resolved once into a typed structure before strategy dispatch so
//! their effects (build directory name, testing toggle, build type flag)
//! are decided in one place.

use std::fmt;

/// CMake build type selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BuildType {
    /// Debug build, tests enabled by default
    Debug,
    /// Release build, tests forced off
    #[default]
    Release,
}

impl BuildType {
    /// Value passed as `CMAKE_BUILD_TYPE`
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "Debug",
            Self::Release => "Release",
        }
    }
}

impl fmt::Display for BuildType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recognized build options with their effects resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildOptions {
    /// Selected build type
    pub build_type: BuildType,
    testing: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            build_type: BuildType::default(),
            testing: true,
        }
    }
}

impl BuildOptions {
    /// Parse raw option strings; unrecognized keys are ignored
    pub fn parse(raw: &[String]) -> Self {
        let mut options = Self::default();
        for option in raw {
            let Some((key, value)) = option.split_once('=') else {
                continue;
            };
            match key {
                "BUILD_TYPE" => {
                    options.build_type = if value.eq_ignore_ascii_case("debug") {
                        BuildType::Debug
                    } else {
                        BuildType::Release
                    };
                }
                "BUILD_TESTING" => {
                    options.testing = value.eq_ignore_ascii_case("on");
                }
                _ => tracing::debug!("Ignoring unrecognized build option '{option}'"),
            }
        }
        options
    }

    /// Build directory name under the unit's source directory
    pub fn build_dir_name(self) -> &'static str {
        match self.build_type {
            BuildType::Debug => "build",
            BuildType::Release => "build-rel",
        }
    }

    /// Whether tests are built; forced off for Release builds
    pub fn testing(self) -> bool {
        match self.build_type {
            BuildType::Debug => self.testing,
            BuildType::Release => false,
        }
    }

    /// The `BUILD_TESTING` flag contributed to the configure invocation
    pub fn testing_flag(self) -> String {
        format!(
            "BUILD_TESTING={}",
            if self.testing() { "ON" } else { "OFF" }
        )
    }
}
