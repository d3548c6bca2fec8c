//! Per-project build unit construction
//!
//! A build unit is the value handed to a strategy: resolved source
//! directory, placeholder-substituted flag list, install directory, typed
//! options and the environment overlay for child invocations. Units are
//! created fresh per project by the driver and discarded afterwards.

use regex::Regex;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::config::defaults;
use crate::core::graph::ProjectDescriptor;
use crate::core::options::BuildOptions;

/// One project as actually dispatched to a strategy
#[derive(Debug, Clone)]
pub struct BuildUnit {
    /// Project identifier
    pub name: String,
    /// Resolved source directory (`source_root/sub/name`)
    pub source_dir: PathBuf,
    /// Substituted flag list, including the `BUILD_TESTING` option flag
    pub flags: Vec<String>,
    /// Target install directory
    pub install_dir: PathBuf,
    /// Typed build options
    pub options: BuildOptions,
    /// Environment overlay applied to every child invocation
    pub env: HashMap<String, String>,
}

impl BuildUnit {
    /// Assemble the unit for one project
    ///
    /// Substitutes placeholder tokens in the raw flags, resolves the source
    /// directory from the declared sub-path and prepends the install
    /// directory to the `CMAKE_PREFIX_PATH` overlay. The ambient process
    /// environment is never modified; children receive a copy plus this
    /// overlay.
    pub fn from_descriptor(
        descriptor: &ProjectDescriptor,
        source_root: &Path,
        install_dir: &Path,
        python: &Path,
    ) -> Self {
        let source_dir = source_root.join(&descriptor.sub).join(&descriptor.name);
        let install = install_dir.display().to_string();
        let python = python.display().to_string();
        let options = BuildOptions::parse(&descriptor.build_options);

        let mut flags: Vec<String> = descriptor
            .cmake_flags
            .iter()
            .map(|flag| substitute_placeholders(flag, &python, &install))
            .collect();
        flags.push(options.testing_flag());

        let ambient = std::env::var(defaults::PREFIX_PATH_VAR).unwrap_or_default();
        let mut env = HashMap::new();
        env.insert(
            defaults::PREFIX_PATH_VAR.to_string(),
            format!("{install}:{ambient}"),
        );

        Self {
            name: descriptor.name.clone(),
            source_dir,
            flags,
            install_dir: install_dir.to_path_buf(),
            options,
            env,
        }
    }
}

/// Replace recognized `${TOKEN}` placeholders in a raw flag
///
/// Only the interpreter and install-directory tokens are recognized; any
/// other `${...}` text passes through untouched.
pub fn substitute_placeholders(flag: &str, python: &str, install_dir: &str) -> String {
    let re = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("valid placeholder pattern");

    let mut last_end = 0;
    let mut output = String::new();

    for cap in re.captures_iter(flag) {
        let full_match = cap.get(0).expect("capture group 0 always present");
        let replacement = match &cap[1] {
            defaults::PYTHON_PLACEHOLDER => python,
            defaults::INSTALL_DIR_PLACEHOLDER => install_dir,
            _ => full_match.as_str(),
        };

        output.push_str(&flag[last_end..full_match.start()]);
        output.push_str(replacement);
        last_end = full_match.end();
    }

    output.push_str(&flag[last_end..]);
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::descriptor;

    #[test]
    fn test_substitute_both_placeholders() {
        let flag = "PYTHON_EXECUTABLE=${PYTHON_EXECUTABLE}";
        assert_eq!(
            substitute_placeholders(flag, "/usr/bin/python3", "/opt/x"),
            "PYTHON_EXECUTABLE=/usr/bin/python3"
        );
        assert_eq!(
            substitute_placeholders("PREFIX=${INSTALL_DIR}/share", "py", "/opt/x"),
            "PREFIX=/opt/x/share"
        );
    }

    #[test]
    fn test_unknown_tokens_pass_through() {
        assert_eq!(
            substitute_placeholders("X=${SOMETHING_ELSE}", "py", "/opt/x"),
            "X=${SOMETHING_ELSE}"
        );
    }

    #[test]
    fn test_unit_resolves_source_dir_from_sub_path() {
        let mut d = descriptor("urdfdom", "thirdparty", &[]);
        d.cmake_flags = vec!["FOO=1".to_string()];
        let unit = BuildUnit::from_descriptor(
            &d,
            Path::new("/ws/src"),
            Path::new("/opt/install"),
            Path::new("python3"),
        );
        assert_eq!(unit.source_dir, PathBuf::from("/ws/src/thirdparty/urdfdom"));
        assert_eq!(unit.flags, vec!["FOO=1", "BUILD_TESTING=OFF"]);
    }

    #[test]
    fn test_env_overlay_prepends_install_dir() {
        let d = descriptor("a", "x", &[]);
        let unit = BuildUnit::from_descriptor(
            &d,
            Path::new("/ws"),
            Path::new("/opt/install"),
            Path::new("python3"),
        );
        let prefix = unit.env.get(defaults::PREFIX_PATH_VAR).unwrap();
        assert!(prefix.starts_with("/opt/install:"), "got {prefix}");
    }

    #[test]
    fn test_build_options_wired_into_unit() {
        let mut d = descriptor("a", "x", &[]);
        d.build_options = vec!["BUILD_TYPE=Debug".to_string()];
        let unit = BuildUnit::from_descriptor(
            &d,
            Path::new("/ws"),
            Path::new("/opt"),
            Path::new("python3"),
        );
        assert_eq!(unit.options.build_dir_name(), "build");
        assert!(unit.flags.contains(&"BUILD_TESTING=ON".to_string()));
    }
}
