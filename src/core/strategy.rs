//! Build strategies and dispatch
//!
//! A strategy decides how one project decomposes into build units: the
//! standard strategy builds a single directory, bundle strategies iterate
//! sub-packages in a fixed or discovered order. The registry maps project
//! identifiers to strategies; unregistered identifiers use the standard
//! strategy, and adding a bundle type is a registration rather than a
//! dispatch-code change. Strategies pass explicit source and build
//! directories to the executor - the process working directory is never
//! touched.

use std::collections::HashMap;
use std::path::Path;

use crate::config::defaults;
use crate::core::unit::BuildUnit;
use crate::error::BuildError;
use crate::infra::cmake::CmakeToolchain;
use crate::infra::filesystem;

/// Counts of build units processed by one strategy invocation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    /// Units that completed the full configure/build/install cycle
    pub built: usize,
    /// Units skipped for lack of a build manifest
    pub skipped: usize,
}

/// How one project is turned into build units
pub trait BuildStrategy {
    /// Strategy name for logging
    fn name(&self) -> &'static str;

    /// Build every unit of the project, failing fast on the first unit error
    fn build(&self, unit: &BuildUnit, toolchain: &CmakeToolchain)
        -> Result<BuildStats, BuildError>;
}

/// Flags shared by every strategy: the unit flags plus install prefix and
/// library directory
fn bundle_flags(unit: &BuildUnit) -> Vec<String> {
    let mut flags = unit.flags.clone();
    flags.push(format!(
        "CMAKE_INSTALL_PREFIX={}",
        unit.install_dir.display()
    ));
    flags.push(format!("CMAKE_INSTALL_LIBDIR={}", defaults::INSTALL_LIBDIR));
    flags
}

/// Standard-strategy flags: the shared set plus build type and the fixed
/// compiler/documentation flags
fn standard_flags(unit: &BuildUnit) -> Vec<String> {
    let mut flags = bundle_flags(unit);
    flags.push(format!("CMAKE_BUILD_TYPE={}", unit.options.build_type));
    flags.extend(defaults::STANDARD_EXTRA_FLAGS.iter().map(|f| (*f).to_string()));
    flags
}

/// Configure, build and install one directory with the given flags
fn build_one(
    source_dir: &Path,
    flags: &[String],
    unit: &BuildUnit,
    toolchain: &CmakeToolchain,
) -> Result<(), BuildError> {
    let build_dir = source_dir.join(unit.options.build_dir_name());
    filesystem::create_dir_all(&build_dir)
        .map_err(|e| BuildError::Configure {
            message: e.to_string(),
        })?;
    toolchain.run_cycle(source_dir, &build_dir, flags, &unit.env)
}

/// Single CMake project built directly under its source directory
#[derive(Debug, Default)]
pub struct StandardStrategy;

impl BuildStrategy for StandardStrategy {
    fn name(&self) -> &'static str {
        "standard"
    }

    fn build(
        &self,
        unit: &BuildUnit,
        toolchain: &CmakeToolchain,
    ) -> Result<BuildStats, BuildError> {
        if !unit.source_dir.join(defaults::BUILD_MANIFEST).is_file() {
            tracing::warn!(
                "No {} found for {}. Skipping.",
                defaults::BUILD_MANIFEST,
                unit.name
            );
            return Ok(BuildStats {
                built: 0,
                skipped: 1,
            });
        }

        build_one(&unit.source_dir, &standard_flags(unit), unit, toolchain)?;
        Ok(BuildStats {
            built: 1,
            skipped: 0,
        })
    }
}

/// Bundle with a hand-maintained sub-package build order
#[derive(Debug)]
pub struct FixedBundleStrategy {
    name: &'static str,
    packages: &'static [&'static str],
}

impl FixedBundleStrategy {
    /// Create a bundle strategy over a fixed sub-package list
    pub fn new(name: &'static str, packages: &'static [&'static str]) -> Self {
        Self { name, packages }
    }
}

impl BuildStrategy for FixedBundleStrategy {
    fn name(&self) -> &'static str {
        self.name
    }

    fn build(
        &self,
        unit: &BuildUnit,
        toolchain: &CmakeToolchain,
    ) -> Result<BuildStats, BuildError> {
        let flags = bundle_flags(unit);
        let mut stats = BuildStats::default();

        for package in self.packages {
            let package_dir = unit.source_dir.join(package);
            if !package_dir.join(defaults::BUILD_MANIFEST).is_file() {
                tracing::warn!(
                    "No {} in {}/{}. Skipping.",
                    defaults::BUILD_MANIFEST,
                    unit.name,
                    package
                );
                stats.skipped += 1;
                continue;
            }

            tracing::info!("Compiling {}/{package}", unit.name);
            build_one(&package_dir, &flags, unit, toolchain)?;
            stats.built += 1;
        }

        Ok(stats)
    }
}

/// Bundle whose sub-packages are discovered from the filesystem
///
/// Every immediate subdirectory carrying a build manifest is a unit,
/// processed in file-name order.
#[derive(Debug, Default)]
pub struct DiscoveredBundleStrategy;

impl BuildStrategy for DiscoveredBundleStrategy {
    fn name(&self) -> &'static str {
        "discovered-bundle"
    }

    fn build(
        &self,
        unit: &BuildUnit,
        toolchain: &CmakeToolchain,
    ) -> Result<BuildStats, BuildError> {
        if !unit.source_dir.is_dir() {
            tracing::warn!("Source directory for {} does not exist. Skipping.", unit.name);
            return Ok(BuildStats {
                built: 0,
                skipped: 1,
            });
        }

        let flags = bundle_flags(unit);
        let subdirs = filesystem::buildable_subdirs(&unit.source_dir, defaults::BUILD_MANIFEST)
            .map_err(|e| BuildError::Configure {
                message: e.to_string(),
            })?;

        let mut stats = BuildStats::default();
        for package_dir in &subdirs {
            tracing::info!(
                "Compiling {}/{}",
                unit.name,
                package_dir.file_name().unwrap_or_default().to_string_lossy()
            );
            build_one(package_dir, &flags, unit, toolchain)?;
            stats.built += 1;
        }

        Ok(stats)
    }
}

/// Identifier -> strategy table with a standard fallback
pub struct StrategyRegistry {
    strategies: HashMap<String, Box<dyn BuildStrategy>>,
    standard: StandardStrategy,
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::with_builtin_bundles()
    }
}

impl StrategyRegistry {
    /// Registry with no bundle registrations
    pub fn empty() -> Self {
        Self {
            strategies: HashMap::new(),
            standard: StandardStrategy,
        }
    }

    /// Registry with the known multi-package bundles registered
    pub fn with_builtin_bundles() -> Self {
        let mut registry = Self::empty();
        registry.register(
            "pal_msgs",
            Box::new(FixedBundleStrategy::new(
                "pal-msgs-bundle",
                defaults::PAL_MSGS_PACKAGES,
            )),
        );
        registry.register(
            "image_pipeline",
            Box::new(FixedBundleStrategy::new(
                "image-pipeline-bundle",
                defaults::IMAGE_PIPELINE_PACKAGES,
            )),
        );
        registry.register(
            "vision_opencv",
            Box::new(FixedBundleStrategy::new(
                "vision-opencv-bundle",
                defaults::VISION_OPENCV_PACKAGES,
            )),
        );
        registry.register("universal_robot", Box::new(DiscoveredBundleStrategy));
        registry
    }

    /// Register a strategy for a project identifier
    pub fn register(&mut self, name: &str, strategy: Box<dyn BuildStrategy>) {
        self.strategies.insert(name.to_string(), strategy);
    }

    /// Whether the identifier has a dedicated (bundle) strategy
    pub fn is_registered(&self, name: &str) -> bool {
        self.strategies.contains_key(name)
    }

    /// Strategy for a project identifier, standard when unregistered
    pub fn select(&self, name: &str) -> &dyn BuildStrategy {
        match self.strategies.get(name) {
            Some(strategy) => strategy.as_ref(),
            None => &self.standard,
        }
    }
}
