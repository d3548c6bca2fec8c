//! Output formatting
//!
//! Console formatting for reports and errors, plus tracing setup from the
//! verbosity flags. Toolchain output streams through unfiltered; these
//! helpers only frame it.

use tracing_subscriber::EnvFilter;

use crate::core::orchestrator::{BuildReport, ProjectStatus};

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";

    /// Warning prefix (yellow triangle)
    pub const WARNING: &str = "⚠";
}

/// Initialize the tracing subscriber from the verbosity flags
///
/// `RUST_LOG` overrides the flag-derived level when set.
pub fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Display a top-level error
pub fn display_error(error: &anyhow::Error) {
    eprintln!("{} {error:#}", status::ERROR);
}

/// Print the per-project outcome summary
pub fn print_report(report: &BuildReport) {
    println!();
    for outcome in &report.outcomes {
        match &outcome.status {
            ProjectStatus::Built { units } => {
                println!("{} {} ({units} unit(s))", status::SUCCESS, outcome.name);
            }
            ProjectStatus::Failed { phase, message } => {
                println!(
                    "{} {} ({phase} failed: {message})",
                    status::ERROR,
                    outcome.name
                );
            }
            ProjectStatus::Skipped { reason } => {
                println!("{} {} (skipped: {reason})", status::WARNING, outcome.name);
            }
        }
    }
    println!(
        "\n{} built, {} failed, {} skipped",
        report.built().count(),
        report.failed().count(),
        report.skipped().count()
    );
}
