//! Command implementations for kit-cli

pub mod add;
pub mod diff;
pub mod init;
pub mod list;

pub use add::run_add;
pub use diff::run_diff;
pub use init::run_init;
pub use list::run_list;

use colored::Colorize;
use kit_core::InstallOutcome;

/// Print what happened to npm dependencies.
pub(crate) fn print_install(outcome: &InstallOutcome) {
    match outcome {
        InstallOutcome::NothingToInstall => {}
        InstallOutcome::Installed { packages } => {
            println!(
                "{} Installed {}",
                "OK".green().bold(),
                packages.join(", ").cyan()
            );
        }
        InstallOutcome::Failed { command, .. } => {
            eprintln!(
                "{} Dependency installation failed. Run it yourself:",
                "warning:".yellow().bold()
            );
            eprintln!("  {}", command.cyan());
        }
    }
}
