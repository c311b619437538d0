//! Add command implementation

use colored::Colorize;
use kit_core::{AddOptions, AddReport, FileState, SkipReason};

use super::init::print_init_report;
use super::print_install;
use crate::context;
use crate::error::Result;
use crate::interactive;

/// Run the add command
pub async fn run_add(registry: &str, cwd: &std::path::Path, mut options: AddOptions) -> Result<()> {
    let project = context::resolve_project_dir(cwd)?;
    let engine = context::engine(registry, &project, interactive::prompter());

    if options.names.is_empty() && !options.all && !options.yes && interactive::is_interactive() {
        let index = engine.list().await?;
        options.names = interactive::select_components(&index)?;
    }

    let report = engine.add(&project, &options).await?;
    print_add_report(&report);
    Ok(())
}

fn print_add_report(report: &AddReport) {
    if let Some(init) = &report.init {
        print_init_report(init);
        println!();
    }

    for file in &report.files {
        let path = file.path.as_str();
        match file.state {
            FileState::Written => println!("  {} {}", "+".green(), path),
            FileState::Skipped(SkipReason::Identical) => {
                println!("  {} {} {}", "=".dimmed(), path.dimmed(), "(unchanged)".dimmed())
            }
            FileState::Skipped(SkipReason::Declined) => println!(
                "  {} {} {}",
                "!".yellow(),
                path,
                "(local changes kept, use --overwrite to replace)".yellow()
            ),
            FileState::Planned | FileState::WritePending => {
                tracing::warn!(path = %path, state = ?file.state, "File left unprocessed")
            }
        }
    }

    println!(
        "{} Added {} ({} written)",
        "OK".green().bold(),
        report.items.join(", ").cyan(),
        report.written()
    );
    print_install(&report.install);
}
