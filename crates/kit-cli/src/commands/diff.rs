//! Diff command implementation
//!
//! Compares one component's local files with the registry version.

use colored::Colorize;
use kit_core::{DiffReport, DiffStatus};

use crate::context;
use crate::error::Result;
use crate::interactive;

/// Run the diff command
pub async fn run_diff(registry: &str, cwd: &std::path::Path, component: &str) -> Result<()> {
    let project = context::resolve_project_dir(cwd)?;
    let engine = context::engine(registry, &project, interactive::prompter());

    let report = engine.diff(&project, component).await?;
    print_diff_report(&report);
    Ok(())
}

fn print_diff_report(report: &DiffReport) {
    if report.is_up_to_date() {
        println!(
            "{} {} is up to date.",
            "OK".green().bold(),
            report.name.cyan()
        );
        println!(
            "Run {} to force the registry version.",
            report.update_command.cyan()
        );
        return;
    }

    println!("{} {}", "Diff".blue().bold(), report.name.cyan());
    println!();
    for file in &report.files {
        let path = file.path.as_str();
        match &file.status {
            DiffStatus::UpToDate => println!("  {} {}", "=".dimmed(), path.dimmed()),
            DiffStatus::Missing => println!("  {} {} {}", "-".red(), path, "(missing)".red()),
            DiffStatus::Modified {
                local_lines,
                registry_lines,
                added,
                removed,
            } => println!(
                "  {} {} ({} / {} lines local / registry) {} {}",
                "~".yellow(),
                path,
                local_lines,
                registry_lines,
                format!("+{added}").green(),
                format!("-{removed}").red()
            ),
        }
    }
    println!();
    println!(
        "Run {} to replace local files.",
        report.update_command.cyan()
    );
}
