//! Init command implementation

use colored::Colorize;
use kit_core::{CssOutcome, InitOptions, InitReport};

use super::print_install;
use crate::context;
use crate::error::Result;
use crate::interactive;

/// Run the init command
pub async fn run_init(registry: &str, cwd: &std::path::Path, options: InitOptions) -> Result<()> {
    let project = context::resolve_project_dir(cwd)?;
    let engine = context::engine(registry, &project, interactive::prompter());

    let report = engine.init(&project, &options).await?;
    print_init_report(&report);
    Ok(())
}

/// Print a summary of what init did.
pub(crate) fn print_init_report(report: &InitReport) {
    println!(
        "{} Wrote {}",
        "OK".green().bold(),
        report.config_path.as_str().yellow()
    );
    for dir in &report.created_dirs {
        println!("  {} {}", "+".green(), dir.as_str());
    }
    if let Some(utils) = &report.utils_written {
        println!("  {} {}", "+".green(), utils.as_str());
    }
    match &report.css {
        CssOutcome::Injected { path } => {
            println!("  {} {} (theme variables)", "~".yellow(), path.as_str())
        }
        CssOutcome::AlreadyPresent { path } => println!(
            "  {} {} already defines theme variables",
            "=".dimmed(),
            path.as_str()
        ),
        CssOutcome::Skipped => {}
    }
    print_install(&report.install);
}
