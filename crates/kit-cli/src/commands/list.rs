//! List command implementation

use colored::Colorize;
use kit_meta::RegistryIndexEntry;

use crate::context;
use crate::error::Result;
use crate::interactive;

/// Run the list command
pub async fn run_list(registry: &str, cwd: &std::path::Path) -> Result<()> {
    let project = context::resolve_project_dir(cwd)?;
    let engine = context::engine(registry, &project, interactive::prompter());

    let index = engine.list().await?;
    println!(
        "{} {}",
        "Available Components".bold(),
        format!("({})", engine.registry_location()).dimmed()
    );
    println!();
    for entry in &index {
        println!("{}", format_entry(entry));
    }
    println!();
    println!(
        "{} {} items. Use {} to add one.",
        "Total:".dimmed(),
        index.len(),
        "kit add <name>".cyan()
    );
    Ok(())
}

fn format_entry(entry: &RegistryIndexEntry) -> String {
    let kind = entry.item_type.to_string();
    if entry.description.is_empty() {
        format!("  {:<20} {}", entry.name.green(), kind.dimmed())
    } else {
        format!(
            "  {:<20} {} {}",
            entry.name.green(),
            kind.dimmed(),
            entry.description
        )
    }
}
