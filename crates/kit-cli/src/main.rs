//! kit CLI
//!
//! Adds UI components from a registry to a project.

mod cli;
mod commands;
mod context;
mod error;
mod interactive;

use std::path::Path;

use clap::Parser;
use colored::Colorize;
use kit_core::{AddOptions, InitOptions};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(cmd) => execute_command(&cli.registry, cmd).await,
        None => {
            println!("{} component registry CLI", "kit".green().bold());
            println!();
            println!("Run {} for available commands.", "kit --help".cyan());
            Ok(())
        }
    }
}

async fn execute_command(registry: &str, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Init {
            yes,
            cwd,
            force,
            skip_css,
        } => {
            let options = InitOptions {
                yes,
                force,
                skip_css,
            };
            commands::run_init(registry, &cwd, options).await
        }
        Commands::Add {
            components,
            yes,
            overwrite,
            all,
            cwd,
        } => {
            let options = AddOptions {
                names: components,
                yes,
                overwrite,
                all,
            };
            commands::run_add(registry, &cwd, options).await
        }
        Commands::List => commands::run_list(registry, Path::new(".")).await,
        Commands::Diff { component, cwd } => commands::run_diff(registry, &cwd, &component).await,
    }
}
