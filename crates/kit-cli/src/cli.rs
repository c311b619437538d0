//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use kit_registry::DEFAULT_REGISTRY_URL;

/// kit - Add UI components from a registry to your project
#[derive(Parser, Debug)]
#[command(name = "kit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Registry URL or local registry directory
    #[arg(long, global = true, env = "KIT_REGISTRY_URL", default_value = DEFAULT_REGISTRY_URL)]
    pub registry: String,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Initialize a project
    ///
    /// Writes components.json, creates the component directories and the
    /// shared utility, adds the theme variables to the global stylesheet and
    /// installs the baseline packages.
    ///
    /// Examples:
    ///   kit init             # Guided setup
    ///   kit init -y          # Accept detected defaults
    ///   kit init -y --force  # Replace an existing components.json
    Init {
        /// Accept defaults without prompting
        #[arg(short, long)]
        yes: bool,

        /// Project directory
        #[arg(short, long, default_value = ".")]
        cwd: PathBuf,

        /// Overwrite an existing components.json
        #[arg(short, long)]
        force: bool,

        /// Leave the global stylesheet untouched
        #[arg(long)]
        skip_css: bool,
    },

    /// Add components and their dependencies
    ///
    /// Examples:
    ///   kit add button          # Add one component
    ///   kit add form dialog     # Add several
    ///   kit add --all -y        # Everything, without prompts
    ///   kit add button -o       # Replace local edits
    Add {
        /// Components to add
        components: Vec<String>,

        /// Never prompt; keep modified files
        #[arg(short, long)]
        yes: bool,

        /// Overwrite modified files without asking
        #[arg(short, long)]
        overwrite: bool,

        /// Add every UI component in the registry
        #[arg(short, long)]
        all: bool,

        /// Project directory
        #[arg(short, long, default_value = ".")]
        cwd: PathBuf,
    },

    /// List components available in the registry
    List,

    /// Compare a component's local files with the registry
    Diff {
        /// Component to compare
        component: String,

        /// Project directory
        #[arg(short, long, default_value = ".")]
        cwd: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_no_args() {
        let cli = Cli::parse_from(["kit"]);
        assert!(!cli.verbose);
        assert!(cli.command.is_none());
    }

    #[test]
    fn parse_short_verbose_flag() {
        let cli = Cli::parse_from(["kit", "-v", "list"]);
        assert!(cli.verbose);
        assert_eq!(cli.command, Some(Commands::List));
    }

    #[test]
    fn parse_registry_flag() {
        let cli = Cli::parse_from(["kit", "--registry", "./registry", "list"]);
        assert_eq!(cli.registry, "./registry");
    }

    #[test]
    fn parse_init_defaults() {
        let cli = Cli::parse_from(["kit", "init"]);
        assert_eq!(
            cli.command,
            Some(Commands::Init {
                yes: false,
                cwd: PathBuf::from("."),
                force: false,
                skip_css: false,
            })
        );
    }

    #[test]
    fn parse_init_flags() {
        let cli = Cli::parse_from(["kit", "init", "-y", "-f", "--skip-css", "-c", "web"]);
        assert_eq!(
            cli.command,
            Some(Commands::Init {
                yes: true,
                cwd: PathBuf::from("web"),
                force: true,
                skip_css: true,
            })
        );
    }

    #[test]
    fn parse_add_components_and_flags() {
        let cli = Cli::parse_from(["kit", "add", "button", "form", "-y", "-o"]);
        match cli.command {
            Some(Commands::Add {
                components,
                yes,
                overwrite,
                all,
                ..
            }) => {
                assert_eq!(components, vec!["button", "form"]);
                assert!(yes);
                assert!(overwrite);
                assert!(!all);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parse_add_all_without_names() {
        let cli = Cli::parse_from(["kit", "add", "--all"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Add { ref components, all: true, .. }) if components.is_empty()
        ));
    }

    #[test]
    fn parse_diff_requires_component() {
        assert!(Cli::try_parse_from(["kit", "diff"]).is_err());
        let cli = Cli::parse_from(["kit", "diff", "button"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Diff { ref component, .. }) if component == "button"
        ));
    }
}
