//! Command context
//!
//! Resolves the project directory and wires the engine to a registry,
//! an installer and a prompter.

use std::path::Path;

use kit_core::{Prompter, SyncEngine};
use kit_fs::NormalizedPath;
use kit_project::CommandInstaller;
use kit_registry::registry_source;

use crate::error::{CliError, Result};

/// Resolve `--cwd` against the process working directory.
pub fn resolve_project_dir(cwd: &Path) -> Result<NormalizedPath> {
    let dir = if cwd.is_absolute() {
        cwd.to_path_buf()
    } else {
        std::env::current_dir()?.join(cwd)
    };
    if !dir.is_dir() {
        return Err(CliError::user(format!(
            "Project directory {} does not exist",
            dir.display()
        )));
    }
    Ok(NormalizedPath::new(dir))
}

/// Build an engine for `project`.
///
/// Items are fetched in whatever style the project's config names at the
/// time of each command.
pub fn engine(registry: &str, project: &NormalizedPath, prompter: Box<dyn Prompter>) -> SyncEngine {
    tracing::debug!(%registry, project = %project, "Using registry");
    SyncEngine::new(
        registry_source(registry),
        Box::new(CommandInstaller),
        prompter,
    )
}
