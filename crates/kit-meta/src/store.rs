//! Loading and saving `components.json`

use kit_fs::{JsonStore, NormalizedPath, ProjectFile};

use crate::config::Config;
use crate::validation;
use crate::{Error, Result};

/// Reads and writes the project config at `<cwd>/components.json`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigStore {
    json: JsonStore,
}

impl ConfigStore {
    pub fn new() -> Self {
        Self {
            json: JsonStore::new(),
        }
    }

    /// Location of the config file for a project root.
    pub fn path(cwd: &NormalizedPath) -> NormalizedPath {
        cwd.join(ProjectFile::ComponentsJson.as_str())
    }

    /// Whether a config file exists, regardless of whether it is valid.
    pub fn exists(cwd: &NormalizedPath) -> bool {
        Self::path(cwd).is_file()
    }

    /// Load the config, treating a missing, unparsable or invalid file as absent.
    pub fn load(&self, cwd: &NormalizedPath) -> Option<Config> {
        match self.try_load(cwd) {
            Ok(config) => Some(config),
            Err(e) => {
                tracing::debug!(cwd = %cwd, error = %e, "No usable config");
                None
            }
        }
    }

    /// Load the config, reporting why it could not be used.
    pub fn try_load(&self, cwd: &NormalizedPath) -> Result<Config> {
        let path = Self::path(cwd);
        let config: Config = self.json.load(&path)?;

        let problems = validation::problems(&config);
        if !problems.is_empty() {
            return Err(Error::InvalidConfig {
                path: path.to_native(),
                message: problems.join("; "),
            });
        }
        Ok(config)
    }

    /// Persist the config, replacing any existing file.
    pub fn save(&self, cwd: &NormalizedPath, config: &Config) -> Result<()> {
        let path = Self::path(cwd);
        self.json.save(&path, config)?;
        tracing::info!(path = %path, "Saved config");
        Ok(())
    }
}
