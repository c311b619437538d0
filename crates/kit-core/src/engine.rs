//! SyncEngine implementation
//!
//! The SyncEngine brings a project in line with the registry: it scaffolds
//! configuration, writes component files and reports drift.

use std::collections::{BTreeSet, HashSet};

use kit_content::delta::{LineDelta, normalize_line_endings};
use kit_content::transform::normalize;
use kit_content::{contained_target_path, stylesheet, transform};
use kit_fs::{NormalizedPath, io};
use kit_meta::{Config, ConfigStore, ItemType, RegistryIndexEntry, alias};
use kit_project::package_manager::{self, PackageManager};
use kit_project::{Installer, inspector};
use kit_registry::{RegistrySource, check_known, resolve, validate_names};

use crate::answers::InitAnswers;
use crate::prompt::Prompter;
use crate::report::{
    AddReport, CssOutcome, DiffReport, DiffStatus, FileDiff, FileReport, FileState, InitReport,
    InstallOutcome, SkipReason,
};
use crate::templates::{self, BASELINE_PACKAGES};
use crate::{Error, Result};

/// Options for `init`
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// Accept defaults without prompting
    pub yes: bool,
    /// Replace an existing config
    pub force: bool,
    /// Leave the global stylesheet alone
    pub skip_css: bool,
}

/// Options for `add`
#[derive(Debug, Clone, Default)]
pub struct AddOptions {
    /// Requested component names
    pub names: Vec<String>,
    /// Never prompt; initialize a missing config and keep modified files
    pub yes: bool,
    /// Replace modified files without asking
    pub overwrite: bool,
    /// Add every UI component in the registry
    pub all: bool,
}

/// Engine for project workflows
///
/// The SyncEngine provides four operations:
/// - **init**: create the project config and scaffolding
/// - **add**: write components and their registry dependencies
/// - **diff**: compare one component's local files with the registry
/// - **list**: show what the registry offers
pub struct SyncEngine {
    registry: Box<dyn RegistrySource>,
    installer: Box<dyn Installer>,
    prompter: Box<dyn Prompter>,
    store: ConfigStore,
}

impl SyncEngine {
    pub fn new(
        registry: Box<dyn RegistrySource>,
        installer: Box<dyn Installer>,
        prompter: Box<dyn Prompter>,
    ) -> Self {
        Self {
            registry,
            installer,
            prompter,
            store: ConfigStore::new(),
        }
    }

    /// Where components come from.
    pub fn registry_location(&self) -> String {
        self.registry.location()
    }

    /// The registry index.
    pub async fn list(&self) -> Result<Vec<RegistryIndexEntry>> {
        Ok(self.registry.fetch_index().await?)
    }

    /// Initialize a project.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigExists`] when a config is present and `force`
    /// is not set.
    pub async fn init(&self, cwd: &NormalizedPath, options: &InitOptions) -> Result<InitReport> {
        let info = inspector::detect(cwd).await;
        let config_path = ConfigStore::path(cwd);
        if ConfigStore::exists(cwd) && !options.force {
            return Err(Error::ConfigExists {
                path: config_path.to_native(),
            });
        }

        let defaults = InitAnswers::from_project(&info);
        let answers = if options.yes {
            defaults
        } else {
            self.prompter.init_answers(defaults)?
        };
        let config = answers.into_config(&info);

        let mut created_dirs = Vec::new();
        let aliases = &config.aliases;
        for dir_alias in [aliases.components.clone(), aliases.ui(), aliases.lib()] {
            let dir = alias_dir(cwd, &dir_alias);
            if io::ensure_dir(&dir)? {
                tracing::debug!(dir = %dir, "Created directory");
                created_dirs.push(dir);
            }
        }

        let utils = utils_path(cwd, &config);
        let utils_written = if let Some(existing) = existing_utils(cwd, &config) {
            tracing::debug!(path = %existing, "Keeping existing shared utility");
            None
        } else {
            io::write_text(&utils, templates::utils_source(config.tsx))?;
            tracing::info!(path = %utils, "Wrote shared utility");
            Some(utils)
        };

        self.store.save(cwd, &config)?;

        let css = if options.skip_css {
            CssOutcome::Skipped
        } else {
            let path = cwd.join(&config.tailwind.css);
            if stylesheet::apply(&path)? {
                CssOutcome::Injected { path }
            } else {
                CssOutcome::AlreadyPresent { path }
            }
        };

        let baseline: BTreeSet<String> = BASELINE_PACKAGES.iter().map(|p| p.to_string()).collect();
        let install = self.install_missing(cwd, &baseline).await;

        Ok(InitReport {
            config_path,
            created_dirs,
            utils_written,
            css,
            install,
        })
    }

    /// Add components and their registry dependencies to a project.
    ///
    /// Names are checked before anything touches the network or the
    /// filesystem. Re-running with the same request changes nothing.
    pub async fn add(&self, cwd: &NormalizedPath, options: &AddOptions) -> Result<AddReport> {
        validate_names(&options.names)?;
        if options.names.is_empty() && !options.all {
            return Err(Error::NothingRequested);
        }

        let (config, init) = self.require_config(cwd, options.yes).await?;

        let index = self.registry.fetch_index().await?;
        let mut names = options.names.clone();
        if options.all {
            names.extend(
                index
                    .iter()
                    .filter(|entry| entry.item_type == ItemType::Ui)
                    .map(|entry| entry.name.clone()),
            );
        }
        check_known(&index, &names)?;

        let items = resolve(self.registry.as_ref(), &config.style, &names).await?;
        let required: BTreeSet<String> = items
            .iter()
            .flat_map(|item| item.dependencies.iter().cloned())
            .collect();

        let utils_stem = cwd.join(alias::strip_prefix(&config.aliases.utils));
        let mut seen_targets = HashSet::new();
        let mut planned: Vec<(FileReport, String)> = Vec::new();
        for item in &items {
            for file in &item.files {
                let path = contained_path(cwd, &config, &item.name, &file.path)?;
                if !seen_targets.insert(path.clone()) {
                    tracing::debug!(path = %path, item = %item.name, "Target already planned");
                    continue;
                }
                let content = transform(&file.content, &config);
                let mut report = FileReport {
                    item: item.name.clone(),
                    path,
                    state: FileState::Planned,
                };
                report.state = self.plan_file(&config, &utils_stem, &report.path, &content, options)?;
                planned.push((report, content));
            }
        }

        let mut files = Vec::with_capacity(planned.len());
        for (mut report, content) in planned {
            if report.state == FileState::WritePending {
                io::write_text(&report.path, &content)?;
                tracing::info!(path = %report.path, item = %report.item, "Wrote file");
                report.state = FileState::Written;
            }
            files.push(report);
        }

        let install = self.install_missing(cwd, &required).await;

        Ok(AddReport {
            init,
            items: items.into_iter().map(|item| item.name).collect(),
            files,
            install,
        })
    }

    /// Compare one component's local files with the registry version.
    pub async fn diff(&self, cwd: &NormalizedPath, name: &str) -> Result<DiffReport> {
        validate_names(&[name.to_string()])?;
        let config = self.store.load(cwd).ok_or_else(|| Error::ConfigMissing {
            path: ConfigStore::path(cwd).to_native(),
        })?;

        let item = self.registry.fetch_item(&config.style, name).await?;

        let mut files = Vec::with_capacity(item.files.len());
        for file in &item.files {
            let path = contained_path(cwd, &config, name, &file.path)?;
            let status = match io::read_text_if_exists(&path)? {
                None => DiffStatus::Missing,
                Some(local) => {
                    let local = normalize_line_endings(&local);
                    let registry = normalize_line_endings(&transform(&file.content, &config));
                    if local == registry {
                        DiffStatus::UpToDate
                    } else {
                        LineDelta::compute(&local, &registry).into()
                    }
                }
            };
            files.push(FileDiff { path, status });
        }

        Ok(DiffReport {
            name: name.to_string(),
            files,
            update_command: format!("kit add {name} --overwrite"),
        })
    }

    /// Load the config for `add`, initializing the project when allowed.
    async fn require_config(
        &self,
        cwd: &NormalizedPath,
        yes: bool,
    ) -> Result<(Config, Option<InitReport>)> {
        if let Some(config) = self.store.load(cwd) {
            return Ok((config, None));
        }
        if ConfigStore::exists(cwd) {
            // Present but unusable: surface why
            let config = self.store.try_load(cwd)?;
            return Ok((config, None));
        }

        let missing = || Error::ConfigMissing {
            path: ConfigStore::path(cwd).to_native(),
        };
        if !(yes || self.prompter.confirm_init()?) {
            return Err(missing());
        }

        let options = InitOptions {
            yes,
            ..InitOptions::default()
        };
        let report = self.init(cwd, &options).await?;
        let config = self.store.load(cwd).ok_or_else(missing)?;
        Ok((config, Some(report)))
    }

    /// Decide what happens to one target file.
    fn plan_file(
        &self,
        config: &Config,
        utils_stem: &NormalizedPath,
        path: &NormalizedPath,
        content: &str,
        options: &AddOptions,
    ) -> Result<FileState> {
        let Some(existing) = io::read_text_if_exists(path)? else {
            return Ok(FileState::WritePending);
        };

        if is_shared_utility(path, utils_stem)
            && normalize(&transform(&existing, config)) == normalize(content)
        {
            tracing::debug!(path = %path, "Shared utility already equivalent");
            return Ok(FileState::Skipped(SkipReason::Identical));
        }
        if normalize_line_endings(&existing) == normalize_line_endings(content) {
            tracing::debug!(path = %path, "File unchanged");
            return Ok(FileState::Skipped(SkipReason::Identical));
        }

        if options.overwrite || (!options.yes && self.prompter.confirm_overwrite(path)?) {
            Ok(FileState::WritePending)
        } else {
            tracing::debug!(path = %path, "Keeping modified file");
            Ok(FileState::Skipped(SkipReason::Declined))
        }
    }

    /// Install whatever part of `required` the project does not declare yet.
    async fn install_missing(&self, cwd: &NormalizedPath, required: &BTreeSet<String>) -> InstallOutcome {
        let installed = package_manager::installed(cwd).await;
        let missing = package_manager::missing(required, &installed);
        if missing.is_empty() {
            return InstallOutcome::NothingToInstall;
        }

        let manager = PackageManager::detect(cwd);
        if self.installer.install(cwd, manager, &missing).await {
            InstallOutcome::Installed { packages: missing }
        } else {
            let command = package_manager::plan_command(manager, &missing, false);
            tracing::warn!(%command, "Dependency installation failed");
            InstallOutcome::Failed {
                packages: missing,
                command,
            }
        }
    }
}

/// Directory an alias points at.
fn alias_dir(cwd: &NormalizedPath, alias_value: &str) -> NormalizedPath {
    cwd.join(alias::strip_prefix(alias_value))
}

/// File `init` writes the shared utility to.
fn utils_path(cwd: &NormalizedPath, config: &Config) -> NormalizedPath {
    let stem = alias::strip_prefix(&config.aliases.utils);
    cwd.join(&format!("{stem}.{}", config.source_extension()))
}

/// An existing shared utility in either language.
fn existing_utils(cwd: &NormalizedPath, config: &Config) -> Option<NormalizedPath> {
    let stem = alias::strip_prefix(&config.aliases.utils);
    ["ts", "js"]
        .into_iter()
        .map(|ext| cwd.join(&format!("{stem}.{ext}")))
        .find(|path| path.exists())
}

/// Where a registry file lands, refusing anything outside the project.
fn contained_path(cwd: &NormalizedPath, config: &Config, item: &str, path: &str) -> Result<NormalizedPath> {
    contained_target_path(cwd, config, path).ok_or_else(|| Error::UnsafePath {
        item: item.to_string(),
        path: path.to_string(),
    })
}

fn is_shared_utility(path: &NormalizedPath, utils_stem: &NormalizedPath) -> bool {
    path.as_str()
        .rsplit_once('.')
        .is_some_and(|(stem, _)| stem == utils_stem.as_str())
}
