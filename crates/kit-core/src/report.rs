//! Reports returned by engine workflows

use kit_content::LineDelta;
use kit_fs::NormalizedPath;
use serde::Serialize;

/// Why a file was left as it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkipReason {
    /// Local content already matches
    Identical,
    /// Local content differs and overwriting was not allowed
    Declined,
}

/// Lifecycle of one file during `add`.
///
/// `Planned` moves to `Skipped` or `WritePending`; a pending file becomes
/// `Written` once it is on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FileState {
    Planned,
    Skipped(SkipReason),
    WritePending,
    Written,
}

/// Outcome for one registry file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    /// Registry item the file belongs to
    pub item: String,
    pub path: NormalizedPath,
    pub state: FileState,
}

/// What happened to the global stylesheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CssOutcome {
    Injected { path: NormalizedPath },
    AlreadyPresent { path: NormalizedPath },
    Skipped,
}

/// What happened to npm dependencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum InstallOutcome {
    NothingToInstall,
    Installed { packages: Vec<String> },
    /// The package manager failed; `command` is what the user can run instead
    Failed { packages: Vec<String>, command: String },
}

impl InstallOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, InstallOutcome::Failed { .. })
    }
}

/// Report from `init`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InitReport {
    pub config_path: NormalizedPath,
    /// Directories that did not exist before
    pub created_dirs: Vec<NormalizedPath>,
    /// The shared utility, when it was written
    pub utils_written: Option<NormalizedPath>,
    pub css: CssOutcome,
    pub install: InstallOutcome,
}

/// Report from `add`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddReport {
    /// Set when the project was initialized as part of this call
    pub init: Option<InitReport>,
    /// Resolved items in discovery order
    pub items: Vec<String>,
    pub files: Vec<FileReport>,
    pub install: InstallOutcome,
}

impl AddReport {
    /// Files in the given state.
    pub fn files_in(&self, state: FileState) -> impl Iterator<Item = &FileReport> {
        self.files.iter().filter(move |file| file.state == state)
    }

    pub fn written(&self) -> usize {
        self.files_in(FileState::Written).count()
    }
}

/// How one local file compares with the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiffStatus {
    Missing,
    UpToDate,
    Modified {
        local_lines: usize,
        registry_lines: usize,
        added: usize,
        removed: usize,
    },
}

impl From<LineDelta> for DiffStatus {
    fn from(delta: LineDelta) -> Self {
        DiffStatus::Modified {
            local_lines: delta.local_lines,
            registry_lines: delta.registry_lines,
            added: delta.added,
            removed: delta.removed,
        }
    }
}

/// Diff status of one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileDiff {
    pub path: NormalizedPath,
    pub status: DiffStatus,
}

/// Report from `diff`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffReport {
    pub name: String,
    pub files: Vec<FileDiff>,
    /// Command that replaces local files with the registry version
    pub update_command: String,
}

impl DiffReport {
    pub fn is_up_to_date(&self) -> bool {
        self.files
            .iter()
            .all(|file| file.status == DiffStatus::UpToDate)
    }
}
