//! npm package manager integration

use std::collections::BTreeSet;
use std::fmt;
use std::process::Stdio;

use async_trait::async_trait;
use kit_fs::NormalizedPath;
use tokio::process::Command;

use crate::package_json::PackageJson;

/// A JavaScript package manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManager {
    Pnpm,
    Yarn,
    Bun,
    Npm,
}

/// Lockfiles in detection priority order.
const LOCKFILES: [(&str, PackageManager); 4] = [
    ("pnpm-lock.yaml", PackageManager::Pnpm),
    ("yarn.lock", PackageManager::Yarn),
    ("bun.lockb", PackageManager::Bun),
    ("package-lock.json", PackageManager::Npm),
];

impl PackageManager {
    /// Detect the package manager from lockfiles, defaulting to npm.
    pub fn detect(cwd: &NormalizedPath) -> Self {
        LOCKFILES
            .iter()
            .find(|(lockfile, _)| cwd.join(lockfile).is_file())
            .map(|(_, manager)| *manager)
            .unwrap_or(PackageManager::Npm)
    }

    /// Executable name.
    pub fn program(&self) -> &'static str {
        match self {
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
            PackageManager::Bun => "bun",
            PackageManager::Npm => "npm",
        }
    }

    /// Arguments that precede the package list.
    pub fn add_args(&self, dev: bool) -> Vec<&'static str> {
        let mut args = match self {
            PackageManager::Npm => vec!["install"],
            _ => vec!["add"],
        };
        if dev {
            args.push("-D");
        }
        args
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program())
    }
}

/// The command a user would run to install `deps`, e.g. `pnpm add -D a b`.
pub fn plan_command(manager: PackageManager, deps: &[String], dev: bool) -> String {
    let mut parts: Vec<&str> = vec![manager.program()];
    parts.extend(manager.add_args(dev));
    parts.extend(deps.iter().map(String::as_str));
    parts.join(" ")
}

/// Packages declared by the project; empty when `package.json` is missing or unreadable.
pub async fn installed(cwd: &NormalizedPath) -> BTreeSet<String> {
    match PackageJson::read(cwd).await {
        Ok(manifest) => manifest.dependency_names(),
        Err(e) => {
            tracing::debug!(cwd = %cwd, error = %e, "Treating project as having no packages");
            BTreeSet::new()
        }
    }
}

/// Required packages that are not yet installed, in sorted order.
pub fn missing<'a>(
    required: impl IntoIterator<Item = &'a String>,
    installed: &BTreeSet<String>,
) -> Vec<String> {
    required
        .into_iter()
        .filter(|name| !installed.contains(*name))
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Run the package manager to add `deps`. Returns whether it exited successfully.
///
/// There is no timeout; the child runs to completion.
pub async fn install(cwd: &NormalizedPath, manager: PackageManager, deps: &[String]) -> bool {
    let output = Command::new(manager.program())
        .args(manager.add_args(false))
        .args(deps)
        .current_dir(cwd.to_native())
        .stdin(Stdio::null())
        .output()
        .await;

    match output {
        Ok(output) if output.status.success() => {
            tracing::info!(manager = %manager, ?deps, "Installed packages");
            true
        }
        Ok(output) => {
            tracing::warn!(
                manager = %manager,
                status = %output.status,
                stderr = %String::from_utf8_lossy(&output.stderr),
                "Package installation failed"
            );
            false
        }
        Err(e) => {
            tracing::warn!(manager = %manager, error = %e, "Could not start package manager");
            false
        }
    }
}

/// Installs npm packages into a project.
#[async_trait]
pub trait Installer: Send + Sync {
    async fn install(&self, cwd: &NormalizedPath, manager: PackageManager, deps: &[String]) -> bool;
}

/// Installer that spawns the real package manager.
#[derive(Debug, Default, Clone, Copy)]
pub struct CommandInstaller;

impl CommandInstaller {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Installer for CommandInstaller {
    async fn install(&self, cwd: &NormalizedPath, manager: PackageManager, deps: &[String]) -> bool {
        install(cwd, manager, deps).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[rstest]
    #[case(PackageManager::Pnpm, true, "pnpm add -D a b")]
    #[case(PackageManager::Yarn, false, "yarn add a b")]
    #[case(PackageManager::Bun, false, "bun add a b")]
    #[case(PackageManager::Npm, false, "npm install a b")]
    #[case(PackageManager::Npm, true, "npm install -D a b")]
    fn test_plan_command(
        #[case] manager: PackageManager,
        #[case] dev: bool,
        #[case] expected: &str,
    ) {
        assert_eq!(plan_command(manager, &names(&["a", "b"]), dev), expected);
    }

    #[test]
    fn test_missing_is_sorted_and_deduplicated() {
        let required = names(&["zod", "clsx", "zod", "react"]);
        let installed: BTreeSet<String> = names(&["react"]).into_iter().collect();
        assert_eq!(missing(&required, &installed), names(&["clsx", "zod"]));
    }

    #[test]
    fn test_installer_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CommandInstaller>();
    }
}
