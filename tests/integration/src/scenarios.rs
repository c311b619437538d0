//! End-to-end scenarios across the whole stack
//!
//! Each test wires a real [`SyncEngine`] to an on-disk registry and a
//! temporary project. Only the package manager is replaced, by an installer
//! that records what it was asked to do.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use kit_content::target_path;
use kit_core::{AddOptions, DiffStatus, FileState, NonInteractive, SyncEngine};
use kit_fs::NormalizedPath;
use kit_meta::{Aliases, Config, ConfigStore};
use kit_project::{Framework, Installer, PackageManager, inspector};
use kit_registry::{DirectoryRegistry, RegistrySource, resolve};
use kit_test_utils::{TestProject, TestRegistry};
use pretty_assertions::assert_eq;

type Calls = Arc<Mutex<Vec<(PackageManager, Vec<String>)>>>;

/// Installer that records requests and always succeeds.
#[derive(Clone, Default)]
struct RecordingInstaller {
    calls: Calls,
}

#[async_trait]
impl Installer for RecordingInstaller {
    async fn install(&self, _cwd: &NormalizedPath, manager: PackageManager, deps: &[String]) -> bool {
        self.calls.lock().unwrap().push((manager, deps.to_vec()));
        true
    }
}

fn engine(registry: &TestRegistry, installer: &RecordingInstaller) -> SyncEngine {
    SyncEngine::new(
        Box::new(directory(registry)),
        Box::new(installer.clone()),
        Box::new(NonInteractive::declining()),
    )
}

fn directory(registry: &TestRegistry) -> DirectoryRegistry {
    DirectoryRegistry::new(NormalizedPath::new(registry.root()))
}

fn root(project: &TestProject) -> NormalizedPath {
    NormalizedPath::new(project.root())
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn add(list: &[&str]) -> AddOptions {
    AddOptions {
        names: names(list),
        yes: true,
        ..AddOptions::default()
    }
}

const BADGE: &str = "import { cn } from \"@/lib/utils\"\n\nexport function Badge() {\n  return <span className={cn(\"badge\")} />\n}\n";
const AVATAR: &str = "import { cn } from \"@/lib/utils\"\n\nexport function Avatar() {\n  return <span className={cn(\"avatar\")} />\n}\n";
const AVATAR_GROUP: &str = "import { Avatar } from \"@/components/ui/avatar\"\n\nexport function AvatarGroup() {\n  return <Avatar />\n}\n";
const ACCORDION: &str = "import { Button } from \"@/components/ui/button\"\n\nexport function Accordion() {\n  return <Button />\n}\n";
const PLAIN_BUTTON: &str = "export function Button() {\n  return <button />\n}\n";

/// Empty project: `add` initializes with detected defaults first.
#[tokio::test]
async fn scenario_add_into_empty_project() {
    let registry = TestRegistry::standard();
    let project = TestProject::new();
    let installer = RecordingInstaller::default();

    let info = inspector::detect(&root(&project)).await;
    assert_eq!(info.framework, Framework::Unknown);
    assert_eq!(info.alias_prefix, "@/");

    let report = engine(&registry, &installer)
        .add(&root(&project), &add(&["button"]))
        .await
        .unwrap();

    assert!(report.init.is_some());
    let config = ConfigStore::new().load(&root(&project)).unwrap();
    assert_eq!(config.aliases.components, "@/components");
    assert_eq!(config.aliases.utils, "@/lib/utils");

    let button = root(&project).join("components/ui/button.tsx");
    assert!(report.files.iter().any(|f| f.path == button && f.state == FileState::Written));
    project.assert_file_contains("components/ui/button.tsx", "export function Button");

    // No lockfile: npm for everything
    let calls = installer.calls.lock().unwrap().clone();
    assert!(!calls.is_empty());
    assert!(calls.iter().all(|(manager, _)| *manager == PackageManager::Npm));
    assert_eq!(
        calls[0].1,
        names(&["class-variance-authority", "clsx", "tailwind-merge"])
    );
}

/// A configured `ui` alias decides where UI files land.
#[tokio::test]
async fn scenario_custom_ui_alias() {
    let mut registry = TestRegistry::new();
    registry.item(
        "badge",
        "registry:ui",
        &[("components/ui/badge.tsx", BADGE)],
        &[],
        &[],
    );
    let project = TestProject::next_app();
    let mut config = Config::new("app/globals.css", Aliases::with_prefix("@/"));
    config.aliases.ui = Some("@/ui".to_string());
    ConfigStore::new().save(&root(&project), &config).unwrap();

    assert_eq!(
        target_path(&root(&project), &config, "components/ui/badge.tsx"),
        root(&project).join("ui/badge.tsx")
    );

    let installer = RecordingInstaller::default();
    engine(&registry, &installer)
        .add(&root(&project), &add(&["badge"]))
        .await
        .unwrap();

    project.assert_file_exists("ui/badge.tsx");
    project.assert_file_not_exists("components/ui/badge.tsx");
}

/// pnpm wins over npm when both lockfiles exist.
#[test]
fn scenario_lockfile_priority() {
    let project = TestProject::new();
    project.lockfile("pnpm-lock.yaml").lockfile("package-lock.json");

    assert_eq!(PackageManager::detect(&root(&project)), PackageManager::Pnpm);
}

/// Byte-identical local files diff as up to date.
#[tokio::test]
async fn scenario_diff_identical_files() {
    let mut registry = TestRegistry::new();
    registry.item(
        "avatar",
        "registry:ui",
        &[
            ("components/ui/avatar.tsx", AVATAR),
            ("components/ui/avatar-group.tsx", AVATAR_GROUP),
        ],
        &[],
        &[],
    );
    let project = TestProject::next_app();
    let config = Config::new("app/globals.css", Aliases::with_prefix("@/"));
    ConfigStore::new().save(&root(&project), &config).unwrap();
    project.write("components/ui/avatar.tsx", AVATAR);
    project.write("components/ui/avatar-group.tsx", AVATAR_GROUP);

    let installer = RecordingInstaller::default();
    let report = engine(&registry, &installer)
        .diff(&root(&project), "avatar")
        .await
        .unwrap();

    assert_eq!(report.files.len(), 2);
    assert!(report.files.iter().all(|f| f.status == DiffStatus::UpToDate));
    assert!(report.is_up_to_date());
}

/// A name requested directly and reached as a dependency resolves once.
#[tokio::test]
async fn scenario_dependency_requested_twice() {
    let mut registry = TestRegistry::new();
    registry
        .item(
            "button",
            "registry:ui",
            &[("components/ui/button.tsx", PLAIN_BUTTON)],
            &[],
            &[],
        )
        .item(
            "accordion",
            "registry:ui",
            &[("components/ui/accordion.tsx", ACCORDION)],
            &[],
            &["button"],
        );

    let requested = names(&["accordion", "button"]);
    let items = resolve(&directory(&registry) as &dyn RegistrySource, "new-york", &requested)
        .await
        .unwrap();
    let resolved: Vec<&str> = items.iter().map(|item| item.name.as_str()).collect();
    assert_eq!(resolved, vec!["accordion", "button"]);

    let project = TestProject::next_app();
    let installer = RecordingInstaller::default();
    let report = engine(&registry, &installer)
        .add(&root(&project), &add(&["accordion", "button"]))
        .await
        .unwrap();

    assert_eq!(report.items, requested);
    assert_eq!(report.files.len(), 2);
    project.assert_file_exists("components/ui/accordion.tsx");
    project.assert_file_exists("components/ui/button.tsx");
}
