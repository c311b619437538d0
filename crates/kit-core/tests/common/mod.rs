#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use kit_core::{InitAnswers, Prompter, SyncEngine};
use kit_fs::NormalizedPath;
use kit_meta::{ItemType, RegistryFile, RegistryIndexEntry, RegistryItem};
use kit_project::{Installer, PackageManager};
use kit_registry::{MemoryRegistry, RegistrySource};
use kit_test_utils::TestProject;
use kit_test_utils::registry::{BUTTON_SOURCE, FORM_SOURCE, LABEL_SOURCE, UTILS_SOURCE};

pub fn root(project: &TestProject) -> NormalizedPath {
    NormalizedPath::new(project.root())
}

pub fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

pub fn item(
    name: &str,
    item_type: ItemType,
    files: &[(&str, &str)],
    dependencies: &[&str],
    registry_dependencies: &[&str],
) -> RegistryItem {
    RegistryItem {
        name: name.to_string(),
        item_type,
        files: files
            .iter()
            .map(|(path, content)| RegistryFile {
                path: path.to_string(),
                content: content.to_string(),
            })
            .collect(),
        dependencies: names(dependencies),
        registry_dependencies: names(registry_dependencies),
    }
}

/// `utils`, `button`, `label`, and `form` (needs `button` and `label`).
pub fn standard_registry() -> MemoryRegistry {
    MemoryRegistry::new()
        .with_item(item(
            "utils",
            ItemType::Lib,
            &[("lib/utils.ts", UTILS_SOURCE)],
            &["clsx", "tailwind-merge"],
            &[],
        ))
        .with_item(item(
            "button",
            ItemType::Ui,
            &[("components/ui/button.tsx", BUTTON_SOURCE)],
            &["@radix-ui/react-slot"],
            &["utils"],
        ))
        .with_item(item(
            "label",
            ItemType::Ui,
            &[("components/ui/label.tsx", LABEL_SOURCE)],
            &["@radix-ui/react-label"],
            &["utils"],
        ))
        .with_item(item(
            "form",
            ItemType::Ui,
            &[("components/ui/form.tsx", FORM_SOURCE)],
            &["react-hook-form"],
            &["button", "label"],
        ))
}

/// Registry handle shared between the engine and the test.
pub struct SharedRegistry(pub Arc<MemoryRegistry>);

#[async_trait]
impl RegistrySource for SharedRegistry {
    fn location(&self) -> String {
        self.0.location()
    }

    async fn fetch_index(&self) -> kit_registry::Result<Vec<RegistryIndexEntry>> {
        self.0.fetch_index().await
    }

    async fn fetch_item(&self, style: &str, name: &str) -> kit_registry::Result<RegistryItem> {
        self.0.fetch_item(style, name).await
    }
}

/// Installer that records requests and, on success, declares the packages
/// in `package.json` the way a real package manager would.
#[derive(Clone, Default)]
pub struct RecordingInstaller {
    pub calls: Arc<Mutex<Vec<(PackageManager, Vec<String>)>>>,
    pub fail: bool,
}

impl RecordingInstaller {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<(PackageManager, Vec<String>)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Installer for RecordingInstaller {
    async fn install(&self, cwd: &NormalizedPath, manager: PackageManager, deps: &[String]) -> bool {
        self.calls.lock().unwrap().push((manager, deps.to_vec()));
        if self.fail {
            return false;
        }

        let path = cwd.join("package.json").to_native();
        let mut manifest: serde_json::Value = std::fs::read_to_string(&path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_else(|| serde_json::json!({}));
        let dependencies = manifest
            .as_object_mut()
            .unwrap()
            .entry("dependencies")
            .or_insert_with(|| serde_json::json!({}));
        for dep in deps {
            dependencies[dep.as_str()] = serde_json::Value::from("latest");
        }
        std::fs::write(&path, serde_json::to_string_pretty(&manifest).unwrap()).unwrap();
        true
    }
}

/// Prompter with fixed answers that records every question.
#[derive(Clone, Default)]
pub struct ScriptedPrompter {
    pub init: bool,
    pub overwrite: bool,
    /// Style chosen when asked for init answers
    pub style: Option<String>,
    pub asked: Arc<Mutex<Vec<String>>>,
}

impl ScriptedPrompter {
    pub fn answering(init: bool, overwrite: bool) -> Self {
        Self {
            init,
            overwrite,
            ..Self::default()
        }
    }

    pub fn with_style(mut self, style: &str) -> Self {
        self.style = Some(style.to_string());
        self
    }

    pub fn asked(&self) -> Vec<String> {
        self.asked.lock().unwrap().clone()
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm_init(&self) -> kit_core::Result<bool> {
        self.asked.lock().unwrap().push("init".to_string());
        Ok(self.init)
    }

    fn confirm_overwrite(&self, path: &NormalizedPath) -> kit_core::Result<bool> {
        self.asked
            .lock()
            .unwrap()
            .push(format!("overwrite {}", path.file_name().unwrap_or_default()));
        Ok(self.overwrite)
    }

    fn init_answers(&self, mut defaults: InitAnswers) -> kit_core::Result<InitAnswers> {
        self.asked.lock().unwrap().push("answers".to_string());
        if let Some(style) = &self.style {
            defaults.style = style.clone();
        }
        Ok(defaults)
    }
}

/// An engine plus handles to its collaborators.
pub struct Harness {
    pub engine: SyncEngine,
    pub registry: Arc<MemoryRegistry>,
    pub installer: RecordingInstaller,
    pub prompter: ScriptedPrompter,
}

pub fn harness(registry: MemoryRegistry, installer: RecordingInstaller, prompter: ScriptedPrompter) -> Harness {
    let registry = Arc::new(registry);
    let engine = SyncEngine::new(
        Box::new(SharedRegistry(registry.clone())),
        Box::new(installer.clone()),
        Box::new(prompter.clone()),
    );
    Harness {
        engine,
        registry,
        installer,
        prompter,
    }
}

pub fn standard_harness() -> Harness {
    harness(
        standard_registry(),
        RecordingInstaller::default(),
        ScriptedPrompter::answering(false, false),
    )
}
