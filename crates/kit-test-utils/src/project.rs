//! [`TestProject`] builder for consuming-project scenarios.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Packages a freshly initialized project depends on.
pub const BASELINE_PACKAGES: [&str; 3] = ["clsx", "tailwind-merge", "class-variance-authority"];

/// A temporary project directory with helpers for setup and assertion.
///
/// # Example
///
/// ```rust,no_run
/// use kit_test_utils::TestProject;
///
/// let project = TestProject::next_app();
/// project.assert_file_exists("app/globals.css");
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new()
                .unwrap_or_else(|e| panic!("TestProject::new: failed to create temp dir: {e}")),
        }
    }

    /// A Next.js app-router project with tailwind, an `@/*` path alias and
    /// the baseline packages already installed.
    pub fn next_app() -> Self {
        let project = Self::new();
        let mut deps = vec!["next", "react", "react-dom", "tailwindcss"];
        deps.extend(BASELINE_PACKAGES);
        project.package_json(&deps, &["typescript"]);
        project.tsconfig_paths(&["@/*"]);
        project.write("app/globals.css", "@import \"tailwindcss\";\n");
        project.write("app/page.tsx", "export default function Page() { return null }\n");
        project
    }

    /// A Vite project under `src/` without any packages installed.
    pub fn vite() -> Self {
        let project = Self::new();
        project.package_json(&["react", "react-dom"], &["vite", "tailwindcss"]);
        project.tsconfig_paths(&["@/*"]);
        project.write("src/index.css", "@tailwind base;\n");
        project
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `content` to `path` relative to the root, creating parents.
    pub fn write(&self, path: &str, content: &str) -> &Self {
        let full_path = self.root().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)
                .unwrap_or_else(|e| panic!("TestProject::write: failed to create {}: {e}", parent.display()));
        }
        fs::write(&full_path, content)
            .unwrap_or_else(|e| panic!("TestProject::write: failed to write {}: {e}", full_path.display()));
        self
    }

    /// Create a directory relative to the root.
    pub fn mkdir(&self, path: &str) -> &Self {
        let full_path = self.root().join(path);
        fs::create_dir_all(&full_path)
            .unwrap_or_else(|e| panic!("TestProject::mkdir: failed to create {}: {e}", full_path.display()));
        self
    }

    /// Write a `package.json` declaring the given packages.
    pub fn package_json(&self, dependencies: &[&str], dev_dependencies: &[&str]) -> &Self {
        let to_map = |names: &[&str]| {
            names
                .iter()
                .map(|name| (name.to_string(), serde_json::Value::from("^1.0.0")))
                .collect::<serde_json::Map<_, _>>()
        };
        let manifest = serde_json::json!({
            "name": "fixture",
            "private": true,
            "dependencies": to_map(dependencies),
            "devDependencies": to_map(dev_dependencies),
        });
        let content = serde_json::to_string_pretty(&manifest)
            .unwrap_or_else(|e| panic!("TestProject::package_json: {e}"));
        self.write("package.json", &content)
    }

    /// Write a commented `tsconfig.json` whose `paths` declares `keys` in order.
    pub fn tsconfig_paths(&self, keys: &[&str]) -> &Self {
        let paths = keys
            .iter()
            .map(|key| format!("      \"{key}\": [\"./*\"],"))
            .collect::<Vec<_>>()
            .join("\n");
        let content = format!(
            "{{\n  // generated\n  \"compilerOptions\": {{\n    \"strict\": true,\n    /* aliases */\n    \"paths\": {{\n{paths}\n    }},\n  }},\n}}\n"
        );
        self.write("tsconfig.json", &content)
    }

    /// Create an empty lockfile such as `pnpm-lock.yaml`.
    pub fn lockfile(&self, name: &str) -> &Self {
        self.write(name, "")
    }

    /// Read a file relative to the root.
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read(&self, path: &str) -> String {
        let full_path = self.root().join(path);
        fs::read_to_string(&full_path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", full_path.display()))
    }

    /// Assert that `path` (relative to the root) exists.
    pub fn assert_file_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }

    /// Assert that `path` (relative to the root) does **not** exist.
    pub fn assert_file_not_exists(&self, path: &str) {
        let full_path = self.root().join(path);
        assert!(
            !full_path.exists(),
            "Expected file NOT to exist: {}",
            full_path.display()
        );
    }

    /// Assert that the file at `path` contains `content`.
    pub fn assert_file_contains(&self, path: &str, content: &str) {
        let file_content = self.read(path);
        assert!(
            file_content.contains(content),
            "File {path} does not contain expected content.\nExpected: {content}\nActual: {file_content}"
        );
    }
}
