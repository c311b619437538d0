//! Integration tests for project inspection against realistic layouts.

use kit_fs::NormalizedPath;
use kit_project::inspector::{self, Framework};
use kit_test_utils::TestProject;
use pretty_assertions::assert_eq;

fn root(project: &TestProject) -> NormalizedPath {
    NormalizedPath::new(project.root())
}

#[tokio::test]
async fn test_next_app_project() {
    let project = TestProject::next_app();
    project.write("tailwind.config.ts", "export default {}\n");

    let info = inspector::detect(&root(&project)).await;

    assert_eq!(info.framework, Framework::NextApp);
    assert!(info.typescript);
    assert!(info.tailwind_css);
    assert!(!info.src_dir);
    assert_eq!(info.alias_prefix, "@/");
    assert_eq!(info.css_path.as_deref(), Some("app/globals.css"));
    assert_eq!(info.tailwind_config.as_deref(), Some("tailwind.config.ts"));
}

#[tokio::test]
async fn test_next_pages_without_app_dir() {
    let project = TestProject::new();
    project.package_json(&["next"], &[]);
    project.write("styles/globals.css", "");

    let info = inspector::detect(&root(&project)).await;

    assert_eq!(info.framework, Framework::NextPages);
    assert!(!info.typescript);
    assert!(!info.tailwind_css);
    assert_eq!(info.css_path.as_deref(), Some("styles/globals.css"));
}

#[tokio::test]
async fn test_next_app_under_src() {
    let project = TestProject::new();
    project.package_json(&["next"], &[]);
    project.mkdir("src/app");

    let info = inspector::detect(&root(&project)).await;

    assert_eq!(info.framework, Framework::NextApp);
    assert!(info.src_dir);
    assert_eq!(info.css_path, None);
    assert_eq!(info.css_path_or_default(), "src/app/globals.css");
}

#[tokio::test]
async fn test_vite_project() {
    let project = TestProject::vite();

    let info = inspector::detect(&root(&project)).await;

    assert_eq!(info.framework, Framework::Vite);
    assert!(info.src_dir);
    assert_eq!(info.css_path.as_deref(), Some("src/index.css"));
}

#[tokio::test]
async fn test_css_discovery_follows_probe_order() {
    let project = TestProject::new();
    project.write("src/index.css", "");
    project.write("styles/globals.css", "");

    let info = inspector::detect(&root(&project)).await;

    assert_eq!(info.css_path.as_deref(), Some("styles/globals.css"));
}

#[tokio::test]
async fn test_alias_prefix_prefers_well_known_tokens() {
    let project = TestProject::new();
    project.tsconfig_paths(&["components/*", "~/*"]);

    let info = inspector::detect(&root(&project)).await;

    assert_eq!(info.alias_prefix, "~/");
}

#[tokio::test]
async fn test_alias_prefix_falls_back_to_first_declared() {
    let project = TestProject::new();
    project.tsconfig_paths(&["app/*", "lib/*"]);

    let info = inspector::detect(&root(&project)).await;

    assert_eq!(info.alias_prefix, "app/");
}

#[tokio::test]
async fn test_broken_files_never_fail_detection() {
    let project = TestProject::new();
    project.write("package.json", "{ this is not json");
    project.write("tsconfig.json", "{ \"compilerOptions\": ");
    project.mkdir("app");

    let info = inspector::detect(&root(&project)).await;

    assert_eq!(info.framework, Framework::Unknown);
    assert!(info.typescript);
    assert_eq!(info.alias_prefix, "@/");
}

#[tokio::test]
async fn test_empty_directory() {
    let project = TestProject::new();

    let info = inspector::detect(&root(&project)).await;

    assert_eq!(info.framework, Framework::Unknown);
    assert!(!info.typescript);
    assert_eq!(info.alias_prefix, "@/");
    assert_eq!(info.css_path, None);
    assert_eq!(info.tailwind_config, None);
}
