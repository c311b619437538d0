//! `diff` workflow.

mod common;

use common::{names, root, standard_harness};
use kit_core::{AddOptions, DiffStatus, Error, InitOptions};
use kit_test_utils::TestProject;
use pretty_assertions::assert_eq;

async fn project_with_button(h: &common::Harness) -> TestProject {
    let project = TestProject::next_app();
    let yes = InitOptions {
        yes: true,
        ..InitOptions::default()
    };
    h.engine.init(&root(&project), &yes).await.unwrap();
    let add = AddOptions {
        names: names(&["button"]),
        ..AddOptions::default()
    };
    h.engine.add(&root(&project), &add).await.unwrap();
    project
}

#[tokio::test]
async fn test_fresh_component_is_up_to_date() {
    let h = standard_harness();
    let project = project_with_button(&h).await;
    let fetched_before = h.registry.fetched().len();

    let report = h.engine.diff(&root(&project), "button").await.unwrap();

    assert!(report.is_up_to_date());
    assert_eq!(report.files.len(), 1);
    assert_eq!(report.update_command, "kit add button --overwrite");
    // Only the item itself, no dependency closure
    assert_eq!(h.registry.fetched()[fetched_before..].to_vec(), names(&["button"]));
}

#[tokio::test]
async fn test_line_endings_are_ignored() {
    let h = standard_harness();
    let project = project_with_button(&h).await;
    let crlf = project.read("components/ui/button.tsx").replace('\n', "\r\n");
    project.write("components/ui/button.tsx", &crlf);

    let report = h.engine.diff(&root(&project), "button").await.unwrap();

    assert!(report.is_up_to_date());
}

#[tokio::test]
async fn test_single_character_change_is_modified() {
    let h = standard_harness();
    let project = project_with_button(&h).await;
    let edited = project
        .read("components/ui/button.tsx")
        .replacen("inline-flex", "inline-flez", 1);
    project.write("components/ui/button.tsx", &edited);

    let report = h.engine.diff(&root(&project), "button").await.unwrap();

    match &report.files[0].status {
        DiffStatus::Modified {
            local_lines,
            registry_lines,
            added,
            removed,
        } => {
            assert_eq!(local_lines, registry_lines);
            assert_eq!((*added, *removed), (1, 1));
        }
        other => panic!("unexpected status: {other:?}"),
    }
    assert_eq!(report.update_command, "kit add button --overwrite");
}

#[tokio::test]
async fn test_missing_local_file() {
    let h = standard_harness();
    let project = project_with_button(&h).await;

    let report = h.engine.diff(&root(&project), "label").await.unwrap();

    assert_eq!(report.files[0].status, DiffStatus::Missing);
    assert!(!report.is_up_to_date());
}

#[tokio::test]
async fn test_diff_requires_config() {
    let project = TestProject::next_app();
    let h = standard_harness();

    let err = h.engine.diff(&root(&project), "button").await.unwrap_err();

    assert!(matches!(err, Error::ConfigMissing { .. }));
    assert!(h.registry.fetched().is_empty());
}
