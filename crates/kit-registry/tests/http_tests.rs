//! HTTP registry source against a mock server.

use kit_meta::ItemType;
use kit_registry::{Error, HttpRegistry, RegistrySource, resolve};
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_json(server: &MockServer, route: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_fetch_index() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/index.json",
        json!([
            { "name": "button", "type": "registry:ui", "description": "Button" },
            { "name": "use-mobile", "type": "registry:hook" }
        ]),
    )
    .await;

    let registry = HttpRegistry::new(&server.uri());
    let index = registry.fetch_index().await.unwrap();

    assert_eq!(index.len(), 2);
    assert_eq!(index[0].name, "button");
    assert_eq!(index[1].item_type, ItemType::Hook);
}

#[tokio::test]
async fn test_fetch_item_uses_style_path() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/styles/default/card.json",
        json!({
            "name": "card",
            "type": "registry:ui",
            "files": [{ "path": "components/ui/card.tsx", "content": "export {}" }]
        }),
    )
    .await;

    let registry = HttpRegistry::new(&server.uri());
    let item = registry.fetch_item("default", "card").await.unwrap();

    assert_eq!(item.name, "card");
    assert_eq!(item.files.len(), 1);
    assert!(item.dependencies.is_empty());
}

#[tokio::test]
async fn test_one_client_serves_several_styles() {
    let server = MockServer::start().await;
    for style in ["default", "new-york"] {
        mount_json(
            &server,
            &format!("/styles/{style}/card.json"),
            json!({
                "name": "card",
                "type": "registry:ui",
                "files": [{ "path": "components/ui/card.tsx", "content": style }]
            }),
        )
        .await;
    }

    let registry = HttpRegistry::new(&server.uri());
    let default = registry.fetch_item("default", "card").await.unwrap();
    let new_york = registry.fetch_item("new-york", "card").await.unwrap();

    assert_eq!(default.files[0].content, "default");
    assert_eq!(new_york.files[0].content, "new-york");
}

#[tokio::test]
async fn test_missing_item_is_not_found() {
    let server = MockServer::start().await;

    let registry = HttpRegistry::new(&server.uri());
    let err = registry.fetch_item("default", "nope").await.unwrap_err();

    assert!(matches!(err, Error::NotFound { ref name } if name == "nope"));
}

#[tokio::test]
async fn test_server_error_is_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/styles/default/card.json"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let registry = HttpRegistry::new(&server.uri());
    let err = registry.fetch_item("default", "card").await.unwrap_err();

    assert!(matches!(err, Error::Http { status: 503, .. }));
}

#[tokio::test]
async fn test_malformed_document() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/styles/default/card.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let registry = HttpRegistry::new(&server.uri());
    let err = registry.fetch_item("default", "card").await.unwrap_err();

    assert!(matches!(err, Error::InvalidDocument { .. }));
}

#[tokio::test]
async fn test_resolve_failure_names_dependency() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/styles/default/form.json",
        json!({ "name": "form", "type": "registry:ui", "registryDependencies": ["label"] }),
    )
    .await;

    let registry = HttpRegistry::new(&server.uri());
    let err = resolve(&registry, "default", &["form".to_string()]).await.unwrap_err();

    match err {
        Error::Resolve { name, source } => {
            assert_eq!(name, "label");
            assert!(matches!(*source, Error::NotFound { .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
}
