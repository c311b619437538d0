//! HTTP registry source

use async_trait::async_trait;
use kit_meta::{RegistryIndexEntry, RegistryItem};
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::source::RegistrySource;
use crate::{Error, Result};

/// Registry used when no other location is configured.
pub const DEFAULT_REGISTRY_URL: &str = "https://ui.shadcn.com/registry";

/// A registry served over HTTP.
///
/// Layout: `{base}/index.json` and `{base}/styles/{style}/{name}.json`.
#[derive(Debug, Clone)]
pub struct HttpRegistry {
    client: Client,
    base_url: String,
}

impl HttpRegistry {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn index_url(&self) -> String {
        format!("{}/index.json", self.base_url)
    }

    pub fn item_url(&self, style: &str, name: &str) -> String {
        format!("{}/styles/{}/{}.json", self.base_url, style, name)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str, name: &str) -> Result<T> {
        tracing::debug!(%url, "Fetching registry document");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| Error::Request {
                name: name.to_string(),
                source,
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(Error::NotFound {
                name: name.to_string(),
            });
        }
        if !status.is_success() {
            return Err(Error::Http {
                name: name.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|source| Error::Request {
            name: name.to_string(),
            source,
        })?;
        serde_json::from_str(&body).map_err(|e| Error::InvalidDocument {
            name: name.to_string(),
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl RegistrySource for HttpRegistry {
    fn location(&self) -> String {
        self.base_url.clone()
    }

    async fn fetch_index(&self) -> Result<Vec<RegistryIndexEntry>> {
        self.get_json(&self.index_url(), "index").await
    }

    async fn fetch_item(&self, style: &str, name: &str) -> Result<RegistryItem> {
        self.get_json(&self.item_url(style, name), name).await
    }
}
