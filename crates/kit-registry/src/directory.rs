//! Local directory registry source

use async_trait::async_trait;
use kit_fs::NormalizedPath;
use kit_meta::{RegistryIndexEntry, RegistryItem};
use serde::de::DeserializeOwned;

use crate::source::RegistrySource;
use crate::{Error, Result};

/// A registry laid out on disk as `{dir}/index.json` and `{dir}/{name}.json`.
///
/// The layout is flat, so the requested style does not select a file.
#[derive(Debug, Clone)]
pub struct DirectoryRegistry {
    root: NormalizedPath,
}

impl DirectoryRegistry {
    pub fn new(root: NormalizedPath) -> Self {
        Self { root }
    }

    async fn read_json<T: DeserializeOwned>(&self, file: &str, name: &str) -> Result<T> {
        let path = self.root.join(file);
        let native = path.to_native();
        tracing::debug!(path = %path, "Reading registry document");

        let content = match tokio::fs::read_to_string(&native).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::NotFound {
                    name: name.to_string(),
                });
            }
            Err(e) => return Err(kit_fs::Error::io(native, e).into()),
        };
        serde_json::from_str(&content).map_err(|e| Error::InvalidDocument {
            name: name.to_string(),
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl RegistrySource for DirectoryRegistry {
    fn location(&self) -> String {
        self.root.to_string()
    }

    async fn fetch_index(&self) -> Result<Vec<RegistryIndexEntry>> {
        self.read_json("index.json", "index").await
    }

    async fn fetch_item(&self, _style: &str, name: &str) -> Result<RegistryItem> {
        self.read_json(&format!("{name}.json"), name).await
    }
}
