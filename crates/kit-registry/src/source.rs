//! The registry source seam

use async_trait::async_trait;
use kit_fs::NormalizedPath;
use kit_meta::{RegistryIndexEntry, RegistryItem};

use crate::directory::DirectoryRegistry;
use crate::http::HttpRegistry;
use crate::Result;

/// Somewhere registry documents can be fetched from.
#[async_trait]
pub trait RegistrySource: Send + Sync {
    /// Human-readable location, for messages.
    fn location(&self) -> String;

    /// Fetch the index of all available items.
    async fn fetch_index(&self) -> Result<Vec<RegistryIndexEntry>>;

    /// Fetch one item by exact name, in the given style.
    async fn fetch_item(&self, style: &str, name: &str) -> Result<RegistryItem>;
}

/// Pick a source for a registry location: HTTP for `http(s)://` URLs,
/// a local directory otherwise.
pub fn registry_source(location: &str) -> Box<dyn RegistrySource> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Box::new(HttpRegistry::new(location))
    } else {
        Box::new(DirectoryRegistry::new(NormalizedPath::new(location)))
    }
}
