//! In-memory registry source

use std::sync::Mutex;

use async_trait::async_trait;
use kit_meta::{RegistryIndexEntry, RegistryItem};

use crate::source::RegistrySource;
use crate::{Error, Result};

/// A registry held in memory. The index lists items in insertion order.
///
/// Every `fetch_item` call is recorded, so callers can check which items
/// were requested and under which style. Items are shared across styles.
#[derive(Debug, Default)]
pub struct MemoryRegistry {
    items: Vec<RegistryItem>,
    fetched: Mutex<Vec<(String, String)>>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item, replacing any existing item of the same name.
    pub fn with_item(mut self, item: RegistryItem) -> Self {
        self.insert(item);
        self
    }

    pub fn insert(&mut self, item: RegistryItem) {
        match self.items.iter_mut().find(|existing| existing.name == item.name) {
            Some(existing) => *existing = item,
            None => self.items.push(item),
        }
    }

    /// Names passed to `fetch_item`, in call order.
    pub fn fetched(&self) -> Vec<String> {
        self.requests().into_iter().map(|(_, name)| name).collect()
    }

    /// Styles passed to `fetch_item`, in call order.
    pub fn fetched_styles(&self) -> Vec<String> {
        self.requests().into_iter().map(|(style, _)| style).collect()
    }

    fn requests(&self) -> Vec<(String, String)> {
        self.fetched
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl RegistrySource for MemoryRegistry {
    fn location(&self) -> String {
        "memory".to_string()
    }

    async fn fetch_index(&self) -> Result<Vec<RegistryIndexEntry>> {
        Ok(self.items.iter().map(RegistryItem::index_entry).collect())
    }

    async fn fetch_item(&self, style: &str, name: &str) -> Result<RegistryItem> {
        self.fetched
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((style.to_string(), name.to_string()));

        self.items
            .iter()
            .find(|item| item.name == name)
            .cloned()
            .ok_or_else(|| Error::NotFound {
                name: name.to_string(),
            })
    }
}
