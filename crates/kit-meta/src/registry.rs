//! Registry wire types
//!
//! Shapes of `index.json` entries and per-item documents served by a
//! component registry. Unknown keys are ignored and missing arrays
//! deserialize as empty.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of a registry item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ItemType {
    Ui,
    Lib,
    Hook,
    /// Any other `registry:*` kind, kept verbatim
    Other(String),
}

impl From<String> for ItemType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "registry:ui" => ItemType::Ui,
            "registry:lib" => ItemType::Lib,
            "registry:hook" => ItemType::Hook,
            _ => ItemType::Other(value),
        }
    }
}

impl From<ItemType> for String {
    fn from(value: ItemType) -> Self {
        value.to_string()
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemType::Ui => write!(f, "registry:ui"),
            ItemType::Lib => write!(f, "registry:lib"),
            ItemType::Hook => write!(f, "registry:hook"),
            ItemType::Other(raw) => write!(f, "{raw}"),
        }
    }
}

/// One entry of the registry index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryIndexEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    #[serde(default)]
    pub description: String,
}

/// A single file shipped by a registry item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryFile {
    /// Registry-relative path, e.g. `components/ui/button.tsx`
    pub path: String,
    #[serde(default)]
    pub content: String,
}

/// A fully described registry item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryItem {
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    #[serde(default)]
    pub files: Vec<RegistryFile>,
    /// npm packages the item needs
    #[serde(default)]
    pub dependencies: Vec<String>,
    /// Other registry items the item needs
    #[serde(default)]
    pub registry_dependencies: Vec<String>,
}

impl RegistryItem {
    /// The index entry describing this item.
    pub fn index_entry(&self) -> RegistryIndexEntry {
        RegistryIndexEntry {
            name: self.name.clone(),
            item_type: self.item_type.clone(),
            description: String::new(),
        }
    }
}
