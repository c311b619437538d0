//! JSON document loading and saving

use serde::{Serialize, de::DeserializeOwned};

use crate::{Error, NormalizedPath, Result, io};

/// Typed JSON persistence.
///
/// Documents are written pretty-printed with a trailing newline, through
/// [`io::write_atomic`].
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonStore;

impl JsonStore {
    pub fn new() -> Self {
        Self
    }

    /// Load and deserialize a JSON document.
    pub fn load<T: DeserializeOwned>(&self, path: &NormalizedPath) -> Result<T> {
        let content = io::read_text(path)?;
        serde_json::from_str(&content).map_err(|e| Error::JsonParse {
            path: path.to_native(),
            message: e.to_string(),
        })
    }

    /// Serialize a value as pretty JSON and overwrite the file unconditionally.
    pub fn save<T: Serialize>(&self, path: &NormalizedPath, value: &T) -> Result<()> {
        let mut content =
            serde_json::to_string_pretty(value).map_err(|e| Error::JsonSerialize {
                path: path.to_native(),
                message: e.to_string(),
            })?;
        content.push('\n');
        io::write_atomic(path, content.as_bytes())
    }
}
