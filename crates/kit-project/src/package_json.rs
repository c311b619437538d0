//! Minimal `package.json` model

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use kit_fs::{NormalizedPath, ProjectFile};
use serde::Deserialize;

use crate::{Error, Result};

/// The parts of `package.json` kit cares about.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageJson {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub dependencies: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub dev_dependencies: BTreeMap<String, serde_json::Value>,
}

impl PackageJson {
    /// Read `<cwd>/package.json`.
    pub async fn read(cwd: &NormalizedPath) -> Result<Self> {
        let path = cwd.join(ProjectFile::PackageJson.as_str());
        let native = path.to_native();
        let content = tokio::fs::read_to_string(&native)
            .await
            .map_err(|e| kit_fs::Error::io(&native, e))?;
        Self::parse(&native, &content)
    }

    /// Parse manifest text read from `path`.
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| Error::PackageJson {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Names declared in `dependencies` and `devDependencies`.
    pub fn dependency_names(&self) -> BTreeSet<String> {
        self.dependencies
            .keys()
            .chain(self.dev_dependencies.keys())
            .cloned()
            .collect()
    }

    pub fn has_dependency(&self, name: &str) -> bool {
        self.dependencies.contains_key(name) || self.dev_dependencies.contains_key(name)
    }
}
