//! Well-known files and directories inside a consuming project.

use std::path::Path;

/// Files kit probes or owns at the project root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectFile {
    /// The `components.json` configuration written by `init`
    ComponentsJson,
    /// The npm manifest
    PackageJson,
    /// The TypeScript compiler configuration
    TsConfig,
    /// The `src` directory of src-dir layouts
    SrcDir,
}

impl ProjectFile {
    /// Get the string representation of the path.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ComponentsJson => "components.json",
            Self::PackageJson => "package.json",
            Self::TsConfig => "tsconfig.json",
            Self::SrcDir => "src",
        }
    }
}

impl AsRef<Path> for ProjectFile {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for ProjectFile {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for ProjectFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
