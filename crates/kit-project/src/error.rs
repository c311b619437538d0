//! Error types for kit-project

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] kit_fs::Error),

    #[error("Invalid package.json at {path}: {message}")]
    PackageJson { path: PathBuf, message: String },

    #[error("Invalid tsconfig.json at {path}: {message}")]
    TsConfig { path: PathBuf, message: String },
}
