//! Error types for kit-core

use std::path::PathBuf;

/// Result type for kit-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in kit-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Fs(#[from] kit_fs::Error),

    #[error(transparent)]
    Meta(#[from] kit_meta::Error),

    #[error(transparent)]
    Content(#[from] kit_content::Error),

    #[error(transparent)]
    Registry(#[from] kit_registry::Error),

    /// The project has no usable `components.json`
    #[error("No components.json found at {path}. Run `kit init` first.")]
    ConfigMissing { path: PathBuf },

    /// `init` would replace an existing config
    #[error("A components.json already exists at {path}. Use --force to overwrite it.")]
    ConfigExists { path: PathBuf },

    /// `add` was called without any component
    #[error("No components specified. Name at least one component or pass --all.")]
    NothingRequested,

    /// A registry file would land outside the project
    #[error("Registry file `{path}` of `{item}` resolves outside the project")]
    UnsafePath { item: String, path: String },

    /// An interactive prompt could not be shown or answered
    #[error("Prompt failed: {message}")]
    Prompt { message: String },
}
