//! Error types for kit-registry

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Filesystem error: {0}")]
    Fs(#[from] kit_fs::Error),

    #[error("Request for `{name}` failed: {source}")]
    Request {
        name: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Registry returned HTTP {status} for `{name}`")]
    Http { name: String, status: u16 },

    #[error("Component `{name}` was not found in the registry")]
    NotFound { name: String },

    #[error("Invalid registry document for `{name}`: {message}")]
    InvalidDocument { name: String, message: String },

    #[error("Invalid component name(s): {}", names.join(", "))]
    InvalidNames { names: Vec<String> },

    #[error("Unknown component(s): {}", names.join(", "))]
    UnknownComponents { names: Vec<String> },

    #[error("Failed to resolve `{name}`: {source}")]
    Resolve {
        name: String,
        #[source]
        source: Box<Error>,
    },
}
