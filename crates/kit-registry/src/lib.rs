//! Component registry access for kit.
//!
//! A [`RegistrySource`] serves the registry index and individual items,
//! over HTTP, from a local directory, or from memory. [`resolve`] expands a
//! request into its full registry dependency closure.

pub mod directory;
pub mod error;
pub mod http;
pub mod memory;
pub mod names;
pub mod resolve;
pub mod source;

pub use directory::DirectoryRegistry;
pub use error::{Error, Result};
pub use http::{DEFAULT_REGISTRY_URL, HttpRegistry};
pub use memory::MemoryRegistry;
pub use names::{check_known, validate_names};
pub use resolve::resolve;
pub use source::{RegistrySource, registry_source};
