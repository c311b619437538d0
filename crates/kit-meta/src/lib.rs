//! Configuration and registry metadata for kit.
//!
//! This crate owns the `components.json` schema, its persistence, and the
//! JSON shapes served by a component registry.

pub mod alias;
pub mod config;
pub mod error;
pub mod registry;
pub mod store;
pub mod validation;

pub use config::{Aliases, Config, TailwindConfig};
pub use error::{Error, Result};
pub use registry::{ItemType, RegistryFile, RegistryIndexEntry, RegistryItem};
pub use store::ConfigStore;
