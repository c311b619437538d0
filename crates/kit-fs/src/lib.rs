//! Filesystem abstraction for kit
//!
//! Provides forward-slash path handling, atomic writes and JSON persistence
//! for the files kit reads from and writes into a consuming project.

pub mod constants;
pub mod error;
pub mod io;
pub mod json;
pub mod path;

pub use constants::ProjectFile;
pub use error::{Error, Result};
pub use json::JsonStore;
pub use path::NormalizedPath;
