//! Inspection of consuming projects for kit.
//!
//! Detects the framework, language, alias prefix and stylesheet of a
//! project, and drives its npm package manager.

pub mod error;
pub mod inspector;
pub mod package_json;
pub mod package_manager;
pub mod tsconfig;

pub use error::{Error, Result};
pub use inspector::{Framework, ProjectInfo};
pub use package_json::PackageJson;
pub use package_manager::{CommandInstaller, Installer, PackageManager};
