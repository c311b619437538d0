//! Shared test utilities for the kit workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`project`]: [`TestProject`] builder for consuming-project layouts
//! - [`registry`]: [`TestRegistry`] builder for on-disk component registries

pub mod project;
pub mod registry;

pub use project::TestProject;
pub use registry::TestRegistry;
