//! Content handling for kit.
//!
//! Maps registry files onto a project, rewrites their import specifiers,
//! patches the global stylesheet and measures local drift.

pub mod delta;
pub mod error;
pub mod path;
pub mod stylesheet;
pub mod transform;

pub use delta::LineDelta;
pub use error::{Error, Result};
pub use path::{contained_target_path, target_path};
pub use transform::transform;
