//! Core orchestration layer for kit
//!
//! Composes the lower crates into the three project workflows:
//!
//! - **init**: write `components.json`, scaffold directories and the shared
//!   utility, patch the global stylesheet, install baseline packages
//! - **add**: resolve components from the registry and write them into the
//!   project without clobbering local edits
//! - **diff**: report how a component's local files drifted from the registry
//!
//! # Architecture
//!
//! ```text
//!                      kit-cli
//!                         |
//!                      kit-core
//!                         |
//!     +--------+----------+-----------+------------+
//!     |        |          |           |            |
//!  kit-fs  kit-meta  kit-project  kit-content  kit-registry
//! ```

pub mod answers;
pub mod engine;
pub mod error;
pub mod prompt;
pub mod report;
pub mod templates;

pub use answers::InitAnswers;
pub use engine::{AddOptions, InitOptions, SyncEngine};
pub use error::{Error, Result};
pub use prompt::{NonInteractive, Prompter};
pub use report::{
    AddReport, CssOutcome, DiffReport, DiffStatus, FileDiff, FileReport, FileState, InitReport,
    InstallOutcome, SkipReason,
};
