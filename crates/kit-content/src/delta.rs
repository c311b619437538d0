//! Coarse line-level drift between a local file and its registry source

use similar::{ChangeTag, TextDiff};

/// Line counts and per-side changes between two texts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineDelta {
    pub local_lines: usize,
    pub registry_lines: usize,
    /// Lines present in the registry version only
    pub added: usize,
    /// Lines present in the local version only
    pub removed: usize,
}

impl LineDelta {
    /// Compare a local file against the registry version.
    pub fn compute(local: &str, registry: &str) -> Self {
        let mut delta = Self {
            local_lines: local.lines().count(),
            registry_lines: registry.lines().count(),
            ..Self::default()
        };
        for change in TextDiff::from_lines(local, registry).iter_all_changes() {
            match change.tag() {
                ChangeTag::Insert => delta.added += 1,
                ChangeTag::Delete => delta.removed += 1,
                ChangeTag::Equal => {}
            }
        }
        delta
    }
}

/// Convert CRLF line endings to LF.
pub fn normalize_line_endings(content: &str) -> String {
    content.replace("\r\n", "\n")
}
