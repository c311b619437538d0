//! Global stylesheet patching
//!
//! Injects the theme's CSS variable block once. A stylesheet that already
//! defines any of the marker variables is left untouched.

use std::sync::LazyLock;

use kit_fs::{NormalizedPath, io};
use regex::Regex;

use crate::Result;

/// Variables whose presence means the block was already applied.
pub const MARKER_TOKENS: [&str; 2] = ["--background", "--foreground"];

/// Theme variables written into the global stylesheet.
pub const CSS_VARIABLES_BLOCK: &str = r#"@layer base {
  :root {
    --background: 0 0% 100%;
    --foreground: 0 0% 3.9%;
    --card: 0 0% 100%;
    --card-foreground: 0 0% 3.9%;
    --popover: 0 0% 100%;
    --popover-foreground: 0 0% 3.9%;
    --primary: 0 0% 9%;
    --primary-foreground: 0 0% 98%;
    --secondary: 0 0% 96.1%;
    --secondary-foreground: 0 0% 9%;
    --muted: 0 0% 96.1%;
    --muted-foreground: 0 0% 45.1%;
    --accent: 0 0% 96.1%;
    --accent-foreground: 0 0% 9%;
    --destructive: 0 84.2% 60.2%;
    --destructive-foreground: 0 0% 98%;
    --border: 0 0% 89.8%;
    --input: 0 0% 89.8%;
    --ring: 0 0% 3.9%;
    --radius: 0.5rem;
  }

  .dark {
    --background: 0 0% 3.9%;
    --foreground: 0 0% 98%;
    --card: 0 0% 3.9%;
    --card-foreground: 0 0% 98%;
    --popover: 0 0% 3.9%;
    --popover-foreground: 0 0% 98%;
    --primary: 0 0% 98%;
    --primary-foreground: 0 0% 9%;
    --secondary: 0 0% 14.9%;
    --secondary-foreground: 0 0% 98%;
    --muted: 0 0% 14.9%;
    --muted-foreground: 0 0% 63.9%;
    --accent: 0 0% 14.9%;
    --accent-foreground: 0 0% 98%;
    --destructive: 0 62.8% 30.6%;
    --destructive-foreground: 0 0% 98%;
    --border: 0 0% 14.9%;
    --input: 0 0% 14.9%;
    --ring: 0 0% 83.1%;
  }
}
"#;

static IMPORT_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*@import\b[^\n]*(?:\n|\z)").expect("Invalid import regex"));

/// Whether any marker variable is already defined.
pub fn has_markers(content: &str) -> bool {
    MARKER_TOKENS.iter().any(|token| content.contains(token))
}

/// Insert the variable block into stylesheet text.
///
/// Returns `None` when the markers are already present. Otherwise the block
/// goes after the last `@import` line, or at the top when there is none.
pub fn inject(content: &str) -> Option<String> {
    if has_markers(content) {
        return None;
    }

    let patched = match IMPORT_LINE.find_iter(content).last() {
        Some(last_import) => {
            let (before, after) = content.split_at(last_import.end());
            let newline = if before.ends_with('\n') { "" } else { "\n" };
            let separator = if after.is_empty() { "" } else { "\n" };
            format!("{before}{newline}\n{CSS_VARIABLES_BLOCK}{separator}{after}")
        }
        None if content.is_empty() => CSS_VARIABLES_BLOCK.to_string(),
        None => format!("{CSS_VARIABLES_BLOCK}\n{content}"),
    };
    Some(patched)
}

/// Apply the variable block to the stylesheet at `path`, creating it if missing.
///
/// Returns whether the file changed.
pub fn apply(path: &NormalizedPath) -> Result<bool> {
    let existing = io::read_text_if_exists(path)?.unwrap_or_default();
    match inject(&existing) {
        Some(patched) => {
            io::write_text(path, &patched)?;
            tracing::info!(path = %path, "Injected CSS variables");
            Ok(true)
        }
        None => {
            tracing::debug!(path = %path, "CSS variables already present");
            Ok(false)
        }
    }
}
