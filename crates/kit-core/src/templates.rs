//! Files written by `init`

/// Packages every initialized project needs.
pub const BASELINE_PACKAGES: [&str; 3] = ["clsx", "tailwind-merge", "class-variance-authority"];

/// Shared class-name utility, TypeScript flavour.
pub const UTILS_TS: &str = r#"import { clsx, type ClassValue } from "clsx"
import { twMerge } from "tailwind-merge"

export function cn(...inputs: ClassValue[]) {
  return twMerge(clsx(inputs))
}
"#;

/// Shared class-name utility, JavaScript flavour.
pub const UTILS_JS: &str = r#"import { clsx } from "clsx"
import { twMerge } from "tailwind-merge"

export function cn(...inputs) {
  return twMerge(clsx(inputs))
}
"#;

/// The utility source matching the project language.
pub fn utils_source(tsx: bool) -> &'static str {
    if tsx { UTILS_TS } else { UTILS_JS }
}
