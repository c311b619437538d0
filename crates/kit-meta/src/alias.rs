//! Import alias prefix tokens

/// Alias prefix tokens recognized in `tsconfig.json` paths and `components.json` aliases.
pub const ALIAS_PREFIXES: [&str; 4] = ["@/", "~/", "#/", "$/"];

/// Prefix assumed when nothing else is known.
pub const DEFAULT_ALIAS_PREFIX: &str = "@/";

/// The recognized prefix token an alias starts with, if any.
pub fn prefix_of(alias: &str) -> Option<&'static str> {
    ALIAS_PREFIXES
        .iter()
        .copied()
        .find(|prefix| alias.starts_with(prefix))
}

/// Strip exactly one recognized prefix token from an alias.
///
/// Aliases without a recognized token are returned unchanged.
pub fn strip_prefix(alias: &str) -> &str {
    prefix_of(alias)
        .map(|prefix| &alias[prefix.len()..])
        .unwrap_or(alias)
}
