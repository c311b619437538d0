//! Structural validation of a loaded config

use crate::config::Config;

/// Collect every violated invariant of a config.
///
/// An empty result means the config is usable.
pub fn problems(config: &Config) -> Vec<String> {
    let required = [
        ("aliases.components", &config.aliases.components),
        ("aliases.utils", &config.aliases.utils),
        ("tailwind.css", &config.tailwind.css),
    ];

    required
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| format!("`{field}` must be a non-empty string"))
        .collect()
}
