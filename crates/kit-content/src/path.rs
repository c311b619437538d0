//! Registry path to project path resolution

use kit_fs::NormalizedPath;
use kit_meta::{Config, alias};

/// Resolve where a registry file lands inside the project.
///
/// | registry prefix   | alias            |
/// |-------------------|------------------|
/// | `components/ui/`  | `aliases.ui`     |
/// | `lib/`            | `aliases.lib`    |
/// | `hooks/`          | `aliases.hooks`  |
///
/// The shared utility `lib/utils.<ext>` follows `aliases.utils` instead,
/// so it stays where rewritten `@/lib/utils` imports point.
///
/// One alias-prefix token is stripped from the alias before it is joined
/// to `cwd`. Any other registry path is joined to `cwd` unchanged.
pub fn target_path(cwd: &NormalizedPath, config: &Config, registry_path: &str) -> NormalizedPath {
    let aliases = &config.aliases;
    if let Some(ext) = registry_path
        .strip_prefix("lib/utils.")
        .filter(|ext| !ext.is_empty() && !ext.contains('/'))
    {
        let stem = alias::strip_prefix(&aliases.utils);
        return cwd.join(&format!("{stem}.{ext}"));
    }

    let routed = [
        ("components/ui/", aliases.ui()),
        ("lib/", aliases.lib()),
        ("hooks/", aliases.hooks()),
    ]
    .into_iter()
    .find_map(|(prefix, alias)| {
        registry_path
            .strip_prefix(prefix)
            .map(|rest| (alias, rest))
    });

    match routed {
        Some((alias, rest)) => cwd.join(alias::strip_prefix(&alias)).join(rest),
        None => cwd.join(registry_path),
    }
}

/// [`target_path`], or `None` when the result is not strictly inside `cwd`.
///
/// Registry paths come from a remote document and may climb out with `..`.
pub fn contained_target_path(
    cwd: &NormalizedPath,
    config: &Config,
    registry_path: &str,
) -> Option<NormalizedPath> {
    let target = target_path(cwd, config, registry_path);
    match target.strip_prefix(cwd) {
        Some(rest) if !rest.is_empty() && rest != ".." && !rest.starts_with("../") => Some(target),
        _ => None,
    }
}
