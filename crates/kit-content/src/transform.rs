//! Import specifier rewriting
//!
//! Registry sources import each other through canonical `@/` specifiers.
//! [`transform`] maps those onto the aliases a project configured. Output
//! specifiers are recognized on later passes and left alone, so applying
//! the transform twice changes nothing.

use std::sync::LazyLock;

use kit_meta::Config;
use regex::{Captures, Regex};

/// Single-line quoted string literals.
///
/// Every literal is tokenized, not only `@/` ones, so a rewrite never shifts
/// which quote pairs with which on a later pass.
static STRING_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""([^"\n]*)"|'([^'\n]*)'"#).expect("Invalid string literal regex")
});

/// Every leading `"use client"` directive plus the blank space after it.
static USE_CLIENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\A(?:\s*["']use client["'];?[^\S\n]*(?:\n|\z))+\s*"#)
        .expect("Invalid directive regex")
});

/// Aliases with trailing slashes trimmed.
struct Targets {
    components: String,
    utils: String,
    ui: String,
    lib: String,
    hooks: String,
}

impl Targets {
    fn new(config: &Config) -> Self {
        let trim = |alias: String| alias.trim_end_matches('/').to_string();
        let aliases = &config.aliases;
        Self {
            components: trim(aliases.components.clone()),
            utils: trim(aliases.utils.clone()),
            ui: trim(aliases.ui()),
            lib: trim(aliases.lib()),
            hooks: trim(aliases.hooks()),
        }
    }

    /// Whether a specifier is already expressed through a configured alias.
    fn is_rewritten(&self, specifier: &str) -> bool {
        if specifier == self.utils {
            return true;
        }
        let under = |alias: &str| specifier.strip_prefix(alias).and_then(|r| r.strip_prefix('/'));

        // `<lib>/utils` is what canonical `@/lib/utils` looks like before it
        // is mapped onto a utils alias living elsewhere
        let under_lib = under(&self.lib).is_some_and(|rest| rest != "utils");
        if under(&self.ui).is_some() || under_lib || under(&self.hooks).is_some() {
            return true;
        }
        under(&self.components).is_some_and(|rest| !rest.starts_with("ui/"))
    }

    fn rewrite(&self, specifier: &str) -> String {
        let Some(mut rest) = specifier.strip_prefix("@/") else {
            return specifier.to_string();
        };
        if let Some(styled) = rest.strip_prefix("registry/") {
            // `registry/<style>/<rest>`
            rest = styled.split_once('/').map(|(_, tail)| tail).unwrap_or("");
        }

        if let Some(tail) = rest
            .strip_prefix("components/ui/")
            .or_else(|| rest.strip_prefix("ui/"))
        {
            format!("{}/{tail}", self.ui)
        } else if rest == "lib/utils" {
            self.utils.clone()
        } else if let Some(tail) = rest.strip_prefix("lib/") {
            format!("{}/{tail}", self.lib)
        } else if let Some(tail) = rest.strip_prefix("hooks/") {
            format!("{}/{tail}", self.hooks)
        } else if let Some(tail) = rest.strip_prefix("components/") {
            format!("{}/{tail}", self.components)
        } else {
            format!("{}/{rest}", self.components)
        }
    }
}

/// Rewrite registry import specifiers onto the project's aliases.
///
/// When the project does not use React Server Components, leading
/// `"use client"` directives are dropped.
pub fn transform(content: &str, config: &Config) -> String {
    let targets = Targets::new(config);

    let rewritten = STRING_LITERAL.replace_all(content, |caps: &Captures| {
        let (quote, specifier) = match (caps.get(1), caps.get(2)) {
            (Some(m), _) => ('"', m.as_str()),
            (None, Some(m)) => ('\'', m.as_str()),
            (None, None) => return caps[0].to_string(),
        };
        let is_specifier =
            specifier.starts_with("@/") && !specifier.contains(char::is_whitespace);
        if !is_specifier || targets.is_rewritten(specifier) {
            return caps[0].to_string();
        }
        format!("{quote}{}{quote}", targets.rewrite(specifier))
    });

    if config.rsc {
        rewritten.into_owned()
    } else {
        USE_CLIENT.replace(&rewritten, "").into_owned()
    }
}

/// Line-ending and trailing-whitespace insensitive form used for equality checks.
pub fn normalize(content: &str) -> String {
    content.replace("\r\n", "\n").trim_end().to_string()
}
