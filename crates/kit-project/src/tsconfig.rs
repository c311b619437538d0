//! `tsconfig.json` alias extraction
//!
//! tsconfig files are JSON with comments and trailing commas, so they are
//! cleaned before being handed to `serde_json`.

use std::path::Path;

use kit_meta::alias::{ALIAS_PREFIXES, DEFAULT_ALIAS_PREFIX};

use crate::{Error, Result};

/// Remove `//` and `/* */` comments and trailing commas outside string literals.
pub fn strip_jsonc(input: &str) -> String {
    let without_comments = strip_comments(input);
    strip_trailing_commas(&without_comments)
}

fn strip_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    let mut in_string = false;

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            match c {
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                }
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match (c, chars.peek().copied()) {
            ('"', _) => {
                in_string = true;
                out.push(c);
            }
            ('/', Some('/')) => {
                for skipped in chars.by_ref() {
                    if skipped == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            }
            ('/', Some('*')) => {
                chars.next();
                let mut prev = '\0';
                for skipped in chars.by_ref() {
                    if prev == '*' && skipped == '/' {
                        break;
                    }
                    prev = skipped;
                }
            }
            _ => out.push(c),
        }
    }
    out
}

fn strip_trailing_commas(input: &str) -> String {
    let chars: Vec<char> = input.chars().collect();
    let mut out = String::with_capacity(input.len());
    let mut in_string = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if in_string {
            out.push(c);
            if c == '\\' {
                if let Some(&escaped) = chars.get(i + 1) {
                    out.push(escaped);
                    i += 1;
                }
            } else if c == '"' {
                in_string = false;
            }
        } else if c == '"' {
            in_string = true;
            out.push(c);
        } else if c == ',' {
            let next = chars[i + 1..].iter().copied().find(|ch| !ch.is_whitespace());
            if !matches!(next, Some('}') | Some(']')) {
                out.push(c);
            }
        } else {
            out.push(c);
        }
        i += 1;
    }
    out
}

/// Keys of `compilerOptions.paths` with the trailing `*` removed, in declaration order.
///
/// `path` only labels the error.
pub fn path_alias_keys(path: &Path, content: &str) -> Result<Vec<String>> {
    let value: serde_json::Value =
        serde_json::from_str(&strip_jsonc(content)).map_err(|e| Error::TsConfig {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let keys = value
        .get("compilerOptions")
        .and_then(|options| options.get("paths"))
        .and_then(|paths| paths.as_object())
        .map(|paths| {
            paths
                .keys()
                .map(|key| key.strip_suffix('*').unwrap_or(key).to_string())
                .collect()
        })
        .unwrap_or_default();
    Ok(keys)
}

/// Choose the alias prefix from declared path keys.
///
/// Well-known tokens win in the order `@/ ~/ #/ $/`; otherwise the first
/// declared key; `@/` when nothing is declared.
pub fn choose_alias_prefix(keys: &[String]) -> String {
    ALIAS_PREFIXES
        .iter()
        .find(|prefix| keys.iter().any(|key| key == *prefix))
        .map(|prefix| prefix.to_string())
        .or_else(|| keys.first().cloned())
        .unwrap_or_else(|| DEFAULT_ALIAS_PREFIX.to_string())
}
