//! The `components.json` project configuration
//!
//! Keys are camelCase on disk. Optional aliases are not written back when
//! unset; accessors derive their defaults instead.

use serde::{Deserialize, Serialize};

use crate::alias::{self, DEFAULT_ALIAS_PREFIX};

/// Schema URL written into new configs.
pub const SCHEMA_URL: &str = "https://ui.shadcn.com/schema.json";

/// Project-level configuration persisted as `components.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    /// Registry style the components are fetched in
    #[serde(default = "default_style")]
    pub style: String,
    /// Whether the project uses React Server Components
    #[serde(default)]
    pub rsc: bool,
    /// Whether components are written as TypeScript
    #[serde(default = "default_true")]
    pub tsx: bool,
    pub tailwind: TailwindConfig,
    pub aliases: Aliases,
}

fn default_style() -> String {
    "new-york".to_string()
}

fn default_true() -> bool {
    true
}

fn default_base_color() -> String {
    "neutral".to_string()
}

/// Tailwind integration settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TailwindConfig {
    /// Path of the tailwind config file, empty when the project has none
    #[serde(default)]
    pub config: String,
    /// Path of the global stylesheet
    #[serde(default)]
    pub css: String,
    #[serde(default = "default_base_color")]
    pub base_color: String,
    #[serde(default = "default_true")]
    pub css_variables: bool,
    #[serde(default)]
    pub prefix: String,
}

/// Import aliases for generated files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aliases {
    #[serde(default)]
    pub components: String,
    #[serde(default)]
    pub utils: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ui: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lib: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hooks: Option<String>,
}

impl Aliases {
    /// Build a full alias set under one prefix token, e.g. `@/`.
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            components: format!("{prefix}components"),
            utils: format!("{prefix}lib/utils"),
            ui: Some(format!("{prefix}components/ui")),
            lib: Some(format!("{prefix}lib")),
            hooks: Some(format!("{prefix}hooks")),
        }
    }

    /// Prefix token of the components alias, `@/` when it has none.
    pub fn prefix(&self) -> &str {
        alias::prefix_of(&self.components).unwrap_or(DEFAULT_ALIAS_PREFIX)
    }

    pub fn ui(&self) -> String {
        self.ui
            .clone()
            .unwrap_or_else(|| format!("{}/ui", self.components.trim_end_matches('/')))
    }

    pub fn lib(&self) -> String {
        self.lib
            .clone()
            .unwrap_or_else(|| format!("{}lib", self.prefix()))
    }

    pub fn hooks(&self) -> String {
        self.hooks
            .clone()
            .unwrap_or_else(|| format!("{}hooks", self.prefix()))
    }
}

impl Config {
    /// A fresh config with the given stylesheet and aliases.
    pub fn new(css: impl Into<String>, aliases: Aliases) -> Self {
        Self {
            schema: Some(SCHEMA_URL.to_string()),
            style: default_style(),
            rsc: false,
            tsx: true,
            tailwind: TailwindConfig {
                config: String::new(),
                css: css.into(),
                base_color: default_base_color(),
                css_variables: true,
                prefix: String::new(),
            },
            aliases,
        }
    }

    /// Source file extension for components and the shared utility.
    pub fn source_extension(&self) -> &'static str {
        if self.tsx { "ts" } else { "js" }
    }
}
