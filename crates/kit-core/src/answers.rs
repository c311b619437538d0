//! Answers collected by `init`

use kit_meta::{Aliases, Config, alias};
use kit_project::{Framework, ProjectInfo};

/// Everything `init` asks the user, pre-filled from the project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitAnswers {
    pub style: String,
    pub base_color: String,
    pub css_path: String,
    pub css_variables: bool,
    pub rsc: bool,
    pub tsx: bool,
    pub components_alias: String,
    pub utils_alias: String,
}

impl InitAnswers {
    /// Defaults derived from an inspected project.
    pub fn from_project(info: &ProjectInfo) -> Self {
        let prefix = &info.alias_prefix;
        Self {
            style: "new-york".to_string(),
            base_color: "neutral".to_string(),
            css_path: info.css_path_or_default(),
            css_variables: true,
            rsc: info.framework == Framework::NextApp,
            tsx: info.typescript,
            components_alias: format!("{prefix}components"),
            utils_alias: format!("{prefix}lib/utils"),
        }
    }

    /// Build the config these answers describe.
    ///
    /// `ui` sits under the components alias, `lib` is the parent of the
    /// utils alias and `hooks` shares the components alias prefix.
    pub fn into_config(self, info: &ProjectInfo) -> Config {
        let components = self.components_alias.trim_end_matches('/').to_string();
        let prefix = alias::prefix_of(&components).unwrap_or(info.alias_prefix.as_str());
        let lib = parent_alias(&self.utils_alias).unwrap_or_else(|| format!("{prefix}lib"));

        let aliases = Aliases {
            ui: Some(format!("{components}/ui")),
            lib: Some(lib),
            hooks: Some(format!("{prefix}hooks")),
            components,
            utils: self.utils_alias,
        };

        let mut config = Config::new(self.css_path, aliases);
        config.style = self.style;
        config.rsc = self.rsc;
        config.tsx = self.tsx;
        config.tailwind.base_color = self.base_color;
        config.tailwind.css_variables = self.css_variables;
        config.tailwind.config = info.tailwind_config.clone().unwrap_or_default();
        config
    }
}

/// `@/lib/utils` gives `@/lib`; `None` when the parent is only a prefix token.
fn parent_alias(alias: &str) -> Option<String> {
    let (parent, _) = alias.rsplit_once('/')?;
    if parent.is_empty() || alias::strip_prefix(&format!("{parent}/")).is_empty() {
        None
    } else {
        Some(parent.to_string())
    }
}
