//! Interactive prompts for CLI commands
//!
//! Uses dialoguer for terminal-based confirmation and selection.

use std::io::IsTerminal;

use colored::Colorize;
use dialoguer::{Confirm, Input, MultiSelect, Select};
use kit_core::{InitAnswers, NonInteractive, Prompter};
use kit_fs::NormalizedPath;
use kit_meta::{ItemType, RegistryIndexEntry};

use crate::error::Result;

/// Available component styles
const STYLES: &[&str] = &["new-york", "default"];

/// Available base colors
const BASE_COLORS: &[&str] = &["neutral", "gray", "zinc", "stone", "slate"];

/// Whether prompts can be shown.
pub fn is_interactive() -> bool {
    std::io::stdin().is_terminal() && std::io::stderr().is_terminal()
}

/// The prompter for this run: dialoguer on a terminal, otherwise one that
/// declines every confirmation.
pub fn prompter() -> Box<dyn Prompter> {
    if is_interactive() {
        Box::new(DialoguerPrompter)
    } else {
        tracing::debug!("No terminal attached, prompts will be declined");
        Box::new(NonInteractive::declining())
    }
}

/// Terminal prompts via dialoguer.
pub struct DialoguerPrompter;

fn prompt_error(err: dialoguer::Error) -> kit_core::Error {
    kit_core::Error::Prompt {
        message: err.to_string(),
    }
}

/// Index of `value` in `choices`, or 0.
fn position(choices: &[&str], value: &str) -> usize {
    choices.iter().position(|c| *c == value).unwrap_or(0)
}

impl Prompter for DialoguerPrompter {
    fn confirm_init(&self) -> kit_core::Result<bool> {
        Confirm::new()
            .with_prompt("No components.json found. Initialize this project now?")
            .default(true)
            .interact()
            .map_err(prompt_error)
    }

    fn confirm_overwrite(&self, path: &NormalizedPath) -> kit_core::Result<bool> {
        Confirm::new()
            .with_prompt(format!("{} has local changes. Overwrite?", path.as_str()))
            .default(false)
            .interact()
            .map_err(prompt_error)
    }

    fn init_answers(&self, defaults: InitAnswers) -> kit_core::Result<InitAnswers> {
        println!();

        let style_idx = Select::new()
            .with_prompt("Style")
            .items(STYLES)
            .default(position(STYLES, &defaults.style))
            .interact()
            .map_err(prompt_error)?;

        let color_idx = Select::new()
            .with_prompt("Base color")
            .items(BASE_COLORS)
            .default(position(BASE_COLORS, &defaults.base_color))
            .interact()
            .map_err(prompt_error)?;

        let css_path: String = Input::new()
            .with_prompt("Global CSS file")
            .default(defaults.css_path)
            .interact_text()
            .map_err(prompt_error)?;

        let css_variables = Confirm::new()
            .with_prompt("Use CSS variables for theming?")
            .default(defaults.css_variables)
            .interact()
            .map_err(prompt_error)?;

        let tsx = Confirm::new()
            .with_prompt("Use TypeScript?")
            .default(defaults.tsx)
            .interact()
            .map_err(prompt_error)?;

        let rsc = Confirm::new()
            .with_prompt("Use React Server Components?")
            .default(defaults.rsc)
            .interact()
            .map_err(prompt_error)?;

        let components_alias: String = Input::new()
            .with_prompt("Import alias for components")
            .default(defaults.components_alias)
            .interact_text()
            .map_err(prompt_error)?;

        let utils_alias: String = Input::new()
            .with_prompt("Import alias for utils")
            .default(defaults.utils_alias)
            .interact_text()
            .map_err(prompt_error)?;

        println!();
        println!("{}", "Summary:".bold());
        println!("  {}: {}", "Style".dimmed(), STYLES[style_idx].cyan());
        println!("  {}: {}", "Base color".dimmed(), BASE_COLORS[color_idx].cyan());
        println!("  {}: {}", "CSS".dimmed(), css_path.cyan());
        println!("  {}: {}", "Components".dimmed(), components_alias.cyan());
        println!("  {}: {}", "Utils".dimmed(), utils_alias.cyan());
        println!();

        Ok(InitAnswers {
            style: STYLES[style_idx].to_string(),
            base_color: BASE_COLORS[color_idx].to_string(),
            css_path,
            css_variables,
            rsc,
            tsx,
            components_alias,
            utils_alias,
        })
    }
}

/// Let the user pick UI components from the registry index.
pub fn select_components(index: &[RegistryIndexEntry]) -> Result<Vec<String>> {
    let available: Vec<&str> = ui_components(index);
    let picked = MultiSelect::new()
        .with_prompt("Select components (space to toggle, enter to confirm)")
        .items(&available)
        .interact()?;
    Ok(picked.iter().map(|&i| available[i].to_string()).collect())
}

fn ui_components(index: &[RegistryIndexEntry]) -> Vec<&str> {
    index
        .iter()
        .filter(|entry| entry.item_type == ItemType::Ui)
        .map(|entry| entry.name.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, item_type: ItemType) -> RegistryIndexEntry {
        RegistryIndexEntry {
            name: name.into(),
            item_type,
            description: String::new(),
        }
    }

    #[test]
    fn test_defaults_are_choices() {
        assert_eq!(position(STYLES, "new-york"), 0);
        assert_eq!(position(BASE_COLORS, "neutral"), 0);
        assert_eq!(position(BASE_COLORS, "slate"), 4);
        assert_eq!(position(BASE_COLORS, "mauve"), 0);
    }

    #[test]
    fn test_only_ui_components_are_offered() {
        let index = vec![
            entry("utils", ItemType::Lib),
            entry("button", ItemType::Ui),
            entry("use-mobile", ItemType::Hook),
            entry("card", ItemType::Ui),
        ];
        assert_eq!(ui_components(&index), vec!["button", "card"]);
    }
}
