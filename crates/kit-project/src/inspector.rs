//! Project inspection
//!
//! [`detect`] probes a project directory and never fails: anything that
//! cannot be read falls back to a neutral default.

use std::fmt;

use kit_fs::{NormalizedPath, ProjectFile};
use kit_meta::alias::DEFAULT_ALIAS_PREFIX;
use serde::Serialize;

use crate::package_json::PackageJson;
use crate::tsconfig;

/// Stylesheet locations, probed in order.
pub const CSS_CANDIDATES: [&str; 8] = [
    "app/globals.css",
    "src/app/globals.css",
    "styles/globals.css",
    "src/styles/globals.css",
    "src/index.css",
    "src/styles/global.css",
    "app/tailwind.css",
    "src/global.css",
];

/// Tailwind config locations, probed in order.
pub const TAILWIND_CONFIG_CANDIDATES: [&str; 4] = [
    "tailwind.config.ts",
    "tailwind.config.js",
    "tailwind.config.mjs",
    "tailwind.config.cjs",
];

/// Frontend framework of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Framework {
    NextApp,
    NextPages,
    Vite,
    Remix,
    Astro,
    Unknown,
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Framework::NextApp => "next-app",
            Framework::NextPages => "next-pages",
            Framework::Vite => "vite",
            Framework::Remix => "remix",
            Framework::Astro => "astro",
            Framework::Unknown => "unknown",
        };
        write!(f, "{name}")
    }
}

/// What kit knows about a project. Computed fresh on every invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectInfo {
    pub framework: Framework,
    /// Whether the project keeps its sources under `src/`
    pub src_dir: bool,
    /// Whether a `tsconfig.json` is present
    pub typescript: bool,
    /// Whether `tailwindcss` is a declared dependency
    pub tailwind_css: bool,
    /// Import alias prefix, e.g. `@/`
    pub alias_prefix: String,
    /// Discovered global stylesheet, relative to the project root
    pub css_path: Option<String>,
    /// Discovered tailwind config, relative to the project root
    pub tailwind_config: Option<String>,
}

impl ProjectInfo {
    /// Stylesheet path to use when discovery found none.
    pub fn default_css_path(&self) -> String {
        let path = match (self.framework, self.src_dir) {
            (Framework::NextApp, true) => "src/app/globals.css",
            (Framework::NextApp, false) => "app/globals.css",
            (Framework::Vite, _) => "src/index.css",
            (Framework::Remix, _) => "app/tailwind.css",
            (Framework::Astro, _) | (_, true) => "src/styles/globals.css",
            (_, false) => "styles/globals.css",
        };
        path.to_string()
    }

    /// The discovered stylesheet, or the framework default.
    pub fn css_path_or_default(&self) -> String {
        self.css_path
            .clone()
            .unwrap_or_else(|| self.default_css_path())
    }
}

/// Inspect the project rooted at `cwd`.
pub async fn detect(cwd: &NormalizedPath) -> ProjectInfo {
    let (src_dir, typescript, manifest, alias_prefix, css_path, tailwind_config, app_dir) = tokio::join!(
        is_dir(cwd.join(ProjectFile::SrcDir.as_str())),
        is_file(cwd.join(ProjectFile::TsConfig.as_str())),
        PackageJson::read(cwd),
        detect_alias_prefix(cwd),
        first_existing(cwd, &CSS_CANDIDATES),
        first_existing(cwd, &TAILWIND_CONFIG_CANDIDATES),
        has_app_dir(cwd),
    );

    let manifest = manifest.unwrap_or_else(|e| {
        tracing::debug!(cwd = %cwd, error = %e, "No usable package.json");
        PackageJson::default()
    });

    let info = ProjectInfo {
        framework: framework_from(&manifest, app_dir),
        src_dir,
        typescript,
        tailwind_css: manifest.has_dependency("tailwindcss"),
        alias_prefix,
        css_path,
        tailwind_config,
    };
    tracing::debug!(?info, "Inspected project");
    info
}

/// Framework precedence: next > remix > astro > vite.
pub fn framework_from(manifest: &PackageJson, app_dir: bool) -> Framework {
    let names = manifest.dependency_names();
    if names.contains("next") {
        if app_dir {
            Framework::NextApp
        } else {
            Framework::NextPages
        }
    } else if names.iter().any(|name| name.starts_with("@remix-run/")) {
        Framework::Remix
    } else if names.contains("astro") {
        Framework::Astro
    } else if names.contains("vite") {
        Framework::Vite
    } else {
        Framework::Unknown
    }
}

async fn is_dir(path: NormalizedPath) -> bool {
    tokio::fs::metadata(path.to_native())
        .await
        .map(|m| m.is_dir())
        .unwrap_or(false)
}

async fn is_file(path: NormalizedPath) -> bool {
    tokio::fs::metadata(path.to_native())
        .await
        .map(|m| m.is_file())
        .unwrap_or(false)
}

async fn has_app_dir(cwd: &NormalizedPath) -> bool {
    is_dir(cwd.join("app")).await || is_dir(cwd.join("src/app")).await
}

async fn first_existing(cwd: &NormalizedPath, candidates: &[&str]) -> Option<String> {
    for candidate in candidates {
        if is_file(cwd.join(candidate)).await {
            return Some(candidate.to_string());
        }
    }
    None
}

async fn detect_alias_prefix(cwd: &NormalizedPath) -> String {
    let path = cwd.join(ProjectFile::TsConfig.as_str());
    let content = match tokio::fs::read_to_string(path.to_native()).await {
        Ok(content) => content,
        Err(_) => return DEFAULT_ALIAS_PREFIX.to_string(),
    };
    match tsconfig::path_alias_keys(&path.to_native(), &content) {
        Ok(keys) => tsconfig::choose_alias_prefix(&keys),
        Err(error) => {
            tracing::warn!(%error, "Ignoring unparsable tsconfig.json");
            DEFAULT_ALIAS_PREFIX.to_string()
        }
    }
}
