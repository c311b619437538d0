//! [`TestRegistry`] builder for on-disk component registries.
//!
//! Items land in `<root>/<name>.json` and are listed in `<root>/index.json`,
//! the layout a directory-backed registry source reads.

use std::fs;
use std::path::Path;

use serde_json::{Value, json};
use tempfile::TempDir;

/// A temporary registry directory.
pub struct TestRegistry {
    temp_dir: TempDir,
    index: Vec<Value>,
}

impl Default for TestRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRegistry {
    /// Create an empty registry with an empty index.
    pub fn new() -> Self {
        let registry = Self {
            temp_dir: TempDir::new()
                .unwrap_or_else(|e| panic!("TestRegistry::new: failed to create temp dir: {e}")),
            index: Vec::new(),
        };
        registry.write_index();
        registry
    }

    /// A small registry: `utils`, `button`, `label`, and `form`
    /// (which depends on `button` and `label`).
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry
            .item(
                "utils",
                "registry:lib",
                &[("lib/utils.ts", UTILS_SOURCE)],
                &["clsx", "tailwind-merge"],
                &[],
            )
            .item(
                "button",
                "registry:ui",
                &[("components/ui/button.tsx", BUTTON_SOURCE)],
                &["@radix-ui/react-slot"],
                &["utils"],
            )
            .item(
                "label",
                "registry:ui",
                &[("components/ui/label.tsx", LABEL_SOURCE)],
                &["@radix-ui/react-label"],
                &["utils"],
            )
            .item(
                "form",
                "registry:ui",
                &[("components/ui/form.tsx", FORM_SOURCE)],
                &["react-hook-form"],
                &["button", "label"],
            );
        registry
    }

    /// Return the registry root directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add an item document and its index entry.
    pub fn item(
        &mut self,
        name: &str,
        item_type: &str,
        files: &[(&str, &str)],
        dependencies: &[&str],
        registry_dependencies: &[&str],
    ) -> &mut Self {
        let files: Vec<Value> = files
            .iter()
            .map(|(path, content)| json!({ "path": path, "content": content }))
            .collect();
        let document = json!({
            "name": name,
            "type": item_type,
            "files": files,
            "dependencies": dependencies,
            "registryDependencies": registry_dependencies,
        });
        write_json(&self.root().join(format!("{name}.json")), &document);

        self.index.push(json!({
            "name": name,
            "type": item_type,
            "description": format!("The {name} component"),
        }));
        self.write_index();
        self
    }

    /// Write a raw, possibly malformed, item document.
    pub fn raw_item(&self, name: &str, content: &str) -> &Self {
        let path = self.root().join(format!("{name}.json"));
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("TestRegistry::raw_item: failed to write {}: {e}", path.display()));
        self
    }

    /// Remove an item document while leaving it in the index.
    pub fn remove_item(&self, name: &str) -> &Self {
        let path = self.root().join(format!("{name}.json"));
        fs::remove_file(&path)
            .unwrap_or_else(|e| panic!("TestRegistry::remove_item: failed to remove {}: {e}", path.display()));
        self
    }

    fn write_index(&self) {
        write_json(&self.root().join("index.json"), &Value::Array(self.index.clone()));
    }
}

fn write_json(path: &Path, value: &Value) {
    let content = serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| panic!("TestRegistry: failed to serialize {}: {e}", path.display()));
    fs::write(path, content)
        .unwrap_or_else(|e| panic!("TestRegistry: failed to write {}: {e}", path.display()));
}

/// Registry source of the shared utility.
pub const UTILS_SOURCE: &str = r#"import { clsx, type ClassValue } from "clsx"
import { twMerge } from "tailwind-merge"

export function cn(...inputs: ClassValue[]) {
  return twMerge(clsx(inputs))
}
"#;

pub const BUTTON_SOURCE: &str = r#""use client"

import * as React from "react"
import { Slot } from "@radix-ui/react-slot"

import { cn } from "@/lib/utils"

export function Button({ className, ...props }: React.ComponentProps<"button">) {
  return <button className={cn("inline-flex", className)} {...props} />
}
"#;

pub const LABEL_SOURCE: &str = r#"import * as React from "react"
import * as LabelPrimitive from "@radix-ui/react-label"

import { cn } from "@/registry/new-york/lib/utils"

export function Label(props: React.ComponentProps<typeof LabelPrimitive.Root>) {
  return <LabelPrimitive.Root className={cn("text-sm")} {...props} />
}
"#;

pub const FORM_SOURCE: &str = r#"import * as React from "react"
import { useForm } from "react-hook-form"

import { Button } from "@/components/ui/button"
import { Label } from "@/registry/new-york/ui/label"
import { cn } from "@/lib/utils"

export function Form() {
  const form = useForm()
  return <form className={cn("space-y-4")}><Label /><Button /></form>
}
"#;
