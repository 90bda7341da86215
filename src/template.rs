//! Placeholder substitution and the sources templates are loaded from.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::debug;

use crate::error::ScaffoldError;

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{([A-Za-z0-9_]+)\}\}").expect("valid placeholder regex"));

/// Ordered placeholder name -> value mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Replacements {
    entries: Vec<(String, String)>,
}

impl Replacements {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite. Overwriting keeps the key's original position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Replace every `{{NAME}}` whose NAME is in `replacements`.
///
/// Single pass: substituted values are emitted as-is and never re-scanned.
/// Placeholders with no mapping are left verbatim.
pub fn render(template: &str, replacements: &Replacements) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| match replacements.get(&caps[1]) {
            Some(value) => value.to_string(),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Workflow template file names, in scaffold order.
pub const WORKFLOW_TEMPLATES: &[&str] = &[
    "spec.template.ts",
    "types.template.ts",
    "page-server-wrapper.template.tsx",
    "page-client-orchestrator.template.tsx",
    "analyze-route.template.ts",
    "crud-route.template.ts",
    "crud-id-route.template.ts",
    "migration-runs-table.template.sql",
    "step-component.template.tsx",
    "readme.template.md",
];

fn builtin(name: &str) -> Option<&'static str> {
    let content = match name {
        "spec.template.ts" => include_str!("../templates/workflow/spec.template.ts"),
        "types.template.ts" => include_str!("../templates/workflow/types.template.ts"),
        "page-server-wrapper.template.tsx" => {
            include_str!("../templates/workflow/page-server-wrapper.template.tsx")
        }
        "page-client-orchestrator.template.tsx" => {
            include_str!("../templates/workflow/page-client-orchestrator.template.tsx")
        }
        "analyze-route.template.ts" => {
            include_str!("../templates/workflow/analyze-route.template.ts")
        }
        "crud-route.template.ts" => include_str!("../templates/workflow/crud-route.template.ts"),
        "crud-id-route.template.ts" => {
            include_str!("../templates/workflow/crud-id-route.template.ts")
        }
        "migration-runs-table.template.sql" => {
            include_str!("../templates/workflow/migration-runs-table.template.sql")
        }
        "step-component.template.tsx" => {
            include_str!("../templates/workflow/step-component.template.tsx")
        }
        "readme.template.md" => include_str!("../templates/workflow/readme.template.md"),
        _ => return None,
    };
    Some(content)
}

/// Where workflow templates come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    /// Templates compiled into the binary.
    Builtin,
    /// A directory of `*.template.*` files on disk.
    Directory(PathBuf),
}

impl TemplateSource {
    /// Pick a directory source if one was given, checking that it exists.
    pub fn resolve(dir: Option<&Path>) -> Result<Self, ScaffoldError> {
        match dir {
            Some(dir) if !dir.is_dir() => {
                Err(ScaffoldError::TemplatesDirNotFound(dir.to_path_buf()))
            }
            Some(dir) => Ok(Self::Directory(dir.to_path_buf())),
            None => Ok(Self::Builtin),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        match self {
            Self::Builtin => builtin(name).is_some(),
            Self::Directory(dir) => dir.join(name).is_file(),
        }
    }

    /// Load a template by file name. `Ok(None)` means the template is missing.
    pub fn load(&self, name: &str) -> Result<Option<String>> {
        match self {
            Self::Builtin => Ok(builtin(name).map(str::to_string)),
            Self::Directory(dir) => {
                let path = dir.join(name);
                if !path.is_file() {
                    debug!("Template {} not present in {}", name, dir.display());
                    return Ok(None);
                }
                let content = fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read template {}", path.display()))?;
                Ok(Some(content))
            }
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Self::Builtin => "built-in templates".to_string(),
            Self::Directory(dir) => dir.display().to_string(),
        }
    }
}
