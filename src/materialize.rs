//! Render templates into a project tree.
//!
//! A missing template is skipped with a warning; any failure to read, create a
//! directory or write aborts the run. Files written before the failure are
//! left in place.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{debug, warn};

use crate::error::ScaffoldError;
use crate::template::{render, Replacements, TemplateSource};

/// One template rendered to one destination, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMapping {
    pub template: String,
    pub destination: PathBuf,
}

impl FileMapping {
    pub fn new(template: impl Into<String>, destination: impl Into<PathBuf>) -> Self {
        Self {
            template: template.into(),
            destination: destination.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScaffoldReport {
    /// Destinations written, relative to the project root, in write order.
    pub created: Vec<PathBuf>,
    /// Template names that were not found.
    pub skipped: Vec<String>,
}

/// Create parent directories and write `content` to `root/relative`.
pub fn write_file(root: &Path, relative: &Path, content: &str) -> Result<(), ScaffoldError> {
    let path = root.join(relative);
    let failed = |source| ScaffoldError::WriteFailed {
        path: relative.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(failed)?;
    }
    fs::write(&path, content).map_err(failed)?;
    debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}

/// Render every mapping in order, reporting progress to `out`.
///
/// The returned error names the destination that failed; callers print it.
pub fn materialize<W: Write>(
    source: &TemplateSource,
    mappings: &[FileMapping],
    replacements: &Replacements,
    root: &Path,
    out: &mut W,
) -> Result<ScaffoldReport> {
    let mut report = ScaffoldReport::default();

    for mapping in mappings {
        let template = match source.load(&mapping.template) {
            Ok(Some(template)) => template,
            Ok(None) => {
                warn!("Template {} missing from {}", mapping.template, source.describe());
                writeln!(out, "⚠️  Template not found: {}, skipping...", mapping.template)?;
                report.skipped.push(mapping.template.clone());
                continue;
            }
            Err(e) => {
                return Err(e.context(format!(
                    "Error creating {}",
                    mapping.destination.display()
                )))
            }
        };

        let rendered = render(&template, replacements);
        write_file(root, &mapping.destination, &rendered)?;

        writeln!(out, "✅ Created: {}", mapping.destination.display())?;
        report.created.push(mapping.destination.clone());
    }

    Ok(report)
}
