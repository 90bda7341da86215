use std::path::PathBuf;

use thiserror::Error;

/// Failures the scaffolders surface to the user and exit non-zero on.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("Invalid workflow slug '{slug}'. Must be kebab-case (lowercase, hyphens only)\n   Examples: grant-review, market-analysis, due-diligence")]
    InvalidSlug { slug: String },

    #[error("Tool name '{name}' must be kebab-case (lowercase letters, numbers, and hyphens only)")]
    InvalidToolName { name: String },

    #[error("Could not find project root ({marker} not found)\n   Make sure you're running this from within the Next.js project")]
    ProjectRootNotFound { marker: String },

    #[error("Templates directory not found: {}", .0.display())]
    TemplatesDirNotFound(PathBuf),

    #[error("Cancelled.")]
    OverwriteDeclined,

    #[error("Error creating {}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
