//! Input validation for workflow slugs and tool names.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ScaffoldError;

static WORKFLOW_SLUG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z][a-z0-9-]*[a-z0-9]$").expect("valid slug regex"));

/// Accept `grant-review`, reject `-abc`, `ABC`, `a-`, `a--b` and the empty string.
///
/// Slugs must be at least two characters long.
pub fn validate_workflow_slug(slug: &str) -> Result<(), ScaffoldError> {
    if !WORKFLOW_SLUG.is_match(slug) || slug.contains("--") {
        return Err(ScaffoldError::InvalidSlug {
            slug: slug.to_string(),
        });
    }
    Ok(())
}

/// Tool names are looser than workflow slugs: hyphens may appear anywhere.
pub fn validate_tool_name(name: &str) -> Result<(), ScaffoldError> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if !valid {
        return Err(ScaffoldError::InvalidToolName {
            name: name.to_string(),
        });
    }
    Ok(())
}
