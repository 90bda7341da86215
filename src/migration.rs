//! Migration file numbering.
//!
//! Migrations are ordered by a numeric filename prefix of at least four digits
//! (`0007_add_index.sql`, `10000_add_view.sql`).
//! The next number is one past the highest prefix on disk. There is no locking:
//! two scaffolds running at once can pick the same number.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use glob::Pattern;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

static NUMBERED: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d{4,})_").expect("valid prefix regex"));

/// Parse the numeric prefix of a migration file name.
pub fn parse_prefix(file_name: &str) -> Option<u32> {
    NUMBERED
        .captures(file_name)
        .and_then(|caps| caps[1].parse().ok())
}

/// Highest numbered `*.sql` migration in `dir` plus one, or 1 if there is none.
/// A missing directory counts as empty.
pub fn next_migration_number(dir: &Path) -> Result<u32> {
    if !dir.is_dir() {
        debug!("Migrations directory {} absent, starting at 1", dir.display());
        return Ok(1);
    }

    let sql = Pattern::new("*.sql").context("Invalid migration glob")?;
    let mut highest: Option<u32> = None;

    for entry in fs::read_dir(dir)
        .with_context(|| format!("Failed to read migrations directory {}", dir.display()))?
    {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if !sql.matches(name) {
            continue;
        }
        if let Some(n) = parse_prefix(name) {
            highest = Some(highest.map_or(n, |h| h.max(n)));
        }
    }

    let next = highest.map_or(1, |h| h.saturating_add(1));
    debug!("Next migration number in {}: {}", dir.display(), next);
    Ok(next)
}

/// Zero-pad to four digits. Numbers past 9999 keep their natural width.
pub fn format_number(n: u32) -> String {
    format!("{:04}", n)
}

/// `0003_create_grant_review_runs_table.sql`
pub fn runs_table_file_name(number: u32, snake: &str) -> String {
    format!("{}_create_{}_runs_table.sql", format_number(number), snake)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "-- sql").unwrap();
    }

    #[test]
    fn test_parse_prefix() {
        assert_eq!(parse_prefix("0001_init.sql"), Some(1));
        assert_eq!(parse_prefix("0042_add_index.sql"), Some(42));
        assert_eq!(parse_prefix("10000_past_four_digits.sql"), Some(10000));
        assert_eq!(parse_prefix("001_short.sql"), None);
        assert_eq!(parse_prefix("0001-dash.sql"), None);
        assert_eq!(parse_prefix("init.sql"), None);
    }

    #[test]
    fn test_absent_directory_starts_at_one() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("lib/db/migrations");
        assert_eq!(next_migration_number(&missing).unwrap(), 1);
    }

    #[test]
    fn test_empty_directory_starts_at_one() {
        let dir = TempDir::new().unwrap();
        assert_eq!(next_migration_number(dir.path()).unwrap(), 1);
    }

    #[test]
    fn test_next_after_existing() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "0001_x.sql");
        touch(dir.path(), "0002_y.sql");
        assert_eq!(next_migration_number(dir.path()).unwrap(), 3);
    }

    #[test]
    fn test_uses_max_not_count() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "0001_a.sql");
        touch(dir.path(), "0017_b.sql");
        touch(dir.path(), "0005_c.sql");
        assert_eq!(next_migration_number(dir.path()).unwrap(), 18);
    }

    #[test]
    fn test_ignores_non_matching_files() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "0003_real.sql");
        touch(dir.path(), "0099_notes.md");
        touch(dir.path(), "123_too_short.sql");
        touch(dir.path(), "schema.sql");
        fs::create_dir(dir.path().join("0500_meta")).unwrap();
        assert_eq!(next_migration_number(dir.path()).unwrap(), 4);
    }

    #[test]
    fn test_numbering_continues_past_9999() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "9999_a.sql");
        touch(dir.path(), "10000_b.sql");
        assert_eq!(next_migration_number(dir.path()).unwrap(), 10001);
    }

    #[test]
    fn test_file_name_formatting() {
        assert_eq!(format_number(1), "0001");
        assert_eq!(format_number(10000), "10000");
        assert_eq!(
            runs_table_file_name(1, "grant_review"),
            "0001_create_grant_review_runs_table.sql"
        );
    }
}
