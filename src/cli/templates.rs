use std::path::PathBuf;

use anyhow::Result;

use crate::config::Config;
use crate::template::{TemplateSource, WORKFLOW_TEMPLATES};

/// List workflow templates and whether the active source provides each.
pub fn run(templates_dir: Option<PathBuf>, config_path: Option<PathBuf>) -> Result<()> {
    let config = Config::load_with_path(config_path.as_deref())?;
    let dir = templates_dir.or(config.workflow.templates_dir);
    let source = TemplateSource::resolve(dir.as_deref())?;

    println!("Templates: {}\n", source.describe());
    let mut missing = 0;
    for name in WORKFLOW_TEMPLATES {
        if source.contains(name) {
            println!("  \u{2713} {}", name);
        } else {
            missing += 1;
            println!("  \u{2717} {}", name);
        }
    }
    println!();
    println!(
        "{} of {} templates available",
        WORKFLOW_TEMPLATES.len() - missing,
        WORKFLOW_TEMPLATES.len()
    );

    Ok(())
}
