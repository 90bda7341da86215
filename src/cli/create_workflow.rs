use std::env;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::Config;
use crate::naming::to_title;
use crate::project::find_project_root;
use crate::prompt::{resolve_description, DescriptionInput, TerminalPrompt};
use crate::scaffold::workflow::{create_workflow, summary, WorkflowRequest};
use crate::slug::validate_workflow_slug;
use crate::template::TemplateSource;

pub fn run(
    slug: String,
    description: Option<String>,
    project_root: Option<PathBuf>,
    templates_dir: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = Config::load_with_path(config_path.as_deref())?;

    let root = match project_root {
        Some(root) => {
            info!("CLI override: project root = {}", root.display());
            root
        }
        None => {
            let cwd = env::current_dir().context("Failed to read current directory")?;
            find_project_root(&cwd, &config.workflow.project_marker)?
        }
    };
    println!("🎯 Project root: {}", root.display());

    // Reject bad slugs before prompting for anything
    validate_workflow_slug(&slug)?;

    let title = to_title(&slug);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let needs_input = description
        .as_deref()
        .is_none_or(|d| d.trim().is_empty());
    let description = if needs_input && stdin.is_terminal() {
        println!("\n📝 Creating workflow: {}", slug);
        resolve_description(
            description.as_deref(),
            DescriptionInput::Interactive(&mut TerminalPrompt),
            &title,
        )?
    } else {
        resolve_description(
            description.as_deref(),
            DescriptionInput::Piped(&mut stdin.lock()),
            &title,
        )?
    };

    let templates = TemplateSource::resolve(
        templates_dir
            .or(config.workflow.templates_dir)
            .as_deref(),
    )?;
    info!("Using {}", templates.describe());

    let request = WorkflowRequest::new(slug.clone(), root)
        .with_description(description)
        .with_migrations_dir(config.workflow.migrations_dir)
        .with_templates(templates);

    let report = create_workflow(&request, &mut stdout)?;
    print!("{}", summary(&slug, &report));

    Ok(())
}
