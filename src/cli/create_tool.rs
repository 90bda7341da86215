use std::path::PathBuf;

use anyhow::Result;
use tracing::info;

use crate::config::Config;
use crate::prompt::stdin_prompt;
use crate::scaffold::tool::{create_tool, next_steps, ToolKind, ToolRequest};

pub fn run(
    name: String,
    kind: ToolKind,
    output: Option<PathBuf>,
    force: bool,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let config = Config::load_with_path(config_path.as_deref())?;

    let output_dir = match output {
        Some(dir) => {
            info!("CLI override: output = {}", dir.display());
            dir
        }
        None => config.tool.output_dir,
    };

    let request = ToolRequest::new(name, kind)
        .with_output_dir(output_dir)
        .with_extension(config.tool.extension)
        .with_force(force);

    let mut prompt = stdin_prompt();
    let path = create_tool(&request, prompt.as_mut())?;

    println!("✅ Created {}", path.display());
    println!();
    print!("{}", next_steps(&request));

    Ok(())
}
