use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use scaffolder::cli;
use scaffolder::error::ScaffoldError;
use scaffolder::scaffold::ToolKind;

#[derive(Parser)]
#[command(name = "scaffolder", version)]
#[command(about = "Scaffold AI SDK tools and spec-driven workflows", long_about = None)]
struct Cli {
    /// Path to config file (defaults to ./scaffolder.toml or ~/.config/scaffolder/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new AI SDK tool file from template
    #[command(after_help = "Examples:
  scaffolder create-tool get-weather simple
  scaffolder create-tool search-data factory-auth
  scaffolder create-tool analyze-dataset factory-streaming")]
    CreateTool {
        /// Name of the tool in kebab-case (e.g., search-papers)
        tool_name: String,

        /// Type of tool to generate
        #[arg(value_enum)]
        tool_type: ToolKind,

        /// Output directory (default: lib/ai/tools/)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Overwrite an existing file without asking
        #[arg(short, long)]
        force: bool,
    },

    /// Scaffold a spec-driven workflow from templates
    #[command(after_help = "Examples:
  scaffolder create-workflow grant-review
  scaffolder create-workflow market-analysis --description \"Quarterly market outlook\"")]
    CreateWorkflow {
        /// kebab-case workflow identifier (e.g., grant-review)
        workflow_slug: String,

        /// Workflow description. If omitted, read from piped stdin or prompted for.
        #[arg(long)]
        description: Option<String>,

        /// Project root (defaults to the nearest ancestor containing package.json)
        #[arg(long)]
        project_root: Option<PathBuf>,

        /// Directory of workflow templates (defaults to the built-in set)
        #[arg(long)]
        templates: Option<PathBuf>,
    },

    /// List workflow templates and whether each is available
    Templates {
        /// Directory of workflow templates (defaults to the built-in set)
        #[arg(long)]
        templates: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    // Progress goes to stdout; logs stay on stderr
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(cli) {
        tracing::debug!("Command failed: {:?}", err);
        println!("{}", failure_message(&err));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::CreateTool {
            tool_name,
            tool_type,
            output,
            force,
        } => cli::create_tool::run(tool_name, tool_type, output, force, cli.config),
        Commands::CreateWorkflow {
            workflow_slug,
            description,
            project_root,
            templates,
        } => cli::create_workflow::run(
            workflow_slug,
            description,
            project_root,
            templates,
            cli.config,
        ),
        Commands::Templates { templates } => cli::templates::run(templates, cli.config),
    }
}

/// The line printed on stdout when a command fails.
fn failure_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<ScaffoldError>() {
        Some(ScaffoldError::OverwriteDeclined) => "Cancelled.".to_string(),
        _ => format!("❌ {:#}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_create_tool_defaults() {
        let cli = Cli::try_parse_from(["scaffolder", "create-tool", "get-weather", "simple"]).unwrap();
        match cli.command {
            Commands::CreateTool {
                tool_name,
                tool_type,
                output,
                force,
            } => {
                assert_eq!(tool_name, "get-weather");
                assert_eq!(tool_type, ToolKind::Simple);
                assert!(output.is_none());
                assert!(!force);
            }
            _ => panic!("expected create-tool"),
        }
    }

    #[test]
    fn test_parse_create_tool_all_args() {
        let cli = Cli::try_parse_from([
            "scaffolder",
            "create-tool",
            "analyze-dataset",
            "factory-streaming",
            "--output",
            "src/tools",
            "--force",
        ])
        .unwrap();
        match cli.command {
            Commands::CreateTool {
                tool_type,
                output,
                force,
                ..
            } => {
                assert_eq!(tool_type, ToolKind::FactoryStreaming);
                assert_eq!(output.unwrap(), PathBuf::from("src/tools"));
                assert!(force);
            }
            _ => panic!("expected create-tool"),
        }
    }

    #[test]
    fn test_parse_unknown_tool_type() {
        let result = Cli::try_parse_from(["scaffolder", "create-tool", "x", "streaming"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_create_workflow() {
        let cli = Cli::try_parse_from([
            "scaffolder",
            "--config",
            "custom.toml",
            "create-workflow",
            "grant-review",
            "--description",
            "Review grants",
        ])
        .unwrap();
        assert_eq!(cli.config.unwrap(), PathBuf::from("custom.toml"));
        match cli.command {
            Commands::CreateWorkflow {
                workflow_slug,
                description,
                project_root,
                templates,
            } => {
                assert_eq!(workflow_slug, "grant-review");
                assert_eq!(description.unwrap(), "Review grants");
                assert!(project_root.is_none());
                assert!(templates.is_none());
            }
            _ => panic!("expected create-workflow"),
        }
    }

    #[test]
    fn test_parse_missing_subcommand() {
        let result = Cli::try_parse_from(["scaffolder"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_failure_message_for_declined_overwrite() {
        let err = anyhow::Error::from(ScaffoldError::OverwriteDeclined);
        assert_eq!(failure_message(&err), "Cancelled.");
    }

    #[test]
    fn test_failure_message_includes_cause() {
        let err = anyhow::Error::from(ScaffoldError::WriteFailed {
            path: PathBuf::from("components/grant-review/index.ts"),
            source: std::io::Error::other("disk full"),
        });
        assert_eq!(
            failure_message(&err),
            "❌ Error creating components/grant-review/index.ts: disk full"
        );
    }

    #[test]
    fn test_failure_message_keeps_context_chain() {
        let err = anyhow::anyhow!("No such file").context("Failed to read config missing.toml");
        assert_eq!(
            failure_message(&err),
            "❌ Failed to read config missing.toml: No such file"
        );
    }

    #[test]
    fn test_parse_missing_slug() {
        let result = Cli::try_parse_from(["scaffolder", "create-workflow"]);
        assert!(result.is_err());
    }
}
