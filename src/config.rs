use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub tool: ToolConfig,
    #[serde(default)]
    pub workflow: WorkflowConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Directory generated tools are written to (default: "lib/ai/tools")
    #[serde(default = "default_tool_output_dir")]
    pub output_dir: PathBuf,

    /// File extension for generated tools, without the dot (default: "ts")
    #[serde(default = "default_tool_extension")]
    pub extension: String,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            output_dir: default_tool_output_dir(),
            extension: default_tool_extension(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowConfig {
    /// File that marks the project root (default: "package.json")
    #[serde(default = "default_project_marker")]
    pub project_marker: String,

    /// Migrations directory relative to the project root (default: "lib/db/migrations")
    #[serde(default = "default_migrations_dir")]
    pub migrations_dir: PathBuf,

    /// Directory of workflow templates. Built-in templates are used when unset.
    #[serde(default)]
    pub templates_dir: Option<PathBuf>,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            project_marker: default_project_marker(),
            migrations_dir: default_migrations_dir(),
            templates_dir: None,
        }
    }
}

fn default_tool_output_dir() -> PathBuf {
    PathBuf::from("lib/ai/tools")
}

fn default_tool_extension() -> String {
    "ts".to_string()
}

fn default_project_marker() -> String {
    "package.json".to_string()
}

fn default_migrations_dir() -> PathBuf {
    PathBuf::from("lib/db/migrations")
}

impl Config {
    /// Load configuration from a specific path, or use default search paths
    pub fn load_with_path(path: Option<&Path>) -> Result<Self> {
        // An explicit path must load; search paths are skipped only when absent
        if let Some(config_path) = path {
            debug!("Loading config from explicit path: {}", config_path.display());
            return Self::load_from_path(config_path);
        }

        let local = Path::new("scaffolder.toml");
        if local.exists() {
            debug!("Loading config from ./scaffolder.toml");
            return Self::load_from_path(local);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("scaffolder").join("config.toml");
            if config_path.exists() {
                debug!("Loading config from {:?}", config_path);
                return Self::load_from_path(&config_path);
            }
        }

        debug!("Using default config");
        Ok(Self::default())
    }

    fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }
}
