//! Single-file AI SDK tool generator.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::ValueEnum;
use tracing::info;

use crate::error::ScaffoldError;
use crate::materialize::write_file;
use crate::naming::to_camel_case;
use crate::prompt::{confirm_overwrite, Prompt};
use crate::slug::validate_tool_name;
use crate::template::{render, Replacements};

const SIMPLE_TOOL: &str = r#"import { tool } from 'ai';
import { z } from 'zod';

export const {{TOOL_NAME_CAMEL}} = tool({
  description: 'TODO: Describe what this tool does',
  inputSchema: z.object({
    // TODO: Define your input schema
    // Example:
    // query: z.string().min(1).describe('Search query'),
    // limit: z.number().int().min(1).max(100).optional().describe('Maximum results'),
  }),
  execute: async (input) => {
    // TODO: Implement tool logic

    // Example return:
    return {
      success: true,
      data: {},
    };
  },
});
"#;

const FACTORY_TOOL: &str = r#"{{IMPORTS}}

interface FactoryProps {
{{FACTORY_PROPS}}
}

const inputSchema = z.object({
  // TODO: Define your input schema
  // Examples:
  // query: z.string().min(1).describe('Search query'),
  // limit: z.number().int().min(1).max(100).optional().describe('Maximum results'),
});

type Input = z.infer<typeof inputSchema>;

export const {{TOOL_NAME_CAMEL}} = ({ {{FACTORY_PARAMS}} }: FactoryProps) =>
  tool({
    description: 'TODO: Describe what this tool does',
    inputSchema,
    execute: async (input: Input) => {{{AUTH_CHECK}}{{STREAMING_EXAMPLE}}
      // TODO: Implement tool logic

      // Example return:
      return {
        success: true,
        data: {},
      };
    },
  });
"#;

const AUTH_CHECK: &str = r#"
      // Auth check
      if (!session.user?.id) {
        return { error: 'Unauthorized: login required' };
      }
"#;

const STREAMING_EXAMPLE: &str = r#"
      // Optional: Emit UI progress updates
      dataStream.write({
        type: 'data-status',
        data: { message: 'Processing...' },
        transient: true,  // Temporary message
      });
"#;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ToolKind {
    /// Stateless tool, no auth or streaming
    Simple,
    /// Factory pattern, no auth
    Factory,
    /// Factory pattern with auth
    FactoryAuth,
    /// Factory pattern with auth and UI streaming
    FactoryStreaming,
}

impl ToolKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolKind::Simple => "simple",
            ToolKind::Factory => "factory",
            ToolKind::FactoryAuth => "factory-auth",
            ToolKind::FactoryStreaming => "factory-streaming",
        }
    }

    pub fn has_auth(&self) -> bool {
        matches!(self, ToolKind::FactoryAuth | ToolKind::FactoryStreaming)
    }

    pub fn has_streaming(&self) -> bool {
        matches!(self, ToolKind::FactoryStreaming)
    }

    /// Auth tools need the stream writer too, for the chat message type.
    pub fn has_data_stream(&self) -> bool {
        self.has_auth() || self.has_streaming()
    }

    /// Factory props as `(name, declaration)` pairs, in declaration order.
    fn factory_props(&self) -> Vec<(&'static str, &'static str)> {
        let mut props = Vec::new();
        if self.has_auth() {
            props.push(("session", "session: AuthSession;"));
        }
        if self.has_data_stream() {
            props.push(("dataStream", "dataStream: UIMessageStreamWriter<ChatMessage>;"));
        }
        props.push(("chatId", "chatId?: string; // Optional chat context"));
        props
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generate the source text for a tool.
pub fn render_tool(name: &str, kind: ToolKind) -> String {
    let camel = to_camel_case(name);
    if kind == ToolKind::Simple {
        let reps = Replacements::new().with("TOOL_NAME_CAMEL", camel);
        return render(SIMPLE_TOOL, &reps);
    }

    let mut imports = vec![if kind.has_data_stream() {
        "import { tool, type UIMessageStreamWriter } from 'ai';"
    } else {
        "import { tool } from 'ai';"
    }];
    imports.push("import { z } from 'zod';");
    if kind.has_auth() {
        imports.push("import type { AuthSession } from '@/lib/auth/types';");
    }
    if kind.has_data_stream() {
        imports.push("import type { ChatMessage } from '@/lib/types';");
    }

    let props = kind.factory_props();
    let declarations: Vec<String> = props.iter().map(|(_, decl)| format!("  {}", decl)).collect();
    let params: Vec<&str> = props.iter().map(|(name, _)| *name).collect();

    let reps = Replacements::new()
        .with("IMPORTS", imports.join("\n"))
        .with("FACTORY_PROPS", declarations.join("\n"))
        .with("FACTORY_PARAMS", params.join(", "))
        .with("TOOL_NAME_CAMEL", camel)
        .with("AUTH_CHECK", if kind.has_auth() { AUTH_CHECK } else { "" })
        .with(
            "STREAMING_EXAMPLE",
            if kind.has_streaming() { STREAMING_EXAMPLE } else { "" },
        );
    render(FACTORY_TOOL, &reps)
}

/// Everything needed to generate one tool file.
#[derive(Debug, Clone)]
pub struct ToolRequest {
    pub name: String,
    pub kind: ToolKind,
    pub output_dir: PathBuf,
    pub extension: String,
    /// Overwrite an existing file without asking.
    pub force: bool,
}

impl ToolRequest {
    pub fn new(name: impl Into<String>, kind: ToolKind) -> Self {
        Self {
            name: name.into(),
            kind,
            output_dir: PathBuf::from("lib/ai/tools"),
            extension: "ts".to_string(),
            force: false,
        }
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    /// `<output_dir>/<name>.<ext>`
    pub fn output_path(&self) -> PathBuf {
        self.output_dir
            .join(format!("{}.{}", self.name, self.extension))
    }

    /// Module specifier used in the registration hint, e.g. `@/lib/ai/tools/get-weather`.
    pub fn import_path(&self) -> String {
        let dir = if self.output_dir.is_relative() {
            self.output_dir.to_string_lossy().replace('\\', "/")
        } else {
            "lib/ai/tools".to_string()
        };
        let dir = dir.trim_start_matches("./").trim_end_matches('/');
        format!("@/{}/{}", dir, self.name)
    }
}

/// Validate, render and write a tool file. Asks before overwriting unless forced.
pub fn create_tool(request: &ToolRequest, prompt: &mut dyn Prompt) -> Result<PathBuf> {
    validate_tool_name(&request.name)?;

    let content = render_tool(&request.name, request.kind);
    let path = request.output_path();

    if path.exists() && !request.force && !confirm_overwrite(&path, prompt)? {
        return Err(ScaffoldError::OverwriteDeclined.into());
    }

    write_file(Path::new(""), &path, &content)?;
    info!("Generated {} tool at {}", request.kind, path.display());
    Ok(path)
}

/// Registration checklist printed after a tool is created.
pub fn next_steps(request: &ToolRequest) -> String {
    let camel = to_camel_case(&request.name);
    let path = request.output_path();

    let tools_entry = if request.kind == ToolKind::Simple {
        format!("{},", camel)
    } else {
        let args: Vec<&str> = request
            .kind
            .factory_props()
            .into_iter()
            .map(|(name, _)| name)
            .filter(|name| *name != "chatId")
            .collect();
        if args.is_empty() {
            format!("{camel}: {camel}({{}}),")
        } else {
            format!("{camel}: {camel}({{ {} }}),", args.join(", "))
        }
    };

    let mut lines = vec![
        "Next steps:".to_string(),
        format!("1. Edit {} and implement the TODO items", path.display()),
        "2. Register in app/(chat)/api/chat/route.ts:".to_string(),
        format!(
            "   - Import: import {{ {} }} from '{}';",
            camel,
            request.import_path()
        ),
        format!("   - Add to tools: {}", tools_entry),
        format!("   - Add to ACTIVE_TOOLS: '{}',", camel),
        "3. Test the tool via chat interface".to_string(),
    ];
    lines.push(String::new());
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use crate::prompt::ReaderPrompt;
    use std::io::Cursor;
    use tempfile::TempDir;

    #[test]
    fn test_kind_display_round_trips_clap_names() {
        for kind in ToolKind::value_variants() {
            let name = kind.to_possible_value().unwrap();
            assert_eq!(name.get_name(), kind.as_str());
        }
    }

    #[test]
    fn test_simple_tool_text() {
        let out = render_tool("get-weather", ToolKind::Simple);
        assert!(out.starts_with("import { tool } from 'ai';\nimport { z } from 'zod';\n"));
        assert!(out.contains("export const getWeather = tool({"));
        assert!(out.contains("execute: async (input) => {"));
        assert!(!out.contains("{{"));
        assert_eq!(out, SIMPLE_TOOL.replace("{{TOOL_NAME_CAMEL}}", "getWeather"));
    }

    #[test]
    fn test_factory_tool_has_no_auth() {
        let out = render_tool("search-data", ToolKind::Factory);
        assert!(out.starts_with("import { tool } from 'ai';"));
        assert!(out.contains("export const searchData = ({ chatId }: FactoryProps) =>"));
        assert!(out.contains("  chatId?: string; // Optional chat context\n}"));
        assert!(!out.contains("AuthSession"));
        assert!(!out.contains("Auth check"));
        assert!(!out.contains("dataStream"));
        assert!(out.contains("execute: async (input: Input) => {\n      // TODO: Implement tool logic"));
    }

    #[test]
    fn test_factory_auth_tool() {
        let out = render_tool("search-data", ToolKind::FactoryAuth);
        assert!(out.contains("import { tool, type UIMessageStreamWriter } from 'ai';"));
        assert!(out.contains("import type { AuthSession } from '@/lib/auth/types';"));
        assert!(out.contains("import type { ChatMessage } from '@/lib/types';"));
        assert!(out.contains("({ session, dataStream, chatId }: FactoryProps)"));
        assert!(out.contains("  session: AuthSession;\n  dataStream: UIMessageStreamWriter<ChatMessage>;"));
        assert!(out.contains("return { error: 'Unauthorized: login required' };"));
        assert!(!out.contains("data-status"));
    }

    #[test]
    fn test_factory_streaming_implies_auth() {
        let out = render_tool("analyze-dataset", ToolKind::FactoryStreaming);
        assert!(out.contains("export const analyzeDataset = ({ session, dataStream, chatId }"));
        assert!(out.contains("// Auth check"));
        assert!(out.contains("type: 'data-status',"));
        let auth = out.find("// Auth check").unwrap();
        let stream = out.find("// Optional: Emit UI progress updates").unwrap();
        assert!(auth < stream);
        assert!(!out.contains("{{"));
    }

    #[test]
    fn test_output_and_import_paths() {
        let req = ToolRequest::new("get-weather", ToolKind::Simple);
        assert_eq!(req.output_path(), PathBuf::from("lib/ai/tools/get-weather.ts"));
        assert_eq!(req.import_path(), "@/lib/ai/tools/get-weather");

        let req = req.with_output_dir("./src/tools/").with_extension("tsx");
        assert_eq!(req.output_path(), PathBuf::from("./src/tools/get-weather.tsx"));
        assert_eq!(req.import_path(), "@/src/tools/get-weather");
    }

    #[test]
    fn test_create_tool_writes_file() {
        let dir = TempDir::new().unwrap();
        let req = ToolRequest::new("get-weather", ToolKind::Simple)
            .with_output_dir(dir.path().join("lib/ai/tools"));

        let path = create_tool(&req, &mut ReaderPrompt::new(Cursor::new(""), Vec::new())).unwrap();
        assert_eq!(path, dir.path().join("lib/ai/tools/get-weather.ts"));
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("export const getWeather = tool({"));
    }

    #[test]
    fn test_create_tool_rejects_invalid_name_without_writing() {
        let dir = TempDir::new().unwrap();
        let req = ToolRequest::new("Get_Weather", ToolKind::Simple).with_output_dir(dir.path());
        let err = create_tool(&req, &mut ReaderPrompt::new(Cursor::new(""), Vec::new())).unwrap_err();
        assert!(err.to_string().contains("must be kebab-case"));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_existing_file_declined() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("get-weather.ts");
        fs::write(&path, "original").unwrap();
        let req = ToolRequest::new("get-weather", ToolKind::Simple).with_output_dir(dir.path());

        let mut out = Vec::new();
        let err = create_tool(&req, &mut ReaderPrompt::new(Cursor::new("n\n"), &mut out)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ScaffoldError>(),
            Some(ScaffoldError::OverwriteDeclined)
        ));
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
        assert!(String::from_utf8(out).unwrap().contains("Overwrite? (y/N)"));
    }

    #[test]
    fn test_existing_file_confirmed_or_forced() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("get-weather.ts");
        fs::write(&path, "original").unwrap();
        let req = ToolRequest::new("get-weather", ToolKind::Factory).with_output_dir(dir.path());

        create_tool(&req, &mut ReaderPrompt::new(Cursor::new("y\n"), Vec::new())).unwrap();
        assert!(fs::read_to_string(&path).unwrap().contains("FactoryProps"));

        fs::write(&path, "original").unwrap();
        let forced = req.with_force(true);
        let mut out = Vec::new();
        create_tool(&forced, &mut ReaderPrompt::new(Cursor::new(""), &mut out)).unwrap();
        assert!(out.is_empty(), "forced overwrite must not prompt");
        assert!(fs::read_to_string(&path).unwrap().contains("FactoryProps"));
    }

    #[test]
    fn test_next_steps_simple() {
        let steps = next_steps(&ToolRequest::new("get-weather", ToolKind::Simple));
        assert!(steps.contains("1. Edit lib/ai/tools/get-weather.ts and implement the TODO items"));
        assert!(steps.contains("import { getWeather } from '@/lib/ai/tools/get-weather';"));
        assert!(steps.contains("   - Add to tools: getWeather,\n"));
        assert!(steps.contains("   - Add to ACTIVE_TOOLS: 'getWeather',"));
    }

    #[test]
    fn test_next_steps_factory_variants() {
        let steps = next_steps(&ToolRequest::new("search-data", ToolKind::FactoryAuth));
        assert!(steps.contains("Add to tools: searchData: searchData({ session, dataStream }),"));

        let steps = next_steps(&ToolRequest::new("search-data", ToolKind::Factory));
        assert!(steps.contains("Add to tools: searchData: searchData({}),"));
    }
}
