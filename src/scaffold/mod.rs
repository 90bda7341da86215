pub mod tool;
pub mod workflow;

pub use tool::{create_tool, ToolKind, ToolRequest};
pub use workflow::{create_workflow, WorkflowRequest};
