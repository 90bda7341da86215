pub mod create_tool;
pub mod create_workflow;
pub mod templates;
