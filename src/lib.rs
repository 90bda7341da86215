//! scaffolder - Generate boilerplate for the chat app
//!
//! Two generators: a single-file AI SDK tool from one of four fixed templates,
//! and a multi-file spec-driven workflow rendered from placeholder templates
//! into the project tree, including the next numbered migration.

pub mod cli;
pub mod config;
pub mod error;
pub mod materialize;
pub mod migration;
pub mod naming;
pub mod project;
pub mod prompt;
pub mod scaffold;
pub mod slug;
pub mod template;
