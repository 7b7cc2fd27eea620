//! Todoist MCP Library
//!
//! MCP-compatible tools for Todoist task management over the Todoist REST API.
//!
//! # Usage as Library
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use todoist_mcp::{ClientProvider, Config, TodoistMcpServer};
//!
//! let config = Config::load()?;
//! let provider = ClientProvider::from_env(config.todoist);
//! let server = TodoistMcpServer::new(Arc::new(provider));
//! // Serve via stdio, or call tools in-process through EmbeddableMcp
//! ```
//!
//! # Features
//! - Tasks: list, filter, create, update, complete, reopen, delete, get
//! - Projects: create, list, get
//! - Labels: create, list
//! - Comments: list by task or project
//!
//! # Requirements
//! - `TODOIST_TOKEN` set to a Todoist API token

pub mod config;
pub mod error;
pub mod handlers;
pub mod params;
pub mod provider;
pub mod records;
pub mod server;
pub mod todoist;
pub mod types;

// Re-export main server type
pub use server::TodoistMcpServer;

pub use config::Config;
pub use error::ToolError;
pub use provider::ClientProvider;

// Re-export parameter types for direct API usage
pub use params::*;
