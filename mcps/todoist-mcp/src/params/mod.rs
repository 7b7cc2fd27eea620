//! Parameter types for Todoist MCP tools
//!
//! Field names are the argument names the host passes to each tool.

mod comment;
mod label;
mod project;
mod task;

pub use comment::*;
pub use label::*;
pub use project::*;
pub use task::*;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Empty parameters for tools that take no arguments
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct EmptyParams {}
