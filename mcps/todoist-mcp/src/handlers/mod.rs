//! Handler implementations for Todoist MCP tools
//!
//! Organized by domain: task, project, label, comment. Every handler
//! returns `Result<_, ToolError>`; [`respond`] is the single place where
//! that becomes the tool's JSON text.

mod comment;
mod label;
mod project;
mod task;


pub use comment::*;
pub use label::*;
pub use project::*;
pub use task::*;

use mcp_common::{error_envelope, json_success, CallToolResult, McpError};
use serde::Serialize;
use tracing::{debug, error};

use crate::error::ToolError;
use crate::todoist::Page;

/// Render a handler outcome as the tool response
///
/// Payloads are serialized as-is; failures become `{"error": "<message>"}`.
pub fn respond<T: Serialize>(
    tool: &str,
    result: Result<T, ToolError>,
) -> Result<CallToolResult, McpError> {
    match result {
        Ok(payload) => json_success(&payload),
        Err(e) => {
            error!(tool, error = %e, "tool call failed");
            error_envelope(e.to_string())
        }
    }
}

/// Records of the first page of a list endpoint
///
/// Later pages are never requested.
fn first_page<T, R>(kind: &str, page: Page<T>) -> Vec<R>
where
    R: for<'a> From<&'a T>,
{
    if page.has_more() {
        debug!(kind, "more results available; only the first page is returned");
    }
    page.results.iter().map(R::from).collect()
}
