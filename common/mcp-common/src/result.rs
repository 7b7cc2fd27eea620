//! Result helpers for MCP tool responses
//!
//! Tools in this workspace answer with a single JSON text block: either the
//! payload itself or an `{"error": "..."}` envelope. Both are successful
//! tool results from the protocol's point of view; the envelope is how the
//! host model learns what went wrong.

use rmcp::{
    model::{CallToolResult, Content, RawContent},
    ErrorData as McpError,
};
use serde::{Deserialize, Serialize};

use crate::error::ResultExt;

/// The uniform failure shape returned by tools
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: String,
}

impl ErrorEnvelope {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Create a successful response holding `data` as pretty-printed JSON
///
/// Fails only if `data` cannot be serialized.
pub fn json_success<T: Serialize>(data: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(data).to_mcp_err()?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

/// Create an `{"error": message}` response
pub fn error_envelope(message: impl Into<String>) -> Result<CallToolResult, McpError> {
    json_success(&ErrorEnvelope::new(message))
}

/// First text block of a tool result, if any
pub fn result_text(result: &CallToolResult) -> Option<&str> {
    result.content.iter().find_map(|c| match &c.raw {
        RawContent::Text(t) => Some(t.text.as_str()),
        _ => None,
    })
}
