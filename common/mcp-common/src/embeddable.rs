//! In-process tool execution
//!
//! [`EmbeddableMcp`] lets a host call a server's tools by name with a JSON
//! argument object, without a transport in between. Tests use it to drive a
//! server exactly the way the MCP host would.
//!
//! ```rust,ignore
//! let server = TodoistMcpServer::new(provider);
//! let result = server.call_tool("get_task", json!({"task_id": "123"})).await?;
//! ```

use async_trait::async_trait;
use rmcp::model::{CallToolResult, Tool};
use serde_json::Value;

/// Error type for embeddable MCP operations
#[derive(Debug, thiserror::Error)]
pub enum EmbeddableError {
    #[error("tool not found: {0}")]
    ToolNotFound(String),

    /// Arguments did not match the tool's parameter type
    #[error("invalid parameters: {0}")]
    InvalidParams(#[from] serde_json::Error),

    #[error("mcp error: {0}")]
    McpError(String),
}

impl From<rmcp::ErrorData> for EmbeddableError {
    fn from(err: rmcp::ErrorData) -> Self {
        EmbeddableError::McpError(err.message.to_string())
    }
}

pub type EmbeddableResult<T> = Result<T, EmbeddableError>;

/// An MCP server whose tools can be listed and called directly
///
/// Servers built on rmcp's `#[tool_router]` implement `list_tools` by
/// delegating to their router and `call_tool` by decoding `params` into the
/// tool's parameter struct and invoking the tool method.
#[async_trait]
pub trait EmbeddableMcp: Send + Sync {
    /// Name used for the server in MCP configuration files
    fn server_name(&self) -> &str;

    fn list_tools(&self) -> Vec<Tool>;

    /// Execute the tool called `name` with a JSON object of arguments
    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult>;

    fn server_description(&self) -> Option<&str> {
        None
    }

    fn server_version(&self) -> Option<&str> {
        None
    }
}
