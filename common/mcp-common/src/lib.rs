//! MCP Common - shared plumbing for the MCP servers in this workspace
//!
//! - **Initialization**: [`init_tracing`] and [`serve_stdio`] for server startup
//! - **Results**: [`json_success`] and [`error_envelope`] for tool responses
//! - **Errors**: helpers for turning failures into rmcp errors
//! - **Embeddable**: [`EmbeddableMcp`] for calling tools in-process by name
//!
//! # Example
//!
//! ```rust,ignore
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     mcp_common::init_tracing("my_mcp")?;
//!     mcp_common::serve_stdio(MyServer::new()).await
//! }
//! ```

pub mod embeddable;
pub mod error;
pub mod init;
pub mod result;

pub use embeddable::{EmbeddableError, EmbeddableMcp, EmbeddableResult};
pub use error::{IntoMcpError, ResultExt};
pub use init::{init_tracing, serve_stdio};
pub use result::{error_envelope, json_success, result_text, ErrorEnvelope};

// Re-export rmcp types that are commonly needed
pub use rmcp::{
    model::{CallToolResult, Tool},
    ErrorData as McpError,
};

// Re-export async_trait for implementing EmbeddableMcp
pub use async_trait::async_trait;
