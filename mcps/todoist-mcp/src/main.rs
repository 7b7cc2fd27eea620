//! Todoist MCP Server
//!
//! Todoist tasks, projects, labels and comments as MCP tools over stdio.
//!
//! # Configuration
//! Set `TODOIST_TOKEN` (a `.env` file is honoured). Optional settings live in
//! `~/.todoist-mcp/config.toml`; `TODOIST_API_URL` overrides the API base URL.

use std::sync::Arc;

use todoist_mcp::{ClientProvider, Config, TodoistMcpServer};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    mcp_common::init_tracing("todoist_mcp")?;

    tracing::info!("Starting Todoist MCP Server");

    let config = Config::load()?;
    tracing::info!("Todoist API URL: {}", config.todoist.api_url);

    let provider = ClientProvider::from_env(config.todoist);
    if let Err(e) = provider.get_client().await {
        tracing::error!(error = %e, "Failed to initialize Todoist client");
        return Err(e.into());
    }

    let server = TodoistMcpServer::new(Arc::new(provider));
    mcp_common::serve_stdio(server).await
}
