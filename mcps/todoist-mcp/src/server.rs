//! MCP Server implementation
//!
//! This module defines the MCP server that exposes Todoist tasks, projects,
//! labels and comments as tools. Handler implementations are in the
//! handlers/ module; every tool shares one lazily built API client.

use std::sync::Arc;

use mcp_common::{async_trait, EmbeddableError, EmbeddableMcp, EmbeddableResult, McpError};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, ServerCapabilities, ServerInfo, Tool},
    tool, tool_handler, tool_router,
};
use serde_json::Value;

use crate::handlers::{self, respond};
use crate::params::*;
use crate::provider::ClientProvider;

const DESCRIPTION: &str = "Todoist MCP Server - manage Todoist tasks, projects, labels and \
     comments. Requires the TODOIST_TOKEN environment variable.";

/// The main Todoist MCP Server
#[derive(Clone)]
pub struct TodoistMcpServer {
    provider: Arc<ClientProvider>,
    tool_router: ToolRouter<Self>,
}

// ============================================================================
// Task Tools
// ============================================================================

#[tool_router]
impl TodoistMcpServer {
    pub fn new(provider: Arc<ClientProvider>) -> Self {
        Self {
            provider,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Get active Todoist tasks, filtered by project, section, label or IDs, or by a Todoist filter expression"
    )]
    async fn get_tasks(
        &self,
        Parameters(params): Parameters<GetTasksParams>,
    ) -> Result<CallToolResult, McpError> {
        respond("get_tasks", handlers::get_tasks(&self.provider, params).await)
    }

    #[tool(description = "Create a new Todoist task")]
    async fn create_task(
        &self,
        Parameters(params): Parameters<CreateTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(
            "create_task",
            handlers::create_task(&self.provider, params).await,
        )
    }

    #[tool(description = "Update an existing Todoist task. Only the fields provided are changed")]
    async fn update_task(
        &self,
        Parameters(params): Parameters<UpdateTaskParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(
            "update_task",
            handlers::update_task(&self.provider, params).await,
        )
    }

    #[tool(description = "Mark a Todoist task as completed")]
    async fn complete_task(
        &self,
        Parameters(params): Parameters<TaskIdParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(
            "complete_task",
            handlers::complete_task(&self.provider, params).await,
        )
    }

    #[tool(description = "Reopen a completed Todoist task")]
    async fn reopen_task(
        &self,
        Parameters(params): Parameters<TaskIdParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(
            "reopen_task",
            handlers::reopen_task(&self.provider, params).await,
        )
    }

    #[tool(description = "Permanently delete a Todoist task")]
    async fn delete_task(
        &self,
        Parameters(params): Parameters<TaskIdParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(
            "delete_task",
            handlers::delete_task(&self.provider, params).await,
        )
    }

    #[tool(description = "Get a single Todoist task by ID")]
    async fn get_task(
        &self,
        Parameters(params): Parameters<TaskIdParams>,
    ) -> Result<CallToolResult, McpError> {
        respond("get_task", handlers::get_task(&self.provider, params).await)
    }

    // ========================================================================
    // Project Tools
    // ========================================================================

    #[tool(description = "Create a new Todoist project")]
    async fn create_project(
        &self,
        Parameters(params): Parameters<CreateProjectParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(
            "create_project",
            handlers::create_project(&self.provider, params).await,
        )
    }

    #[tool(description = "List all Todoist projects")]
    async fn get_projects(&self) -> Result<CallToolResult, McpError> {
        respond("get_projects", handlers::get_projects(&self.provider).await)
    }

    #[tool(description = "Get a single Todoist project by ID")]
    async fn get_project(
        &self,
        Parameters(params): Parameters<ProjectIdParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(
            "get_project",
            handlers::get_project(&self.provider, params).await,
        )
    }

    // ========================================================================
    // Label and Comment Tools
    // ========================================================================

    #[tool(description = "Create a new personal Todoist label")]
    async fn create_label(
        &self,
        Parameters(params): Parameters<CreateLabelParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(
            "create_label",
            handlers::create_label(&self.provider, params).await,
        )
    }

    #[tool(description = "List all personal Todoist labels")]
    async fn get_labels(&self) -> Result<CallToolResult, McpError> {
        respond("get_labels", handlers::get_labels(&self.provider).await)
    }

    #[tool(
        description = "Get comments on a Todoist task or project. Provide task_id or project_id; task_id wins if both are given"
    )]
    async fn get_comments(
        &self,
        Parameters(params): Parameters<GetCommentsParams>,
    ) -> Result<CallToolResult, McpError> {
        respond(
            "get_comments",
            handlers::get_comments(&self.provider, params).await,
        )
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

#[tool_handler]
impl rmcp::ServerHandler for TodoistMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(DESCRIPTION.into()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

// ============================================================================
// EmbeddableMcp Implementation
// ============================================================================

#[async_trait]
impl EmbeddableMcp for TodoistMcpServer {
    fn server_name(&self) -> &str {
        "todoist"
    }

    fn server_description(&self) -> Option<&str> {
        Some(DESCRIPTION)
    }

    fn list_tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult> {
        match name {
            "get_tasks" => {
                let params: GetTasksParams = serde_json::from_value(params)?;
                self.get_tasks(Parameters(params)).await.map_err(Into::into)
            }
            "create_task" => {
                let params: CreateTaskParams = serde_json::from_value(params)?;
                self.create_task(Parameters(params)).await.map_err(Into::into)
            }
            "update_task" => {
                let params: UpdateTaskParams = serde_json::from_value(params)?;
                self.update_task(Parameters(params)).await.map_err(Into::into)
            }
            "complete_task" => {
                let params: TaskIdParams = serde_json::from_value(params)?;
                self.complete_task(Parameters(params)).await.map_err(Into::into)
            }
            "reopen_task" => {
                let params: TaskIdParams = serde_json::from_value(params)?;
                self.reopen_task(Parameters(params)).await.map_err(Into::into)
            }
            "delete_task" => {
                let params: TaskIdParams = serde_json::from_value(params)?;
                self.delete_task(Parameters(params)).await.map_err(Into::into)
            }
            "get_task" => {
                let params: TaskIdParams = serde_json::from_value(params)?;
                self.get_task(Parameters(params)).await.map_err(Into::into)
            }

            "create_project" => {
                let params: CreateProjectParams = serde_json::from_value(params)?;
                self.create_project(Parameters(params))
                    .await
                    .map_err(Into::into)
            }
            "get_projects" => self.get_projects().await.map_err(Into::into),
            "get_project" => {
                let params: ProjectIdParams = serde_json::from_value(params)?;
                self.get_project(Parameters(params)).await.map_err(Into::into)
            }

            "create_label" => {
                let params: CreateLabelParams = serde_json::from_value(params)?;
                self.create_label(Parameters(params)).await.map_err(Into::into)
            }
            "get_labels" => self.get_labels().await.map_err(Into::into),

            "get_comments" => {
                let params: GetCommentsParams = serde_json::from_value(params)?;
                self.get_comments(Parameters(params)).await.map_err(Into::into)
            }

            _ => Err(EmbeddableError::ToolNotFound(name.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todoist::{MockTodoistApi, Page, TodoistApi};
    use serde_json::json;

    fn server(mock: MockTodoistApi) -> TodoistMcpServer {
        TodoistMcpServer::new(Arc::new(ClientProvider::with_client(Arc::new(mock))))
    }

    fn unconfigured() -> TodoistMcpServer {
        TodoistMcpServer::new(Arc::new(ClientProvider::new(
            || None,
            |_| Ok(Arc::new(MockTodoistApi::new()) as Arc<dyn TodoistApi>),
        )))
    }

    fn text_json(result: &CallToolResult) -> Value {
        serde_json::from_str(mcp_common::result_text(result).unwrap()).unwrap()
    }

    #[test]
    fn test_embeddable_server_name() {
        assert_eq!(unconfigured().server_name(), "todoist");
    }

    #[test]
    fn test_embeddable_list_tools() {
        let tools = unconfigured().list_tools();
        assert_eq!(tools.len(), 13);

        let tool_names: Vec<&str> = tools.iter().map(|t| t.name.as_ref()).collect();
        for name in [
            "get_tasks",
            "create_task",
            "update_task",
            "complete_task",
            "reopen_task",
            "delete_task",
            "get_task",
            "create_project",
            "get_projects",
            "get_project",
            "create_label",
            "get_labels",
            "get_comments",
        ] {
            assert!(tool_names.contains(&name), "missing tool {}", name);
        }
    }

    #[tokio::test]
    async fn test_embeddable_delete_task() {
        let mut mock = MockTodoistApi::new();
        mock.expect_delete_task()
            .withf(|id| id == "2995104339")
            .returning(|_| Ok(true));

        let result = server(mock)
            .call_tool("delete_task", json!({"task_id": "2995104339"}))
            .await
            .unwrap();

        assert!(result.is_error.is_none() || !result.is_error.unwrap());
        assert_eq!(
            text_json(&result),
            json!({"success": true, "message": "Task 2995104339 deleted"})
        );
    }

    #[tokio::test]
    async fn test_embeddable_error_is_text_payload() {
        let result = unconfigured()
            .call_tool("get_projects", json!({}))
            .await
            .unwrap();

        assert!(result.is_error.is_none() || !result.is_error.unwrap());
        assert_eq!(
            text_json(&result),
            json!({"error": "TODOIST_TOKEN environment variable is required"})
        );
    }

    #[tokio::test]
    async fn test_embeddable_empty_labels() {
        let mut mock = MockTodoistApi::new();
        mock.expect_get_labels()
            .returning(|| Ok(Page::new(vec![])));

        let result = server(mock)
            .call_tool("get_labels", json!({}))
            .await
            .unwrap();

        assert_eq!(text_json(&result), json!({"labels": [], "count": 0}));
    }

    #[tokio::test]
    async fn test_embeddable_invalid_params() {
        let result = unconfigured()
            .call_tool("get_task", json!({"task": 1}))
            .await;

        assert!(matches!(result, Err(EmbeddableError::InvalidParams(_))));
    }

    #[tokio::test]
    async fn test_embeddable_unknown_tool() {
        let result = unconfigured()
            .call_tool("nonexistent_tool", json!({}))
            .await;

        assert!(matches!(result, Err(EmbeddableError::ToolNotFound(_))));
    }
}
