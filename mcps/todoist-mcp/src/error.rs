//! Failure type shared by every tool handler
//!
//! Handlers return `Result<_, ToolError>`; [`crate::handlers::respond`]
//! turns the error into the `{"error": ...}` envelope using its `Display`
//! text, so the messages here are part of the tool contract.

use thiserror::Error;

use crate::todoist::TodoistError;

#[derive(Error, Debug)]
pub enum ToolError {
    /// A required environment variable is missing or blank
    #[error("{0} environment variable is required")]
    Configuration(&'static str),

    /// `update_task` was called without any field to change
    #[error("No update parameters provided")]
    NoUpdateFields,

    /// The service reported that a state change did not happen
    #[error("{0}")]
    OperationFailed(&'static str),

    /// `get_comments` was called without a task or project id
    #[error("Either task_id or project_id must be provided")]
    MissingLocator,

    #[error("{0}")]
    InvalidParams(String),

    /// Anything the remote service or the transport reported, verbatim
    #[error(transparent)]
    Remote(#[from] TodoistError),
}
