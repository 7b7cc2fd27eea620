//! Comment handler implementations

use tracing::{info, warn};

use crate::error::ToolError;
use crate::params::GetCommentsParams;
use crate::provider::ClientProvider;
use crate::records::CommentRecord;
use crate::todoist::CommentLocator;
use crate::types::CommentList;

use super::first_page;

/// Pick the comment owner; a task ID takes precedence over a project ID
fn locate(params: GetCommentsParams) -> Result<CommentLocator, ToolError> {
    let task_id = params.task_id.filter(|id| !id.is_empty());
    let project_id = params.project_id.filter(|id| !id.is_empty());

    match (task_id, project_id) {
        (Some(task_id), Some(project_id)) => {
            warn!(%task_id, %project_id, "both task_id and project_id given; using task_id");
            Ok(CommentLocator::Task(task_id))
        }
        (Some(task_id), None) => Ok(CommentLocator::Task(task_id)),
        (None, Some(project_id)) => Ok(CommentLocator::Project(project_id)),
        (None, None) => Err(ToolError::MissingLocator),
    }
}

pub async fn get_comments(
    provider: &ClientProvider,
    params: GetCommentsParams,
) -> Result<CommentList, ToolError> {
    let api = provider.get_client().await?;
    let locator = locate(params)?;

    match &locator {
        CommentLocator::Task(id) => info!(task_id = %id, "Fetching comments for task"),
        CommentLocator::Project(id) => info!(project_id = %id, "Fetching comments for project"),
    }

    let comments: Vec<CommentRecord> = first_page("comments", api.get_comments(&locator).await?);
    info!("Retrieved {} comments", comments.len());
    Ok(comments.into())
}
