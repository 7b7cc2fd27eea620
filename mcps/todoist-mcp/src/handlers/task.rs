//! Task handler implementations

use tracing::info;

use crate::error::ToolError;
use crate::params::{CreateTaskParams, GetTasksParams, TaskIdParams, UpdateTaskParams};
use crate::provider::ClientProvider;
use crate::records::TaskRecord;
use crate::todoist::{FilterQuery, NewTask, TaskQuery, TaskUpdate};
use crate::types::{ActionResponse, TaskList, TaskUpdateResponse};

use super::first_page;

/// List active tasks, by filter expression or by structural filters
///
/// A non-empty `filter_expr` wins outright; the structural filters are then
/// not sent at all.
pub async fn get_tasks(
    provider: &ClientProvider,
    params: GetTasksParams,
) -> Result<TaskList, ToolError> {
    let api = provider.get_client().await?;

    info!(
        project_id = ?params.project_id,
        section_id = ?params.section_id,
        label = ?params.label,
        filter = ?params.filter_expr,
        "Fetching tasks"
    );

    let page = match params.filter_expr.filter(|f| !f.is_empty()) {
        Some(query) => {
            api.filter_tasks(&FilterQuery {
                query,
                lang: params.lang,
            })
            .await?
        }
        None => {
            api.get_tasks(&TaskQuery {
                project_id: params.project_id,
                section_id: params.section_id,
                label: params.label,
                ids: params.ids,
            })
            .await?
        }
    };

    let tasks: Vec<TaskRecord> = first_page("tasks", page);
    info!("Retrieved {} tasks", tasks.len());
    Ok(tasks.into())
}

/// Create a task; unset optional fields are passed on as unset
pub async fn create_task(
    provider: &ClientProvider,
    params: CreateTaskParams,
) -> Result<TaskRecord, ToolError> {
    let api = provider.get_client().await?;

    info!(content = %params.content, "Creating task");

    let task = api
        .add_task(&NewTask {
            content: params.content,
            description: params.description,
            project_id: params.project_id,
            section_id: params.section_id,
            parent_id: params.parent_id,
            order: params.order,
            labels: params.labels,
            priority: params.priority,
            due_string: params.due_string,
            due_date: params.due_date,
            due_datetime: params.due_datetime,
            due_lang: params.due_lang,
            assignee_id: params.assignee_id,
        })
        .await?;

    info!(task_id = %task.id, "Task created");
    Ok(TaskRecord::from(&task))
}

/// Change only the supplied fields of a task, then re-read it
pub async fn update_task(
    provider: &ClientProvider,
    params: UpdateTaskParams,
) -> Result<TaskUpdateResponse, ToolError> {
    let api = provider.get_client().await?;

    let update = TaskUpdate {
        content: params.content,
        description: params.description,
        labels: params.labels,
        priority: params.priority,
        due_string: params.due_string,
        due_date: params.due_date,
        due_datetime: params.due_datetime,
        due_lang: params.due_lang,
        assignee_id: params.assignee_id,
    };
    if update.is_empty() {
        return Err(ToolError::NoUpdateFields);
    }

    let task_id = params.task_id;
    info!(task_id = %task_id, ?update, "Updating task");

    if !api.update_task(&task_id, &update).await? {
        return Err(ToolError::OperationFailed("Update failed"));
    }

    // The update call only acknowledges; fetch the task for its new state.
    let task = api.get_task(&task_id).await?;
    info!(task_id = %task_id, "Task updated");

    Ok(TaskUpdateResponse {
        success: true,
        task: TaskRecord::from(&task),
    })
}

pub async fn complete_task(
    provider: &ClientProvider,
    params: TaskIdParams,
) -> Result<ActionResponse, ToolError> {
    let api = provider.get_client().await?;
    info!(task_id = %params.task_id, "Completing task");

    if !api.complete_task(&params.task_id).await? {
        return Err(ToolError::OperationFailed("Failed to complete task"));
    }

    Ok(ActionResponse::ok(format!("Task {} completed", params.task_id)))
}

pub async fn reopen_task(
    provider: &ClientProvider,
    params: TaskIdParams,
) -> Result<ActionResponse, ToolError> {
    let api = provider.get_client().await?;
    info!(task_id = %params.task_id, "Reopening task");

    if !api.uncomplete_task(&params.task_id).await? {
        return Err(ToolError::OperationFailed("Failed to reopen task"));
    }

    Ok(ActionResponse::ok(format!("Task {} reopened", params.task_id)))
}

/// Permanently delete a task
pub async fn delete_task(
    provider: &ClientProvider,
    params: TaskIdParams,
) -> Result<ActionResponse, ToolError> {
    let api = provider.get_client().await?;
    info!(task_id = %params.task_id, "Deleting task");

    if !api.delete_task(&params.task_id).await? {
        return Err(ToolError::OperationFailed("Failed to delete task"));
    }

    Ok(ActionResponse::ok(format!("Task {} deleted", params.task_id)))
}

pub async fn get_task(
    provider: &ClientProvider,
    params: TaskIdParams,
) -> Result<TaskRecord, ToolError> {
    let api = provider.get_client().await?;
    info!(task_id = %params.task_id, "Fetching task");

    let task = api.get_task(&params.task_id).await?;
    Ok(TaskRecord::from(&task))
}
