//! Task-related parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for listing tasks
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct GetTasksParams {
    #[schemars(description = "Filter tasks by project ID")]
    pub project_id: Option<String>,

    #[schemars(description = "Filter tasks by section ID")]
    pub section_id: Option<String>,

    #[schemars(description = "Filter tasks by label name")]
    pub label: Option<String>,

    #[schemars(
        description = "Todoist filter expression (e.g. 'today', 'overdue', '@work', 'p1'). When set, project/section/label/ids are ignored. See https://www.todoist.com/help/articles/introduction-to-filters-V98wIH"
    )]
    pub filter_expr: Option<String>,

    #[schemars(description = "Language of the filter expression (default: 'en')")]
    pub lang: Option<String>,

    #[schemars(description = "Specific task IDs to retrieve")]
    pub ids: Option<Vec<String>>,
}

/// Parameters for creating a task
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct CreateTaskParams {
    #[schemars(description = "Task content/title")]
    pub content: String,

    #[schemars(description = "Task description")]
    pub description: Option<String>,

    #[schemars(description = "Project ID to add the task to")]
    pub project_id: Option<String>,

    #[schemars(description = "Section ID within the project")]
    pub section_id: Option<String>,

    #[schemars(description = "Parent task ID, for creating a subtask")]
    pub parent_id: Option<String>,

    #[schemars(description = "Task order within the project or parent")]
    pub order: Option<i64>,

    #[schemars(description = "Label names to assign")]
    pub labels: Option<Vec<String>>,

    #[schemars(description = "Priority from 1 (normal) to 4 (urgent)")]
    pub priority: Option<u8>,

    #[schemars(description = "Human-readable due date (e.g. 'tomorrow', 'next Monday')")]
    pub due_string: Option<String>,

    #[schemars(description = "Due date in YYYY-MM-DD format")]
    pub due_date: Option<String>,

    #[schemars(description = "Due date and time in RFC3339 format")]
    pub due_datetime: Option<String>,

    #[schemars(description = "Language used to parse due_string")]
    pub due_lang: Option<String>,

    #[schemars(description = "User ID to assign the task to")]
    pub assignee_id: Option<String>,
}

/// Parameters for updating a task; only the fields given are changed
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct UpdateTaskParams {
    #[schemars(description = "ID of the task to update")]
    pub task_id: String,

    #[schemars(description = "New task content/title")]
    pub content: Option<String>,

    #[schemars(description = "New task description")]
    pub description: Option<String>,

    #[schemars(description = "New list of label names (replaces the current labels)")]
    pub labels: Option<Vec<String>>,

    #[schemars(description = "New priority from 1 (normal) to 4 (urgent)")]
    pub priority: Option<u8>,

    #[schemars(description = "New human-readable due date")]
    pub due_string: Option<String>,

    #[schemars(description = "New due date in YYYY-MM-DD format")]
    pub due_date: Option<String>,

    #[schemars(description = "New due date and time in RFC3339 format")]
    pub due_datetime: Option<String>,

    #[schemars(description = "Language used to parse due_string")]
    pub due_lang: Option<String>,

    #[schemars(description = "New assignee user ID")]
    pub assignee_id: Option<String>,
}

/// Parameters for tools addressing a single task
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct TaskIdParams {
    #[schemars(description = "ID of the task")]
    pub task_id: String,
}
