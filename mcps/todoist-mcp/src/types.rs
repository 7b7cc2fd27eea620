//! Response payloads wrapping normalized records

use serde::Serialize;

use crate::records::{CommentRecord, LabelRecord, ProjectRecord, TaskRecord};

/// Response for `get_tasks`
#[derive(Debug, Clone, Serialize)]
pub struct TaskList {
    pub tasks: Vec<TaskRecord>,
    pub count: usize,
}

/// Response for `get_projects`
#[derive(Debug, Clone, Serialize)]
pub struct ProjectList {
    pub projects: Vec<ProjectRecord>,
    pub count: usize,
}

/// Response for `get_labels`
#[derive(Debug, Clone, Serialize)]
pub struct LabelList {
    pub labels: Vec<LabelRecord>,
    pub count: usize,
}

/// Response for `get_comments`
#[derive(Debug, Clone, Serialize)]
pub struct CommentList {
    pub comments: Vec<CommentRecord>,
    pub count: usize,
}

impl From<Vec<TaskRecord>> for TaskList {
    fn from(tasks: Vec<TaskRecord>) -> Self {
        Self {
            count: tasks.len(),
            tasks,
        }
    }
}

impl From<Vec<ProjectRecord>> for ProjectList {
    fn from(projects: Vec<ProjectRecord>) -> Self {
        Self {
            count: projects.len(),
            projects,
        }
    }
}

impl From<Vec<LabelRecord>> for LabelList {
    fn from(labels: Vec<LabelRecord>) -> Self {
        Self {
            count: labels.len(),
            labels,
        }
    }
}

impl From<Vec<CommentRecord>> for CommentList {
    fn from(comments: Vec<CommentRecord>) -> Self {
        Self {
            count: comments.len(),
            comments,
        }
    }
}

/// Response for state changes that return no entity (complete, reopen, delete)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionResponse {
    pub success: bool,
    pub message: String,
}

impl ActionResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// Response for `update_task`, carrying the task as re-read after the change
#[derive(Debug, Clone, Serialize)]
pub struct TaskUpdateResponse {
    pub success: bool,
    pub task: TaskRecord,
}
