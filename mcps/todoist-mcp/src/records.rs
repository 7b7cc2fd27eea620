//! Normalized entity records returned by the tools
//!
//! Each record has a fixed key set: every key is serialized on every call,
//! with `null` for missing values, so consumers never have to probe for
//! optional keys. Records are rebuilt from the remote object on each call.

use serde::Serialize;

use crate::todoist::{Attachment, Comment, Due, Label, Project, Task};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskRecord {
    pub id: String,
    pub content: String,
    pub description: Option<String>,
    pub is_completed: bool,
    pub priority: u8,
    pub project_id: Option<String>,
    pub section_id: Option<String>,
    pub parent_id: Option<String>,
    pub order: i64,
    pub labels: Vec<String>,
    pub due: Option<DueRecord>,
    pub url: String,
    pub created_at: Option<String>,
    pub creator_id: Option<String>,
    pub assignee_id: Option<String>,
    pub assigner_id: Option<String>,
}

impl From<&Task> for TaskRecord {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id.clone(),
            content: task.content.clone(),
            description: task.description.clone(),
            is_completed: task.is_completed,
            priority: task.priority,
            project_id: task.project_id.clone(),
            section_id: task.section_id.clone(),
            parent_id: task.parent_id.clone(),
            order: task.order,
            labels: task.labels.clone(),
            due: task.due.as_ref().map(DueRecord::from),
            url: task.url(),
            created_at: task.created_at.clone(),
            creator_id: task.creator_id.clone(),
            assignee_id: task.assignee_id.clone(),
            assigner_id: task.assigner_id.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DueRecord {
    pub date: String,
    pub datetime: Option<String>,
    pub string: Option<String>,
    pub timezone: Option<String>,
    pub is_recurring: bool,
    pub lang: Option<String>,
}

impl From<&Due> for DueRecord {
    fn from(due: &Due) -> Self {
        Self {
            date: due.day().to_string(),
            datetime: due.datetime(),
            string: due.string.clone(),
            timezone: due.timezone.clone(),
            is_recurring: due.is_recurring,
            lang: due.lang.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectRecord {
    pub id: String,
    pub name: String,
    pub order: i64,
    pub color: Option<String>,
    pub is_shared: bool,
    pub is_favorite: bool,
    pub is_inbox_project: bool,
    pub view_style: Option<String>,
    pub url: String,
    pub parent_id: Option<String>,
}

impl From<&Project> for ProjectRecord {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id.clone(),
            name: project.name.clone(),
            order: project.order,
            color: project.color.clone(),
            is_shared: project.is_shared,
            is_favorite: project.is_favorite,
            is_inbox_project: project.is_inbox_project,
            view_style: project.view_style.clone(),
            url: project.url(),
            parent_id: project.parent_id.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelRecord {
    pub id: String,
    pub name: String,
    pub color: Option<String>,
    pub order: i64,
    pub is_favorite: bool,
}

impl From<&Label> for LabelRecord {
    fn from(label: &Label) -> Self {
        Self {
            id: label.id.clone(),
            name: label.name.clone(),
            color: label.color.clone(),
            order: label.order,
            is_favorite: label.is_favorite,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentRecord {
    pub id: String,
    pub task_id: Option<String>,
    pub project_id: Option<String>,
    pub posted_at: Option<String>,
    pub content: String,
    pub attachment: Option<AttachmentRecord>,
}

impl From<&Comment> for CommentRecord {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id.clone(),
            task_id: comment.task_id.clone(),
            project_id: comment.project_id.clone(),
            posted_at: comment.posted_at.clone(),
            content: comment.content.clone(),
            attachment: comment.attachment.as_ref().map(AttachmentRecord::from),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttachmentRecord {
    pub file_name: Option<String>,
    pub file_type: Option<String>,
    pub file_url: Option<String>,
    pub file_size: Option<u64>,
    pub resource_type: Option<String>,
}

impl From<&Attachment> for AttachmentRecord {
    fn from(attachment: &Attachment) -> Self {
        Self {
            file_name: attachment.file_name.clone(),
            file_type: attachment.file_type.clone(),
            file_url: attachment.file_url.clone(),
            file_size: attachment.file_size,
            resource_type: attachment.resource_type.clone(),
        }
    }
}
