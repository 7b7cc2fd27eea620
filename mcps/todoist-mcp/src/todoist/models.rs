//! Todoist API wire types
//!
//! Response types accept both the v1 field names (`checked`, `child_order`,
//! `added_at`, ...) and the older REST v2 names, so the same structs decode
//! either API generation. Request types skip unset fields when serialized.

use serde::{Deserialize, Serialize};

const APP_URL: &str = "https://app.todoist.com/app";

fn default_priority() -> u8 {
    1
}

// ============================================================================
// Responses
// ============================================================================

/// One page of a cursor-paginated list endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Page<T> {
    pub results: Vec<T>,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

impl<T> Page<T> {
    pub fn new(results: Vec<T>) -> Self {
        Self {
            results,
            next_cursor: None,
        }
    }

    pub fn has_more(&self) -> bool {
        self.next_cursor.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Task {
    pub id: String,
    pub content: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "checked")]
    pub is_completed: bool,
    #[serde(default = "default_priority")]
    pub priority: u8,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub section_id: Option<String>,
    #[serde(default)]
    pub parent_id: Option<String>,
    #[serde(default, alias = "child_order")]
    pub order: i64,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub due: Option<Due>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default, alias = "added_at")]
    pub created_at: Option<String>,
    #[serde(default, alias = "added_by_uid")]
    pub creator_id: Option<String>,
    #[serde(default, alias = "responsible_uid")]
    pub assignee_id: Option<String>,
    #[serde(default, alias = "assigned_by_uid")]
    pub assigner_id: Option<String>,
}

impl Task {
    /// Web URL of the task; v1 responses no longer carry one
    pub fn url(&self) -> String {
        self.url
            .clone()
            .unwrap_or_else(|| app_url("task", &self.id, &self.content))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Due {
    pub date: String,
    #[serde(default)]
    pub datetime: Option<String>,
    #[serde(default)]
    pub string: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default)]
    pub lang: Option<String>,
}

impl Due {
    /// Exact due time, if the due date has one
    ///
    /// v1 folds the time into `date` (`2024-05-01T09:00:00`), v2 sent it
    /// separately as `datetime`.
    pub fn datetime(&self) -> Option<String> {
        self.datetime
            .clone()
            .or_else(|| self.date.contains('T').then(|| self.date.clone()))
    }

    /// Calendar date part only
    pub fn day(&self) -> &str {
        self.date.split('T').next().unwrap_or(&self.date)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    #[serde(default, alias = "child_order")]
    pub order: i64,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default, alias = "shared")]
    pub is_shared: bool,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default, alias = "inbox_project")]
    pub is_inbox_project: bool,
    #[serde(default)]
    pub view_style: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub parent_id: Option<String>,
}

impl Project {
    pub fn url(&self) -> String {
        self.url
            .clone()
            .unwrap_or_else(|| app_url("project", &self.id, &self.name))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Label {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default, alias = "item_order")]
    pub order: i64,
    #[serde(default)]
    pub is_favorite: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Comment {
    pub id: String,
    #[serde(default, alias = "item_id")]
    pub task_id: Option<String>,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub posted_at: Option<String>,
    pub content: String,
    #[serde(default, alias = "file_attachment")]
    pub attachment: Option<Attachment>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Attachment {
    #[serde(default)]
    pub resource_type: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub file_type: Option<String>,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub file_size: Option<u64>,
}

// ============================================================================
// Requests
// ============================================================================

/// Body of `POST /tasks`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewTask {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_datetime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
}

/// Body of `POST /tasks/{id}`; only the fields that are set get changed
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_datetime: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_lang: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
}

impl TaskUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Body of `POST /projects`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewProject {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,
}

/// Body of `POST /labels`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NewLabel {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,
}

// ============================================================================
// Queries
// ============================================================================

/// Structural filters for `GET /tasks`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskQuery {
    pub project_id: Option<String>,
    pub section_id: Option<String>,
    pub label: Option<String>,
    pub ids: Option<Vec<String>>,
}

impl TaskQuery {
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(ref project_id) = self.project_id {
            pairs.push(("project_id", project_id.clone()));
        }
        if let Some(ref section_id) = self.section_id {
            pairs.push(("section_id", section_id.clone()));
        }
        if let Some(ref label) = self.label {
            pairs.push(("label", label.clone()));
        }
        if let Some(ref ids) = self.ids {
            pairs.push(("ids", ids.join(",")));
        }
        pairs
    }
}

/// Filter-language query for `GET /tasks/filter`
#[derive(Debug, Clone, PartialEq)]
pub struct FilterQuery {
    pub query: String,
    pub lang: Option<String>,
}

impl FilterQuery {
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![("query", self.query.clone())];
        if let Some(ref lang) = self.lang {
            pairs.push(("lang", lang.clone()));
        }
        pairs
    }
}

/// Owner whose comments are requested
#[derive(Debug, Clone, PartialEq)]
pub enum CommentLocator {
    Task(String),
    Project(String),
}

impl CommentLocator {
    pub fn to_pair(&self) -> (&'static str, String) {
        match self {
            CommentLocator::Task(id) => ("task_id", id.clone()),
            CommentLocator::Project(id) => ("project_id", id.clone()),
        }
    }
}

// ============================================================================
// App URLs
// ============================================================================

fn app_url(kind: &str, id: &str, title: &str) -> String {
    let slug = slugify(title);
    if slug.is_empty() {
        format!("{}/{}/{}", APP_URL, kind, id)
    } else {
        format!("{}/{}/{}-{}", APP_URL, kind, slug, id)
    }
}

fn slugify(text: &str) -> String {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
