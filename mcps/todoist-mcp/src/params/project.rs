//! Project-related parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Longest project name Todoist accepts
pub const PROJECT_NAME_MAX: usize = 120;
/// Longest project description Todoist accepts
pub const PROJECT_DESCRIPTION_MAX: usize = 1024;

/// Parameters for creating a project
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct CreateProjectParams {
    #[schemars(description = "Name of the new project (1-120 characters)", length(min = 1, max = 120))]
    pub name: String,

    #[schemars(description = "Description of the new project (max 1024 characters)", length(max = 1024))]
    pub description: Option<String>,

    #[schemars(description = "ID of the parent project. If not set, the project is created at the root")]
    pub parent_id: Option<String>,

    #[schemars(
        description = "Color of the project icon (e.g. 'olive_green'). See https://developer.todoist.com/api/v1/#tag/Colors"
    )]
    pub color: Option<String>,

    #[schemars(description = "Whether the project should be marked as a favorite")]
    pub is_favorite: Option<bool>,
}

/// Parameters for fetching one project
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ProjectIdParams {
    #[schemars(description = "ID of the project")]
    pub project_id: String,
}
