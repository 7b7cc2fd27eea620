//! Comment-related parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for listing comments; give exactly one of the two IDs
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct GetCommentsParams {
    #[schemars(description = "ID of the task to get comments for")]
    pub task_id: Option<String>,

    #[schemars(description = "ID of the project to get comments for (used only when task_id is absent)")]
    pub project_id: Option<String>,
}
