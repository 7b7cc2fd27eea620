//! Label-related parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for creating a personal label
#[derive(Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct CreateLabelParams {
    #[schemars(description = "Name of the new label")]
    pub name: String,

    #[schemars(description = "Color of the label (e.g. 'red', 'berry_red')")]
    pub color: Option<String>,

    #[schemars(description = "Whether the label should be marked as a favorite")]
    pub is_favorite: Option<bool>,
}
