//! Project handler implementations

use tracing::info;

use crate::error::ToolError;
use crate::params::{
    CreateProjectParams, ProjectIdParams, PROJECT_DESCRIPTION_MAX, PROJECT_NAME_MAX,
};
use crate::provider::ClientProvider;
use crate::records::ProjectRecord;
use crate::todoist::NewProject;
use crate::types::ProjectList;

use super::first_page;

fn validate_project(params: &CreateProjectParams) -> Result<(), ToolError> {
    let name_len = params.name.chars().count();
    if name_len == 0 || name_len > PROJECT_NAME_MAX {
        return Err(ToolError::InvalidParams(format!(
            "name must be between 1 and {} characters",
            PROJECT_NAME_MAX
        )));
    }

    if let Some(ref description) = params.description {
        if description.chars().count() > PROJECT_DESCRIPTION_MAX {
            return Err(ToolError::InvalidParams(format!(
                "description must be at most {} characters",
                PROJECT_DESCRIPTION_MAX
            )));
        }
    }

    Ok(())
}

/// Create a project; the name and description lengths are checked first
pub async fn create_project(
    provider: &ClientProvider,
    params: CreateProjectParams,
) -> Result<ProjectRecord, ToolError> {
    validate_project(&params)?;

    let api = provider.get_client().await?;
    info!(name = %params.name, "Creating project");

    let project = api
        .add_project(&NewProject {
            name: params.name,
            description: params.description,
            parent_id: params.parent_id,
            color: params.color,
            is_favorite: params.is_favorite,
        })
        .await?;

    Ok(ProjectRecord::from(&project))
}

pub async fn get_projects(provider: &ClientProvider) -> Result<ProjectList, ToolError> {
    let api = provider.get_client().await?;
    info!("Fetching projects");

    let projects: Vec<ProjectRecord> = first_page("projects", api.get_projects().await?);
    info!("Retrieved {} projects", projects.len());
    Ok(projects.into())
}

pub async fn get_project(
    provider: &ClientProvider,
    params: ProjectIdParams,
) -> Result<ProjectRecord, ToolError> {
    let api = provider.get_client().await?;
    info!(project_id = %params.project_id, "Fetching project");

    let project = api.get_project(&params.project_id).await?;
    Ok(ProjectRecord::from(&project))
}
