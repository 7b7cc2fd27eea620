//! Label handler implementations

use tracing::info;

use crate::error::ToolError;
use crate::params::CreateLabelParams;
use crate::provider::ClientProvider;
use crate::records::LabelRecord;
use crate::todoist::NewLabel;
use crate::types::LabelList;

use super::first_page;

pub async fn create_label(
    provider: &ClientProvider,
    params: CreateLabelParams,
) -> Result<LabelRecord, ToolError> {
    let api = provider.get_client().await?;
    info!(name = %params.name, "Creating label");

    let label = api
        .add_label(&NewLabel {
            name: params.name,
            color: params.color,
            is_favorite: params.is_favorite,
        })
        .await?;

    Ok(LabelRecord::from(&label))
}

pub async fn get_labels(provider: &ClientProvider) -> Result<LabelList, ToolError> {
    let api = provider.get_client().await?;
    info!("Fetching labels");

    let labels: Vec<LabelRecord> = first_page("labels", api.get_labels().await?);
    info!("Retrieved {} labels", labels.len());
    Ok(labels.into())
}
