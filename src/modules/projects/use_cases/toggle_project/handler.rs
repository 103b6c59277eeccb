use std::sync::Arc;

use serde::Serialize;

use crate::shared::application::errors::ApplicationError;
use crate::shared::infrastructure::project_store::ProjectStore;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ToggleProjectResponse {
    pub message: String,
    pub enabled: bool,
}

pub struct ToggleProjectHandler<TStore>
where
    TStore: ProjectStore + ?Sized + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ToggleProjectHandler<TStore>
where
    TStore: ProjectStore + ?Sized + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, project_id: i64) -> Result<ToggleProjectResponse, ApplicationError> {
        let project = self.store.toggle(project_id).await?;
        tracing::info!(
            project_id,
            enabled = project.enabled,
            "project toggled"
        );
        Ok(ToggleProjectResponse {
            message: format!("Project {} {}", project.name, project.status_label()),
            enabled: project.enabled,
        })
    }
}
