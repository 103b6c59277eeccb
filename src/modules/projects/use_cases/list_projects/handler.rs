use serde::Deserialize;

use crate::modules::projects::core::project::Project;
use crate::modules::projects::core::sorting::{ProjectSortKey, SortOrder, sort_projects};
use crate::shared::application::errors::ApplicationError;
use crate::shared::infrastructure::project_store::ProjectStore;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListProjectsQuery {
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub enabled_only: Option<bool>,
}

/// Filter on `enabled == enabled_only` when given, then sort. An unknown
/// `sort_by` keeps the store order.
pub async fn list_projects(
    store: &dyn ProjectStore,
    query: &ListProjectsQuery,
) -> Result<Vec<Project>, ApplicationError> {
    let mut projects = store.list().await?;

    if let Some(enabled) = query.enabled_only {
        projects.retain(|p| p.enabled == enabled);
    }

    let sort_by = query.sort_by.as_deref().unwrap_or("name");
    let order = SortOrder::parse(query.order.as_deref());
    match ProjectSortKey::parse(sort_by) {
        Some(key) => sort_projects(&mut projects, key, order),
        None => tracing::warn!(sort_by, "unknown project sort key, keeping store order"),
    }

    Ok(projects)
}
