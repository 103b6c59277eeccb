use std::sync::Arc;

use async_trait::async_trait;

use crate::shared::infrastructure::project_catalog::{CatalogError, ProjectCatalog, ProjectSummary};
use crate::shared::infrastructure::project_store::ProjectStore;

/// Answers catalog queries from the project store.
pub struct StoreBackedCatalog {
    store: Arc<dyn ProjectStore>,
}

impl StoreBackedCatalog {
    pub fn new(store: Arc<dyn ProjectStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProjectCatalog for StoreBackedCatalog {
    async fn list_all(&self) -> Result<Vec<ProjectSummary>, CatalogError> {
        let projects = self
            .store
            .list()
            .await
            .map_err(|e| CatalogError::Backend(e.to_string()))?;
        Ok(projects
            .into_iter()
            .map(|p| ProjectSummary {
                id: p.id,
                name: p.name,
            })
            .collect())
    }
}
