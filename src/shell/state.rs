use std::sync::Arc;

use crate::modules::projects::use_cases::toggle_project::handler::ToggleProjectHandler;
use crate::shared::infrastructure::project_catalog::ProjectCatalog;
use crate::shared::infrastructure::project_catalog::in_memory::StoreBackedCatalog;
use crate::shared::infrastructure::project_store::in_memory::InMemoryProjectStore;
use crate::shared::infrastructure::project_store::{IndicatorRepository, ProjectStore};

#[derive(Clone)]
pub struct AppState {
    pub projects: Arc<dyn ProjectStore>,
    pub indicators: Arc<dyn IndicatorRepository>,
    pub catalog: Arc<dyn ProjectCatalog>,
    pub toggle_handler: Arc<ToggleProjectHandler<dyn ProjectStore>>,
}

impl AppState {
    /// Wire every port to one in-memory store; the catalog reads the same store.
    pub fn in_memory(store: InMemoryProjectStore) -> Self {
        let store = Arc::new(store);
        let projects: Arc<dyn ProjectStore> = store.clone();
        Self {
            indicators: store,
            catalog: Arc::new(StoreBackedCatalog::new(projects.clone())),
            toggle_handler: Arc::new(ToggleProjectHandler::new(projects.clone())),
            projects,
        }
    }

    pub fn with_catalog(mut self, catalog: Arc<dyn ProjectCatalog>) -> Self {
        self.catalog = catalog;
        self
    }
}
