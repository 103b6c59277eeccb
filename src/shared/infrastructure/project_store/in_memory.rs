// In memory implementation of the ProjectStore and IndicatorRepository ports.
//
// Purpose
// - Serve the venue fixtures for the lifetime of the process.
//
// Responsibilities
// - Keep projects in a map keyed by id, remembering seed order for listings.
// - Serialize toggles behind a write lock; the last write wins.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::modules::projects::core::indicator::{Indicator, IndicatorCategory};
use crate::modules::projects::core::project::Project;
use crate::shared::infrastructure::project_store::{
    IndicatorRepository, ProjectStore, StoreError, seed,
};

#[derive(Default)]
struct Projects {
    by_id: HashMap<i64, Project>,
    order: Vec<i64>,
}

#[derive(Default)]
pub struct InMemoryProjectStore {
    projects: RwLock<Projects>,
    indicators: Vec<Indicator>,
    categories: Vec<IndicatorCategory>,
    is_offline: bool,
}

impl InMemoryProjectStore {
    pub fn new(
        projects: Vec<Project>,
        indicators: Vec<Indicator>,
        categories: Vec<IndicatorCategory>,
    ) -> Self {
        let mut inner = Projects::default();
        for project in projects {
            if let Entry::Vacant(slot) = inner.by_id.entry(project.id) {
                inner.order.push(project.id);
                slot.insert(project);
            }
        }
        Self {
            projects: RwLock::new(inner),
            indicators,
            categories,
            is_offline: false,
        }
    }

    /// The store populated with the venue fixtures.
    pub fn seeded() -> Self {
        Self::new(seed::projects(), seed::indicators(), seed::categories())
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Project store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ProjectStore for InMemoryProjectStore {
    async fn list(&self) -> Result<Vec<Project>, StoreError> {
        self.ensure_online()?;
        let guard = self.projects.read().await;
        Ok(guard
            .order
            .iter()
            .filter_map(|id| guard.by_id.get(id).cloned())
            .collect())
    }

    async fn get(&self, project_id: i64) -> Result<Project, StoreError> {
        self.ensure_online()?;
        self.projects
            .read()
            .await
            .by_id
            .get(&project_id)
            .cloned()
            .ok_or(StoreError::NotFound(project_id))
    }

    async fn toggle(&self, project_id: i64) -> Result<Project, StoreError> {
        self.ensure_online()?;
        let mut guard = self.projects.write().await;
        let project = guard
            .by_id
            .get_mut(&project_id)
            .ok_or(StoreError::NotFound(project_id))?;
        project.toggle(Utc::now());
        Ok(project.clone())
    }
}

#[async_trait::async_trait]
impl IndicatorRepository for InMemoryProjectStore {
    async fn indicators(&self) -> Result<Vec<Indicator>, StoreError> {
        self.ensure_online()?;
        Ok(self.indicators.clone())
    }

    async fn categories(&self) -> Result<Vec<IndicatorCategory>, StoreError> {
        self.ensure_online()?;
        Ok(self.categories.clone())
    }
}
