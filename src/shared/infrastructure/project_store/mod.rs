// Ports the projects and export use cases read venue data through.
//
// Purpose
// - Keep use case handlers independent of where projects, indicators and
//   categories live.
//
// Boundaries
// - The fixture-backed adapter lives in `in_memory`; its seed data in `seed`.

pub mod in_memory;
pub mod seed;

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::projects::core::indicator::{Indicator, IndicatorCategory};
use crate::modules::projects::core::project::Project;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("project {0} not found")]
    NotFound(i64),

    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Every project, in the order the store was seeded.
    async fn list(&self) -> Result<Vec<Project>, StoreError>;
    async fn get(&self, project_id: i64) -> Result<Project, StoreError>;
    /// Flip `enabled`, stamp `updated_at` and return the updated record.
    async fn toggle(&self, project_id: i64) -> Result<Project, StoreError>;
}

#[async_trait]
pub trait IndicatorRepository: Send + Sync {
    async fn indicators(&self) -> Result<Vec<Indicator>, StoreError>;
    async fn categories(&self) -> Result<Vec<IndicatorCategory>, StoreError>;
}
