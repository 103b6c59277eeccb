// Read-only view over the persisted `projects` table.
//
// Boundaries
// - `postgres` talks to the database; `in_memory` answers from the project
//   store when no database is configured.

pub mod in_memory;
pub mod postgres;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ProjectSummary {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait ProjectCatalog: Send + Sync {
    async fn list_all(&self) -> Result<Vec<ProjectSummary>, CatalogError>;
}
