use thiserror::Error;

use crate::modules::export::core::aggregation::AggregationError;
use crate::shared::infrastructure::project_catalog::CatalogError;
use crate::shared::infrastructure::project_store::StoreError;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Project not found")]
    ProjectNotFound { project_id: i64 },

    #[error("Project is not active")]
    ProjectDisabled { project_id: i64 },

    #[error("Project not found or inactive")]
    ProjectUnavailable { project_id: i64 },

    #[error(transparent)]
    InvalidAggregation(#[from] AggregationError),

    #[error("{0}")]
    InvalidQuery(String),

    #[error(transparent)]
    Store(StoreError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("unexpected: {0}")]
    Unexpected(String),
}

impl From<StoreError> for ApplicationError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(project_id) => ApplicationError::ProjectNotFound { project_id },
            other => ApplicationError::Store(other),
        }
    }
}
