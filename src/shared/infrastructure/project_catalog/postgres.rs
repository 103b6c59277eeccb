use async_trait::async_trait;
use tokio_postgres::NoTls;

use crate::shared::infrastructure::project_catalog::{CatalogError, ProjectCatalog, ProjectSummary};

const LIST_PROJECTS_SQL: &str = "SELECT id::bigint, name FROM projects;";

/// Opens one connection per call; no pooling and no retry.
#[derive(Debug, Clone)]
pub struct PostgresProjectCatalog {
    connection_url: String,
}

impl PostgresProjectCatalog {
    pub fn new(connection_url: impl Into<String>) -> Self {
        Self {
            connection_url: connection_url.into(),
        }
    }
}

fn backend(err: tokio_postgres::Error) -> CatalogError {
    CatalogError::Backend(err.to_string())
}

#[async_trait]
impl ProjectCatalog for PostgresProjectCatalog {
    async fn list_all(&self) -> Result<Vec<ProjectSummary>, CatalogError> {
        let (client, connection) = tokio_postgres::connect(&self.connection_url, NoTls)
            .await
            .map_err(backend)?;
        let driver = tokio::spawn(async move {
            if let Err(err) = connection.await {
                tracing::error!(error = %err, "project catalog connection failed");
            }
        });

        let rows = client.query(LIST_PROJECTS_SQL, &[]).await.map_err(backend)?;
        drop(client);
        // The driver finishes once the client is gone.
        if let Err(err) = driver.await {
            tracing::warn!(error = %err, "project catalog connection task did not finish cleanly");
        }

        tracing::debug!(rows = rows.len(), "loaded persisted projects");
        rows.iter()
            .map(|row| {
                Ok(ProjectSummary {
                    id: row.try_get(0).map_err(backend)?,
                    name: row.try_get(1).map_err(backend)?,
                })
            })
            .collect()
    }
}
