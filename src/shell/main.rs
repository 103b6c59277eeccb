use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use venue_analytics::shared::infrastructure::project_catalog::postgres::PostgresProjectCatalog;
use venue_analytics::shared::infrastructure::project_store::in_memory::InMemoryProjectStore;
use venue_analytics::shell::config::AppConfig;
use venue_analytics::shell::http::app;
use venue_analytics::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;

    // Fixture data backs the API; Postgres only answers /projects/all.
    let mut state = AppState::in_memory(InMemoryProjectStore::seeded());
    if let Some(database) = &config.database {
        tracing::info!(
            host = %database.host,
            db = %database.name,
            "using postgres project catalog"
        );
        let catalog = PostgresProjectCatalog::new(database.connection_url());
        state = state.with_catalog(Arc::new(catalog));
    }

    let addr = config.socket_addr()?;
    let router = app(state, &config);

    tracing::info!("API: http://{}{}", addr, config.prefix);
    tracing::info!("GraphQL endpoint: http://{}/gql", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;
    Ok(())
}
