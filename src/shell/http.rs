use axum::{
    Extension, Json, Router,
    http::HeaderValue,
    routing::{get, put},
};
use serde_json::{Value, json};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::modules::export::use_cases::export_project_data::inbound::http as export_http;
use crate::modules::projects::use_cases::get_project::inbound::http as get_project_http;
use crate::modules::projects::use_cases::get_project_values::inbound::http as values_http;
use crate::modules::projects::use_cases::list_persisted_projects::inbound::http as persisted_http;
use crate::modules::projects::use_cases::list_project_indicators::inbound::http as indicators_http;
use crate::modules::projects::use_cases::list_projects::inbound::http as list_http;
use crate::modules::projects::use_cases::toggle_project::inbound::http as toggle_http;
use crate::shell::config::{AllowedOrigins, AppConfig};
use crate::shell::graphql::{GRAPHQL_PATH, build_schema, graphiql, graphql};
use crate::shell::state::AppState;

pub const SERVICE_NAME: &str = "venue-analytics";

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/projects", get(list_http::handle))
        .route("/projects/", get(list_http::handle))
        .route("/projects/all", get(persisted_http::handle))
        .route("/projects/{project_id}", get(get_project_http::handle))
        .route("/projects/{project_id}/toggle", put(toggle_http::handle))
        .route("/projects/{project_id}/indicators", get(indicators_http::handle))
        .route("/projects/{project_id}/values", get(values_http::handle))
        .route("/export/{project_id}/csv", get(export_http::handle_csv))
        .route("/export/{project_id}/json", get(export_http::handle_json))
}

fn service_info(prefix: &str) -> Value {
    json!({
        "message": "Venue Analytics API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "projects": format!("{prefix}/projects"),
            "export": format!("{prefix}/export"),
            "health": "/health",
            "graphql": GRAPHQL_PATH,
        }
    })
}

async fn health() -> Json<Value> {
    Json(json!({"status": "healthy", "service": SERVICE_NAME}))
}

/// Domain routes under `prefix`; liveness and GraphQL at the root.
pub fn router(state: AppState, prefix: &str) -> Router {
    let info = service_info(prefix);
    let root = Router::new()
        .route("/", get(move || async move { Json(info) }))
        .route("/health", get(health))
        .route(GRAPHQL_PATH, get(graphiql).post(graphql))
        .layer(Extension(build_schema(state.clone())));

    let app = if prefix.is_empty() {
        root.merge(api_routes())
    } else {
        root.nest(prefix, api_routes())
    };
    app.with_state(state)
}

pub fn cors_layer(origins: &AllowedOrigins) -> CorsLayer {
    let allow_origin = match origins {
        AllowedOrigins::Any => AllowOrigin::any(),
        AllowedOrigins::List(list) => AllowOrigin::list(list.iter().filter_map(|origin| {
            origin
                .parse::<HeaderValue>()
                .inspect_err(|_| tracing::warn!(origin = %origin, "ignoring invalid CORS origin"))
                .ok()
        })),
    };
    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// The full service: routes plus CORS and request tracing.
pub fn app(state: AppState, config: &AppConfig) -> Router {
    router(state, &config.prefix)
        .layer(cors_layer(&config.cors_allow_origins))
        .layer(TraceLayer::new_for_http())
}
