use axum::{Json, extract::State, response::IntoResponse};

use crate::shared::application::errors::ApplicationError;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> Result<impl IntoResponse, ApplicationError> {
    let projects = state.catalog.list_all().await?;
    Ok(Json(projects))
}
