use axum::{Json, extract::State, response::IntoResponse};

use crate::shared::application::errors::ApplicationError;
use crate::shared::inbound::extract::ApiPath;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    ApiPath(project_id): ApiPath<i64>,
) -> Result<impl IntoResponse, ApplicationError> {
    let response = state.toggle_handler.handle(project_id).await?;
    Ok(Json(response))
}
