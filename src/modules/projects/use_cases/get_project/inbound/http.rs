use axum::{Json, extract::State, response::IntoResponse};

use crate::modules::projects::use_cases::get_project::handler::get_project;
use crate::shared::application::errors::ApplicationError;
use crate::shared::inbound::extract::ApiPath;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    ApiPath(project_id): ApiPath<i64>,
) -> Result<impl IntoResponse, ApplicationError> {
    let detail = get_project(state.projects.as_ref(), state.indicators.as_ref(), project_id).await?;
    Ok(Json(detail))
}
