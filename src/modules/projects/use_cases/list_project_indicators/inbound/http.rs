use axum::{Json, extract::State, response::IntoResponse};

use crate::modules::projects::use_cases::list_project_indicators::handler::list_project_indicators;
use crate::shared::application::errors::ApplicationError;
use crate::shared::inbound::extract::ApiPath;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    ApiPath(project_id): ApiPath<i64>,
) -> Result<impl IntoResponse, ApplicationError> {
    let details =
        list_project_indicators(state.projects.as_ref(), state.indicators.as_ref(), project_id)
            .await?;
    Ok(Json(details))
}
