use axum::{Json, extract::State, response::IntoResponse};

use crate::modules::projects::use_cases::get_project_values::handler::{
    ProjectValuesQuery, get_project_values,
};
use crate::shared::application::errors::ApplicationError;
use crate::shared::inbound::extract::{ApiPath, ApiQuery};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    ApiPath(project_id): ApiPath<i64>,
    ApiQuery(params): ApiQuery<ProjectValuesQuery>,
) -> Result<impl IntoResponse, ApplicationError> {
    let response = get_project_values(
        state.projects.as_ref(),
        state.indicators.as_ref(),
        project_id,
        &params,
    )
    .await?;
    Ok(Json(response))
}
