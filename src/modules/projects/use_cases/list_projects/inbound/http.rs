use axum::{Json, extract::State, response::IntoResponse};

use crate::modules::projects::use_cases::list_projects::handler::{ListProjectsQuery, list_projects};
use crate::shared::application::errors::ApplicationError;
use crate::shared::inbound::extract::ApiQuery;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ListProjectsQuery>,
) -> Result<impl IntoResponse, ApplicationError> {
    let projects = list_projects(state.projects.as_ref(), &params).await?;
    Ok(Json(projects))
}
