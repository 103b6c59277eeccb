use axum::{
    Json,
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::shared::application::errors::ApplicationError;

#[derive(Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl ApplicationError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApplicationError::ProjectNotFound { .. }
            | ApplicationError::ProjectUnavailable { .. } => StatusCode::NOT_FOUND,
            ApplicationError::ProjectDisabled { .. } => StatusCode::FORBIDDEN,
            ApplicationError::InvalidAggregation(_) | ApplicationError::InvalidQuery(_) => {
                StatusCode::BAD_REQUEST
            }
            ApplicationError::Store(_)
            | ApplicationError::Catalog(_)
            | ApplicationError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<PathRejection> for ApplicationError {
    fn from(rejection: PathRejection) -> Self {
        ApplicationError::InvalidQuery(rejection.body_text())
    }
}

impl From<QueryRejection> for ApplicationError {
    fn from(rejection: QueryRejection) -> Self {
        ApplicationError::InvalidQuery(rejection.body_text())
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        // Backend messages stay in the logs.
        let detail = if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
            "Internal server error".to_string()
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "request rejected");
            self.to_string()
        };
        (status, Json(ErrorBody { detail })).into_response()
    }
}
