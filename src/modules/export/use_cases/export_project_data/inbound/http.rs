use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use chrono::Utc;

use crate::modules::export::use_cases::export_project_data::csv_export::render_csv;
use crate::modules::export::use_cases::export_project_data::handler::{
    ExportQuery, ProjectExport, prepare_export,
};
use crate::modules::export::use_cases::export_project_data::json_export::render_json;
use crate::shared::application::errors::ApplicationError;
use crate::shared::inbound::extract::{ApiPath, ApiQuery};
use crate::shell::state::AppState;

fn attachment(
    export: &ProjectExport,
    extension: &str,
    content_type: &'static str,
    body: impl IntoResponse,
) -> Response {
    let disposition = format!("attachment; filename={}", export.filename(extension));
    (
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response()
}

pub async fn handle_csv(
    State(state): State<AppState>,
    ApiPath(project_id): ApiPath<i64>,
    ApiQuery(params): ApiQuery<ExportQuery>,
) -> Result<Response, ApplicationError> {
    let export = prepare_export(state.projects.as_ref(), project_id, &params).await?;
    let body = render_csv(&export)?;
    Ok(attachment(&export, "csv", "text/csv", body))
}

pub async fn handle_json(
    State(state): State<AppState>,
    ApiPath(project_id): ApiPath<i64>,
    ApiQuery(params): ApiQuery<ExportQuery>,
) -> Result<Response, ApplicationError> {
    let export = prepare_export(state.projects.as_ref(), project_id, &params).await?;
    let body = render_json(&export, Utc::now())?;
    Ok(attachment(&export, "json", "application/json", body))
}

#[cfg(test)]
mod export_project_data_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode, header},
        routing::get,
    };
    use http_body_util::BodyExt;
    use rstest::rstest;
    use tower::ServiceExt;

    use crate::shell::state::AppState;
    use crate::tests::fixtures::http::read_json;
    use crate::tests::fixtures::state::make_test_state;

    use super::{handle_csv, handle_json};

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/export/{project_id}/csv", get(handle_csv))
            .route("/export/{project_id}/json", get(handle_json))
            .with_state(state)
    }

    async fn send(uri: &str) -> axum::response::Response {
        app(make_test_state())
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn it_should_return_a_csv_attachment() {
        let response = send("/export/-98349789/csv?aggregate_hours=12").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/csv");
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=UGC_Paris_data_12h_aggregation.csv"
        );
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let text = String::from_utf8(bytes.to_vec()).unwrap();
        assert_eq!(text.lines().count(), 3);
    }

    #[tokio::test]
    async fn it_should_return_a_json_attachment() {
        let response = send("/export/-98349789/json?aggregate_hours=3").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=UGC_Paris_data_3h_aggregation.json"
        );
        let json = read_json(response).await;
        assert_eq!(json["data"].as_array().unwrap().len(), 8);
        assert_eq!(json["project"]["aggregation_hours"], 3);
    }

    #[rstest]
    #[case("/export/-98349789/csv?aggregate_hours=5")]
    #[case("/export/-98349789/json?aggregate_hours=24")]
    #[case("/export/-98349789/csv?aggregate_hours=0")]
    #[case("/export/-98349789/json?start_date=17-05-2025")]
    #[tokio::test]
    async fn it_should_return_400_for_invalid_parameters(#[case] uri: &str) {
        let response = send(uri).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn it_should_answer_a_non_numeric_period_with_a_json_detail() {
        let response = send("/export/-98349789/csv?aggregate_hours=abc").await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
        let json = read_json(response).await;
        let detail = json["detail"].as_str().unwrap();
        assert!(detail.contains("aggregate_hours"), "{detail}");
    }

    #[tokio::test]
    async fn it_should_explain_the_supported_periods() {
        let response = send("/export/-98349789/csv?aggregate_hours=4").await;
        let json = read_json(response).await;
        assert_eq!(json["detail"], "Aggregation period must be 1, 3, 6, or 12 hours");
    }

    #[rstest]
    #[case("/export/-621102575/csv")]
    #[case("/export/-621102575/json")]
    #[case("/export/777/csv")]
    #[case("/export/777/json")]
    #[tokio::test]
    async fn it_should_return_404_for_missing_or_disabled_projects(#[case] uri: &str) {
        let response = send(uri).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = read_json(response).await;
        assert_eq!(json["detail"], "Project not found or inactive");
    }
}
