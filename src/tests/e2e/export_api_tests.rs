use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use rstest::rstest;
use tower::ServiceExt;

use crate::shell::http::router;
use crate::tests::fixtures::http::read_json;
use crate::tests::fixtures::projects::NICE_PROJECT_ID;
use crate::tests::fixtures::state::make_test_state;

async fn export(uri: &str) -> axum::response::Response {
    router(make_test_state(), "/api")
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn read_text(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn exports_six_hour_buckets_as_csv() {
    let response = export(&format!("/api/export/{NICE_PROJECT_ID}/csv?aggregate_hours=6")).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=UGC_Nice_data_6h_aggregation.csv"
    );
    let text = read_text(response).await;
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(
        lines[0],
        "temps_debut,temps_fin,frequentation_restaurant,frequentation_cinema,ventes_food,ventes_ticket"
    );
    assert_eq!(lines[1], "00:00:00,06:00:00,120,195,375,750");
    assert_eq!(lines[4], "18:00:00,00:00:00,120,195,375,750");
}

#[tokio::test]
async fn the_hourly_export_covers_the_whole_day() {
    let text = read_text(export(&format!("/api/export/{NICE_PROJECT_ID}/csv")).await).await;
    assert_eq!(text.lines().count(), 25);
    assert!(text.contains("\r\n"));
}

#[rstest]
#[case(1, 24)]
#[case(3, 8)]
#[case(6, 4)]
#[case(12, 2)]
#[tokio::test]
async fn the_json_export_counts_one_record_per_bucket(#[case] hours: u32, #[case] records: u64) {
    let response =
        export(&format!("/api/export/{NICE_PROJECT_ID}/json?aggregate_hours={hours}")).await;
    let json = read_json(response).await;

    assert_eq!(json["metadata"]["total_records"], records);
    assert_eq!(json["metadata"]["time_slots"], records);
    assert_eq!(json["project"]["aggregation_hours"], hours);
    assert_eq!(json["data"].as_array().unwrap().len() as u64, records);
}

#[tokio::test]
async fn the_json_export_echoes_the_requested_period() {
    let response = export(&format!(
        "/api/export/{NICE_PROJECT_ID}/json?start_date=2025-05-01&end_date=2025-05-31"
    ))
    .await;
    let json = read_json(response).await;

    assert_eq!(json["project"]["period_filters"]["start_date"], "2025-05-01");
    assert_eq!(json["project"]["period_filters"]["end_date"], "2025-05-31");
}

#[tokio::test]
async fn an_inverted_period_is_rejected() {
    let response = export(&format!(
        "/api/export/{NICE_PROJECT_ID}/csv?start_date=2025-06-01&end_date=2025-05-01"
    ))
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[rstest]
#[case("/api/export/-1867723345/csv?aggregate_hours=abc")]
#[case("/api/projects/nice")]
#[case("/api/projects?enabled_only=maybe")]
#[tokio::test]
async fn malformed_parameters_get_a_json_detail(#[case] uri: &str) {
    let response = export(uri).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
    let json = read_json(response).await;
    assert!(json["detail"].is_string());
}
