use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use tower::ServiceExt;

use crate::shell::http::router;
use crate::tests::fixtures::http::read_json;
use crate::tests::fixtures::projects::{DISABLED_PROJECT_ID, NICE_PROJECT_ID};
use crate::tests::fixtures::state::make_test_state;

async fn call(app: &Router, request: Request<Body>) -> axum::response::Response {
    app.clone().oneshot(request).await.unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn put(uri: &str) -> Request<Body> {
    Request::put(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn disabling_a_project_hides_it_and_locks_its_values() {
    let app = router(make_test_state(), "/api");

    let response = call(&app, get(&format!("/api/projects/{NICE_PROJECT_ID}/values"))).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = call(&app, put(&format!("/api/projects/{NICE_PROJECT_ID}/toggle"))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = read_json(response).await;
    assert_eq!(json["message"], "Project UGC-Nice disabled");
    assert_eq!(json["enabled"], false);

    let response = call(&app, get("/api/projects?enabled_only=true")).await;
    let json = read_json(response).await;
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert!(!names.contains(&"UGC-Nice"));
    assert_eq!(names.len(), 4);

    let response = call(&app, get(&format!("/api/projects/{NICE_PROJECT_ID}/values"))).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(read_json(response).await["detail"], "Project is not active");

    let response = call(&app, get(&format!("/api/export/{NICE_PROJECT_ID}/csv"))).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn enabling_a_project_opens_its_values_and_exports() {
    let app = router(make_test_state(), "/api");

    let response = call(&app, get(&format!("/api/export/{DISABLED_PROJECT_ID}/json"))).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = call(&app, put(&format!("/api/projects/{DISABLED_PROJECT_ID}/toggle"))).await;
    assert_eq!(read_json(response).await["enabled"], true);

    let response = call(&app, get(&format!("/api/projects/{DISABLED_PROJECT_ID}/values"))).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = call(&app, get(&format!("/api/export/{DISABLED_PROJECT_ID}/json"))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = read_json(response).await;
    assert_eq!(json["project"]["name"], "UGC-Bordeaux");
    assert_eq!(json["metadata"]["total_records"], 24);
}

#[tokio::test]
async fn the_detail_and_indicator_views_agree() {
    let app = router(make_test_state(), "/api");

    let detail_uri = format!("/api/projects/{NICE_PROJECT_ID}");
    let indicators_uri = format!("/api/projects/{NICE_PROJECT_ID}/indicators");
    let detail = read_json(call(&app, get(&detail_uri)).await).await;
    let indicators = read_json(call(&app, get(&indicators_uri)).await).await;

    assert_eq!(detail["id"], NICE_PROJECT_ID);
    let detail_ids: Vec<_> = detail["indicators"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["id"].clone())
        .collect();
    let listed_ids: Vec<_> = indicators
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["indicator"]["id"].clone())
        .collect();
    assert_eq!(detail_ids.len(), 2);
    assert!(detail_ids.iter().all(|id| listed_ids.contains(id)));
}

#[tokio::test]
async fn values_can_be_filtered_and_ranked() {
    let app = router(make_test_state(), "/api");

    let uri = format!(
        "/api/projects/{NICE_PROJECT_ID}/values?start_date=2025-05-17&end_date=2025-05-17&min_value=20&sort_by=value&order=desc"
    );
    let json = read_json(call(&app, get(&uri)).await).await;
    let values = json["values"].as_array().unwrap();

    assert_eq!(values.len(), 4);
    assert_eq!(values[0]["time_begin"], "04:00:00");
    assert_eq!(values[3]["time_begin"], "01:00:00");
    assert_eq!(json["time_slots"].as_array().unwrap().len(), 24);
}

#[tokio::test]
async fn the_persisted_listing_falls_back_to_the_store() {
    let app = router(make_test_state(), "/api");

    let json = read_json(call(&app, get("/api/projects/all")).await).await;
    let projects = json.as_array().unwrap();
    assert_eq!(projects.len(), 7);
    assert!(
        projects
            .iter()
            .any(|p| p["id"] == NICE_PROJECT_ID && p["name"] == "UGC-Nice")
    );
}
