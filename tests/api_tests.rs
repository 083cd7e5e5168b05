//! API integration tests, run against the router in-process

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use salon_server::{api, config::AppConfig, repository::Repository, AppState};

/// Helper to build a router over the demo data
async fn app() -> Router {
    let repository = Repository::new();
    repository.seed_demo().await;
    api::create_router(AppState::new(AppConfig::default(), repository))
}

/// Helper to send a request and decode the JSON body (Null when empty)
async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn find_id(app: &Router, collection: &str, name: &str) -> String {
    let (_, body) = send(app, Method::GET, &format!("/api/v1/{}", collection), None).await;
    body.as_array()
        .unwrap()
        .iter()
        .find(|v| v["name"] == name)
        .map(|v| v["id"].as_str().unwrap().to_string())
        .unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let app = app().await;
    let (status, body) = send(&app, Method::GET, "/api/v1/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = send(&app, Method::GET, "/api/v1/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["active_services"], 3);
    assert_eq!(body["business_hours"]["start_hour"], 9);
}

#[tokio::test]
async fn test_list_services_with_filters() {
    let app = app().await;

    let (status, body) = send(&app, Method::GET, "/api/v1/services?sort=price&direction=desc", None).await;
    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body.as_array().unwrap().iter().map(|s| s["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Hair Color", "Men's Haircut", "Beard Trim"]);

    let (status, body) = send(&app, Method::GET, "/api/v1/services?category=massage", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "BadValue");
}

#[tokio::test]
async fn test_create_service_reports_field_errors() {
    let app = app().await;
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/services",
        Some(json!({
            "name": "Scalp Treatment",
            "description": "Deep conditioning",
            "duration": 0,
            "price": "19.999",
            "category": "treatment"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let fields: Vec<&str> = body["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["field"].as_str().unwrap())
        .collect();
    assert_eq!(fields, vec!["duration", "price"]);
}

#[tokio::test]
async fn test_unknown_ids_are_not_found() {
    let app = app().await;
    let uri = format!("/api/v1/services/{}", uuid::Uuid::new_v4());
    let (status, body) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 2);
}

#[tokio::test]
async fn test_selectable_range() {
    let app = app().await;
    let color = find_id(&app, "services", "Hair Color").await;

    let uri = format!("/api/v1/availability/range?date=2026-10-19&service_id={}", color);
    let (status, body) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["min_time"], "2026-10-19T09:00:00");
    assert_eq!(body["max_time"], "2026-10-19T15:30:00");
    assert_eq!(body["has_slots"], true);

    let uri = format!("/api/v1/availability/range?service_id={}", color);
    let (_, body) = send(&app, Method::GET, &uri, None).await;
    assert!(body["min_time"].is_null());
    assert!(body["max_time"].is_null());
}

#[tokio::test]
async fn test_booking_flow_rejects_double_booking() {
    let app = app().await;
    let haircut = find_id(&app, "services", "Men's Haircut").await;
    let john = find_id(&app, "staff", "John Smith").await;

    let booking = |start: &str| {
        json!({
            "client_name": "John Doe",
            "service_id": haircut,
            "staff_id": john,
            "start_time": start
        })
    };

    let (status, first) = send(&app, Method::POST, "/api/v1/appointments", Some(booking("2026-10-19T09:00:00"))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(first["status"], "scheduled");
    assert_eq!(first["duration"], 30);

    let (status, body) = send(&app, Method::POST, "/api/v1/appointments", Some(booking("2026-10-19T09:15:00"))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "SlotUnavailable");

    let uri = format!(
        "/api/v1/availability/check?start_time=2026-10-19T09:15:00&service_id={}&staff_id={}",
        haircut, john
    );
    let (status, body) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["available"], false);
    assert_eq!(body["reason"], "conflict");
    assert_eq!(body["conflict"]["start"], "2026-10-19T09:00:00");

    let (status, _) = send(&app, Method::POST, "/api/v1/appointments", Some(booking("2026-10-19T09:30:00"))).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = send(&app, Method::POST, "/api/v1/appointments", Some(booking("2026-10-19T08:30:00"))).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, list) = send(&app, Method::GET, "/api/v1/appointments?date=2026-10-19", None).await;
    assert_eq!(list.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_status_transitions() {
    let app = app().await;
    let beard = find_id(&app, "services", "Beard Trim").await;
    let john = find_id(&app, "staff", "John Smith").await;

    let (_, appt) = send(
        &app,
        Method::POST,
        "/api/v1/appointments",
        Some(json!({
            "client_name": "Jane Smith",
            "service_id": beard,
            "staff_id": john,
            "start_time": "2026-10-19T13:00:00"
        })),
    )
    .await;
    let uri = format!("/api/v1/appointments/{}/status", appt["id"].as_str().unwrap());

    let (status, body) = send(&app, Method::PUT, &uri, Some(json!({ "status": "in-progress" }))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "InvalidTransition");

    let (status, body) = send(&app, Method::PUT, &uri, Some(json!({ "status": "cancelled" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "cancelled");

    // The cancelled slot is free again
    let uri = format!("/api/v1/availability/slots?date=2026-10-19&service_id={}&staff_id={}", beard, john);
    let (_, grid) = send(&app, Method::GET, &uri, None).await;
    let at_one = grid["slots"]
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["start_time"] == "2026-10-19T13:00:00")
        .unwrap();
    assert_eq!(at_one["is_available"], true);
}

#[tokio::test]
async fn test_delete_service_with_open_appointment() {
    let app = app().await;
    let haircut = find_id(&app, "services", "Men's Haircut").await;
    let john = find_id(&app, "staff", "John Smith").await;

    send(
        &app,
        Method::POST,
        "/api/v1/appointments",
        Some(json!({
            "client_name": "John Doe",
            "service_id": haircut,
            "staff_id": john,
            "start_time": "2026-10-19T10:00:00"
        })),
    )
    .await;

    let uri = format!("/api/v1/services/{}", haircut);
    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"], "BusinessRule");

    let beard = find_id(&app, "services", "Beard Trim").await;
    let (status, body) = send(&app, Method::DELETE, &format!("/api/v1/services/{}", beard), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_null());
}

#[tokio::test]
async fn test_staff_schedule_replacement() {
    let app = app().await;
    let sarah = find_id(&app, "staff", "Sarah Johnson").await;
    let uri = format!("/api/v1/staff/{}/schedule", sarah);

    let (status, body) = send(
        &app,
        Method::PUT,
        &uri,
        Some(json!({ "schedule": [{ "day_of_week": 6, "start_time": "10:00", "end_time": "09:00" }] })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["fields"][0]["field"], "schedule");

    let (status, body) = send(
        &app,
        Method::PUT,
        &uri,
        Some(json!({ "schedule": [{ "day_of_week": 6, "start_time": "10:00", "end_time": "14:00" }] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["schedule"][0]["start_time"], "10:00");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = app().await;
    let (status, body) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/appointments"].is_object());
    assert!(body["paths"]["/availability/check"].is_object());
}
