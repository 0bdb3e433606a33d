mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{app, add_student, get, json_body, post_json, text_body};

#[tokio::test]
async fn add_student_returns_generated_id() {
    let app = app();

    let response = post_json(
        &app,
        "/add-student",
        json!({ "name": "Amit", "roll_number": "R1" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["id"], json!(1));

    let dashboard = text_body(get(&app, "/dashboard").await).await;
    assert!(dashboard.contains("Amit"));
    assert!(dashboard.contains("R1"));
    // Exactly one row for the student.
    assert_eq!(dashboard.matches("Amit").count(), 1);
}

#[tokio::test]
async fn duplicate_roll_number_is_a_client_error() {
    let app = app();
    add_student(&app, "Amit", "R1").await;

    let response = post_json(
        &app,
        "/add-student",
        json!({ "name": "Someone Else", "roll_number": "R1" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["error"], json!("Roll number already exists"));

    let dashboard = text_body(get(&app, "/dashboard").await).await;
    assert!(!dashboard.contains("Someone Else"));
}

#[tokio::test]
async fn empty_or_absent_fields_are_rejected() {
    let app = app();

    for body in [
        json!({ "name": "", "roll_number": "R1" }),
        json!({ "name": "Amit", "roll_number": "" }),
        json!({ "roll_number": "R1" }),
        json!({ "name": "Amit" }),
        json!({}),
    ] {
        let response = post_json(&app, "/add-student", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["error"], json!("Name and roll number required"));
    }
}

#[tokio::test]
async fn whitespace_only_fields_are_rejected() {
    let app = app();
    let response = post_json(
        &app,
        "/add-student",
        json!({ "name": "   ", "roll_number": "R1" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
