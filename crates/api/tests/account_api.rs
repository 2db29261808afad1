//! Integration tests for users and user groups.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, delete, expect_json, get, send_json};
use serde_json::json;

// ---------------------------------------------------------------------------
// Groups
// ---------------------------------------------------------------------------

#[tokio::test]
async fn group_crud_round_trip() {
    let app = common::build_test_app();

    let created = expect_json(
        send_json(
            app.clone(),
            Method::POST,
            "/api/v1/groups",
            json!({ "name": "Family" }),
        )
        .await,
        StatusCode::CREATED,
    )
    .await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["name"], "Family");

    let updated = expect_json(
        send_json(
            app.clone(),
            Method::PUT,
            &format!("/api/v1/groups/{id}"),
            json!({ "name": "Household" }),
        )
        .await,
        StatusCode::OK,
    )
    .await;
    assert_eq!(updated["id"].as_i64(), Some(id));
    assert_eq!(updated["name"], "Household");

    let response = delete(app.clone(), &format!("/api/v1/groups/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app, &format!("/api/v1/groups/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[tokio::test]
async fn user_create_with_group_membership() {
    let app = common::build_test_app();

    let group = body_json(
        send_json(
            app.clone(),
            Method::POST,
            "/api/v1/groups",
            json!({ "name": "Family" }),
        )
        .await,
    )
    .await;
    let group_id = group["id"].as_i64().unwrap();

    let response = send_json(
        app.clone(),
        Method::POST,
        "/api/v1/users",
        json!({ "username": "anna", "name": "Anna", "groupId": group_id }),
    )
    .await;
    let json = expect_json(response, StatusCode::CREATED).await;
    assert_eq!(json["username"], "anna");
    assert_eq!(json["groupId"].as_i64(), Some(group_id));
}

#[tokio::test]
async fn user_with_unknown_group_is_rejected() {
    let app = common::build_test_app();
    let response = send_json(
        app,
        Method::POST,
        "/api/v1/users",
        json!({ "username": "anna", "name": "Anna", "groupId": 12345 }),
    )
    .await;
    let json = expect_json(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn username_with_whitespace_is_rejected() {
    let app = common::build_test_app();
    let response = send_json(
        app,
        Method::POST,
        "/api/v1/users",
        json!({ "username": "anna b", "name": "Anna" }),
    )
    .await;
    let json = expect_json(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn user_without_group_serializes_null_group_id() {
    let app = common::build_test_app();
    let response = send_json(
        app,
        Method::POST,
        "/api/v1/users",
        json!({ "username": "ben", "name": "Ben" }),
    )
    .await;
    let json = expect_json(response, StatusCode::CREATED).await;
    // Null, not omitted.
    assert!(json.as_object().unwrap().contains_key("groupId"));
    assert_eq!(json["groupId"], serde_json::Value::Null);
}

#[tokio::test]
async fn user_list_is_ordered_by_username() {
    let app = common::build_test_app();
    for (username, name) in [("zoe", "Zoe"), ("anna", "Anna")] {
        send_json(
            app.clone(),
            Method::POST,
            "/api/v1/users",
            json!({ "username": username, "name": name }),
        )
        .await;
    }

    let json = expect_json(get(app, "/api/v1/users").await, StatusCode::OK).await;
    let usernames: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["username"].as_str().unwrap())
        .collect();
    assert_eq!(usernames, ["anna", "zoe"]);
}
