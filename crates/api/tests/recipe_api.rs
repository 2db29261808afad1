//! Integration tests for recipe CRUD over the wire format.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, body_text, delete, expect_json, get, send_json};
use serde_json::json;

fn pancake_payload() -> serde_json::Value {
    json!({
        "title": "Pancakes",
        "portionSize": 4,
        "instructions": [
            { "instruction": "Mix the batter" },
            { "instruction": "Fry both sides" }
        ],
        "ingredients": [
            { "name": "Flour", "amount": 250.0, "unit": "g" }
        ]
    })
}

// ---------------------------------------------------------------------------
// Create & read
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_assigns_ids_and_returns_full_dto() {
    let app = common::build_test_app();

    let response = send_json(app.clone(), Method::POST, "/api/v1/recipes", pancake_payload()).await;
    let json = expect_json(response, StatusCode::CREATED).await;

    assert!(json["id"].is_i64());
    assert_eq!(json["title"], "Pancakes");
    assert_eq!(json["portionSize"], 4);
    assert_eq!(json["instructions"].as_array().unwrap().len(), 2);
    assert!(json["instructions"][0]["id"].is_i64());
    assert_eq!(json["instructions"][0]["instruction"], "Mix the batter");
    assert_eq!(json["image"], serde_json::Value::Null);
    // The option summary mirrors id + title.
    assert_eq!(json["option"]["label"], "Pancakes");
    assert_eq!(json["option"]["id"], json["id"]);

    // The recipe is retrievable.
    let id = json["id"].as_i64().unwrap();
    let response = get(app, &format!("/api/v1/recipes/{id}")).await;
    let fetched = expect_json(response, StatusCode::OK).await;
    assert_eq!(fetched["title"], "Pancakes");
}

#[tokio::test]
async fn wire_body_is_pretty_with_stable_key_order() {
    let app = common::build_test_app();

    let response = send_json(app, Method::POST, "/api/v1/recipes", pancake_payload()).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_text(response).await;

    // Pretty-printed output with explicit nulls.
    assert!(body.contains("\n  \"title\""));
    assert!(body.contains("\"image\": null"));

    // Top-level key order: id, title, portionSize, instructions,
    // ingredients, image, option. Clients read this positionally.
    let positions: Vec<usize> = [
        "\"title\"",
        "\"portionSize\"",
        "\"instructions\"",
        "\"ingredients\"",
        "\"image\"",
        "\"option\"",
    ]
    .iter()
    .map(|key| body.find(key).unwrap_or_else(|| panic!("missing {key}")))
    .collect();
    assert!(
        positions.windows(2).all(|w| w[0] < w[1]),
        "keys out of order in body:\n{body}"
    );

    // Instruction order equals submission order.
    assert!(body.find("Mix the batter").unwrap() < body.find("Fry both sides").unwrap());
}

#[tokio::test]
async fn list_contains_created_recipes() {
    let app = common::build_test_app();

    send_json(app.clone(), Method::POST, "/api/v1/recipes", pancake_payload()).await;
    send_json(
        app.clone(),
        Method::POST,
        "/api/v1/recipes",
        json!({ "title": "Aioli", "portionSize": 2 }),
    )
    .await;

    let response = get(app, "/api/v1/recipes").await;
    let json = expect_json(response, StatusCode::OK).await;
    let titles: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["title"].as_str().unwrap())
        .collect();
    // Ordered by title.
    assert_eq!(titles, ["Aioli", "Pancakes"]);
}

#[tokio::test]
async fn options_returns_id_label_pairs() {
    let app = common::build_test_app();
    send_json(app.clone(), Method::POST, "/api/v1/recipes", pancake_payload()).await;

    let response = get(app, "/api/v1/recipes/options").await;
    let json = expect_json(response, StatusCode::OK).await;
    assert_eq!(json[0]["label"], "Pancakes");
    assert!(json[0]["id"].is_i64());
}

// ---------------------------------------------------------------------------
// Update path
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_edits_scalars_and_reconciles_children() {
    let app = common::build_test_app();

    let created = body_json(
        send_json(app.clone(), Method::POST, "/api/v1/recipes", pancake_payload()).await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    // Drop the first instruction, keep & edit the second, add a third.
    let kept_id = created["instructions"][1]["id"].as_i64().unwrap();
    let update = json!({
        "title": "Fluffy Pancakes",
        "portionSize": 6,
        "instructions": [
            { "id": kept_id, "instruction": "Fry until golden" },
            { "instruction": "Serve with syrup" }
        ],
        "ingredients": []
    });

    let response = send_json(
        app.clone(),
        Method::PUT,
        &format!("/api/v1/recipes/{id}"),
        update,
    )
    .await;
    let json = expect_json(response, StatusCode::OK).await;

    assert_eq!(json["id"].as_i64(), Some(id));
    assert_eq!(json["title"], "Fluffy Pancakes");
    assert_eq!(json["portionSize"], 6);

    let instructions = json["instructions"].as_array().unwrap();
    assert_eq!(instructions.len(), 2);
    assert_eq!(instructions[0]["id"].as_i64(), Some(kept_id));
    assert_eq!(instructions[0]["instruction"], "Fry until golden");
    assert_eq!(instructions[1]["instruction"], "Serve with syrup");

    // The dropped ingredient is gone, not merely ignored.
    assert_eq!(json["ingredients"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn update_with_stale_child_id_is_rejected() {
    let app = common::build_test_app();

    let created = body_json(
        send_json(app.clone(), Method::POST, "/api/v1/recipes", pancake_payload()).await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let update = json!({
        "title": "Pancakes",
        "portionSize": 4,
        "instructions": [ { "id": 99999, "instruction": "Ghost step" } ],
        "ingredients": []
    });

    let response = send_json(app, Method::PUT, &format!("/api/v1/recipes/{id}"), update).await;
    let json = expect_json(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn update_of_missing_recipe_returns_404() {
    let app = common::build_test_app();
    let response = send_json(
        app,
        Method::PUT,
        "/api/v1/recipes/42",
        json!({ "title": "Nope", "portionSize": 1 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn delete_removes_the_recipe() {
    let app = common::build_test_app();
    let created = body_json(
        send_json(app.clone(), Method::POST, "/api/v1/recipes", pancake_payload()).await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let response = delete(app.clone(), &format!("/api/v1/recipes/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app, &format!("/api/v1/recipes/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Input validation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_with_id_is_rejected() {
    let app = common::build_test_app();
    let response = send_json(
        app,
        Method::POST,
        "/api/v1/recipes",
        json!({ "id": 7, "title": "Smuggled", "portionSize": 2 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_with_empty_title_is_rejected() {
    let app = common::build_test_app();
    let response = send_json(
        app,
        Method::POST,
        "/api/v1/recipes",
        json!({ "title": "", "portionSize": 2 }),
    )
    .await;
    let json = expect_json(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn create_with_unknown_field_is_rejected() {
    let app = common::build_test_app();
    let response = send_json(
        app,
        Method::POST,
        "/api/v1/recipes",
        json!({ "title": "T", "portionSize": 2, "servings": 3 }),
    )
    .await;
    assert!(
        response.status().is_client_error(),
        "unknown fields must not bind, got {}",
        response.status()
    );
}

// ---------------------------------------------------------------------------
// Refresh stamps
// ---------------------------------------------------------------------------

#[tokio::test]
async fn mutations_bump_the_recipes_stamp() {
    let app = common::build_test_app();

    let before = expect_json(get(app.clone(), "/api/v1/refresh").await, StatusCode::OK).await;
    let before_recipes = before[0]["refreshedAt"].as_str().unwrap().to_string();
    assert_eq!(before[0]["scope"], "recipes");

    send_json(app.clone(), Method::POST, "/api/v1/recipes", pancake_payload()).await;

    let after = expect_json(get(app, "/api/v1/refresh").await, StatusCode::OK).await;
    let after_recipes = after[0]["refreshedAt"].as_str().unwrap();
    assert!(
        after_recipes > before_recipes.as_str(),
        "recipes stamp must move forward"
    );
}
