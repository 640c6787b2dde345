//! HTTP route tests driven through the axum router

use app_lib::app::seed_sample_data;
use app_lib::create_router;
use app_lib::infra::db::init_test_db;
use app_lib::infra::DbPool;
use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

// =============================================================================
// Test Helpers
// =============================================================================

fn seeded_app() -> (Router, Arc<DbPool>) {
    let pool = Arc::new(init_test_db());
    seed_sample_data(&pool, false).unwrap();
    (create_router(pool.clone()), pool)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    let request = builder
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

fn hero_power_count(pool: &DbPool) -> i64 {
    let conn = pool.0.lock().unwrap();
    conn.query_row("SELECT COUNT(*) FROM hero_powers", [], |r| r.get(0))
        .unwrap()
}

fn validation_errors() -> Value {
    json!({ "errors": ["validation errors"] })
}

// =============================================================================
// Root
// =============================================================================

#[tokio::test]
async fn test_root_message() {
    let (app, _pool) = seeded_app();
    let (status, body) = send(&app, Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Superheroes API is running" }));
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let (app, _pool) = seeded_app();
    let (status, body) = send(&app, Method::GET, "/villains", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Not found");
}

// =============================================================================
// Heroes
// =============================================================================

#[tokio::test]
async fn test_list_heroes() {
    let (app, _pool) = seeded_app();
    let (status, body) = send(&app, Method::GET, "/heroes", None).await;
    assert_eq!(status, StatusCode::OK);

    let heroes = body.as_array().unwrap();
    assert_eq!(heroes.len(), 10);
    assert_eq!(
        heroes[0],
        json!({ "id": 1, "name": "Kamala Khan", "super_name": "Ms. Marvel" })
    );
    assert!(heroes[0].get("hero_powers").is_none());
}

#[tokio::test]
async fn test_get_hero_with_powers() {
    let (app, _pool) = seeded_app();
    let (status, body) = send(&app, Method::GET, "/heroes/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["super_name"], "Ms. Marvel");

    let hero_powers = body["hero_powers"].as_array().unwrap();
    assert_eq!(hero_powers.len(), 2);
    let hp = &hero_powers[0];
    assert_eq!(hp["hero_id"], 1);
    assert_eq!(hp["strength"], "Strong");
    assert_eq!(hp["power"]["id"], hp["power_id"]);
    assert_eq!(hp["power"]["name"], "elasticity");
}

#[tokio::test]
async fn test_get_missing_hero() {
    let (app, _pool) = seeded_app();
    let (status, body) = send(&app, Method::GET, "/heroes/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Hero not found" }));

    let (status, body) = send(&app, Method::GET, "/heroes/abc", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Hero not found" }));
}

// =============================================================================
// Powers
// =============================================================================

#[tokio::test]
async fn test_list_and_get_powers() {
    let (app, _pool) = seeded_app();
    let (status, body) = send(&app, Method::GET, "/powers", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 4);

    let (status, body) = send(&app, Method::GET, "/powers/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": 2,
            "name": "flight",
            "description": "gives the wielder the ability to fly through the skies at supersonic speed"
        })
    );
}

#[tokio::test]
async fn test_get_missing_power() {
    let (app, _pool) = seeded_app();
    let (status, body) = send(&app, Method::GET, "/powers/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Power not found" }));
}

#[tokio::test]
async fn test_patch_power_valid() {
    let (app, _pool) = seeded_app();
    let text = "Valid Updated Description that is long enough";
    let (status, body) = send(
        &app,
        Method::PATCH,
        "/powers/1",
        Some(&json!({ "description": text }).to_string()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
    assert_eq!(body["description"], text);

    let (_, body) = send(&app, Method::GET, "/powers/1", None).await;
    assert_eq!(body["description"], text);
}

#[tokio::test]
async fn test_patch_power_short_description() {
    let (app, _pool) = seeded_app();
    let (_, original) = send(&app, Method::GET, "/powers/1", None).await;

    let (status, body) = send(
        &app,
        Method::PATCH,
        "/powers/1",
        Some(r#"{"description": "   too short    "}"#),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, validation_errors());

    let (_, after) = send(&app, Method::GET, "/powers/1", None).await;
    assert_eq!(after, original);
}

#[tokio::test]
async fn test_patch_power_null_description() {
    let (app, _pool) = seeded_app();
    let (status, body) = send(
        &app,
        Method::PATCH,
        "/powers/1",
        Some(r#"{"description": null}"#),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, validation_errors());
}

#[tokio::test]
async fn test_patch_power_missing_or_malformed_body() {
    let (app, _pool) = seeded_app();
    let (_, original) = send(&app, Method::GET, "/powers/3", None).await;

    let (status, body) = send(&app, Method::PATCH, "/powers/3", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, original);

    let (status, body) = send(&app, Method::PATCH, "/powers/3", Some("{not json")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, original);
}

#[tokio::test]
async fn test_patch_missing_power() {
    let (app, _pool) = seeded_app();
    let (status, body) = send(
        &app,
        Method::PATCH,
        "/powers/999",
        Some(r#"{"description": "a perfectly valid long description"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Power not found" }));
}

// =============================================================================
// Hero powers
// =============================================================================

#[tokio::test]
async fn test_create_hero_power() {
    let (app, pool) = seeded_app();
    let before = hero_power_count(&pool);

    let (status, body) = send(
        &app,
        Method::POST,
        "/hero_powers",
        Some(r#"{"hero_id": 1, "power_id": 1, "strength": "Strong"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["hero_id"], 1);
    assert_eq!(body["power_id"], 1);
    assert_eq!(body["strength"], "Strong");
    assert_eq!(
        body["hero"],
        json!({ "id": 1, "name": "Kamala Khan", "super_name": "Ms. Marvel" })
    );
    assert_eq!(body["power"]["name"], "super strength");
    assert!(body["id"].as_i64().is_some());
    assert_eq!(hero_power_count(&pool), before + 1);
}

#[tokio::test]
async fn test_create_hero_power_with_float_ids() {
    let (app, _pool) = seeded_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/hero_powers",
        Some(r#"{"hero_id": 1.0, "power_id": 2.0, "strength": "Weak"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["hero_id"], 1);
    assert_eq!(body["power_id"], 2);

    let (status, body) = send(
        &app,
        Method::POST,
        "/hero_powers",
        Some(r#"{"hero_id": 1.5, "power_id": 2, "strength": "Weak"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, validation_errors());
}

#[tokio::test]
async fn test_create_hero_power_rejections() {
    let (app, pool) = seeded_app();
    let before = hero_power_count(&pool);

    let bodies = [
        Some(r#"{"hero_id": 1, "power_id": 1, "strength": "Mighty"}"#),
        Some(r#"{"hero_id": 999, "power_id": 1, "strength": "Strong"}"#),
        Some(r#"{"hero_id": 1, "power_id": 999, "strength": "Weak"}"#),
        Some(r#"{"hero_id": 1, "power_id": 1}"#),
        Some("not json at all"),
        None,
    ];
    for body in bodies {
        let (status, json) = send(&app, Method::POST, "/hero_powers", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body:?}");
        assert_eq!(json, validation_errors());
    }
    assert_eq!(hero_power_count(&pool), before);
}

#[tokio::test]
async fn test_created_hero_power_shows_on_hero() {
    let (app, _pool) = seeded_app();
    let (status, _) = send(
        &app,
        Method::POST,
        "/hero_powers",
        Some(r#"{"hero_id": 2, "power_id": 4, "strength": "Average"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, hero) = send(&app, Method::GET, "/heroes/2", None).await;
    let hero_powers = hero["hero_powers"].as_array().unwrap();
    assert!(hero_powers
        .iter()
        .any(|hp| hp["power_id"] == 4 && hp["strength"] == "Average"));
}
