//! HTTP handlers (DTO boundary) and router.

mod hero;
mod hero_power;
mod power;

use crate::error::AppError;
use crate::infra::DbPool;
use axum::body::Bytes;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Map, Value};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, TraceLayer};

/// Shared application state: the database handle, injected into every handler.
pub type AppState = Arc<DbPool>;

/// Create the Axum router with all routes.
pub fn create_router(pool: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/heroes", get(hero::list))
        .route("/heroes/{id}", get(hero::show))
        .route("/powers", get(power::list))
        .route("/powers/{id}", get(power::show).patch(power::update))
        .route("/hero_powers", post(hero_power::create))
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
        .layer(CorsLayer::permissive())
        .with_state(pool)
}

async fn root_handler() -> Json<Value> {
    Json(json!({ "message": "Superheroes API is running" }))
}

async fn not_found_handler() -> (StatusCode, Json<Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" })))
}

/// Lenient body decoding: anything that is not a JSON object is an empty one.
fn json_object(body: &Bytes) -> Map<String, Value> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

/// Runs a use case on the blocking pool with its own handle to the database.
async fn run_blocking<T, F>(pool: &AppState, f: F) -> Result<T, AppError>
where
    F: FnOnce(&DbPool) -> Result<T, AppError> + Send + 'static,
    T: Send + 'static,
{
    let pool = Arc::clone(pool);
    tokio::task::spawn_blocking(move || f(pool.as_ref()))
        .await
        .map_err(|e| AppError::Db(format!("use case task failed: {e}")))?
}

/// Non-numeric ids are treated like ids that do not exist.
fn parse_id(raw: &str) -> Option<i64> {
    raw.parse().ok()
}
