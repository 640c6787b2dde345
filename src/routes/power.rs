use super::{json_object, parse_id, run_blocking, AppState};
use crate::app::{power_get, power_list, power_update, PowerDto, PowerUpdateReq};
use crate::error::AppError;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::Json;

pub(super) async fn list(State(pool): State<AppState>) -> Result<Json<Vec<PowerDto>>, AppError> {
    run_blocking(&pool, power_list).await.map(Json)
}

pub(super) async fn show(
    State(pool): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PowerDto>, AppError> {
    let id = parse_id(&id).ok_or_else(AppError::power_not_found)?;
    run_blocking(&pool, move |p| power_get(p, id)).await.map(Json)
}

pub(super) async fn update(
    State(pool): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<PowerDto>, AppError> {
    let id = parse_id(&id).ok_or_else(AppError::power_not_found)?;
    let mut fields = json_object(&body);
    let req = PowerUpdateReq {
        description: fields.remove("description"),
    };
    run_blocking(&pool, move |p| power_update(p, id, req))
        .await
        .map(Json)
}
