use super::{json_object, run_blocking, AppState};
use crate::app::{hero_power_create, HeroPowerCreateReq, HeroPowerDto};
use crate::error::AppError;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

pub(super) async fn create(
    State(pool): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<HeroPowerDto>), AppError> {
    let mut fields = json_object(&body);
    let req = HeroPowerCreateReq {
        hero_id: fields.remove("hero_id"),
        power_id: fields.remove("power_id"),
        strength: fields.remove("strength"),
    };
    let dto = run_blocking(&pool, move |p| hero_power_create(p, req)).await?;
    Ok((StatusCode::CREATED, Json(dto)))
}
