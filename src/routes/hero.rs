use super::{parse_id, run_blocking, AppState};
use crate::app::{hero_get, hero_list, HeroDetailDto, HeroDto};
use crate::error::AppError;
use axum::extract::{Path, State};
use axum::Json;

pub(super) async fn list(State(pool): State<AppState>) -> Result<Json<Vec<HeroDto>>, AppError> {
    run_blocking(&pool, hero_list).await.map(Json)
}

pub(super) async fn show(
    State(pool): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<HeroDetailDto>, AppError> {
    let id = parse_id(&id).ok_or_else(AppError::hero_not_found)?;
    run_blocking(&pool, move |p| hero_get(p, id)).await.map(Json)
}
