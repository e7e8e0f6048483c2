//! Driver catalog endpoints

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use fb_store::Driver;

use super::any_origin;
use crate::dto::NameQuery;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/drivers", get(get_all_drivers).post(create_driver))
        .route("/api/drivers/search", get(search_drivers_by_name))
        .route(
            "/api/drivers/nationality/:nationality",
            get(get_drivers_by_nationality),
        )
        .route("/api/drivers/team/:team_id", get(get_drivers_by_team))
        .route(
            "/api/drivers/:id",
            get(get_driver_by_id).put(update_driver).delete(delete_driver),
        )
        .layer(any_origin())
}

pub async fn get_all_drivers(State(state): State<AppState>) -> ApiResult<Json<Vec<Driver>>> {
    Ok(Json(state.services.drivers.get_all_drivers().await?))
}

pub async fn get_driver_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Driver>> {
    let driver = state
        .services
        .drivers
        .get_driver_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Driver", id))?;

    Ok(Json(driver))
}

pub async fn get_drivers_by_nationality(
    State(state): State<AppState>,
    Path(nationality): Path<String>,
) -> ApiResult<Json<Vec<Driver>>> {
    Ok(Json(
        state
            .services
            .drivers
            .get_drivers_by_nationality(&nationality)
            .await?,
    ))
}

pub async fn get_drivers_by_team(
    State(state): State<AppState>,
    Path(team_id): Path<i64>,
) -> ApiResult<Json<Vec<Driver>>> {
    Ok(Json(state.services.drivers.get_drivers_by_team(team_id).await?))
}

pub async fn search_drivers_by_name(
    State(state): State<AppState>,
    Query(query): Query<NameQuery>,
) -> ApiResult<Json<Vec<Driver>>> {
    Ok(Json(
        state
            .services
            .drivers
            .search_drivers_by_name(&query.name)
            .await?,
    ))
}

pub async fn create_driver(
    State(state): State<AppState>,
    payload: Result<Json<Driver>, JsonRejection>,
) -> ApiResult<Json<Driver>> {
    let Json(driver) = payload?;
    Ok(Json(state.services.drivers.create_driver(driver).await?))
}

pub async fn update_driver(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<Driver>, JsonRejection>,
) -> ApiResult<Json<Driver>> {
    let Json(driver) = payload?;
    let updated = state
        .services
        .drivers
        .replace_driver(id, driver)
        .await?
        .ok_or_else(|| ApiError::not_found("Driver", id))?;

    Ok(Json(updated))
}

pub async fn delete_driver(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    if state.services.drivers.remove_driver(id).await? {
        Ok(StatusCode::OK)
    } else {
        Err(ApiError::not_found("Driver", id))
    }
}
