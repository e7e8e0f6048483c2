//! Race catalog endpoints
//!
//! Read, create and calendar lookups only. No update, delete or name
//! search, and no cross-origin policy.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    routing::get,
    Json, Router,
};
use fb_store::Race;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/v1/race", get(get_all_races).post(create_race))
        .route("/api/v1/race/circuit/:circuit", get(get_races_by_circuit))
        .route("/api/v1/race/year/:year", get(get_season))
        .route("/api/v1/race/:id", get(get_race_by_id))
}

pub async fn get_all_races(State(state): State<AppState>) -> ApiResult<Json<Vec<Race>>> {
    Ok(Json(state.services.races.get_all_races().await?))
}

pub async fn get_race_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Race>> {
    let race = state
        .services
        .races
        .get_race_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Race", id))?;

    Ok(Json(race))
}

/// Create a race; a second race for the same year and round is a 409
pub async fn create_race(
    State(state): State<AppState>,
    payload: Result<Json<Race>, JsonRejection>,
) -> ApiResult<Json<Race>> {
    let Json(race) = payload?;
    Ok(Json(state.services.races.create_race(race).await?))
}

pub async fn get_races_by_circuit(
    State(state): State<AppState>,
    Path(circuit): Path<String>,
) -> ApiResult<Json<Vec<Race>>> {
    Ok(Json(state.services.races.get_races_by_circuit(&circuit).await?))
}

pub async fn get_season(
    State(state): State<AppState>,
    Path(year): Path<i32>,
) -> ApiResult<Json<Vec<Race>>> {
    Ok(Json(state.services.races.get_season(year).await?))
}
