//! Track catalog endpoints

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use fb_store::Track;

use super::any_origin;
use crate::dto::NameQuery;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/tracks", get(get_all_tracks).post(create_track))
        .route("/api/tracks/search", get(search_tracks_by_name))
        .route("/api/tracks/country/:country", get(get_tracks_by_country))
        .route(
            "/api/tracks/:id",
            get(get_track_by_id).put(update_track).delete(delete_track),
        )
        .layer(any_origin())
}

pub async fn get_all_tracks(State(state): State<AppState>) -> ApiResult<Json<Vec<Track>>> {
    Ok(Json(state.services.tracks.get_all_tracks().await?))
}

pub async fn get_track_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Track>> {
    let track = state
        .services
        .tracks
        .get_track_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Track", id))?;

    Ok(Json(track))
}

pub async fn get_tracks_by_country(
    State(state): State<AppState>,
    Path(country): Path<String>,
) -> ApiResult<Json<Vec<Track>>> {
    Ok(Json(state.services.tracks.get_tracks_by_country(&country).await?))
}

pub async fn search_tracks_by_name(
    State(state): State<AppState>,
    Query(query): Query<NameQuery>,
) -> ApiResult<Json<Vec<Track>>> {
    Ok(Json(state.services.tracks.search_tracks_by_name(&query.name).await?))
}

pub async fn create_track(
    State(state): State<AppState>,
    payload: Result<Json<Track>, JsonRejection>,
) -> ApiResult<Json<Track>> {
    let Json(track) = payload?;
    Ok(Json(state.services.tracks.create_track(track).await?))
}

pub async fn update_track(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<Track>, JsonRejection>,
) -> ApiResult<Json<Track>> {
    let Json(track) = payload?;
    let updated = state
        .services
        .tracks
        .replace_track(id, track)
        .await?
        .ok_or_else(|| ApiError::not_found("Track", id))?;

    Ok(Json(updated))
}

pub async fn delete_track(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    if state.services.tracks.remove_track(id).await? {
        Ok(StatusCode::OK)
    } else {
        Err(ApiError::not_found("Track", id))
    }
}
