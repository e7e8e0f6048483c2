//! Team catalog endpoints

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use fb_store::Team;

use super::any_origin;
use crate::dto::NameQuery;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/teams", get(get_all_teams).post(create_team))
        .route("/api/teams/search", get(search_teams_by_name))
        .route(
            "/api/teams/nationality/:nationality",
            get(get_teams_by_nationality),
        )
        .route("/api/teams/founded/:year", get(get_teams_by_founded_year))
        .route(
            "/api/teams/:id",
            get(get_team_by_id).put(update_team).delete(delete_team),
        )
        .layer(any_origin())
}

pub async fn get_all_teams(State(state): State<AppState>) -> ApiResult<Json<Vec<Team>>> {
    Ok(Json(state.services.teams.get_all_teams().await?))
}

pub async fn get_team_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Team>> {
    let team = state
        .services
        .teams
        .get_team_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Team", id))?;

    Ok(Json(team))
}

pub async fn get_teams_by_nationality(
    State(state): State<AppState>,
    Path(nationality): Path<String>,
) -> ApiResult<Json<Vec<Team>>> {
    Ok(Json(
        state
            .services
            .teams
            .get_teams_by_nationality(&nationality)
            .await?,
    ))
}

pub async fn get_teams_by_founded_year(
    State(state): State<AppState>,
    Path(year): Path<i32>,
) -> ApiResult<Json<Vec<Team>>> {
    Ok(Json(state.services.teams.get_teams_by_founded_year(year).await?))
}

pub async fn search_teams_by_name(
    State(state): State<AppState>,
    Query(query): Query<NameQuery>,
) -> ApiResult<Json<Vec<Team>>> {
    Ok(Json(state.services.teams.search_teams_by_name(&query.name).await?))
}

pub async fn create_team(
    State(state): State<AppState>,
    payload: Result<Json<Team>, JsonRejection>,
) -> ApiResult<Json<Team>> {
    let Json(team) = payload?;
    Ok(Json(state.services.teams.create_team(team).await?))
}

pub async fn update_team(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    payload: Result<Json<Team>, JsonRejection>,
) -> ApiResult<Json<Team>> {
    let Json(team) = payload?;
    let updated = state
        .services
        .teams
        .replace_team(id, team)
        .await?
        .ok_or_else(|| ApiError::not_found("Team", id))?;

    Ok(Json(updated))
}

pub async fn delete_team(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    if state.services.teams.remove_team(id).await? {
        Ok(StatusCode::OK)
    } else {
        Err(ApiError::not_found("Team", id))
    }
}
