//! HTTP handlers
//!
//! Each handler resolves the caller's identity and makes exactly one call
//! into the session manager.

use super::AppState;
use super::dto::{GuessRequest, GuessResponse, SessionView, StartGameResponse, StatsResponse};
use super::error::ApiErrorResponse;
use crate::game::SessionId;
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
};

type ApiResult<T> = Result<T, ApiErrorResponse>;

/// `GET /health`
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "OK" }))
}

/// `POST /game/start`
pub async fn start_game(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<(StatusCode, Json<StartGameResponse>)> {
    let player = state.identity.resolve(&headers);
    let session = state.game.start_session(&player)?;
    Ok((StatusCode::CREATED, Json(StartGameResponse::from(&session))))
}

/// `POST /game/guess`
pub async fn submit_guess(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<GuessRequest>, JsonRejection>,
) -> ApiResult<Json<GuessResponse>> {
    let Json(request) = payload?;
    let player = state.identity.resolve(&headers);
    let session_id = request
        .game_id
        .as_deref()
        .map(str::parse::<SessionId>)
        .transpose()?;

    let outcome = state
        .game
        .submit_guess(&player, session_id, &request.guess)?;
    Ok(Json(GuessResponse::from(outcome)))
}

/// `GET /game/current`
pub async fn current_game(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<Json<SessionView>> {
    let player = state.identity.resolve(&headers);
    state
        .game
        .active_session(&player)
        .map(|session| Json(SessionView::from(&session)))
        .ok_or_else(ApiErrorResponse::no_active_game)
}

/// `GET /game/{id}`
pub async fn get_game(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> ApiResult<Json<SessionView>> {
    let player = state.identity.resolve(&headers);
    let session = state.game.session(&player, id.parse()?)?;
    Ok(Json(SessionView::from(&session)))
}

/// `GET /player/stats`
pub async fn player_stats(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Json<StatsResponse> {
    let player = state.identity.resolve(&headers);
    Json(StatsResponse::from(&state.game.statistics(&player)))
}
