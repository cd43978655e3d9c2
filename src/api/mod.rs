//! Axum HTTP layer over the session manager
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | POST | `/game/start` | Start a new session (ends any active one) |
//! | POST | `/game/guess` | Submit a guess |
//! | GET | `/game/current` | The caller's active session |
//! | GET | `/game/{id}` | One of the caller's sessions |
//! | GET | `/player/stats` | The caller's statistics |

pub mod dto;
pub mod error;
pub mod handlers;
pub mod identity;

use crate::config::GameService;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::{ApiError, ApiErrorResponse};
pub use identity::{PLAYER_HEADER, PlayerResolver};

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub game: Arc<GameService>,
    pub identity: Arc<PlayerResolver>,
}

impl AppState {
    #[must_use]
    pub fn new(game: GameService, identity: PlayerResolver) -> Self {
        Self {
            game: Arc::new(game),
            identity: Arc::new(identity),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/game/start", post(handlers::start_game))
        .route("/game/guess", post(handlers::submit_guess))
        .route("/game/current", get(handlers::current_game))
        .route("/game/{id}", get(handlers::get_game))
        .route("/player/stats", get(handlers::player_stats))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
