pub mod handlers;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::service::{AuthService, LeaderboardService};

#[derive(Clone)]
pub struct AppState {
    pub auth: Arc<AuthService>,
    pub leaderboard: Arc<LeaderboardService>,
}

// Paths are the compatibility contract: login at /api/login, the board
// routes under /leaderboard.
pub fn router(state: AppState) -> Router {
    let leaderboard = Router::new()
        .route("/submit", post(handlers::submit_run))
        .route("/top", get(handlers::top_runs))
        .route("/me", get(handlers::my_entry));

    Router::new()
        .route("/api/login", post(handlers::login))
        .nest("/leaderboard", leaderboard)
        .route("/health", get(handlers::health_check))
        .with_state(state)
}
