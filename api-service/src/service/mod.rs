pub mod auth_service;
pub mod leaderboard_service;

pub use auth_service::AuthService;
pub use leaderboard_service::{LeaderboardService, MeOutcome, SubmitOutcome};
