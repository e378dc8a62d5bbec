pub mod domain;
pub mod http_server;
pub mod repository;
pub mod service;

pub use http_server::{router, AppState};
pub use repository::{BoardRepository, CredentialStore};
pub use service::{AuthService, LeaderboardService};
