use std::sync::Arc;

use api_service::domain::TokenSigner;
use api_service::http_server::{router, AppState};
use api_service::repository::{BoardRepository, CredentialStore};
use api_service::service::{AuthService, LeaderboardService};
use shared::config::{AuthConfig, BoardConfig, ServerConfig};
use shared::errors::Result;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let metrics_port: u16 = std::env::var("METRICS_PORT")
        .unwrap_or_else(|_| "9090".to_string())
        .parse()
        .expect("METRICS_PORT must be a valid port number");

    shared::init_telemetry("api-service", metrics_port).expect("Failed to initialize telemetry");

    info!("Starting API Service");

    let server_config = ServerConfig::from_env()?;
    let auth_config = AuthConfig::from_env()?;
    let board_config = BoardConfig::from_env()?;

    info!("Configuration:");
    info!("  Port: {}", server_config.port);
    info!("  Board file: {}", board_config.file.display());
    info!("  Token TTL: {}s", auth_config.token_ttl_secs);

    let signer = TokenSigner::new(&auth_config.jwt_secret, auth_config.token_ttl_secs);
    let auth = AuthService::new(CredentialStore::with_defaults(), signer);

    // No session lookup exists here, so no identity provider is wired in:
    // submissions fall back to the anonymous user and /me needs an explicit
    // username.
    let leaderboard = LeaderboardService::new(BoardRepository::new(board_config.file), None);

    let state = AppState {
        auth: Arc::new(auth),
        leaderboard: Arc::new(leaderboard),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = router(state).layer(cors);

    let addr = format!("0.0.0.0:{}", server_config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("API Service listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to listen for ctrl-c");
            info!("Shutdown signal received");
        })
        .await?;

    info!("API Service stopped");
    Ok(())
}
