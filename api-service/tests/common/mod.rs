use std::path::PathBuf;
use std::sync::Arc;

use api_service::domain::{IdentityProvider, TokenSigner};
use api_service::http_server::{router, AppState};
use api_service::repository::{BoardRepository, CredentialStore};
use api_service::service::{AuthService, LeaderboardService};
use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::Router;
use serde_json::Value;
use shared::Credential;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "test-secret";

pub fn temp_board_path(tag: &str) -> PathBuf {
    let id = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("test_api_board_{}_{}.json", tag, id))
}

pub struct FixedIdentity(pub &'static str);

impl IdentityProvider for FixedIdentity {
    fn current_username(&self) -> Option<String> {
        Some(self.0.to_string())
    }
}

pub fn test_credentials(username: &str, password: &str) -> CredentialStore {
    // Minimum bcrypt cost.
    let hash = bcrypt::hash(password, 4).expect("Failed to hash test password");
    CredentialStore::new(vec![Credential {
        username: username.to_string(),
        password_hash: hash,
    }])
}

pub fn test_app(board_path: PathBuf, identity: Option<Arc<dyn IdentityProvider>>) -> Router {
    let signer = TokenSigner::new(TEST_SECRET, 3600);
    let auth = AuthService::new(test_credentials("admin", "1234"), signer);
    let leaderboard = LeaderboardService::new(BoardRepository::new(board_path), identity);

    router(AppState {
        auth: Arc::new(auth),
        leaderboard: Arc::new(leaderboard),
    })
}

pub async fn send_raw(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (u16, Vec<u8>) {
    let request = match body {
        Some(body) => Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("Failed to build request"),
        None => Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request"),
    };

    let response = app.clone().oneshot(request).await.expect("Request failed");
    let status = response.status().as_u16();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    (status, bytes.to_vec())
}

pub async fn send_json(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (u16, Value) {
    let (status, bytes) = send_raw(app, method, uri, body).await;
    let value = serde_json::from_slice(&bytes).expect("Response body was not JSON");

    (status, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_board_paths_are_unique() {
        assert_ne!(temp_board_path("a"), temp_board_path("a"));
    }
}
