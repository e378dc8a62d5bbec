use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use shared::{NormalizedEntry, Result};

use super::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    // Kept raw; the service decides what counts as a valid time. Older
    // clients sent the run under `score`.
    #[serde(default, deserialize_with = "present")]
    pub time: Option<Value>,
    pub score: Option<Value>,
    pub username: Option<String>,
}

// A null time is still a present time: it must fail validation rather than
// fall back to `score`.
fn present<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub ok: bool,
    pub entry: Option<NormalizedEntry>,
    pub leaderboard: Vec<NormalizedEntry>,
}

#[derive(Debug, Deserialize)]
pub struct TopQuery {
    pub limit: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MeQuery {
    pub username: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub username: String,
    pub entry: Option<NormalizedEntry>,
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>> {
    let token = state.auth.login(&req.username, &req.password)?;

    Ok(Json(LoginResponse { token }))
}

pub async fn submit_run(
    State(state): State<AppState>,
    Json(req): Json<SubmitRequest>,
) -> Result<Json<SubmitResponse>> {
    let username = req.username.filter(|u| !u.is_empty());
    let raw_time = req.time.or(req.score);

    let outcome = state.leaderboard.submit(username, raw_time).await?;

    Ok(Json(SubmitResponse {
        ok: true,
        entry: outcome.entry,
        leaderboard: outcome.leaderboard,
    }))
}

pub async fn top_runs(
    State(state): State<AppState>,
    Query(query): Query<TopQuery>,
) -> Result<Json<Vec<NormalizedEntry>>> {
    // Anything that does not parse as a number falls back to the default.
    let limit = query
        .limit
        .as_deref()
        .and_then(|s| s.trim().parse::<i64>().ok());

    let top = state.leaderboard.top(limit).await?;

    Ok(Json(top))
}

pub async fn my_entry(
    State(state): State<AppState>,
    Query(query): Query<MeQuery>,
) -> Result<Json<MeResponse>> {
    let username = query.username.filter(|u| !u.is_empty());

    let outcome = state.leaderboard.me(username).await?;

    Ok(Json(MeResponse {
        username: outcome.username,
        entry: outcome.entry,
    }))
}

pub async fn health_check() -> &'static str {
    "OK"
}
