use std::sync::Arc;
use std::time::Instant;

use serde_json::Value;
use shared::{now_timestamp, BoardEntry, NormalizedEntry, Result, ServiceError};

use crate::domain::{ranking_order, IdentityProvider};
use crate::repository::BoardRepository;

// Entries kept in the board file; anything ranked past this is dropped for
// good on the next write.
pub const MAX_ENTRIES: usize = 100;

pub const DEFAULT_TOP: usize = 10;

// Identity used for submissions that name no user at all.
pub const ANONYMOUS_USER: &str = "anonymous";

#[derive(Debug, Clone)]
pub struct SubmitOutcome {
    // None when the run ranked past the cap and fell off the board.
    pub entry: Option<NormalizedEntry>,
    pub leaderboard: Vec<NormalizedEntry>,
}

#[derive(Debug, Clone)]
pub struct MeOutcome {
    pub username: String,
    pub entry: Option<NormalizedEntry>,
}

pub struct LeaderboardService {
    repo: BoardRepository,
    identity: Option<Arc<dyn IdentityProvider>>,
    write_lock: tokio::sync::Mutex<()>,
}

impl LeaderboardService {

    pub fn new(repo: BoardRepository, identity: Option<Arc<dyn IdentityProvider>>) -> Self {
        Self {
            repo,
            identity,
            write_lock: tokio::sync::Mutex::new(()),
        }
    }

    fn identity_username(&self) -> Option<String> {
        self.identity.as_ref().and_then(|p| p.current_username())
    }

    #[tracing::instrument(skip(self, raw_time))]
    pub async fn submit(
        &self,
        username: Option<String>,
        raw_time: Option<Value>,
    ) -> Result<SubmitOutcome> {
        let total_start = Instant::now();

        shared::record_counter("api_service.submit.requests", 1);

        let time = match raw_time.as_ref().and_then(coerce_time) {
            Some(t) if t.is_finite() && t > 0.0 => t,
            _ => {
                shared::record_counter("api_service.submit.invalid_time", 1);
                return Err(ServiceError::InvalidTime);
            }
        };

        let username = username
            .or_else(|| self.identity_username())
            .unwrap_or_else(|| ANONYMOUS_USER.to_string());

        // One writer at a time; racing load-modify-store cycles lose runs.
        let _guard = self.write_lock.lock().await;

        let mut board = self.repo.load().await?;
        let now = now_timestamp();

        let improved = match board.iter_mut().find(|e| e.username == username) {
            Some(entry) => entry.record_time(time, &now),
            None => {
                board.push(BoardEntry::new(username.clone(), time, &now));
                true
            }
        };

        board.sort_by(ranking_order);
        board.truncate(MAX_ENTRIES);

        self.repo.store(&board).await?;

        let entry = board
            .iter()
            .find(|e| e.username == username)
            .map(BoardEntry::normalize);
        let leaderboard = board
            .iter()
            .take(DEFAULT_TOP)
            .map(BoardEntry::normalize)
            .collect();

        shared::record_gauge("api_service.board.entries", board.len() as f64);
        shared::record_timing(
            "api_service.submit.total_latency",
            total_start.elapsed().as_secs_f64(),
        );
        shared::record_counter("api_service.submit.success", 1);

        tracing::info!(
            username = %username,
            time = time,
            improved = improved,
            entries = board.len(),
            "Run submitted"
        );

        Ok(SubmitOutcome { entry, leaderboard })
    }

    pub async fn top(&self, limit: Option<i64>) -> Result<Vec<NormalizedEntry>> {
        shared::record_counter("api_service.top.requests", 1);

        let limit = limit
            .filter(|n| *n > 0)
            .map(|n| (n as usize).min(MAX_ENTRIES))
            .unwrap_or(DEFAULT_TOP);

        // Files written by older deployments are not guaranteed to be in
        // rank order, so sort on every read.
        let mut board = self.repo.load().await?;
        board.sort_by(ranking_order);

        tracing::debug!(limit = limit, entries = board.len(), "Serving top entries");

        Ok(board
            .iter()
            .take(limit)
            .map(BoardEntry::normalize)
            .collect())
    }

    pub async fn me(&self, username: Option<String>) -> Result<MeOutcome> {
        shared::record_counter("api_service.me.requests", 1);

        let username = username
            .or_else(|| self.identity_username())
            .ok_or(ServiceError::NoUsernameAvailable)?;

        let board = self.repo.load().await?;
        let entry = board
            .iter()
            .find(|e| e.username == username)
            .map(BoardEntry::normalize);

        Ok(MeOutcome { username, entry })
    }
}

// Older clients sent the run as a numeric string, so both shapes coerce.
fn coerce_time(raw: &Value) -> Option<f64> {
    match raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}
