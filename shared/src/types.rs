use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

// Millisecond UTC with a Z suffix; lexicographic order matches chronological.
pub fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub username: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub username: String,
    pub exp: usize,
}

impl Claims {
    pub fn new(username: impl Into<String>, ttl_secs: i64) -> Self {
        Self {
            username: username.into(),
            exp: (Utc::now().timestamp() + ttl_secs) as usize,
        }
    }
}

// Older board files wrote `score` instead of `time` and sometimes dropped
// timestamps, so everything but the username is optional and absent fields
// stay absent on rewrite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardEntry {
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl BoardEntry {
    pub fn new(username: impl Into<String>, time: f64, now: &str) -> Self {
        Self {
            username: username.into(),
            time: Some(time),
            score: Some(time),
            created_at: Some(now.to_string()),
            updated_at: Some(now.to_string()),
        }
    }

    // The value this entry ranks by: `time` wins over the legacy `score`.
    pub fn effective_time(&self) -> Option<f64> {
        self.time
            .filter(|t| t.is_finite())
            .or(self.score.filter(|s| s.is_finite()))
    }

    pub fn record_time(&mut self, time: f64, now: &str) -> bool {
        let improved = match self.effective_time() {
            Some(best) => time < best,
            None => true,
        };
        if improved {
            self.time = Some(time);
            if self.score.is_some() {
                self.score = Some(time);
            }
        }
        // A worse run still refreshes updatedAt.
        self.updated_at = Some(now.to_string());
        improved
    }

    pub fn normalize(&self) -> NormalizedEntry {
        NormalizedEntry {
            username: self.username.clone(),
            time: self.effective_time(),
            created_at: self.created_at.clone().or_else(|| self.updated_at.clone()),
            updated_at: self.updated_at.clone().or_else(|| self.created_at.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedEntry {
    pub username: String,
    pub time: Option<f64>,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<String>,
}
