use std::io::ErrorKind;
use std::path::PathBuf;

use shared::{BoardEntry, Result};
use tokio::fs;

// The board file is the sole source of truth; every mutation rewrites it
// whole.
#[derive(Clone)]
pub struct BoardRepository {
    path: PathBuf,
}

impl BoardRepository {

    /// Create a new board repository
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub async fn load(&self) -> Result<Vec<BoardEntry>> {
        let raw = match fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "Board file missing, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        Ok(serde_json::from_slice(&raw)?)
    }

    pub async fn store(&self, board: &[BoardEntry]) -> Result<()> {
        let raw = serde_json::to_vec_pretty(board)?;
        fs::write(&self.path, raw).await?;

        Ok(())
    }
}
