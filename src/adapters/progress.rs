use crate::domain::model::ResumeCursor;
use crate::domain::ports::ProgressStore;
use crate::utils::error::Result;
use std::path::PathBuf;

/// Cursor persisted as pretty-printed JSON in a single small file. The file
/// is rewritten wholesale on each save and never removed by the tool itself;
/// deleting it restarts the harvest from scratch.
#[derive(Debug, Clone)]
pub struct FileProgressStore {
    path: PathBuf,
}

impl FileProgressStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ProgressStore for FileProgressStore {
    fn load(&self) -> Result<ResumeCursor> {
        if !self.path.exists() {
            tracing::info!("No progress file at {}, starting fresh", self.path.display());
            return Ok(ResumeCursor::default());
        }

        let content = std::fs::read_to_string(&self.path)?;
        match serde_json::from_str::<ResumeCursor>(&content) {
            Ok(cursor) => {
                tracing::info!(
                    "Resumed previous session: region {}, page {}",
                    cursor.region,
                    cursor.page
                );
                Ok(cursor)
            }
            Err(e) => {
                tracing::error!(
                    "Failed to parse progress file {}: {}. Starting fresh.",
                    self.path.display(),
                    e
                );
                Ok(ResumeCursor::default())
            }
        }
    }

    fn save(&self, cursor: &ResumeCursor) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(cursor)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }
}
