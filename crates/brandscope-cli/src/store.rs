//! JSON-file profile store: one `<project_id>.json` per project.

use std::path::{Path, PathBuf};

use brandscope_core::{BrandProfile, ProfileStore, StoreError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StoredProfile {
    pub project_id: String,
    pub stored_at: DateTime<Utc>,
    pub profile: BrandProfile,
}

pub(crate) struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub(crate) fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, project_id: &str) -> Result<PathBuf, StoreError> {
        let valid = !project_id.is_empty()
            && project_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StoreError::InvalidProjectId(project_id.to_owned()));
        }
        Ok(self.dir.join(format!("{project_id}.json")))
    }
}

fn io_error(path: &Path, source: std::io::Error) -> StoreError {
    StoreError::Io {
        path: path.display().to_string(),
        source,
    }
}

impl ProfileStore for JsonFileStore {
    async fn store(&self, project_id: &str, profile: &BrandProfile) -> Result<String, StoreError> {
        let path = self.path_for(project_id)?;
        let record = StoredProfile {
            project_id: project_id.to_owned(),
            stored_at: Utc::now(),
            profile: profile.clone(),
        };
        let body = serde_json::to_vec_pretty(&record)?;

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| io_error(&self.dir, e))?;
        tokio::fs::write(&path, body)
            .await
            .map_err(|e| io_error(&path, e))?;

        tracing::info!(project_id, path = %path.display(), "profile stored");
        Ok(path.display().to_string())
    }

    async fn load(&self, project_id: &str) -> Result<BrandProfile, StoreError> {
        let path = self.path_for(project_id)?;
        let body = match tokio::fs::read(&path).await {
            Ok(body) => body,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StoreError::NotFound(project_id.to_owned()));
            }
            Err(e) => return Err(io_error(&path, e)),
        };
        let record: StoredProfile = serde_json::from_slice(&body)?;
        Ok(record.profile)
    }
}
