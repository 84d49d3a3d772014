use async_trait::async_trait;

use crate::repository::{ProgressRepository, StorageError, keys};
use dashtour_core::model::ProgressSnapshot;

use super::SqliteRepository;

#[async_trait]
impl ProgressRepository for SqliteRepository {
    async fn load_progress(&self) -> Result<Option<ProgressSnapshot>, StorageError> {
        let Some(raw) = self.kv_get(keys::TUTORIAL_PROGRESS).await? else {
            return Ok(None);
        };

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|err| StorageError::Serialization(err.to_string()))
    }

    async fn save_progress(&self, snapshot: &ProgressSnapshot) -> Result<(), StorageError> {
        let raw = serde_json::to_string(snapshot)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        self.kv_put(keys::TUTORIAL_PROGRESS, &raw).await
    }

    async fn clear_progress(&self) -> Result<(), StorageError> {
        self.kv_delete(keys::TUTORIAL_PROGRESS).await
    }
}
