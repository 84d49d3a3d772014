use async_trait::async_trait;

use crate::repository::{CameraPrefsRepository, StorageError, keys};
use dashtour_core::model::CameraPrefs;

use super::SqliteRepository;

#[async_trait]
impl CameraPrefsRepository for SqliteRepository {
    async fn load_prefs(&self) -> Result<CameraPrefs, StorageError> {
        let fallback_mode =
            self.kv_get(keys::FALLBACK_MODE).await?.as_deref() == Some(keys::SENTINEL_TRUE);
        let test_mode =
            self.kv_get(keys::TEST_MODE).await?.as_deref() == Some(keys::SENTINEL_TRUE);

        Ok(CameraPrefs {
            fallback_mode,
            test_mode,
        })
    }

    async fn save_prefs(&self, prefs: &CameraPrefs) -> Result<(), StorageError> {
        if prefs.fallback_mode {
            self.kv_put(keys::FALLBACK_MODE, keys::SENTINEL_TRUE).await?;
        } else {
            self.kv_delete(keys::FALLBACK_MODE).await?;
        }
        if prefs.test_mode {
            self.kv_put(keys::TEST_MODE, keys::SENTINEL_TRUE).await?;
        } else {
            self.kv_delete(keys::TEST_MODE).await?;
        }
        Ok(())
    }
}
