use dashtour_core::model::{CameraPrefs, ProgressSnapshot};
use dashtour_core::time::fixed_now;
use storage::repository::Storage;

async fn storage() -> Storage {
    Storage::sqlite("sqlite::memory:").await.unwrap()
}

#[tokio::test]
async fn progress_roundtrips_through_sqlite() {
    let storage = storage().await;

    assert!(storage.progress.load_progress().await.unwrap().is_none());

    let snapshot = ProgressSnapshot::new(4, 11, fixed_now()).unwrap();
    storage.progress.save_progress(&snapshot).await.unwrap();

    let loaded = storage.progress.load_progress().await.unwrap().unwrap();
    assert_eq!(loaded, snapshot);
    assert_eq!(loaded.current_module(), 4);
    assert_eq!(loaded.percent_complete(), 36);
}

#[tokio::test]
async fn progress_overwrite_keeps_latest() {
    let storage = storage().await;

    let first = ProgressSnapshot::new(1, 11, fixed_now()).unwrap();
    let later = fixed_now() + chrono::Duration::minutes(5);
    let second = ProgressSnapshot::new(2, 11, later).unwrap();

    storage.progress.save_progress(&first).await.unwrap();
    storage.progress.save_progress(&second).await.unwrap();

    let loaded = storage.progress.load_progress().await.unwrap().unwrap();
    assert_eq!(loaded.current_module(), 2);
    assert_eq!(loaded.last_updated(), later);
}

#[tokio::test]
async fn clear_progress_removes_key() {
    let storage = storage().await;

    let snapshot = ProgressSnapshot::new(7, 11, fixed_now()).unwrap();
    storage.progress.save_progress(&snapshot).await.unwrap();
    storage.progress.clear_progress().await.unwrap();

    assert!(storage.progress.load_progress().await.unwrap().is_none());
}

#[tokio::test]
async fn camera_prefs_sentinels_roundtrip() {
    let storage = storage().await;

    assert_eq!(
        storage.camera_prefs.load_prefs().await.unwrap(),
        CameraPrefs::default()
    );

    let prefs = CameraPrefs {
        fallback_mode: false,
        test_mode: true,
    };
    storage.camera_prefs.save_prefs(&prefs).await.unwrap();
    assert_eq!(storage.camera_prefs.load_prefs().await.unwrap(), prefs);

    storage
        .camera_prefs
        .save_prefs(&CameraPrefs::default())
        .await
        .unwrap();
    assert_eq!(
        storage.camera_prefs.load_prefs().await.unwrap(),
        CameraPrefs::default()
    );
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let repo = storage::sqlite::SqliteRepository::connect("sqlite::memory:")
        .await
        .unwrap();
    repo.migrate().await.unwrap();
    repo.migrate().await.unwrap();
}
