use std::sync::Arc;

use services::{CameraPhase, CameraSequencer, SimulatedCamera, UnavailableCamera};
use storage::repository::{CameraPrefsRepository, InMemoryRepository};

#[tokio::test]
async fn denied_camera_falls_back_and_sticks_across_reloads() {
    let prefs = Arc::new(InMemoryRepository::new());

    // First visit: no devices, request refused, user picks fallback.
    let mut sequencer =
        CameraSequencer::new(Arc::new(UnavailableCamera::new()), prefs.clone());
    let phase = sequencer.bootstrap().await.unwrap();
    assert_eq!(phase, CameraPhase::Unrequested);

    assert!(sequencer.request_stream().await.is_err());
    assert_eq!(sequencer.phase(), CameraPhase::Denied);

    sequencer.enable_fallback().await.unwrap();
    drop(sequencer);

    // Reloading any screen re-enters fallback without prompting.
    let mut reloaded =
        CameraSequencer::new(Arc::new(UnavailableCamera::new()), prefs.clone());
    assert_eq!(reloaded.bootstrap().await.unwrap(), CameraPhase::Fallback);

    let stored = prefs.load_prefs().await.unwrap();
    assert!(stored.fallback_mode);
    assert!(!stored.test_mode);
}

#[tokio::test]
async fn test_mode_uses_the_simulated_feed_without_real_acquisition() {
    let prefs = Arc::new(InMemoryRepository::new());
    let camera = Arc::new(SimulatedCamera::new());

    let mut sequencer = CameraSequencer::new(camera.clone(), prefs.clone());
    sequencer.enable_test_mode().await.unwrap();
    assert_eq!(sequencer.phase(), CameraPhase::Active { simulated: true });
    drop(sequencer);

    let mut reloaded = CameraSequencer::new(camera.clone(), prefs);
    assert_eq!(
        reloaded.bootstrap().await.unwrap(),
        CameraPhase::Active { simulated: true }
    );

    // Test mode never opened a real stream.
    assert_eq!(camera.streams_opened(), 0);
}

#[tokio::test]
async fn granted_camera_goes_live_and_releases_on_teardown() {
    let prefs = Arc::new(InMemoryRepository::new());
    let camera = Arc::new(SimulatedCamera::new());

    let mut sequencer = CameraSequencer::new(camera.clone(), prefs);
    let phase = sequencer.bootstrap().await.unwrap();
    assert_eq!(phase, CameraPhase::Active { simulated: false });
    assert_eq!(camera.streams_opened(), 1);
    assert!(!camera.all_streams_stopped());

    // Unmount: the sequencer drops and every track stops with it.
    drop(sequencer);
    assert!(camera.all_streams_stopped());
}
