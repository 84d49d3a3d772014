use std::sync::Arc;

use dioxus::prelude::*;
use tokio::sync::Mutex as AsyncMutex;
use tracing::warn;

use services::{CameraPhase, CameraSequencer};

use crate::context::AppContext;

/// Live camera acquisition surface.
///
/// Owns one `CameraSequencer` for the component's lifetime: sticky
/// preferences are applied and a silent probe runs on mount, the explicit
/// enable button drives the user-gesture request, and dropping the
/// sequencer on unmount stops every held track. Degraded modes are the
/// parent's job; this component only handles the live path.
#[component]
pub fn CameraFeed(
    on_ready: EventHandler<()>,
    on_error: EventHandler<()>,
    children: Element,
) -> Element {
    let ctx = use_context::<AppContext>();
    let camera = ctx.camera();

    let sequencer: Arc<AsyncMutex<CameraSequencer>> =
        use_hook(|| Arc::new(AsyncMutex::new(camera.sequencer())));
    let mut phase = use_signal(|| CameraPhase::Unrequested);

    // Silent probe, once per mount. Never prompts; a previously granted
    // device goes straight to a live stream.
    {
        let sequencer = Arc::clone(&sequencer);
        use_future(move || {
            let sequencer = Arc::clone(&sequencer);
            async move {
                let outcome = { sequencer.lock().await.bootstrap().await };
                match outcome {
                    Ok(next) => {
                        phase.set(next);
                        if matches!(next, CameraPhase::Active { .. }) {
                            on_ready.call(());
                        }
                    }
                    Err(err) => {
                        warn!(error = %err, "camera bootstrap failed");
                        phase.set(CameraPhase::Denied);
                        on_error.call(());
                    }
                }
            }
        });
    }

    let request_camera = {
        let sequencer = Arc::clone(&sequencer);
        move |_| {
            let sequencer = Arc::clone(&sequencer);
            phase.set(CameraPhase::Requesting);
            spawn(async move {
                let outcome = { sequencer.lock().await.request_stream().await };
                match outcome {
                    Ok(next) => {
                        phase.set(next);
                        on_ready.call(());
                    }
                    Err(err) => {
                        warn!(error = %err, "camera request failed");
                        phase.set(CameraPhase::Denied);
                        on_error.call(());
                    }
                }
            });
        }
    };

    let retry = {
        let sequencer = Arc::clone(&sequencer);
        move |_| {
            let sequencer = Arc::clone(&sequencer);
            spawn(async move {
                sequencer.lock().await.reset_denial();
                phase.set(CameraPhase::Unrequested);
            });
        }
    };

    rsx! {
        div { class: "camera-feed",
            match phase() {
                CameraPhase::Active { simulated } => rsx! {
                    div {
                        class: "viewfinder",
                        class: if simulated { "simulated" },
                        div { class: "viewfinder-surface" }
                        div { class: "viewfinder-overlay", {children} }
                    }
                },
                CameraPhase::Unrequested => rsx! {
                    div { class: "enable-camera",
                        span { class: "enable-camera-icon", "📷" }
                        h2 { "Enable Your Camera" }
                        p {
                            "This tutorial overlays instructions on your dashboard through the camera."
                        }
                        button { class: "primary", onclick: request_camera, "Enable Camera" }
                    }
                },
                CameraPhase::Probing | CameraPhase::Requesting => rsx! {
                    div { class: "enable-camera",
                        p { "Requesting camera access…" }
                    }
                },
                CameraPhase::Denied => rsx! {
                    div { class: "camera-alert",
                        h3 { "Camera Access Error" }
                        p {
                            "Unable to access your camera. Please ensure you've granted camera permissions."
                        }
                        button { class: "primary", onclick: retry, "Try Again" }
                    }
                },
                CameraPhase::Fallback => rsx! {
                    // Camera-free mode renders outside this component.
                    div { class: "camera-feed-empty" }
                },
            }
        }
    }
}
