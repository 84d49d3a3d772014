use std::time::Duration;

use dioxus::prelude::*;
use dioxus_router::use_navigator;
use tracing::warn;

use services::narration::ADVANCE_PAUSE;

use crate::components::{CameraFeed, ProgressHeader, TestModeBanner, VoiceNarrator};
use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{CameraScreenMode, ViewError, ViewState, view_state_from_resource};
use crate::vm::OverviewVm;

/// Pause after the start narration before entering module 1.
const START_DELAY: Duration = Duration::from_millis(1500);

/// How long a denial banner stays up before the dedicated denial screen
/// takes over, unless the user picks a degraded mode first.
const DENIAL_REDIRECT_DELAY: Duration = Duration::from_secs(6);

#[component]
pub fn OverviewView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let sessions = ctx.sessions();
    let camera = ctx.camera();

    let script = sessions.catalog().overview().clone();
    let primary_total = sessions.catalog().primary_modules();
    let total_steps = script.steps().len();

    let mut vm = use_signal(|| OverviewVm::new(total_steps));
    let narration = use_signal(|| None::<String>);
    let mut mode = use_signal(|| CameraScreenMode::Loading);
    let camera_ready = use_signal(|| false);
    let camera_error = use_signal(|| false);

    // Sticky camera preferences decide the starting surface.
    {
        let camera = camera.clone();
        use_future(move || {
            let camera = camera.clone();
            async move {
                let prefs = camera.load_prefs().await;
                let initial = if prefs.test_mode {
                    CameraScreenMode::Test
                } else if prefs.fallback_mode {
                    CameraScreenMode::Fallback
                } else {
                    CameraScreenMode::Live
                };
                mode.set(initial);
            }
        });
    }

    // The header reflects whatever progress was persisted last.
    let progress_resource = {
        let sessions = sessions.clone();
        use_resource(move || {
            let sessions = sessions.clone();
            async move {
                let snapshot = sessions
                    .load_progress()
                    .await
                    .map_err(|_| ViewError::Unknown)?;
                Ok::<_, ViewError>(snapshot.map_or(0, |snapshot| snapshot.current_module()))
            }
        })
    };
    let completed_modules = match view_state_from_resource(progress_resource) {
        ViewState::Ready(count) => count,
        _ => 0,
    };

    // Narration follows the active step once a surface is ready.
    {
        let script = script.clone();
        let mut narration = narration;
        use_effect(move || {
            let ready = match mode() {
                CameraScreenMode::Live => camera_ready(),
                CameraScreenMode::Fallback | CameraScreenMode::Test => true,
                CameraScreenMode::Loading => false,
            };
            if ready {
                let step = vm().step();
                narration.set(script.step(step).map(|step| step.narration.clone()));
            }
        });
    }

    // The narrator paces auto-advance through the intro steps.
    let advance_after_narration = move |()| {
        if !vm.peek().is_last() {
            spawn(async move {
                tokio::time::sleep(ADVANCE_PAUSE).await;
                vm.write().next();
            });
        }
    };

    let start = {
        let script = script.clone();
        let mut narration = narration;
        move |_| {
            narration.set(Some(script.start_narration().to_owned()));
            let target = script.start_target();
            spawn(async move {
                tokio::time::sleep(START_DELAY).await;
                navigator.push(Route::from(target));
            });
        }
    };

    let enable_fallback = {
        let camera = camera.clone();
        move |_| {
            let camera = camera.clone();
            spawn(async move {
                if let Err(err) = camera.enable_fallback().await {
                    warn!(error = %err, "failed to persist fallback mode");
                }
                mode.set(CameraScreenMode::Fallback);
            });
        }
    };

    let on_camera_ready = {
        let mut camera_ready = camera_ready;
        move |()| camera_ready.set(true)
    };

    // Denial surfaces the banner, then hands over to the dedicated denial
    // screen unless a degraded mode was chosen in the meantime.
    let on_camera_error = {
        let mut camera_error = camera_error;
        move |()| {
            camera_error.set(true);
            spawn(async move {
                tokio::time::sleep(DENIAL_REDIRECT_DELAY).await;
                if *camera_error.peek() && *mode.peek() == CameraScreenMode::Live {
                    navigator.push(Route::CameraDenied {});
                }
            });
        }
    };

    let current_text = script
        .step(vm().step())
        .map(|step| step.text.clone())
        .unwrap_or_default();

    rsx! {
        div { class: "page overview",
            header { class: "screen-header",
                h2 { "Dashboard Tutorial" }
                ProgressHeader {
                    current_module: completed_modules,
                    total_modules: primary_total,
                }
            }
            main { class: "screen-body",
                match mode() {
                    CameraScreenMode::Loading => rsx! {
                        div { class: "loading", "Loading…" }
                    },
                    CameraScreenMode::Live => rsx! {
                        CameraFeed {
                            on_ready: on_camera_ready,
                            on_error: on_camera_error,
                            div {}
                        }
                        if camera_error() {
                            div { class: "card error-card",
                                h3 { "Camera Access Required" }
                                p {
                                    "This tutorial works best with camera access for the overlay. You can also continue without it."
                                }
                                button {
                                    class: "primary",
                                    onclick: enable_fallback.clone(),
                                    "Continue Without Camera"
                                }
                            }
                        }
                    },
                    CameraScreenMode::Test => rsx! {
                        div { class: "viewfinder simulated" }
                        TestModeBanner {}
                    },
                    CameraScreenMode::Fallback => rsx! {
                        div { class: "fallback-note card",
                            span { class: "fallback-icon", "ℹ" }
                            span { "Camera-Free Mode" }
                        }
                    },
                }

                div { class: "card instruction-card",
                    h3 { "{current_text}" }
                    div { class: "stepper-actions",
                        button {
                            class: "secondary",
                            disabled: vm().is_first(),
                            onclick: move |_| vm.write().previous(),
                            "Previous"
                        }
                        if vm().is_last() {
                            button { class: "primary", onclick: start, "{script.start_label()}" }
                        } else {
                            button {
                                class: "secondary",
                                onclick: move |_| vm.write().next(),
                                "Next"
                            }
                        }
                    }
                }
            }
            VoiceNarrator { text: narration, on_complete: advance_after_narration }
        }
    }
}
