use std::sync::Arc;

use dioxus::prelude::*;
use dioxus_router::{Navigator, use_navigator};
use tracing::{debug, warn};

use dashtour_core::model::{HotspotId, ModuleId};
use services::narration::playback_duration;
use services::session::{Effect, ModuleSessionService, SessionEvent};

use crate::components::{
    CameraFeed, FallbackPanel, HotspotOverlay, ProgressHeader, QuizCard, TestModeBanner,
    VoiceNarrator,
};
use crate::context::AppContext;
use crate::routes::Route;
use crate::views::CameraScreenMode;
use crate::vm::ModuleVm;

/// Interpret a transition's effects against the screen's signals.
///
/// Every delayed continuation is spawned on the component scope, so
/// navigating away cancels it before it can touch state.
fn run_effects(
    effects: Vec<Effect>,
    sessions: Arc<ModuleSessionService>,
    module_id: ModuleId,
    mut narration: Signal<Option<String>>,
    mut show_quiz: Signal<bool>,
    navigator: Navigator,
) {
    let mut queued: Vec<String> = Vec::new();
    for effect in effects {
        match effect {
            Effect::Narrate(text) => queued.push(text),
            Effect::ShowQuizAfter(delay) => {
                spawn(async move {
                    tokio::time::sleep(delay).await;
                    show_quiz.set(true);
                });
            }
            Effect::SaveProgress => {
                let sessions = Arc::clone(&sessions);
                spawn(async move {
                    if let Err(err) = sessions.record_completion(module_id).await {
                        warn!(error = %err, "failed to persist tutorial progress");
                    }
                });
            }
            Effect::NavigateAfter { delay, target } => {
                spawn(async move {
                    tokio::time::sleep(delay).await;
                    navigator.push(Route::from(target));
                });
            }
        }
    }

    // Play queued lines back to back instead of clobbering each other.
    if let Some((first, rest)) = queued.split_first() {
        narration.set(Some(first.clone()));
        let mut offset = playback_duration(first);
        for line in rest {
            let line = line.clone();
            let delay = offset;
            offset += playback_duration(&line);
            spawn(async move {
                tokio::time::sleep(delay).await;
                narration.set(Some(line));
            });
        }
    }
}

#[component]
pub fn ModuleView(id: ReadOnlySignal<u32>) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let sessions = ctx.sessions();
    let camera = ctx.camera();

    let mut vm = {
        let sessions = sessions.clone();
        use_signal(move || {
            sessions
                .start(ModuleId::new(*id.peek()))
                .ok()
                .map(ModuleVm::new)
        })
    };
    let mut vm_for = use_signal(|| Some(*id.peek()));
    let narration = use_signal(|| None::<String>);
    let mut show_quiz = use_signal(|| false);
    let mut mode = use_signal(|| CameraScreenMode::Loading);
    let mut camera_ready = use_signal(|| false);
    let mut camera_error = use_signal(|| false);

    // Per-module step state is in-memory only: navigating to another
    // module rebuilds the machine from scratch.
    {
        let sessions = sessions.clone();
        let mut narration = narration;
        use_effect(move || {
            let module_id = id();
            if *vm_for.peek() == Some(module_id) {
                return;
            }
            vm_for.set(Some(module_id));
            narration.set(None);
            show_quiz.set(false);
            camera_ready.set(false);
            camera_error.set(false);
            vm.set(
                sessions
                    .start(ModuleId::new(module_id))
                    .ok()
                    .map(ModuleVm::new),
            );
        });
    }

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

    // Narrate the first objective once a surface is ready; later lines
    // come from the machine's transitions.
    {
        let mut narration = narration;
        use_effect(move || {
            let ready = match mode() {
                CameraScreenMode::Live => camera_ready(),
                CameraScreenMode::Fallback | CameraScreenMode::Test => true,
                CameraScreenMode::Loading => false,
            };
            if !ready || narration.peek().is_some() {
                return;
            }
            let line = vm
                .read()
                .as_ref()
                .and_then(|vm| vm.instruction_narration());
            if let Some(line) = line {
                narration.set(Some(line));
            }
        });
    }

    let apply_event = {
        let sessions = sessions.clone();
        use_callback(move |event: SessionEvent| {
            let outcome = {
                let mut guard = vm.write();
                guard.as_mut().map(|vm| (vm.module_id(), vm.apply(&event)))
            };
            match outcome {
                Some((module_id, Ok(transition))) => run_effects(
                    transition.effects,
                    sessions.clone(),
                    module_id,
                    narration,
                    show_quiz,
                    navigator,
                ),
                Some((_, Err(err))) => debug!(error = %err, "session event ignored"),
                None => {}
            }
        })
    };

    let on_hotspot = move |hotspot_id: String| {
        if let Ok(hotspot_id) = HotspotId::new(hotspot_id) {
            apply_event.call(SessionEvent::ConfirmHotspot(hotspot_id));
        }
    };
    let manual_next = move |()| apply_event.call(SessionEvent::ManualAdvance);
    let on_quiz_answer = move |selected: usize| apply_event.call(SessionEvent::AnswerQuiz(selected));

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
    let enable_test_mode = {
        let camera = camera.clone();
        move |_| {
            let camera = camera.clone();
            spawn(async move {
                if let Err(err) = camera.enable_test_mode().await {
                    warn!(error = %err, "failed to persist test mode");
                }
                camera_error.set(false);
                mode.set(CameraScreenMode::Test);
            });
        }
    };
    let retry_camera = {
        let camera = camera.clone();
        move |()| {
            let camera = camera.clone();
            spawn(async move {
                if let Err(err) = camera.reset_modes().await {
                    warn!(error = %err, "failed to clear camera modes");
                }
                camera_ready.set(false);
                camera_error.set(false);
                mode.set(CameraScreenMode::Live);
            });
        }
    };

    // Snapshot display data so no borrow outlives this render.
    let display = {
        let guard = vm.read();
        guard.as_ref().map(|vm| ModuleDisplay {
            title: vm.title().to_owned(),
            module_number: vm.module_id().value(),
            is_bonus: vm.is_bonus(),
            instruction: vm.instruction().map(ToOwned::to_owned),
            step_counter: vm.step_counter(),
            hotspots: vm.hotspots(),
            quiz: vm.quiz(),
            item_placed: vm.item_placed(),
            action_armed: vm.action_armed(),
            is_complete: vm.is_complete(),
        })
    };

    let Some(display) = display else {
        return rsx! {
            div { class: "page module",
                div { class: "card error-card",
                    h2 { "Module not found" }
                    p { "That module doesn't exist in this tutorial." }
                    button {
                        class: "primary",
                        onclick: move |_| { navigator.push(Route::Overview {}); },
                        "Back to Overview"
                    }
                }
            }
        };
    };

    let primary_total = sessions.catalog().primary_modules();
    let overlay_ready = match mode() {
        CameraScreenMode::Test => true,
        CameraScreenMode::Live => camera_ready(),
        CameraScreenMode::Fallback | CameraScreenMode::Loading => false,
    };
    let degraded = matches!(
        mode(),
        CameraScreenMode::Fallback | CameraScreenMode::Test
    );
    let show_instruction_card =
        !show_quiz() && (overlay_ready || mode() == CameraScreenMode::Fallback);

    let overlay = if overlay_ready && !show_quiz() {
        rsx! {
            HotspotOverlay { hotspots: display.hotspots.clone(), on_tap: on_hotspot }
            if display.is_bonus {
                div {
                    class: "mascot-scene",
                    class: if display.item_placed { "placed" },
                    class: if display.action_armed { "armed" },
                    class: if display.is_complete { "launched" },
                    div { class: "mascot" }
                    if display.action_armed && !display.is_complete {
                        div { class: "launch-button-glow" }
                    }
                }
            }
        }
    } else {
        rsx! {}
    };

    rsx! {
        div { class: "page module",
            header { class: "screen-header",
                div { class: "screen-title",
                    h2 { "{display.title}" }
                    if display.is_bonus {
                        span { class: "bonus-badge", "Bonus" }
                    }
                }
                if !display.is_bonus {
                    ProgressHeader {
                        current_module: display.module_number,
                        total_modules: primary_total,
                    }
                }
            }

            main { class: "screen-body",
                match mode() {
                    CameraScreenMode::Loading => rsx! {
                        div { class: "loading", "Loading…" }
                    },
                    CameraScreenMode::Fallback => rsx! {
                        FallbackPanel {
                            module_title: display.title.clone(),
                            instruction: display.instruction.clone().unwrap_or_default(),
                            on_continue: manual_next,
                            on_retry_camera: retry_camera.clone(),
                        }
                    },
                    CameraScreenMode::Test => rsx! {
                        div { class: "viewfinder simulated",
                            div { class: "viewfinder-surface" }
                            div { class: "viewfinder-overlay", {overlay} }
                        }
                        TestModeBanner {}
                    },
                    CameraScreenMode::Live => rsx! {
                        CameraFeed {
                            on_ready: move |()| camera_ready.set(true),
                            on_error: move |()| camera_error.set(true),
                            {overlay}
                        }
                    },
                }

                if camera_error() && mode() == CameraScreenMode::Live {
                    div { class: "card error-card",
                        h3 { "Camera Access Required" }
                        p {
                            "This tutorial works best with camera access for the overlay. Pick a way to continue:"
                        }
                        div { class: "error-actions",
                            button {
                                class: "primary",
                                onclick: enable_fallback,
                                "Continue Without Camera"
                            }
                            button {
                                class: "secondary",
                                onclick: enable_test_mode,
                                "Use Test Mode"
                            }
                        }
                    }
                }

                if show_instruction_card {
                    div { class: "card instruction-card",
                        if let Some(instruction) = display.instruction.clone() {
                            h3 { "{instruction}" }
                        }
                        p { class: "hint",
                            if degraded {
                                "Tap Next to continue to the next step."
                            } else {
                                "Tap each highlighted hotspot when it's centered to confirm."
                            }
                        }
                        p { class: "step-counter", "{display.step_counter}" }
                        if degraded && !display.is_complete {
                            button {
                                class: "primary",
                                onclick: move |_| manual_next(()),
                                "Next Step"
                            }
                        }
                    }
                }

                if show_quiz() {
                    if let Some(quiz) = display.quiz.clone() {
                        QuizCard { quiz, on_answer: on_quiz_answer }
                    }
                }
            }

            VoiceNarrator { text: narration }
        }
    }
}

struct ModuleDisplay {
    title: String,
    module_number: u32,
    is_bonus: bool,
    instruction: Option<String>,
    step_counter: String,
    hotspots: Vec<crate::vm::HotspotMarker>,
    quiz: Option<crate::vm::QuizVm>,
    item_placed: bool,
    action_armed: bool,
    is_complete: bool,
}
