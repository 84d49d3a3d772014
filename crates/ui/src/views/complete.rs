use dioxus::prelude::*;
use dioxus_router::use_navigator;
use tracing::warn;

use crate::components::VoiceNarrator;
use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};

const COMPLETION_LINE: &str = "Congratulations! You've officially graduated from 'no idea what \
    I'm doing' to 'mostly know what I'm doing'. Your dashboard is impressed, and so am I!";

/// Modules completed before the bonus unlocks on this screen.
const BONUS_UNLOCK_AT: u32 = 10;

#[component]
pub fn CompleteView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let sessions = ctx.sessions();

    let narration = use_signal(|| Some(COMPLETION_LINE.to_owned()));

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

    let learned: Vec<String> = sessions
        .catalog()
        .modules()
        .iter()
        .filter(|module| !module.is_bonus())
        .map(|module| module.title().to_owned())
        .collect();

    let restart = {
        let sessions = sessions.clone();
        move |_| {
            let sessions = sessions.clone();
            spawn(async move {
                if let Err(err) = sessions.reset_progress().await {
                    warn!(error = %err, "failed to reset tutorial progress");
                }
                navigator.push(Route::Overview {});
            });
        }
    };

    rsx! {
        div { class: "page complete",
            div { class: "card complete-card",
                div { class: "complete-badge", "✓" }
                h1 { "Tutorial Complete!" }
                p { "You've successfully finished the dashboard tutorial." }
                div { class: "complete-preview", role: "img", aria_label: "Driver view" }
                h3 { "What you've learned:" }
                ul { class: "complete-topics",
                    for title in learned.iter() {
                        li { key: "{title}", "{title}" }
                    }
                }
                div { class: "complete-actions",
                    if completed_modules >= BONUS_UNLOCK_AT {
                        button {
                            class: "bonus",
                            onclick: move |_| { navigator.push(Route::Module { id: 11 }); },
                            "🎁 Unlock Secret Bonus Module 🎁"
                        }
                    }
                    button {
                        class: "primary",
                        onclick: move |_| { navigator.push(Route::Home {}); },
                        "Return to Home"
                    }
                    button { class: "secondary", onclick: restart, "Restart Tutorial" }
                }
            }
            VoiceNarrator { text: narration }
        }
    }
}
