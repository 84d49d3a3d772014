use dioxus::prelude::*;

use services::narration::playback_duration;

/// On-screen stand-in for voice narration.
///
/// Shows the active line for a duration derived from its length, then
/// reports completion. Each new line bumps a generation counter so a
/// stale timer from a replaced line can never fire the completion
/// callback; unmounting cancels the scope's tasks outright.
#[component]
pub fn VoiceNarrator(
    text: ReadOnlySignal<Option<String>>,
    on_complete: Option<EventHandler<()>>,
) -> Element {
    let mut muted = use_signal(|| false);
    let mut playing = use_signal(|| false);
    let mut current = use_signal(|| None::<String>);
    let mut generation = use_signal(|| 0_u64);

    use_effect(move || {
        let line = text();
        let is_muted = muted();

        let this_generation = generation.peek().wrapping_add(1);
        generation.set(this_generation);

        let Some(line) = line else {
            playing.set(false);
            return;
        };
        if is_muted {
            playing.set(false);
            return;
        }

        current.set(Some(line.clone()));
        playing.set(true);
        spawn(async move {
            tokio::time::sleep(playback_duration(&line)).await;
            if *generation.peek() == this_generation {
                playing.set(false);
                if let Some(handler) = on_complete {
                    handler.call(());
                }
            }
        });
    });

    rsx! {
        div { class: "narrator",
            if playing() {
                if let Some(line) = current() {
                    div { class: "narrator-bubble",
                        span { class: "narrator-wave", aria_hidden: true }
                        p { class: "narrator-text", "{line}" }
                    }
                }
            }
            button {
                class: "narrator-mute",
                aria_label: if muted() { "Unmute" } else { "Mute" },
                onclick: move |_| {
                    let now_muted = !muted();
                    muted.set(now_muted);
                    if now_muted {
                        playing.set(false);
                    }
                },
                if muted() { "🔇" } else { "🔊" }
            }
        }
    }
}
