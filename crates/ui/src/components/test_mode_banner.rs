use dioxus::prelude::*;

/// Dismissable banner shown while the simulated camera is active.
#[component]
pub fn TestModeBanner() -> Element {
    let mut dismissed = use_signal(|| false);

    if dismissed() {
        return rsx! {};
    }

    rsx! {
        div { class: "test-mode-banner",
            span { "Test Mode: using a simulated dashboard. Point anywhere to continue." }
            button {
                aria_label: "Dismiss",
                onclick: move |_| dismissed.set(true),
                "✕"
            }
        }
    }
}
