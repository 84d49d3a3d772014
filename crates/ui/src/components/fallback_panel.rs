use dioxus::prelude::*;

/// Camera-free mode: static dashboard imagery plus manual advancement.
#[component]
pub fn FallbackPanel(
    module_title: String,
    instruction: String,
    on_continue: EventHandler<()>,
    on_retry_camera: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "fallback-panel",
            header { class: "fallback-header",
                span { class: "fallback-icon", "ℹ" }
                h3 { "Camera-Free Mode" }
            }
            p { class: "fallback-note",
                "You're viewing this tutorial without camera access. You can still learn every feature, just without the overlay."
            }
            div { class: "fallback-image", role: "img", aria_label: "Dashboard illustration" }
            div { class: "fallback-body",
                h4 { "{module_title}" }
                p { "{instruction}" }
            }
            div { class: "fallback-actions",
                button {
                    class: "secondary",
                    onclick: move |_| on_retry_camera.call(()),
                    "Try Camera Again"
                }
                button {
                    class: "primary",
                    onclick: move |_| on_continue.call(()),
                    "Continue Without Camera"
                }
            }
        }
    }
}
