use dioxus::prelude::*;

/// "Module N of M" indicator with a percentage bar.
///
/// Display only: progress is written by the session service on module
/// completion, never from the header.
#[component]
pub fn ProgressHeader(current_module: u32, total_modules: u32) -> Element {
    let percent = if total_modules == 0 {
        0
    } else {
        (current_module * 100 + total_modules / 2) / total_modules
    };

    rsx! {
        div { class: "progress-header",
            div { class: "progress-labels",
                span { "Module {current_module} of {total_modules}" }
                span { "{percent}% Complete" }
            }
            div { class: "progress-track",
                div { class: "progress-bar", style: "width: {percent}%;" }
            }
        }
    }
}
