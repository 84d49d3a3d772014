use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    let navigator = use_navigator();

    rsx! {
        div { class: "page landing",
            div { class: "card landing-card",
                h1 { "DashTour" }
                p { class: "tagline", "Learn your dashboard through an interactive camera tour" }
                div { class: "landing-preview", role: "img", aria_label: "Dashboard preview" }
                ul { class: "landing-features",
                    li { "Interactive overlay tour, no manual reading required" }
                    li { "Step-by-step guidance with a narrated assistant" }
                    li { "Works without a camera too, in camera-free mode" }
                }
                button {
                    class: "primary",
                    onclick: move |_| { navigator.push(Route::Overview {}); },
                    "Get Started"
                }
            }
        }
    }
}
