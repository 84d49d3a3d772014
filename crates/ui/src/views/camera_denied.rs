use dioxus::prelude::*;
use dioxus_router::use_navigator;
use tracing::warn;

use crate::context::AppContext;
use crate::routes::Route;

/// Terminal screen for an explicit camera denial.
///
/// Denial is never retried automatically; the user either retries from
/// here or takes the developer test-mode escape hatch.
#[component]
pub fn CameraDeniedView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();

    let enable_test_mode = {
        let camera = ctx.camera();
        move |_| {
            let camera = camera.clone();
            spawn(async move {
                if let Err(err) = camera.enable_test_mode().await {
                    warn!(error = %err, "failed to persist test mode");
                }
                navigator.push(Route::Overview {});
            });
        }
    };

    rsx! {
        div { class: "page camera-denied",
            div { class: "card denied-card",
                h1 { "Camera Access Denied" }
                p { "You need to allow camera access to experience the overlay tutorial." }
                p { class: "hint",
                    "Go back and accept the camera permission when prompted, or continue in camera-free mode from any module."
                }
                button {
                    class: "primary",
                    onclick: move |_| { navigator.push(Route::Overview {}); },
                    "Go Back and Try Again"
                }
                a {
                    class: "dev-escape",
                    href: "#",
                    onclick: enable_test_mode,
                    "Developers only - Do not click"
                }
            }
        }
    }
}
