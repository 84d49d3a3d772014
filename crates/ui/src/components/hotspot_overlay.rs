use dioxus::prelude::*;

use crate::vm::HotspotMarker;

/// Tappable markers anchored at static percentage positions over the
/// camera feed.
#[component]
pub fn HotspotOverlay(hotspots: Vec<HotspotMarker>, on_tap: EventHandler<String>) -> Element {
    rsx! {
        div { class: "hotspot-overlay",
            for marker in hotspots.into_iter() {
                button {
                    key: "{marker.id}",
                    class: "hotspot",
                    class: if marker.confirmed { "confirmed" },
                    style: "left: {marker.x_pct}%; top: {marker.y_pct}%;",
                    onclick: {
                        let id = marker.id.clone();
                        move |_| on_tap.call(id.clone())
                    },
                    span { class: "hotspot-dot" }
                    span { class: "hotspot-label", "{marker.label}" }
                }
            }
        }
    }
}
