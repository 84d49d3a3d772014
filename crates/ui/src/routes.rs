use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use dashtour_core::model::RouteTarget;

use crate::views::{CameraDeniedView, CompleteView, HomeView, ModuleView, OverviewView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/overview", OverviewView)] Overview {},
        #[route("/module/:id", ModuleView)] Module { id: u32 },
        #[route("/complete", CompleteView)] Complete {},
        #[route("/camera-denied", CameraDeniedView)] CameraDenied {},
}

impl From<RouteTarget> for Route {
    fn from(target: RouteTarget) -> Self {
        match target {
            RouteTarget::Home => Route::Home {},
            RouteTarget::Overview => Route::Overview {},
            RouteTarget::Module(id) => Route::Module { id: id.value() },
            RouteTarget::Complete => Route::Complete {},
            RouteTarget::CameraDenied => Route::CameraDenied {},
        }
    }
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
