//! roadwatch: browser dashboard for a traffic accident detection
//! service.
//!
//! Client-side rendered with Dioxus. Every page is a thin client over
//! the detection service's HTTP API: fetch once, project into view
//! models, render.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{
    LdBarChart3, LdLayoutDashboard, LdTriangleAlert, LdUpload, LdVideo,
};

mod pages;

use pages::{AccidentFrames, AccidentVideos, Dashboard, DataAnalysis, UploadTester};

/// Application routes, one per dashboard page.
#[derive(Debug, Clone, PartialEq, Routable)]
enum Route {
    #[layout(Shell)]
    #[route("/")]
    Dashboard {},
    #[route("/frames")]
    AccidentFrames {},
    #[route("/videos")]
    AccidentVideos {},
    #[route("/analysis")]
    DataAnalysis {},
    #[route("/tester")]
    UploadTester {},
}

fn main() {
    dioxus::launch(app);
}

/// Root component: stylesheet + router.
fn app() -> Element {
    rsx! {
        style { dangerous_inner_html: include_str!("../assets/style.css") }
        Router::<Route> {}
    }
}

/// Layout shell: fixed sidebar navigation plus the routed page.
#[component]
fn Shell() -> Element {
    rsx! {
        div { class: "shell",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

/// Sidebar navigation, one link per page.
#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { class: "sidebar-brand", "CCTV Monitor" }

            Link {
                to: Route::Dashboard {},
                class: "nav-link",
                active_class: "nav-link-active",
                Icon { icon: LdLayoutDashboard, width: 20, height: 20 }
                span { "Dashboard" }
            }
            Link {
                to: Route::AccidentFrames {},
                class: "nav-link",
                active_class: "nav-link-active",
                Icon { icon: LdTriangleAlert, width: 20, height: 20 }
                span { "Accident Frames" }
            }
            Link {
                to: Route::AccidentVideos {},
                class: "nav-link",
                active_class: "nav-link-active",
                Icon { icon: LdVideo, width: 20, height: 20 }
                span { "Accident Videos" }
            }
            Link {
                to: Route::DataAnalysis {},
                class: "nav-link",
                active_class: "nav-link-active",
                Icon { icon: LdBarChart3, width: 20, height: 20 }
                span { "Data Analysis" }
            }
            Link {
                to: Route::UploadTester {},
                class: "nav-link",
                active_class: "nav-link-active",
                Icon { icon: LdUpload, width: 20, height: 20 }
                span { "Upload Tester" }
            }
        }
    }
}
