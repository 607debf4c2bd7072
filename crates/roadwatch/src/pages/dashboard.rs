//! Dashboard overview page.
//!
//! Summarizes the stored incident snapshot: stat cards and a
//! recent-incidents table, all derived from one `/accident_images/`
//! fetch. Nothing here is placeholder data; if the service has no
//! incidents, the page says so.

use std::collections::HashSet;

use dioxus::prelude::*;
use roadwatch_api::{ApiClient, FrameView};
use roadwatch_io::runtime;

use super::{fetch_error, loading};

/// Number of rows shown in the recent-incidents table.
const RECENT_ROWS: usize = 5;

/// Fetches `/accident_images/` once on mount and derives the overview
/// numbers from it.
#[component]
pub fn Dashboard() -> Element {
    let client = use_hook(|| ApiClient::new(runtime::api_config()));
    let mut frames = use_signal(|| Option::<Vec<FrameView>>::None);
    let mut error = use_signal(|| Option::<String>::None);

    use_effect(move || {
        let client = client.clone();
        spawn(async move {
            match client.accident_images().await {
                Ok(listing) => {
                    let views = listing
                        .images
                        .iter()
                        .map(|record| FrameView::from_record(client.config(), record))
                        .collect::<Vec<_>>();
                    frames.set(Some(views));
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    });

    if let Some(ref message) = error() {
        return fetch_error(message);
    }
    let Some(views) = frames() else {
        return loading("dashboard");
    };

    let total = views.len();
    let vehicle_kinds = views
        .iter()
        .map(|frame| frame.vehicle_type.as_str())
        .collect::<HashSet<_>>()
        .len();
    let latest = views
        .iter()
        .map(|frame| frame.timestamp.as_str())
        .max()
        .unwrap_or("none yet")
        .to_owned();
    // The service returns records oldest first.
    let recent = views.iter().rev().take(RECENT_ROWS).collect::<Vec<_>>();

    rsx! {
        div { class: "page",
            h1 { class: "page-title", "Dashboard Overview" }

            div { class: "stat-grid",
                div { class: "card stat-card",
                    h3 { class: "stat-label", "Recorded Incidents" }
                    p { class: "stat-value", "{total}" }
                }
                div { class: "card stat-card",
                    h3 { class: "stat-label", "Vehicle Types Involved" }
                    p { class: "stat-value", "{vehicle_kinds}" }
                }
                div { class: "card stat-card",
                    h3 { class: "stat-label", "Latest Incident" }
                    p { class: "stat-value stat-value-small", "{latest}" }
                }
            }

            div { class: "card",
                h2 { class: "card-title", "Recent Incidents" }
                if recent.is_empty() {
                    p { class: "card-subtle", "No incidents recorded yet." }
                } else {
                    table { class: "incident-table",
                        thead {
                            tr {
                                th { "Time" }
                                th { "Vehicle" }
                            }
                        }
                        tbody {
                            for frame in recent {
                                tr {
                                    td { "{frame.timestamp}" }
                                    td { "{frame.vehicle_type}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
