//! Data Analysis page: vehicle-type statistics as charts.

use dioxus::prelude::*;
use roadwatch_api::view::{most_common, vehicle_slices};
use roadwatch_api::{ApiClient, VehicleSlice};
use roadwatch_io::runtime;
use roadwatch_io::{BarChart, DonutChart};

use super::{fetch_error, loading};

/// Fetches `/vehicle_types/` once on mount and renders accident
/// counts per vehicle type as a bar chart, a share donut, and a
/// most-common-vehicle insight card.
#[component]
pub fn DataAnalysis() -> Element {
    let client = use_hook(|| ApiClient::new(runtime::api_config()));
    let mut slices = use_signal(|| Option::<Vec<VehicleSlice>>::None);
    let mut error = use_signal(|| Option::<String>::None);

    use_effect(move || {
        let client = client.clone();
        spawn(async move {
            match client.vehicle_stats().await {
                Ok(listing) => slices.set(Some(vehicle_slices(&listing.vehicle_stats))),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    });

    if let Some(ref message) = error() {
        return fetch_error(message);
    }
    let Some(data) = slices() else {
        return loading("data analysis");
    };

    let insight = most_common(&data).cloned();

    rsx! {
        div { class: "page",
            h1 { class: "page-title", "Data Analysis" }

            div { class: "chart-grid",
                div { class: "card chart-card",
                    h2 { class: "card-title", "Accidents by Vehicle Type" }
                    BarChart { slices: data.clone() }
                }

                div { class: "card chart-card",
                    h2 { class: "card-title", "Share by Vehicle Type" }
                    DonutChart { slices: data.clone() }
                }
            }

            div { class: "card insight-card",
                h2 { class: "card-title", "Key Insight" }
                if let Some(ref top) = insight {
                    p { class: "insight-heading", "Most Common Vehicle" }
                    p { class: "insight-value", "{top.label}" }
                    p { class: "card-subtle", "{top.count} incidents" }
                } else {
                    p { class: "card-subtle", "No incidents recorded yet." }
                }
            }
        }
    }
}
