//! Accident Frames page: grid of stored detection stills.

use dioxus::prelude::*;
use roadwatch_api::{ApiClient, FrameView};
use roadwatch_io::runtime;

use super::{fetch_error, loading};

/// Fetches `/accident_images/` once on mount and renders the frames
/// as a card grid.
#[component]
pub fn AccidentFrames() -> Element {
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
        return loading("accident frames");
    };

    rsx! {
        div { class: "page",
            h1 { class: "page-title", "Accident Frames" }

            if views.is_empty() {
                div { class: "card empty-card",
                    p { "No accident frames found." }
                }
            }

            div { class: "card-grid",
                for frame in views.iter() {
                    div { class: "card",
                        img {
                            class: "frame-image",
                            src: "{frame.image_src}",
                            alt: "Accident frame",
                        }
                        div { class: "card-body",
                            p { class: "card-subtle", "{frame.timestamp}" }
                            p { class: "card-tag", "{frame.vehicle_type}" }
                        }
                    }
                }
            }
        }
    }
}
