//! Accident Videos page: card grid of stored clips with a modal
//! player.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdCalendar, LdClock, LdMapPin, LdPlay};
use roadwatch_api::{ApiClient, ClipView};
use roadwatch_io::runtime;
use roadwatch_io::VideoModal;

use super::{fetch_error, loading};

/// Fetches `/accident_videos/` once on mount and renders the clips as
/// cards; clicking one opens the modal player.
#[component]
pub fn AccidentVideos() -> Element {
    let client = use_hook(|| ApiClient::new(runtime::api_config()));
    let mut clips = use_signal(|| Option::<Vec<ClipView>>::None);
    let mut error = use_signal(|| Option::<String>::None);
    let mut selected = use_signal(|| Option::<ClipView>::None);

    use_effect(move || {
        let client = client.clone();
        spawn(async move {
            match client.accident_videos().await {
                Ok(listing) => {
                    let views = listing
                        .videos
                        .iter()
                        .map(|record| ClipView::from_record(client.config(), record))
                        .collect::<Vec<_>>();
                    clips.set(Some(views));
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    });

    if let Some(ref message) = error() {
        return fetch_error(message);
    }
    let Some(views) = clips() else {
        return loading("accident videos");
    };

    rsx! {
        div { class: "page",
            h1 { class: "page-title", "Accident Videos" }
            p { class: "page-subtitle",
                "Review recent traffic incidents captured by the cameras"
            }

            if views.is_empty() {
                div { class: "card empty-card",
                    p { "No accident videos found." }
                }
            }

            div { class: "card-grid",
                for clip in views.iter() {
                    {render_clip_card(clip, selected)}
                }
            }

            if let Some(clip) = selected() {
                VideoModal {
                    clip: clip,
                    on_close: move |()| selected.set(None),
                }
            }
        }
    }
}

/// Render one clip card; clicking anywhere on it opens the player.
fn render_clip_card(clip: &ClipView, mut selected: Signal<Option<ClipView>>) -> Element {
    let location = clip
        .location
        .clone()
        .unwrap_or_else(|| "Location unrecorded".to_owned());
    let open = {
        let clip = clip.clone();
        move |_| selected.set(Some(clip.clone()))
    };

    rsx! {
        div { class: "card clip-card",
            div { class: "clip-thumb", onclick: open.clone(),
                if let Some(ref thumb) = clip.thumbnail_src {
                    img {
                        class: "frame-image",
                        src: "{thumb}",
                        alt: "Clip thumbnail",
                    }
                } else {
                    div { class: "thumb-placeholder",
                        Icon { icon: LdPlay, width: 32, height: 32 }
                    }
                }
            }

            div { class: "card-body",
                h3 { class: "card-title", "{location}" }
                div { class: "clip-meta",
                    span { class: "meta-item",
                        Icon { icon: LdCalendar, width: 16, height: 16 }
                        "{clip.date}"
                    }
                    span { class: "meta-item",
                        Icon { icon: LdClock, width: 16, height: 16 }
                        "{clip.time}"
                    }
                    span { class: "meta-item",
                        Icon { icon: LdMapPin, width: 16, height: 16 }
                        "{clip.vehicle_type}"
                    }
                }

                button { class: "btn btn-primary btn-wide", onclick: open,
                    Icon { icon: LdPlay, width: 16, height: 16 }
                    "View Recording"
                }
            }
        }
    }
}
