//! Modal clip player for the Accident Videos page.
//!
//! Dismissal follows the scoped-listener discipline: the Escape
//! listener is registered when the modal mounts and removed by its
//! guard's `Drop` when the modal closes or the page unmounts. Clicking
//! the backdrop also closes; clicks inside the panel are swallowed.

use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdCalendar, LdClock, LdMapPin, LdX};
use roadwatch_api::ClipView;

use crate::keyboard::EscapeListener;

/// Props for the [`VideoModal`] component.
#[derive(Props, Clone, PartialEq)]
pub struct VideoModalProps {
    /// The clip to play.
    clip: ClipView,
    /// Fired when the user dismisses the modal.
    on_close: EventHandler<()>,
}

/// Full-screen modal playing one accident clip with its metadata.
#[component]
pub fn VideoModal(props: VideoModalProps) -> Element {
    let on_close = props.on_close;

    // Held for the component's lifetime; dropping the guard on
    // unmount removes the listener.
    let _escape = use_hook(move || {
        Rc::new(
            EscapeListener::attach(move || on_close.call(()))
                .inspect_err(|e| {
                    web_sys::console::warn_1(
                        &format!("escape listener not attached: {e}").into(),
                    );
                })
                .ok(),
        )
    });

    let location = props
        .clip
        .location
        .clone()
        .unwrap_or_else(|| "Location unrecorded".to_owned());

    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),

            div {
                class: "modal-panel",
                onclick: move |evt| evt.stop_propagation(),

                button {
                    class: "modal-close",
                    aria_label: "Close",
                    onclick: move |_| on_close.call(()),
                    Icon { icon: LdX, width: 16, height: 16 }
                }

                video {
                    class: "modal-video",
                    src: "{props.clip.clip_src}",
                    controls: true,
                    autoplay: true,
                }

                div { class: "modal-meta",
                    h2 { class: "modal-title", "{props.clip.vehicle_type} accident" }
                    div { class: "modal-meta-row",
                        span { class: "meta-item",
                            Icon { icon: LdCalendar, width: 16, height: 16 }
                            "{props.clip.date}"
                        }
                        span { class: "meta-item",
                            Icon { icon: LdClock, width: 16, height: 16 }
                            "{props.clip.time}"
                        }
                        span { class: "meta-item",
                            Icon { icon: LdMapPin, width: 16, height: 16 }
                            "{location}"
                        }
                    }
                }
            }
        }
    }
}
