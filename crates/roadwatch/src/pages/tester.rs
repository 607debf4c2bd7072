//! Upload tester page: submit a video to the detection service and
//! review the result.
//!
//! The page owns one [`UploadSession`] and drives it through the
//! select -> submit -> await -> render workflow. The only extra state
//! is playback fallback plumbing: when the returned `<video>` element
//! reports an error, a one-shot re-fetch replaces its source with a
//! local blob URL. Blob URLs are revoked when superseded and on
//! unmount.

use dioxus::prelude::*;
use roadwatch_api::{ApiClient, UploadSession, UploadStatus};
use roadwatch_io::media;
use roadwatch_io::runtime;
use roadwatch_io::{StatusBanner, VideoPicker};

/// The upload-and-review workflow.
#[component]
pub fn UploadTester() -> Element {
    let client = use_hook(|| ApiClient::new(runtime::api_config()));
    let mut session = use_signal(UploadSession::new);
    // Local blob source for fallback playback; replaces the remote
    // clip URL when set.
    let mut blob_src = use_signal(|| Option::<String>::None);
    // Set when the video element reported a playback error and the
    // fallback has not run yet.
    let mut playback_failed = use_signal(|| false);
    // Forces the video element to be recreated when the source swaps.
    let mut video_key = use_signal(|| 0u64);
    // Stale-result guard for re-triggered submits.
    let mut generation = use_signal(|| 0u64);

    // The page exclusively owns its blob URL; release it on unmount.
    use_drop(move || {
        if let Some(url) = blob_src.peek().as_ref() {
            media::revoke_blob_url(url);
        }
    });

    let mut drop_blob = move || {
        if let Some(url) = blob_src.take() {
            media::revoke_blob_url(&url);
        }
    };

    let on_select = move |(bytes, name): (Vec<u8>, String)| {
        drop_blob();
        playback_failed.set(false);
        session.write().select_file(bytes, name);
    };

    let submit = {
        let client = client.clone();
        move |_| {
            // No file selected: warn and issue no request.
            let Some(file) = session.write().begin_submit() else {
                return;
            };
            drop_blob();
            playback_failed.set(false);

            // Increment generation so an in-flight submit from a prior
            // trigger knows it is stale and must discard its result.
            generation += 1;
            let my_generation = *generation.peek();

            let client = client.clone();
            spawn(async move {
                let outcome = client.analyze_video(file.bytes, &file.name).await;

                if *generation.peek() != my_generation {
                    web_sys::console::warn_1(&"discarding stale analysis response".into());
                    return;
                }

                match outcome {
                    Ok(response) => session.write().apply_response(client.config(), &response),
                    Err(e) => session.write().fail(e.to_string()),
                }
                video_key += 1;
            });
        }
    };

    // One-shot fallback: re-fetch the clip bytes and play them from a
    // local blob URL. Status is untouched; only the source swaps.
    let recover_playback = {
        let client = client.clone();
        move |_| {
            let Some(clip_src) = session
                .peek()
                .detection()
                .and_then(|detection| detection.clip_src.clone())
            else {
                return;
            };

            let client = client.clone();
            spawn(async move {
                match client.fetch_media(&clip_src).await {
                    Ok(bytes) => match media::bytes_to_blob_url(&bytes, "video/mp4") {
                        Ok(url) => {
                            if let Some(old) = blob_src.take() {
                                media::revoke_blob_url(&old);
                            }
                            blob_src.set(Some(url));
                            playback_failed.set(false);
                            video_key += 1;
                        }
                        Err(e) => {
                            web_sys::console::warn_1(
                                &format!("blob fallback failed: {e}").into(),
                            );
                        }
                    },
                    Err(e) => {
                        web_sys::console::warn_1(
                            &format!("clip re-fetch failed: {e}").into(),
                        );
                    }
                }
            });
        }
    };

    let current = session();
    let analyzing = current.is_analyzing();
    let submit_label = if analyzing { "Processing..." } else { "Analyze Video" };

    rsx! {
        div { class: "page page-narrow",
            h1 { class: "page-title", "Accident Detection Tester" }

            VideoPicker { on_select: on_select }

            button {
                class: "btn btn-primary btn-wide",
                disabled: !current.has_file() || analyzing,
                onclick: submit,
                "{submit_label}"
            }

            StatusBanner { status: current.status().clone() }

            if let Some(detection) = current.detection() {
                if let Some(ref frame_src) = detection.frame_src {
                    div { class: "card result-card",
                        h2 { class: "card-title", "Accident Frame" }
                        img {
                            class: "frame-image",
                            src: "{frame_src}",
                            alt: "Accident frame",
                        }
                    }
                }

                if let Some(ref clip_src) = detection.clip_src {
                    {render_clip(
                        clip_src,
                        blob_src(),
                        video_key(),
                        playback_failed,
                        recover_playback.clone(),
                    )}
                }
            }

            if current.status() == &UploadStatus::Clean {
                div { class: "card empty-card",
                    p { "No accident detected in the video." }
                }
            }
        }
    }
}

/// Render the detected clip player with its fallback controls.
///
/// Plays from the local blob URL when the fallback has run, otherwise
/// from the service URL. The `key` forces element recreation on source
/// swaps so the browser reloads the media.
fn render_clip(
    clip_src: &str,
    blob_src: Option<String>,
    video_key: u64,
    mut playback_failed: Signal<bool>,
    recover_playback: impl FnMut(()) + Clone + 'static,
) -> Element {
    let src = blob_src.unwrap_or_else(|| clip_src.to_owned());
    let mut recover = recover_playback;

    rsx! {
        div { class: "card result-card",
            h2 { class: "card-title", "Detected Accident Clip" }
            video {
                key: "{video_key}",
                class: "modal-video",
                src: "{src}",
                controls: true,
                autoplay: true,
                preload: "auto",
                onerror: move |_| playback_failed.set(true),
            }

            if playback_failed() {
                div { class: "fallback-row",
                    span { "Video playback failed. " }
                    button {
                        class: "btn btn-link",
                        onclick: move |_| recover(()),
                        "Fix playback"
                    }
                }
            }

            a {
                class: "btn btn-link",
                href: "{clip_src}",
                download: "accident_clip.mp4",
                "Download clip"
            }
        }
    }
}
