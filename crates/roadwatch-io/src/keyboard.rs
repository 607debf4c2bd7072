//! Document-scoped Escape key listener with guaranteed release.
//!
//! The video modal closes on Escape, which requires a listener on the
//! document rather than on any element the modal renders. The listener
//! is held in an RAII guard: dropping the guard (modal closed or page
//! unmounted) removes it unconditionally, so repeated open/close
//! cycles cannot accumulate listeners.
//!
//! Requires a browser environment (`wasm32-unknown-unknown` target).

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;

/// Errors that can occur when attaching the listener.
#[derive(Debug, thiserror::Error)]
pub enum ListenerError {
    /// A browser API call returned an error or a required object was
    /// missing.
    #[error("listener API error: {0}")]
    JsError(String),
}

impl From<JsValue> for ListenerError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// A live `keydown` listener that fires a callback on Escape.
///
/// Removal happens in `Drop`, so storing the guard in component state
/// ties the listener's lifetime to the component's.
pub struct EscapeListener {
    document: web_sys::Document,
    closure: Closure<dyn FnMut(web_sys::KeyboardEvent)>,
}

impl EscapeListener {
    /// Register a document `keydown` listener calling `on_escape` for
    /// the Escape key. Other keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ListenerError::JsError`] if the window or document is
    /// unavailable or registration fails.
    pub fn attach(mut on_escape: impl FnMut() + 'static) -> Result<Self, ListenerError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| ListenerError::JsError("no document".into()))?;

        let closure = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(
            move |event: web_sys::KeyboardEvent| {
                if event.key() == "Escape" {
                    on_escape();
                }
            },
        );
        document
            .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;

        Ok(Self { document, closure })
    }
}

impl Drop for EscapeListener {
    fn drop(&mut self) {
        // Best-effort: the document outlives the guard in every
        // supported browser, but removal failure must not panic here.
        let _ = self.document.remove_event_listener_with_callback(
            "keydown",
            self.closure.as_ref().unchecked_ref(),
        );
    }
}
