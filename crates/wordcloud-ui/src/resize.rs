//! Window size queries and the debounced resize listener

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::window;
use wordcloud_core::Viewport;

use crate::error::{Result, UiError};

/// Current `innerWidth` and `innerHeight` of the window
///
/// # Errors
///
/// Returns an error if there is no window or either dimension is not a number.
pub fn get_window_size() -> Result<Viewport> {
    let window = window().ok_or(UiError::WindowUnavailable)?;

    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .ok_or(UiError::InvalidWindowSize { dimension: "width" })?;

    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .ok_or(UiError::InvalidWindowSize { dimension: "height" })?;

    Ok(Viewport::new(width, height))
}

/// Window size, or a desktop-sized fallback when it cannot be read
pub fn current_viewport() -> Viewport {
    get_window_size().unwrap_or_else(|e| {
        tracing::error!(error = %e, "Falling back to default viewport");
        Viewport::new(1024.0, 768.0)
    })
}

/// Keeps the resize listener alive; call [`ResizeHandler::remove`] to detach it
pub struct ResizeHandler {
    closure: Closure<dyn FnMut()>,
}

impl ResizeHandler {
    /// Remove the resize event listener from the window
    ///
    /// # Errors
    ///
    /// Returns an error if there is no window or the removal fails.
    pub fn remove(self) -> Result<()> {
        let window = window().ok_or(UiError::WindowUnavailable)?;
        window
            .remove_event_listener_with_callback("resize", self.closure.as_ref().unchecked_ref())
            .map_err(|e| UiError::listener("remove", "resize", format!("{e:?}")))
    }
}

/// Attach a resize listener that calls `on_resize` with the new viewport.
///
/// Bursts of resize events collapse into one call fired `debounce_ms` after
/// the last event. A `debounce_ms` of zero calls through on every event.
///
/// # Errors
///
/// Returns an error if there is no window or the listener cannot be attached.
pub fn attach_resize_listener<F>(debounce_ms: u32, on_resize: F) -> Result<ResizeHandler>
where
    F: Fn(Viewport) + 'static,
{
    let window = window().ok_or(UiError::WindowUnavailable)?;

    let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));
    let on_resize = Rc::new(on_resize);

    let closure = Closure::wrap(Box::new(move || {
        if let Some(timeout) = pending.borrow_mut().take() {
            timeout.cancel();
        }

        if debounce_ms == 0 {
            on_resize(current_viewport());
            return;
        }

        // a fired timeout stays in the slot until the next event replaces it
        let on_resize = Rc::clone(&on_resize);
        let timeout = Timeout::new(debounce_ms, move || on_resize(current_viewport()));
        *pending.borrow_mut() = Some(timeout);
    }) as Box<dyn FnMut()>);

    window
        .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
        .map_err(|e| UiError::listener("attach", "resize", format!("{e:?}")))?;

    Ok(ResizeHandler { closure })
}
