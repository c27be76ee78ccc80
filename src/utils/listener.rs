//! Window event subscriptions with an explicit lifetime.
//!
//! A [`WindowListener`] removes its callback from the window when dropped.
//! [`WindowListener::scoped`] hands ownership to the current reactive owner,
//! so the subscription ends when the component that created it unmounts.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;

use super::dom;

/// An event listener registered on `window`.
pub struct WindowListener {
    event: &'static str,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl WindowListener {
    /// Subscribe `handler` to `event`.
    ///
    /// Returns `None` outside a browser or if registration fails.
    pub fn new(event: &'static str, handler: impl FnMut(web_sys::Event) + 'static) -> Option<Self> {
        let window = dom::window()?;
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
        window
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .ok()?;
        Some(Self { event, closure })
    }

    /// Keep the listener until the current reactive owner is cleaned up.
    pub fn scoped(self) {
        let stored = StoredValue::new_local(self);
        on_cleanup(move || stored.dispose());
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(window) = dom::window() {
            let _ = window
                .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
        }
    }
}

/// Reports viewport width changes for the lifetime of the current owner.
pub struct ViewportObserver;

impl ViewportObserver {
    /// Call `on_width` with the new viewport width after every window resize.
    pub fn scoped(on_width: impl Fn(f64) + 'static) {
        let listener = WindowListener::new("resize", move |_| {
            if let Some(width) = dom::viewport_width() {
                on_width(width);
            }
        });

        match listener {
            Some(listener) => listener.scoped(),
            None => web_sys::console::warn_1(&"Viewport observer unavailable".into()),
        }
    }
}
