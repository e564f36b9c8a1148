use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Event, EventTarget, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, Window,
};

use crate::error::DomError;
use crate::state::menu::ScrollLock;

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

pub fn body() -> Result<HtmlElement, DomError> {
    document()?.body().ok_or(DomError::NoBody)
}

pub fn scroll_offset() -> Result<f64, DomError> {
    Ok(window()?.scroll_y()?)
}

pub fn scroll_to_top() {
    match window() {
        Ok(window) => window.scroll_to_with_x_and_y(0.0, 0.0),
        Err(e) => log::warn!("scroll to top skipped: {}", e),
    }
}

/// Smooth-scrolls the element with the given id into view, if it exists.
pub fn scroll_to_id(id: &str) -> Result<bool, DomError> {
    let Some(element) = document()?.get_element_by_id(id) else {
        return Ok(false);
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(true)
}

/// Locks page scrolling by toggling `overflow` on `<body>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BodyScrollLock;

impl BodyScrollLock {
    fn apply(locked: bool) -> Result<(), DomError> {
        let value = if locked { "hidden" } else { "auto" };
        body()?.style().set_property("overflow", value)?;
        Ok(())
    }
}

impl ScrollLock for BodyScrollLock {
    fn set_locked(&self, locked: bool) {
        if let Err(e) = Self::apply(locked) {
            log::warn!("failed to set body scroll lock to {}: {}", locked, e);
        }
    }
}

/// An event listener that is removed when dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn add<F>(target: EventTarget, event: &'static str, handler: F) -> Result<Self, DomError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target,
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(e) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("failed to remove {} listener: {:?}", self.event, e);
        }
    }
}
