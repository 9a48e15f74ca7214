//! DOM event listener handles.
//!
//! An `EventListener` keeps its closure alive for as long as it is
//! registered and removes itself from the target when dropped, so tearing
//! down a subscription is just dropping the handle.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{EventTarget, MouseEvent};

pub struct EventListener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(MouseEvent)>,
    attached: bool,
}

impl EventListener {
    /// Register `handler` for `event` on `target`.
    pub fn attach<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(MouseEvent) + 'static,
    {
        let callback = Closure::<dyn FnMut(MouseEvent)>::new(handler);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
            attached: true,
        })
    }

    /// Unregister without freeing the closure.
    ///
    /// A listener may detach itself from inside its own callback; the
    /// closure must then outlive the call, so the handle is parked and
    /// dropped later.
    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        self.attached = false;
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("failed to remove `{}` listener: {err:?}", self.event);
        }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        self.detach();
    }
}
