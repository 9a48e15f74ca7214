//! WASM bridge for the whiteboard. Mounts the drawing canvas into a page.
//!
//! Compiled via `wasm-pack build --target web`. JS calls
//! `WhiteboardWidget.mount(containerId, configJson)` once; from then on all
//! drawing is driven by DOM mouse events wired here.
//!
//! Event wiring per stroke: `mousedown` on the canvas registers a
//! `mousemove` listener and a one-shot `mouseup` listener; the `mouseup`
//! listener unregisters both. Reset tears every listener down and wires
//! `mousedown` again from scratch.

mod dom;
mod listener;
mod surface2d;

use dom::Markup;
use kurbo::Vec2;
use listener::EventListener;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use surface2d::Canvas2dSurface;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, MouseEvent};
use whiteboard_core::{PointerEvent, Whiteboard, WhiteboardConfig};

/// Listeners that only exist between a press and its release.
struct StrokeListeners {
    on_move: EventListener,
    on_release: EventListener,
}

impl StrokeListeners {
    fn detach(&mut self) {
        self.on_move.detach();
        self.on_release.detach();
    }
}

/// State shared between the widget handle and its event closures.
struct Shared {
    board: Whiteboard<Canvas2dSurface>,
    canvas: HtmlCanvasElement,
    on_press: Option<EventListener>,
    /// Listeners of the stroke in progress.
    stroke: Option<StrokeListeners>,
    /// Listeners detached from inside their own callback, freed on the next
    /// press or reset.
    retired: Option<StrokeListeners>,
}

/// The WASM-facing whiteboard handle.
#[wasm_bindgen]
pub struct WhiteboardWidget {
    shared: Rc<RefCell<Shared>>,
    markup: Option<Markup>,
    on_reset: Option<EventListener>,
}

#[wasm_bindgen]
impl WhiteboardWidget {
    /// Build the widget inside the element with id `container_id`.
    ///
    /// `config_json` may be empty for the defaults; see `default_config()`.
    pub fn mount(container_id: &str, config_json: &str) -> Result<WhiteboardWidget, JsValue> {
        console_setup();

        let config =
            WhiteboardConfig::from_json(config_json).map_err(|e| js_error(&e.to_string()))?;

        let window = web_sys::window().ok_or_else(|| js_error("no global window"))?;
        let document = window
            .document()
            .ok_or_else(|| js_error("window has no document"))?;
        let container = document
            .get_element_by_id(container_id)
            .ok_or_else(|| js_error(&format!("no element with id `{container_id}`")))?;

        let markup = dom::build(&document, &config)?;
        markup.append_to(&container)?;

        // Only touch the 2D context once the canvas is in the page.
        let surface = Canvas2dSurface::from_canvas(&markup.canvas)?;
        let shared = Rc::new(RefCell::new(Shared {
            board: Whiteboard::from_config(surface, &config),
            canvas: markup.canvas.clone(),
            on_press: None,
            stroke: None,
            retired: None,
        }));
        wire_press(&shared)?;

        let weak = Rc::downgrade(&shared);
        let on_reset = EventListener::attach(&markup.reset, "click", move |_event: MouseEvent| {
            if let Some(shared) = weak.upgrade() {
                if let Err(err) = reset_board(&shared) {
                    log::error!("reset failed: {err:?}");
                }
            }
        })?;

        log::info!(
            "whiteboard mounted in #{container_id} ({}x{})",
            config.width,
            config.height
        );
        Ok(Self {
            shared,
            markup: Some(markup),
            on_reset: Some(on_reset),
        })
    }

    /// Clear the canvas and re-initialize input handling.
    pub fn reset(&self) -> Result<(), JsValue> {
        reset_board(&self.shared)
    }

    /// Remove every listener and element. Idempotent.
    pub fn unmount(&mut self) {
        self.on_reset = None;
        {
            let mut shared = self.shared.borrow_mut();
            shared.on_press = None;
            shared.stroke = None;
            shared.retired = None;
        }
        if let Some(markup) = self.markup.take() {
            markup.remove();
            log::info!("whiteboard unmounted");
        }
    }

    /// `"idle"` or `"drawing"`.
    pub fn state(&self) -> String {
        self.shared.borrow().board.state().as_str().to_string()
    }

    /// Returns JSON: `{"state":"idle","strokes":N,"segments":N}`.
    pub fn stats(&self) -> Result<String, JsValue> {
        let stats = self.shared.borrow().board.stats();
        serde_json::to_string(&stats).map_err(|e| js_error(&e.to_string()))
    }
}

/// Default configuration as JSON, for hosts that want to tweak a copy.
#[wasm_bindgen]
pub fn default_config() -> Result<String, JsValue> {
    WhiteboardConfig::default()
        .to_json()
        .map_err(|e| js_error(&e.to_string()))
}

// ─── Event wiring ────────────────────────────────────────────────────────

fn wire_press(shared: &Rc<RefCell<Shared>>) -> Result<(), JsValue> {
    let canvas = shared.borrow().canvas.clone();
    let weak = Rc::downgrade(shared);
    let on_press = EventListener::attach(&canvas, "mousedown", move |event: MouseEvent| {
        if let Some(shared) = weak.upgrade() {
            if let Err(err) = open_stroke(&shared, &event) {
                log::error!("could not start stroke: {err:?}");
            }
        }
    })?;
    shared.borrow_mut().on_press = Some(on_press);
    Ok(())
}

fn open_stroke(shared: &Rc<RefCell<Shared>>, event: &MouseEvent) -> Result<(), JsValue> {
    let canvas = {
        let mut state = shared.borrow_mut();
        state.retired = None;
        // A release outside the canvas never reached us; drop that stroke.
        state.stroke = None;

        let offset = Vec2::new(
            f64::from(state.canvas.offset_left()),
            f64::from(state.canvas.offset_top()),
        );
        state.board.set_offset(offset);
        state.board.handle(device_event(event, PointerEvent::press));
        state.canvas.clone()
    };

    let on_move = EventListener::attach(&canvas, "mousemove", with_shared(shared, |state, event| {
        state.board.handle(device_event(&event, PointerEvent::moved));
    }))?;
    let on_release = EventListener::attach(&canvas, "mouseup", with_shared(shared, |state, event| {
        state.board.handle(device_event(&event, PointerEvent::release));
        if let Some(mut listeners) = state.stroke.take() {
            listeners.detach();
            state.retired = Some(listeners);
        }
    }))?;

    shared.borrow_mut().stroke = Some(StrokeListeners {
        on_move,
        on_release,
    });
    Ok(())
}

fn reset_board(shared: &Rc<RefCell<Shared>>) -> Result<(), JsValue> {
    {
        let mut state = shared.borrow_mut();
        state.on_press = None;
        state.stroke = None;
        state.retired = None;
        state.board.reset();
    }
    wire_press(shared)?;
    log::debug!("whiteboard reset");
    Ok(())
}

/// Adapt a handler over the shared state into a DOM callback holding only a
/// weak reference.
fn with_shared<F>(shared: &Rc<RefCell<Shared>>, mut handler: F) -> impl FnMut(MouseEvent) + use<F>
where
    F: FnMut(&mut Shared, MouseEvent) + 'static,
{
    let weak: Weak<RefCell<Shared>> = Rc::downgrade(shared);
    move |event| {
        if let Some(shared) = weak.upgrade() {
            handler(&mut shared.borrow_mut(), event);
        }
    }
}

fn device_event(event: &MouseEvent, make: fn(f64, f64) -> PointerEvent) -> PointerEvent {
    make(f64::from(event.client_x()), f64::from(event.client_y()))
}

pub(crate) fn js_error(message: &str) -> JsValue {
    js_sys::Error::new(message).into()
}

// ─── Panic hook and console logger ───────────────────────────────────────

fn console_setup() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("Whiteboard WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
            if console_log::init_with_level(log::Level::Debug).is_err() {
                web_sys::console::warn_1(&"whiteboard: a logger was already installed".into());
            }
        });
    }
}
