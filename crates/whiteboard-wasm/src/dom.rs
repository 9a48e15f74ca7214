//! Widget markup: title, canvas, line break, reset button.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlButtonElement, HtmlCanvasElement};
use whiteboard_core::WhiteboardConfig;

/// Elements created by `build`, in document order.
pub struct Markup {
    pub title: Element,
    pub canvas: HtmlCanvasElement,
    pub spacer: Element,
    pub reset: HtmlButtonElement,
}

impl Markup {
    /// Append every element to `container`.
    pub fn append_to(&self, container: &Element) -> Result<(), JsValue> {
        container.append_child(&self.title)?;
        container.append_child(&self.canvas)?;
        container.append_child(&self.spacer)?;
        container.append_child(&self.reset)?;
        Ok(())
    }

    /// Detach every element from the page.
    pub fn remove(&self) {
        self.title.remove();
        self.canvas.remove();
        self.spacer.remove();
        self.reset.remove();
    }
}

pub fn build(document: &Document, config: &WhiteboardConfig) -> Result<Markup, JsValue> {
    let title = document.create_element("h1")?;
    title.set_class_name(&config.title_class);
    title.set_text_content(Some(&config.title));

    let canvas = document
        .create_element("canvas")?
        .dyn_into::<HtmlCanvasElement>()?;
    canvas.set_id(&config.canvas_id);
    canvas.set_class_name(&config.canvas_class);
    canvas.set_width(config.width);
    canvas.set_height(config.height);

    let spacer = document.create_element("br")?;

    let reset = document
        .create_element("button")?
        .dyn_into::<HtmlButtonElement>()?;
    reset.set_class_name(&config.reset_class);
    reset.set_text_content(Some(&config.reset_label));

    Ok(Markup {
        title,
        canvas,
        spacer,
        reset,
    })
}
