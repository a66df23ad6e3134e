use crate::constants::HIDDEN_CLASS;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Look up an element by id and cast it to a concrete element type.
pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Wire an `input` listener on an `<input>` element, handing the element to the handler.
pub fn add_input_listener(
    document: &web::Document,
    element_id: &str,
    event: &str,
    mut handler: impl FnMut(&web::HtmlInputElement) + 'static,
) {
    if let Some(input) = element_by_id::<web::HtmlInputElement>(document, element_id) {
        let target = input.clone();
        let closure = Closure::wrap(Box::new(move || handler(&target)) as Box<dyn FnMut()>);
        _ = input.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}

pub fn set_visible(document: &web::Document, element_id: &str, visible: bool) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let cl = el.class_list();
        if visible {
            _ = cl.remove_1(HIDDEN_CLASS);
        } else {
            _ = cl.add_1(HIDDEN_CLASS);
        }
    }
}

pub fn viewport_width() -> f64 {
    web::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}
