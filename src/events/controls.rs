use crate::camera;
use crate::constants::{
    FILE_INPUT_ID, MIRROR_BUTTON_ID, OPACITY_INPUT_ID, PANEL_TOGGLE_ID, SCALE_INPUT_ID,
    ZOOM_INPUT_ID, ZOOM_LABEL_ID,
};
use crate::core::labels;
use crate::core::LoadOutcome;
use crate::dom;
use crate::session::Session;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub fn wire_panel_controls(session: &Session) {
    let document = session.document.clone();

    let s = session.clone();
    dom::add_input_listener(&document, FILE_INPUT_ID, "change", move |input| {
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            load_image_file(&s, &file);
        }
        // allow picking the same file again
        input.set_value("");
    });

    let s = session.clone();
    dom::add_input_listener(&document, OPACITY_INPUT_ID, "input", move |input| {
        s.set_opacity(input.value_as_number());
    });

    let s = session.clone();
    dom::add_input_listener(&document, SCALE_INPUT_ID, "input", move |input| {
        s.set_scale(input.value_as_number());
    });

    let s = session.clone();
    dom::add_input_listener(&document, ZOOM_INPUT_ID, "input", move |input| {
        request_zoom(&s, input.value_as_number());
    });

    let s = session.clone();
    dom::add_click_listener(&document, MIRROR_BUTTON_ID, move || s.toggle_mirror());

    let s = session.clone();
    dom::add_click_listener(&document, PANEL_TOGGLE_ID, move || s.toggle_panel());
}

/// Decode a picked file into an image element; on load it replaces the
/// current overlay. Undecodable files leave the current state untouched.
fn load_image_file(session: &Session, file: &web::File) {
    let url = match web::Url::create_object_url_with_blob(file) {
        Ok(u) => u,
        Err(e) => {
            log::debug!("[image] object url failed: {:?}", e);
            return;
        }
    };
    let img = match web::HtmlImageElement::new() {
        Ok(i) => i,
        Err(e) => {
            log::debug!("[image] image element failed: {:?}", e);
            _ = web::Url::revoke_object_url(&url);
            return;
        }
    };

    // One handler for both outcomes; it frees itself after its single call
    let settled = {
        let s = session.clone();
        let img = img.clone();
        let url = url.clone();
        let name = file.name();
        Closure::once_into_js(move |ev: web::Event| {
            img.set_onload(None);
            img.set_onerror(None);
            _ = web::Url::revoke_object_url(&url);
            match LoadOutcome::from_event_type(&ev.type_()) {
                LoadOutcome::Decoded => s.replace_image(img),
                LoadOutcome::Failed => log::debug!("[image] could not decode {}", name),
            }
        })
    };
    img.set_onload(Some(settled.unchecked_ref()));
    img.set_onerror(Some(settled.unchecked_ref()));
    img.set_src(&url);
}

/// Update the displayed zoom right away, then try the track. Requests made
/// before the stream is ready have no track and are dropped.
fn request_zoom(session: &Session, value: f64) {
    let Some(zoom) = session.zoom.borrow_mut().request(value) else {
        return;
    };
    dom::set_text(&session.document, ZOOM_LABEL_ID, &labels::zoom_label(zoom));
    let Some(track) = session.track.borrow().clone() else {
        return;
    };
    spawn_local(async move {
        if let Err(e) = camera::apply_zoom(&track, zoom).await {
            camera::report(&e);
        }
    });
}

pub fn wire_viewport_resize(session: &Session) {
    let s = session.clone();
    let closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&s.canvas);
        s.on_resize(dom::viewport_width());
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
