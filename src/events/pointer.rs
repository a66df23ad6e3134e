use crate::core::{bound_box, handle_at, resize_from_handle, HANDLE_HIT_RADIUS};
use crate::input::{self, Gesture};
use crate::session::Session;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_input_handlers(session: &Session) {
    wire_pointerdown(session);
    wire_pointermove(session);
    wire_pointerup(session);
}

fn wire_pointerdown(session: &Session) {
    let s = session.clone();
    let canvas_for_listener = session.canvas.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let p = input::pointer_canvas_css(&ev, &s.canvas);
        let Some(size) = s.image_size() else {
            s.deselect();
            return;
        };
        let t = *s.transform.borrow();
        let bbox = t.bounding_box(size);

        let was_selected = s.selection.borrow().selected;
        let handle = if was_selected {
            handle_at(&bbox, p, HANDLE_HIT_RADIUS)
        } else {
            None
        };
        if let Some(handle) = handle {
            *s.gesture.borrow_mut() = Gesture::Resizing { handle };
            log::debug!("[pointer] begin resize {:?}", handle);
        } else if t.contains(size, p) {
            s.selection.borrow_mut().select();
            *s.gesture.borrow_mut() = Gesture::begin_drag(p, t.position);
        } else {
            // click on empty stage
            s.deselect();
            return;
        }
        _ = s.canvas.set_pointer_capture(ev.pointer_id());
        s.mark_dirty();
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(session: &Session) {
    let s = session.clone();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let gesture = *s.gesture.borrow();
        match gesture {
            Gesture::Idle => {}
            Gesture::Dragging { grab, origin, .. } => {
                let p = input::pointer_canvas_css(&ev, &s.canvas);
                *s.gesture.borrow_mut() = Gesture::Dragging {
                    grab,
                    origin,
                    preview: input::drag_position(origin, grab, p),
                };
                s.mark_dirty();
            }
            Gesture::Resizing { handle } => {
                let Some(size) = s.image_size() else {
                    return;
                };
                let p = input::pointer_canvas_css(&ev, &s.canvas);
                {
                    let mut t = s.transform.borrow_mut();
                    let old = t.bounding_box(size);
                    let next = bound_box(old, resize_from_handle(&old, handle, p));
                    t.apply_box(size, &next);
                }
                s.sync_panel();
                s.mark_dirty();
            }
        }
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}

fn wire_pointerup(session: &Session) {
    let s = session.clone();

    let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        let gesture = std::mem::take(&mut *s.gesture.borrow_mut());
        match gesture {
            Gesture::Idle => return,
            Gesture::Dragging { preview, .. } => {
                s.transform.borrow_mut().position = preview;
                log::debug!("[pointer] drag end at ({:.1}, {:.1})", preview.x, preview.y);
            }
            Gesture::Resizing { .. } => {
                log::debug!("[pointer] resize end, scale={:.2}", s.transform.borrow().scale);
            }
        }
        s.mark_dirty();
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
        _ = wnd.add_event_listener_with_callback("pointercancel", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
