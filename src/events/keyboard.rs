use crate::core::keys::{is_form_control_tag, should_prevent_default};
use crate::core::{action_for_key, KeyAction};
use crate::session::Session;
use glam::DVec2;
use wasm_bindgen::JsCast;
use web_sys as web;

// Sliders, the file picker and panel buttons keep their own key handling
fn target_is_form_control(ev: &web::KeyboardEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .map_or(false, |el| is_form_control_tag(&el.tag_name()))
}

pub fn handle_global_keydown(ev: &web::KeyboardEvent, session: &Session) {
    if target_is_form_control(ev) || ev.ctrl_key() || ev.meta_key() {
        return;
    }
    let Some(action) = action_for_key(&ev.key(), ev.shift_key()) else {
        return;
    };
    match action {
        KeyAction::ToggleMirror => {
            session.toggle_mirror();
            log::info!("[keys] mirrored={}", session.transform.borrow().mirrored);
        }
        KeyAction::Deselect => session.deselect(),
        KeyAction::Nudge { dx, dy } => {
            let moved = session.nudge(DVec2::new(dx, dy));
            if should_prevent_default(&action, moved) {
                ev.prevent_default();
            }
        }
        KeyAction::ScaleBy(step) => {
            let scale = session.transform.borrow().scale;
            session.set_scale(scale + step);
        }
    }
}

pub fn wire_global_keydown(session: Session) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &session);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
