use crate::render::Renderer;
use crate::session::Session;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub session: Session,
    pub renderer: Renderer,
}

impl FrameContext {
    /// Redraw the overlay layer if anything changed since the last frame.
    pub fn frame(&mut self) {
        if !self.session.dirty.replace(false) {
            return;
        }
        let t = self.session.display_transform();
        let selected = self.session.selection.borrow().selected;
        let image = self.session.image.borrow();
        if let Err(e) = self
            .renderer
            .draw(&self.session.canvas, image.as_ref(), &t, selected)
        {
            log::error!("render error: {:?}", e);
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
