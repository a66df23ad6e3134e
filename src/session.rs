use crate::core::{load_image, CameraZoom, OverlayTransform, Selection, ViewportMode};
use crate::input::Gesture;
use crate::panel;
use glam::DVec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

pub struct LoadedImage {
    pub element: web::HtmlImageElement,
    pub size: DVec2,
}

/// UI state shared by the event handlers and the frame loop.
#[derive(Clone)]
pub struct Session {
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub transform: Rc<RefCell<OverlayTransform>>,
    pub image: Rc<RefCell<Option<LoadedImage>>>,
    pub selection: Rc<RefCell<Selection>>,
    pub gesture: Rc<RefCell<Gesture>>,
    pub zoom: Rc<RefCell<CameraZoom>>,
    pub viewport: Rc<RefCell<ViewportMode>>,
    pub track: Rc<RefCell<Option<web::MediaStreamTrack>>>,
    pub dirty: Rc<Cell<bool>>,
}

impl Session {
    pub fn new(document: web::Document, canvas: web::HtmlCanvasElement, width: f64) -> Self {
        Self {
            document,
            canvas,
            transform: Rc::new(RefCell::new(OverlayTransform::default())),
            image: Rc::new(RefCell::new(None)),
            selection: Rc::new(RefCell::new(Selection::default())),
            gesture: Rc::new(RefCell::new(Gesture::Idle)),
            zoom: Rc::new(RefCell::new(CameraZoom::default())),
            viewport: Rc::new(RefCell::new(ViewportMode::from_width(width))),
            track: Rc::new(RefCell::new(None)),
            dirty: Rc::new(Cell::new(true)),
        }
    }

    #[inline]
    pub fn mark_dirty(&self) {
        self.dirty.set(true);
    }

    /// Canvas size in css pixels.
    pub fn stage_size(&self) -> DVec2 {
        let rect = self.canvas.get_bounding_client_rect();
        DVec2::new(rect.width(), rect.height())
    }

    pub fn image_size(&self) -> Option<DVec2> {
        self.image.borrow().as_ref().map(|img| img.size)
    }

    /// Transform as it should be drawn, including an uncommitted drag.
    pub fn display_transform(&self) -> OverlayTransform {
        let mut t = *self.transform.borrow();
        if let Some(p) = self.gesture.borrow().drag_preview() {
            t.position = p;
        }
        t
    }

    pub fn sync_panel(&self) {
        panel::sync_transform(&self.document, &self.transform.borrow());
    }

    /// Swap in a freshly decoded image, centered and selected.
    pub fn replace_image(&self, element: web::HtmlImageElement) {
        let size = DVec2::new(element.natural_width() as f64, element.natural_height() as f64);
        let accepted = load_image(
            &mut self.transform.borrow_mut(),
            &mut self.selection.borrow_mut(),
            self.stage_size(),
            size,
        );
        if !accepted {
            log::debug!("[image] ignoring image without intrinsic size");
            return;
        }
        *self.image.borrow_mut() = Some(LoadedImage { element, size });
        *self.gesture.borrow_mut() = Gesture::Idle;
        log::info!("[image] loaded {}x{}", size.x, size.y);
        self.sync_panel();
        self.mark_dirty();
    }

    pub fn set_opacity(&self, v: f64) {
        self.transform.borrow_mut().set_opacity(v);
        self.sync_panel();
        self.mark_dirty();
    }

    pub fn set_scale(&self, v: f64) {
        self.transform.borrow_mut().set_scale(v);
        self.sync_panel();
        self.mark_dirty();
    }

    pub fn toggle_mirror(&self) {
        self.transform.borrow_mut().toggle_mirror();
        self.sync_panel();
        self.mark_dirty();
    }

    /// Move the loaded image; returns false when there is nothing to move.
    pub fn nudge(&self, delta: DVec2) -> bool {
        if self.image.borrow().is_none() {
            return false;
        }
        self.transform.borrow_mut().nudge(delta);
        self.mark_dirty();
        true
    }

    pub fn deselect(&self) {
        self.selection.borrow_mut().clear();
        self.mark_dirty();
    }

    pub fn toggle_panel(&self) {
        let mode = {
            let mut vp = self.viewport.borrow_mut();
            vp.toggle_panel();
            *vp
        };
        panel::sync_viewport(&self.document, &mode);
        log::info!("[panel] hidden={}", panel::is_hidden(&self.document));
    }

    pub fn on_resize(&self, width: f64) {
        let mode = {
            let mut vp = self.viewport.borrow_mut();
            vp.on_resize(width);
            *vp
        };
        panel::sync_viewport(&self.document, &mode);
        self.mark_dirty();
    }
}
