use crate::core::Handle;
use glam::DVec2;
use web_sys as web;

/// Pointer gesture in progress on the overlay canvas.
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    #[default]
    Idle,
    /// Moving the image. `preview` is drawn until release commits it.
    Dragging {
        grab: DVec2,
        origin: DVec2,
        preview: DVec2,
    },
    /// Dragging a selection-frame anchor.
    Resizing { handle: Handle },
}

impl Gesture {
    pub fn begin_drag(grab: DVec2, origin: DVec2) -> Self {
        Gesture::Dragging {
            grab,
            origin,
            preview: origin,
        }
    }

    /// Position the image would take if released now; `None` unless dragging.
    pub fn drag_preview(&self) -> Option<DVec2> {
        match self {
            Gesture::Dragging { preview, .. } => Some(*preview),
            _ => None,
        }
    }
}

#[inline]
pub fn drag_position(origin: DVec2, grab: DVec2, pointer: DVec2) -> DVec2 {
    origin + (pointer - grab)
}

// Pointer position in css pixels relative to the canvas' top-left corner
#[inline]
pub fn pointer_canvas_css(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> DVec2 {
    let rect = canvas.get_bounding_client_rect();
    DVec2::new(
        ev.client_x() as f64 - rect.left(),
        ev.client_y() as f64 - rect.top(),
    )
}
