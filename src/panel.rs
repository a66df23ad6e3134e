use crate::constants::{
    MIRROR_BUTTON_ID, OPACITY_INPUT_ID, OPACITY_LABEL_ID, PANEL_ID, PANEL_TOGGLE_ID,
    SCALE_INPUT_ID, SCALE_LABEL_ID, ZOOM_INPUT_ID, ZOOM_LABEL_ID, ZOOM_ROW_ID,
};
use crate::core::labels;
use crate::core::{CameraZoom, OverlayTransform, ViewportMode};
use crate::dom;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document) {
    dom::set_visible(document, PANEL_ID, true);
}

#[inline]
pub fn hide(document: &web::Document) {
    dom::set_visible(document, PANEL_ID, false);
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    document
        .get_element_by_id(PANEL_ID)
        .map(|el| el.class_list().contains(crate::constants::HIDDEN_CLASS))
        .unwrap_or(false)
}

fn set_slider(document: &web::Document, id: &str, value: f64) {
    if let Some(input) = dom::element_by_id::<web::HtmlInputElement>(document, id) {
        if input.value_as_number() != value {
            input.set_value_as_number(value);
        }
    }
}

/// Reflect the overlay transform in the sliders, labels and mirror button.
pub fn sync_transform(document: &web::Document, t: &OverlayTransform) {
    set_slider(document, OPACITY_INPUT_ID, t.opacity);
    dom::set_text(document, OPACITY_LABEL_ID, &labels::opacity_label(t.opacity));
    set_slider(document, SCALE_INPUT_ID, t.scale);
    dom::set_text(document, SCALE_LABEL_ID, &labels::scale_label(t.scale));
    dom::set_text(document, MIRROR_BUTTON_ID, labels::mirror_label(t.mirrored));
}

/// Show the camera zoom row only when the track reported a zoom range.
pub fn sync_zoom(document: &web::Document, zoom: &CameraZoom) {
    let Some(cap) = zoom.capability else {
        dom::set_visible(document, ZOOM_ROW_ID, false);
        return;
    };
    if let Some(input) = dom::element_by_id::<web::HtmlInputElement>(document, ZOOM_INPUT_ID) {
        input.set_min(&cap.min.to_string());
        input.set_max(&cap.max.to_string());
    }
    set_slider(document, ZOOM_INPUT_ID, zoom.current);
    dom::set_text(document, ZOOM_LABEL_ID, &labels::zoom_label(zoom.current));
    dom::set_visible(document, ZOOM_ROW_ID, true);
}

/// Apply the viewport mode: panel visibility plus the floating toggle and its glyph.
pub fn sync_viewport(document: &web::Document, mode: &ViewportMode) {
    if mode.panel_shown() {
        show(document);
    } else {
        hide(document);
    }
    dom::set_visible(document, PANEL_TOGGLE_ID, mode.toggle_button_shown());
    dom::set_text(document, PANEL_TOGGLE_ID, mode.toggle_glyph());
}
