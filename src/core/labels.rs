// Text for the control panel labels.

pub fn opacity_label(opacity: f64) -> String {
    format!("Opacity: {:.2}", opacity)
}

pub fn scale_label(scale: f64) -> String {
    format!("Scale: {:.2}x", scale)
}

pub fn zoom_label(zoom: f64) -> String {
    format!("Camera zoom: {:.1}x", zoom)
}

pub fn mirror_label(mirrored: bool) -> &'static str {
    if mirrored {
        "Unmirror image"
    } else {
        "Mirror image"
    }
}

/// Message shown in the blocking alert when the camera cannot be opened.
pub fn camera_error_message(detail: &str) -> String {
    format!("Could not access the camera: {}", detail)
}
