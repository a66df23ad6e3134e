use super::selection::Selection;
use super::transform::OverlayTransform;
use glam::DVec2;

/// How an `<img>` decode settled, from the event that fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Decoded,
    Failed,
}

impl LoadOutcome {
    pub fn from_event_type(event_type: &str) -> Self {
        if event_type == "load" {
            LoadOutcome::Decoded
        } else {
            LoadOutcome::Failed
        }
    }
}

/// Adopt a freshly decoded image of intrinsic `size`: center it on the stage
/// at the current scale and select it. Images without an intrinsic size are
/// rejected and leave both states untouched.
pub fn load_image(
    transform: &mut OverlayTransform,
    selection: &mut Selection,
    stage: DVec2,
    size: DVec2,
) -> bool {
    if !(size.x > 0.0 && size.y > 0.0) {
        return false;
    }
    transform.center_in(stage, size);
    selection.select();
    true
}
