use super::constants::{NUDGE_STEP_FAST_PX, NUDGE_STEP_PX, SCALE_KEY_STEP};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyAction {
    ToggleMirror,
    Deselect,
    Nudge { dx: f64, dy: f64 },
    ScaleBy(f64),
}

/// Map a `KeyboardEvent.key` value to an overlay action.
pub fn action_for_key(key: &str, shift: bool) -> Option<KeyAction> {
    let step = if shift {
        NUDGE_STEP_FAST_PX
    } else {
        NUDGE_STEP_PX
    };
    match key {
        "m" | "M" => Some(KeyAction::ToggleMirror),
        "Escape" => Some(KeyAction::Deselect),
        "ArrowLeft" => Some(KeyAction::Nudge { dx: -step, dy: 0.0 }),
        "ArrowRight" => Some(KeyAction::Nudge { dx: step, dy: 0.0 }),
        "ArrowUp" => Some(KeyAction::Nudge { dx: 0.0, dy: -step }),
        "ArrowDown" => Some(KeyAction::Nudge { dx: 0.0, dy: step }),
        "+" | "=" => Some(KeyAction::ScaleBy(SCALE_KEY_STEP)),
        "-" | "_" => Some(KeyAction::ScaleBy(-SCALE_KEY_STEP)),
        _ => None,
    }
}

/// Elements that keep their own keyboard handling (`Element.tagName`, any case).
pub fn is_form_control_tag(tag: &str) -> bool {
    ["INPUT", "BUTTON", "SELECT", "TEXTAREA"]
        .iter()
        .any(|t| t.eq_ignore_ascii_case(tag))
}

/// Only a nudge that moved an image swallows the key; otherwise arrows keep scrolling.
pub fn should_prevent_default(action: &KeyAction, acted: bool) -> bool {
    matches!(action, KeyAction::Nudge { .. }) && acted
}
