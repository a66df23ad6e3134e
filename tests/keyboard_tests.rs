// Host-side tests for keyboard shortcut mapping.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod keys {
        include!("../src/core/keys.rs");
    }
}

use crate::core::constants::{NUDGE_STEP_FAST_PX, NUDGE_STEP_PX, SCALE_KEY_STEP};
use crate::core::keys::*;

#[test]
fn letter_shortcuts_ignore_case() {
    for k in ["m", "M"] {
        assert_eq!(action_for_key(k, false), Some(KeyAction::ToggleMirror));
    }
}

#[test]
fn panel_visibility_has_no_key_binding() {
    for k in ["h", "H"] {
        assert_eq!(action_for_key(k, false), None);
        assert_eq!(action_for_key(k, true), None);
    }
}

#[test]
fn escape_deselects() {
    assert_eq!(action_for_key("Escape", false), Some(KeyAction::Deselect));
}

#[test]
fn arrows_nudge_with_shift_for_larger_steps() {
    assert_eq!(
        action_for_key("ArrowLeft", false),
        Some(KeyAction::Nudge {
            dx: -NUDGE_STEP_PX,
            dy: 0.0
        })
    );
    assert_eq!(
        action_for_key("ArrowDown", true),
        Some(KeyAction::Nudge {
            dx: 0.0,
            dy: NUDGE_STEP_FAST_PX
        })
    );
}

#[test]
fn plus_and_minus_step_scale() {
    for k in ["+", "="] {
        assert_eq!(action_for_key(k, false), Some(KeyAction::ScaleBy(SCALE_KEY_STEP)));
    }
    for k in ["-", "_"] {
        assert_eq!(
            action_for_key(k, false),
            Some(KeyAction::ScaleBy(-SCALE_KEY_STEP))
        );
    }
}

#[test]
fn unrelated_keys_are_ignored() {
    for k in ["a", "Enter", " ", "Tab", "1"] {
        assert_eq!(action_for_key(k, false), None, "key {k:?}");
    }
}

#[test]
fn focused_form_controls_suppress_shortcuts() {
    for tag in ["INPUT", "BUTTON", "button", "SELECT", "TEXTAREA"] {
        assert!(is_form_control_tag(tag), "tag {tag:?}");
    }
    for tag in ["CANVAS", "BODY", "DIV", "VIDEO"] {
        assert!(!is_form_control_tag(tag), "tag {tag:?}");
    }
}

#[test]
fn arrows_only_swallow_default_when_an_image_moved() {
    let nudge = action_for_key("ArrowUp", false).unwrap();
    assert!(should_prevent_default(&nudge, true));
    assert!(!should_prevent_default(&nudge, false));
    assert!(!should_prevent_default(&KeyAction::ToggleMirror, true));
    assert!(!should_prevent_default(&KeyAction::ScaleBy(0.05), true));
}
