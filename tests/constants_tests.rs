// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core_constants {
    include!("../src/core/constants.rs");
}

use constants::*;
use core_constants::*;

#[test]
fn defaults_sit_inside_slider_ranges() {
    assert!((OPACITY_MIN..=OPACITY_MAX).contains(&DEFAULT_OPACITY));
    assert!((SCALE_MIN..=SCALE_MAX).contains(&DEFAULT_SCALE));
    assert!(SCALE_MIN > 0.0);
}

#[test]
fn handle_hit_area_covers_drawn_anchor() {
    assert!(HANDLE_HIT_RADIUS >= HANDLE_SIZE * 0.5);
    assert!(MIN_BOX_SIZE > 0.0);
}

#[test]
fn keyboard_steps_are_positive() {
    assert!(NUDGE_STEP_FAST_PX > NUDGE_STEP_PX);
    assert!(SCALE_KEY_STEP > 0.0 && SCALE_KEY_STEP < SCALE_MAX - SCALE_MIN);
}

#[test]
fn element_ids_are_distinct() {
    let ids = [
        VIDEO_ID,
        CANVAS_ID,
        PANEL_ID,
        PANEL_TOGGLE_ID,
        FILE_INPUT_ID,
        OPACITY_INPUT_ID,
        OPACITY_LABEL_ID,
        SCALE_INPUT_ID,
        SCALE_LABEL_ID,
        ZOOM_ROW_ID,
        ZOOM_INPUT_ID,
        ZOOM_LABEL_ID,
        MIRROR_BUTTON_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn glyphs_differ() {
    assert_ne!(PANEL_OPEN_GLYPH, PANEL_CLOSE_GLYPH);
}
