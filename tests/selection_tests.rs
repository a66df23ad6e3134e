// Host-side tests for the selection frame.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod selection {
        include!("../src/core/selection.rs");
    }
}

use crate::core::constants::MIN_BOX_SIZE;
use crate::core::selection::*;
use glam::DVec2;

fn sample_box() -> BoundingBox {
    BoundingBox::new(100.0, 100.0, 200.0, 100.0)
}

#[test]
fn bound_box_rejects_narrow_or_short_boxes() {
    let old = sample_box();
    let too_narrow = BoundingBox::new(0.0, 0.0, 9.99, 50.0);
    let too_short = BoundingBox::new(0.0, 0.0, 50.0, 9.0);
    let negative = BoundingBox::new(0.0, 0.0, -20.0, -10.0);
    assert_eq!(bound_box(old, too_narrow), old);
    assert_eq!(bound_box(old, too_short), old);
    assert_eq!(bound_box(old, negative), old);
}

#[test]
fn bound_box_accepts_minimum_size() {
    let old = sample_box();
    let exact = BoundingBox::new(3.0, 4.0, MIN_BOX_SIZE, MIN_BOX_SIZE);
    assert_eq!(bound_box(old, exact), exact);
}

#[test]
fn resize_pins_opposite_corner_and_keeps_ratio() {
    let old = sample_box();
    let next = resize_from_handle(&old, Handle::BottomRight, DVec2::new(500.0, 300.0));
    assert_eq!(next, BoundingBox::new(100.0, 100.0, 400.0, 200.0));

    let next = resize_from_handle(&old, Handle::TopLeft, DVec2::new(200.0, 150.0));
    assert_eq!(next.corner(Handle::BottomRight), old.corner(Handle::BottomRight));
    assert_eq!((next.width, next.height), (100.0, 50.0));
}

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{a} != {b}");
}

#[test]
fn vertical_only_drag_grows_the_box() {
    let old = BoundingBox::new(100.0, 100.0, 100.0, 300.0);
    let next = bound_box(
        old,
        resize_from_handle(&old, Handle::BottomRight, DVec2::new(200.0, 600.0)),
    );
    assert_close(next.width, 160.0);
    assert_close(next.height, 480.0);
    assert_eq!((next.x, next.y), (100.0, 100.0));
}

#[test]
fn down_and_slightly_left_drag_still_grows() {
    let old = BoundingBox::new(100.0, 100.0, 100.0, 300.0);
    let next = bound_box(
        old,
        resize_from_handle(&old, Handle::BottomRight, DVec2::new(195.0, 700.0)),
    );
    assert!(next.width > old.width && next.height > old.height);
    assert_close(next.height / next.width, 3.0);
    assert_eq!((next.x, next.y), (100.0, 100.0));
}

#[test]
fn pointer_on_handle_keeps_box() {
    let old = sample_box();
    for h in Handle::ALL {
        let next = resize_from_handle(&old, h, old.corner(h));
        assert_close(next.x, old.x);
        assert_close(next.y, old.y);
        assert_close(next.width, old.width);
        assert_close(next.height, old.height);
    }
}

#[test]
fn resize_past_anchor_is_rejected_by_bound_box() {
    let old = sample_box();
    let proposed = resize_from_handle(&old, Handle::TopRight, DVec2::new(50.0, 250.0));
    assert!(proposed.width < 0.0);
    assert_eq!(bound_box(old, proposed), old);
}

#[test]
fn tiny_resize_keeps_previous_box() {
    let old = sample_box();
    // 8 px wide, 4 px tall
    let proposed = resize_from_handle(&old, Handle::BottomLeft, DVec2::new(292.0, 104.0));
    assert_eq!(bound_box(old, proposed), old);
}

#[test]
fn handle_at_finds_nearest_corner() {
    let bbox = sample_box();
    assert_eq!(
        handle_at(&bbox, DVec2::new(102.0, 98.0), 12.0),
        Some(Handle::TopLeft)
    );
    assert_eq!(
        handle_at(&bbox, DVec2::new(305.0, 205.0), 12.0),
        Some(Handle::BottomRight)
    );
    assert_eq!(handle_at(&bbox, DVec2::new(200.0, 150.0), 12.0), None);
}

#[test]
fn opposite_handles_pair_up() {
    for h in Handle::ALL {
        assert_ne!(h, h.opposite());
        assert_eq!(h.opposite().opposite(), h);
    }
}

#[test]
fn selection_select_and_clear() {
    let mut sel = Selection::default();
    assert!(!sel.selected);
    sel.select();
    assert!(sel.selected);
    sel.clear();
    assert!(!sel.selected);
}

#[test]
fn box_contains_edges() {
    let bbox = sample_box();
    assert!(bbox.contains(DVec2::new(100.0, 100.0)));
    assert!(bbox.contains(DVec2::new(300.0, 200.0)));
    assert!(!bbox.contains(DVec2::new(300.1, 150.0)));
}
