// Host-side tests for camera zoom state.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod zoom {
    include!("../src/core/zoom.rs");
}

use zoom::*;

#[test]
fn capability_rejects_bad_ranges() {
    assert!(ZoomCapability::new(1.0, 8.0).is_some());
    assert!(ZoomCapability::new(2.0, 2.0).is_some());
    assert!(ZoomCapability::new(4.0, 1.0).is_none());
    assert!(ZoomCapability::new(f64::NAN, 1.0).is_none());
}

#[test]
fn unsupported_track_has_no_capability() {
    let z = CameraZoom::detected(None, Some(3.0));
    assert!(!z.is_supported());
    assert_eq!(z, CameraZoom::default());
}

#[test]
fn detected_uses_reported_setting_or_minimum() {
    let cap = ZoomCapability::new(1.0, 10.0);
    let z = CameraZoom::detected(cap, Some(2.5));
    assert!(z.is_supported());
    assert_eq!(z.current, 2.5);

    let z = CameraZoom::detected(cap, None);
    assert_eq!(z.current, 1.0);
}

#[test]
fn request_updates_display_value() {
    let mut z = CameraZoom::detected(ZoomCapability::new(1.0, 5.0), None);
    assert_eq!(z.request(3.2), Some(3.2));
    assert_eq!(z.current, 3.2);
    assert_eq!(z.request(9.0), Some(5.0));
    assert_eq!(z.current, 5.0);
}

#[test]
fn request_without_capability_is_dropped() {
    let mut z = CameraZoom::default();
    assert_eq!(z.request(2.0), None);
    assert_eq!(z.current, 1.0);
}

#[test]
fn request_ignores_nan() {
    let mut z = CameraZoom::detected(ZoomCapability::new(1.0, 5.0), Some(2.0));
    assert_eq!(z.request(f64::NAN), None);
    assert_eq!(z.current, 2.0);
}
