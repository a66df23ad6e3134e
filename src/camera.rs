use crate::core::labels;
use crate::core::{OverlayError, ZoomCapability};
use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

pub struct CameraStream {
    pub stream: web::MediaStream,
    pub track: Option<web::MediaStreamTrack>,
}

/// Best-effort readable message from a thrown JS value (DOMException, Error, string).
pub fn js_error_message(err: &JsValue) -> String {
    Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .filter(|m| !m.is_empty())
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err))
}

fn unavailable(err: JsValue) -> OverlayError {
    OverlayError::CameraUnavailable(js_error_message(&err))
}

fn rear_camera_constraints() -> web::MediaStreamConstraints {
    let video = Object::new();
    _ = Reflect::set(
        &video,
        &JsValue::from_str("facingMode"),
        &JsValue::from_str("environment"),
    );
    let constraints = web::MediaStreamConstraints::new();
    constraints.set_video(&JsValue::from(video));
    constraints.set_audio(&JsValue::FALSE);
    constraints
}

/// Request the rear camera, bind it to `video` and start playback.
pub async fn acquire(video: &web::HtmlVideoElement) -> Result<CameraStream, OverlayError> {
    let window = web::window()
        .ok_or_else(|| OverlayError::CameraUnavailable("no window".to_string()))?;
    let navigator = window.navigator();
    let has_media_devices = Reflect::get(&navigator, &JsValue::from_str("mediaDevices"))
        .map(|v| !v.is_undefined() && !v.is_null())
        .unwrap_or(false);
    if !has_media_devices {
        return Err(OverlayError::CameraUnavailable(
            "camera access is not supported in this browser".to_string(),
        ));
    }
    let devices = navigator.media_devices().map_err(unavailable)?;
    let promise = devices
        .get_user_media_with_constraints(&rear_camera_constraints())
        .map_err(unavailable)?;
    let stream: web::MediaStream = JsFuture::from(promise)
        .await
        .map_err(unavailable)?
        .dyn_into()
        .map_err(unavailable)?;

    video.set_src_object(Some(&stream));
    match video.play() {
        Ok(p) => {
            if let Err(e) = JsFuture::from(p).await {
                log::warn!("[camera] playback did not start: {}", js_error_message(&e));
            }
        }
        Err(e) => log::warn!("[camera] play() failed: {}", js_error_message(&e)),
    }

    let track = stream
        .get_video_tracks()
        .get(0)
        .dyn_into::<web::MediaStreamTrack>()
        .ok();
    log::info!("[camera] stream ready, video track={}", track.is_some());
    Ok(CameraStream { stream, track })
}

fn call_track_method(track: &web::MediaStreamTrack, name: &str) -> Option<JsValue> {
    let f = Reflect::get(track, &JsValue::from_str(name))
        .ok()?
        .dyn_into::<Function>()
        .ok()?;
    f.call0(track).ok()
}

fn number_field(obj: &JsValue, key: &str) -> Option<f64> {
    Reflect::get(obj, &JsValue::from_str(key)).ok()?.as_f64()
}

/// Zoom range from `track.getCapabilities().zoom`, if the platform reports one.
pub fn zoom_capability(track: &web::MediaStreamTrack) -> Option<ZoomCapability> {
    let caps = call_track_method(track, "getCapabilities")?;
    let zoom = Reflect::get(&caps, &JsValue::from_str("zoom")).ok()?;
    if zoom.is_undefined() || zoom.is_null() {
        return None;
    }
    ZoomCapability::new(number_field(&zoom, "min")?, number_field(&zoom, "max")?)
}

/// Current zoom from `track.getSettings().zoom`.
pub fn reported_zoom(track: &web::MediaStreamTrack) -> Option<f64> {
    let settings = call_track_method(track, "getSettings")?;
    number_field(&settings, "zoom")
}

/// Push a zoom value to the live track as an advanced constraint.
pub async fn apply_zoom(track: &web::MediaStreamTrack, zoom: f64) -> Result<(), OverlayError> {
    let rejected = |e: JsValue| OverlayError::ZoomRejected(js_error_message(&e));
    let entry = Object::new();
    _ = Reflect::set(&entry, &JsValue::from_str("zoom"), &JsValue::from_f64(zoom));
    let constraints = Object::new();
    _ = Reflect::set(
        &constraints,
        &JsValue::from_str("advanced"),
        &Array::of1(&entry),
    );
    let constraints: web::MediaTrackConstraints = constraints.unchecked_into();
    let promise = track
        .apply_constraints_with_constraints(&constraints)
        .map_err(rejected)?;
    JsFuture::from(promise).await.map_err(rejected)?;
    Ok(())
}

/// Surface an error: blocking ones as an alert, the rest in the console.
pub fn report(err: &OverlayError) {
    if err.is_blocking() {
        log::error!("[camera] {}", err);
        if let Some(w) = web::window() {
            _ = w.alert_with_message(&labels::camera_error_message(err.detail()));
        }
    } else {
        log::warn!("[camera] {}", err);
    }
}
