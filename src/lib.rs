#![cfg(target_arch = "wasm32")]
use crate::constants::{CANVAS_ID, VIDEO_ID};
use crate::core::CameraZoom;
use crate::session::Session;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod camera;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod panel;
mod render;
mod session;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("trace-overlay starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let video: web::HtmlVideoElement = document
        .get_element_by_id(VIDEO_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", VIDEO_ID))?
        .dyn_into::<web::HtmlVideoElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::sync_canvas_backing_size(&canvas);

    let session = Session::new(document.clone(), canvas.clone(), dom::viewport_width());
    let renderer = render::Renderer::new(&canvas)?;

    // Panel starts out reflecting the defaults
    session.sync_panel();
    panel::sync_zoom(&document, &session.zoom.borrow());
    panel::sync_viewport(&document, &session.viewport.borrow());

    events::wire_panel_controls(&session);
    events::wire_viewport_resize(&session);
    events::wire_input_handlers(&session);
    events::wire_global_keydown(session.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        session: session.clone(),
        renderer,
    }));
    frame::start_loop(frame_ctx);

    // Camera comes up on its own; the overlay works without it
    spawn_local(async move {
        match camera::acquire(&video).await {
            Ok(cam) => {
                log::info!("[camera] stream {}", cam.stream.id());
                if let Some(track) = cam.track {
                    let zoom = CameraZoom::detected(
                        camera::zoom_capability(&track),
                        camera::reported_zoom(&track),
                    );
                    log::info!("[camera] zoom supported={}", zoom.is_supported());
                    if let Some(cap) = zoom.capability {
                        log::info!("[camera] zoom range {:.1}..{:.1}", cap.min, cap.max);
                    }
                    *session.zoom.borrow_mut() = zoom;
                    *session.track.borrow_mut() = Some(track);
                    panel::sync_zoom(&session.document, &zoom);
                }
            }
            Err(e) => camera::report(&e),
        }
    });

    Ok(())
}
