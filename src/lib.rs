#![cfg(target_arch = "wasm32")]
use crate::constants::CANVAS_ID;
use geometry_core::{Camera, Explorer};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;
mod render;

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("geometry-explorer starting");

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

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let rect = canvas.get_bounding_client_rect();
    let camera = Rc::new(RefCell::new(Camera::for_viewport(
        rect.width() as f32,
        rect.height() as f32,
    )));
    let explorer = Rc::new(RefCell::new(Explorer::new()));
    log::info!(
        "[narrative] step 1: {}",
        explorer.borrow().narrative.prompt()
    );

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        explorer: explorer.clone(),
        camera: camera.clone(),
    });
    events::wire_controls(&document, explorer.clone(), camera.clone());

    let gpu: Option<render::GpuState> = frame::init_gpu(&canvas).await;
    if gpu.is_none() {
        log::warn!("[gpu] rendering disabled; narrative and labels still update");
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        explorer,
        camera,
        canvas,
        document,
        gpu,
        overlay: overlay::OverlayCache::default(),
        last_instant: Instant::now(),
        log_accum: 0.0,
        frames_since_log: 0,
    }));
    // Start RAF loop
    frame::start_loop(frame_ctx);
    Ok(())
}
