use crate::constants::FRAME_LOG_INTERVAL_SEC;
use crate::events::dispatch;
use crate::overlay;
use crate::render;
use geometry_core::{AppEvent, Camera, Explorer};
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub explorer: Rc<RefCell<Explorer>>,
    pub camera: Rc<RefCell<Camera>>,
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub gpu: Option<render::GpuState<'a>>,
    pub overlay: overlay::OverlayCache,

    pub last_instant: Instant,
    pub log_accum: f32,
    pub frames_since_log: u32,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let rect = self.canvas.get_bounding_client_rect();
        let css = Vec2::new(rect.width() as f32, rect.height() as f32);
        self.camera.borrow_mut().set_viewport(css.x, css.y);

        dispatch(&self.explorer, &self.camera, AppEvent::Tick);

        let explorer = self.explorer.borrow();
        let camera = self.camera.borrow();
        let draw = explorer.draw_list();

        if let Some(gpu) = self.gpu.as_mut() {
            gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
            match gpu.render(&draw, &camera) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    // reconfigure on the next frame with the current size
                    gpu.resize_if_needed(1, 1);
                }
                Err(e) => log::error!("[gpu] render error: {:?}", e),
            }
        }

        overlay::update_panels(
            &self.document,
            &mut self.overlay,
            &explorer.overlay(),
            &explorer.tools,
        );
        overlay::update_labels(&self.document, &mut self.overlay, &draw.labels, &camera, css);

        self.frames_since_log += 1;
        self.log_accum += dt_sec;
        if self.log_accum >= FRAME_LOG_INTERVAL_SEC {
            log::debug!(
                "[frame] {:.1} fps scene={:?} spheres={} segments={}",
                self.frames_since_log as f32 / self.log_accum,
                explorer.scene.kind(),
                draw.spheres.len(),
                draw.segments().len()
            );
            self.log_accum = 0.0;
            self.frames_since_log = 0;
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
