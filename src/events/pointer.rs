use super::dispatch;
use crate::input;
use geometry_core::{AppEvent, Camera, Explorer, PointerKind};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub explorer: Rc<RefCell<Explorer>>,
    pub camera: Rc<RefCell<Camera>>,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_pointer_event(&w, "pointerdown");
    wire_pointer_event(&w, "pointermove");
    wire_pointer_event(&w, "pointerup");
    wire_pointer_event(&w, "pointercancel");
}

fn wire_pointer_event(w: &InputWiring, event_type: &'static str) {
    let w = w.clone();
    let target = w.canvas.clone();

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        if !w.canvas.is_connected() {
            return;
        }
        let Some(pointer) = input::pointer_input(&ev, &w.canvas) else {
            return;
        };
        match pointer.kind {
            PointerKind::Down => {
                // keep receiving moves while the pointer leaves the canvas
                _ = w.canvas.set_pointer_capture(ev.pointer_id());
                ev.prevent_default();
            }
            PointerKind::Up => {
                if w.canvas.has_pointer_capture(ev.pointer_id()) {
                    _ = w.canvas.release_pointer_capture(ev.pointer_id());
                }
            }
            PointerKind::Move => {}
        }
        dispatch(&w.explorer, &w.camera, AppEvent::Pointer(pointer));
        update_cursor(&w);
    }) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn update_cursor(w: &InputWiring) {
    let dragging = w
        .explorer
        .borrow()
        .scene
        .point_set()
        .map(|set| (0..set.points().len()).any(|i| set.handle(i).is_some_and(|h| h.is_dragging())))
        .unwrap_or(false);
    let cursor = if dragging { "grabbing" } else { "default" };
    _ = w.canvas.style().set_property("cursor", cursor);
}
