use super::dispatch;
use crate::constants::*;
use crate::dom;
use geometry_core::{
    AppEvent, Camera, Explorer, ParseError, SelectedShape, Slider, Swatch, ToolEvent,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Hook the narrative button and the exploration tool panel up to the explorer.
pub fn wire_controls(
    document: &web::Document,
    explorer: Rc<RefCell<Explorer>>,
    camera: Rc<RefCell<Camera>>,
) {
    {
        let explorer = explorer.clone();
        let camera = camera.clone();
        dom::add_click_listener(document, CONTINUE_BUTTON_ID, move || {
            dispatch(&explorer, &camera, AppEvent::Continue);
        });
    }

    {
        let explorer = explorer.clone();
        let camera = camera.clone();
        dom::add_listener_all(document, SHAPE_BUTTON_SELECTOR, "click", move |el| {
            let raw = el.get_attribute("data-shape").unwrap_or_default();
            match raw.parse::<SelectedShape>() {
                Ok(shape) => dispatch(
                    &explorer,
                    &camera,
                    AppEvent::Tool(ToolEvent::SelectShape(shape)),
                ),
                Err(e) => log::warn!("[tools] {}", e),
            }
        });
    }

    {
        let explorer = explorer.clone();
        let camera = camera.clone();
        dom::add_listener_all(document, SWATCH_SELECTOR, "click", move |el| {
            let raw = el.get_attribute("data-swatch").unwrap_or_default();
            match raw.parse::<Swatch>() {
                Ok(swatch) => dispatch(
                    &explorer,
                    &camera,
                    AppEvent::Tool(ToolEvent::SetColor(swatch)),
                ),
                Err(e) => log::warn!("[tools] {}", e),
            }
        });
    }

    wire_slider(
        document,
        SCALE_SLIDER_ID,
        Slider::scale(),
        ToolEvent::SetScale,
        &explorer,
        &camera,
    );
    wire_slider(
        document,
        ROTATION_SLIDER_ID,
        Slider::rotation(),
        ToolEvent::SetRotation,
        &explorer,
        &camera,
    );
}

fn wire_slider(
    document: &web::Document,
    element_id: &str,
    slider: Slider,
    to_event: fn(f32) -> ToolEvent,
    explorer: &Rc<RefCell<Explorer>>,
    camera: &Rc<RefCell<Camera>>,
) {
    let Some(input) = document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
    else {
        log::warn!("[dom] missing slider #{}", element_id);
        return;
    };
    let explorer = explorer.clone();
    let camera = camera.clone();
    let target = input.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        let parsed: Result<Slider, ParseError> = slider.set_str(&target.value());
        match parsed {
            Ok(s) => dispatch(&explorer, &camera, AppEvent::Tool(to_event(s.value))),
            Err(e) => log::warn!("[tools] {}", e),
        }
    }) as Box<dyn FnMut()>);
    _ = input.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
    closure.forget();
}
