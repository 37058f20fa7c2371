use crate::constants::*;
use crate::dom;
use crate::input;
use geometry_core::{Camera, Label, OverlayView, ToolPanel};
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn show(document: &web::Document, element_id: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        _ = el.class_list().remove_1(HIDDEN_CLASS);
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document, element_id: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        _ = el.class_list().add_1(HIDDEN_CLASS);
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn is_hidden(document: &web::Document, element_id: &str) -> bool {
    if let Some(el) = document.get_element_by_id(element_id) {
        if el.class_list().contains(HIDDEN_CLASS) {
            return true;
        }
        return el
            .get_attribute("style")
            .map(|s| s.contains("display:none"))
            .unwrap_or(false);
    }
    false
}

fn set_visible(document: &web::Document, element_id: &str, visible: bool) {
    if visible == is_hidden(document, element_id) {
        if visible {
            show(document, element_id);
        } else {
            hide(document, element_id);
        }
    }
}

/// Last markup written to the DOM, so unchanged frames skip the DOM writes.
#[derive(Default)]
pub struct OverlayCache {
    view: Option<OverlayView>,
    tools: Option<ToolPanel>,
    labels_html: String,
}

/// Sync the narrative panel and the tool panel with the explorer state.
pub fn update_panels(
    document: &web::Document,
    cache: &mut OverlayCache,
    view: &OverlayView,
    tools: &ToolPanel,
) {
    if cache.view.as_ref() != Some(view) {
        dom::set_text(document, NARRATIVE_TEXT_ID, view.prompt);
        dom::set_text(document, CONTINUE_BUTTON_ID, view.button_label);
        set_visible(document, NARRATIVE_ID, view.narrative_visible);
        set_visible(document, TOOLS_PANEL_ID, view.tools_visible);
        if view.tools_visible {
            log::info!("[overlay] tool panel shown");
        }
        cache.view = Some(view.clone());
    }

    if cache.tools.as_ref() != Some(tools) {
        dom::set_text(document, SCALE_READOUT_ID, &format!("{:.1}", tools.scale.value));
        dom::set_text(
            document,
            ROTATION_READOUT_ID,
            &format!("{}°", tools.rotation.value.round() as i32),
        );
        mark_active(
            document,
            SHAPE_BUTTON_SELECTOR,
            "data-shape",
            tools.selected.map(|s| s.label()),
        );
        mark_active(document, SWATCH_SELECTOR, "data-swatch", tools.color.map(|c| c.name()));
        cache.tools = Some(*tools);
    }
}

fn mark_active(document: &web::Document, selector: &str, attr: &str, active: Option<&str>) {
    let Ok(list) = document.query_selector_all(selector) else {
        return;
    };
    for i in 0..list.length() {
        let Some(el) = list.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        let on = match (el.get_attribute(attr), active) {
            (Some(value), Some(active)) => value.trim().eq_ignore_ascii_case(active),
            _ => false,
        };
        _ = el.class_list().toggle_with_force(ACTIVE_CLASS, on);
    }
}

/// Position the scene's text labels over the canvas.
pub fn update_labels(
    document: &web::Document,
    cache: &mut OverlayCache,
    labels: &[Label],
    camera: &Camera,
    canvas_css: Vec2,
) {
    let mut html = String::new();
    for label in labels {
        let Some(ndc) = camera.world_to_ndc(label.position) else {
            continue;
        };
        let px = geometry_core::ndc_to_pointer(ndc, canvas_css);
        if !input::inside_viewport(px, canvas_css) {
            continue;
        }
        html.push_str(&format!(
            concat!(
                "<div class='scene-label' style='position:absolute; left:{:.1}px; ",
                "top:{:.1}px; transform:translate(-50%, -50%);'>{}</div>"
            ),
            px.x, px.y, label.text
        ));
    }
    if html != cache.labels_html {
        if let Some(layer) = document.get_element_by_id(LABEL_LAYER_ID) {
            layer.set_inner_html(&html);
        }
        cache.labels_html = html;
    }
}
