use geometry_core::{PointerInput, PointerKind};
use glam::Vec2;
use web_sys as web;

/// Pointer position in CSS pixels relative to the canvas' top-left corner.
#[inline]
pub fn pointer_canvas_css(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> (Vec2, Vec2) {
    let rect = canvas.get_bounding_client_rect();
    let pos = Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    );
    let size = Vec2::new(rect.width() as f32, rect.height() as f32);
    (pos, size)
}

#[inline]
pub fn pointer_kind_for_event(event_type: &str) -> Option<PointerKind> {
    match event_type {
        "pointerdown" => Some(PointerKind::Down),
        "pointermove" => Some(PointerKind::Move),
        // a cancelled gesture ends the drag like a release
        "pointerup" | "pointercancel" => Some(PointerKind::Up),
        _ => None,
    }
}

pub fn pointer_input(
    ev: &web::PointerEvent,
    canvas: &web::HtmlCanvasElement,
) -> Option<PointerInput> {
    let kind = pointer_kind_for_event(&ev.type_())?;
    let (pos, size) = pointer_canvas_css(ev, canvas);
    Some(PointerInput::new(kind, ev.pointer_id(), pos, size))
}

/// Whether a canvas-relative CSS position falls inside the canvas.
#[inline]
pub fn inside_viewport(pos: Vec2, size: Vec2) -> bool {
    pos.x >= 0.0 && pos.y >= 0.0 && pos.x <= size.x && pos.y <= size.y
}
