// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use geometry_core::PointerKind;
use glam::Vec2;
use input::*;

#[test]
fn pointer_event_types_map_to_kinds() {
    assert_eq!(pointer_kind_for_event("pointerdown"), Some(PointerKind::Down));
    assert_eq!(pointer_kind_for_event("pointermove"), Some(PointerKind::Move));
    assert_eq!(pointer_kind_for_event("pointerup"), Some(PointerKind::Up));
}

#[test]
fn cancelled_pointer_ends_the_drag() {
    assert_eq!(pointer_kind_for_event("pointercancel"), Some(PointerKind::Up));
}

#[test]
fn unrelated_events_are_dropped() {
    assert_eq!(pointer_kind_for_event("click"), None);
    assert_eq!(pointer_kind_for_event("pointerenter"), None);
    assert_eq!(pointer_kind_for_event(""), None);
}

#[test]
fn viewport_bounds_are_inclusive() {
    let size = Vec2::new(800.0, 600.0);
    assert!(inside_viewport(Vec2::ZERO, size));
    assert!(inside_viewport(size, size));
    assert!(inside_viewport(Vec2::new(400.0, 300.0), size));
    assert!(!inside_viewport(Vec2::new(-0.5, 10.0), size));
    assert!(!inside_viewport(Vec2::new(10.0, 600.5), size));
}
