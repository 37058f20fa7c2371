// Host-side tests for front-end constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn render_capacities_cover_every_scene() {
    // three points per lesson plus the exploration circle
    assert!(MAX_SPHERES >= 3);
    // twelve cube edges plus a closed triangle outline
    assert!(MAX_SEGMENTS >= 12 + 3);
    assert!(LINE_WIDTH_PX > 0.0);
    assert!(FRAME_LOG_INTERVAL_SEC > 0.0);
}

#[test]
fn clear_color_is_opaque_and_normalized() {
    for c in CLEAR_COLOR {
        assert!((0.0..=1.0).contains(&c));
    }
    assert_eq!(CLEAR_COLOR[3], 1.0);
}

#[test]
fn selectors_name_the_data_attributes_read_by_the_controls() {
    assert_eq!(SHAPE_BUTTON_SELECTOR, "[data-shape]");
    assert_eq!(SWATCH_SELECTOR, "[data-swatch]");
}

#[test]
fn element_ids_are_distinct() {
    let ids = [
        CANVAS_ID,
        NARRATIVE_ID,
        NARRATIVE_TEXT_ID,
        CONTINUE_BUTTON_ID,
        TOOLS_PANEL_ID,
        SCALE_SLIDER_ID,
        ROTATION_SLIDER_ID,
        SCALE_READOUT_ID,
        ROTATION_READOUT_ID,
        LABEL_LAYER_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
