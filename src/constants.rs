/// Front-end element ids and rendering tuning.
///
/// Geometry constants live in `geometry_core::constants`; this module only
/// holds what the browser page and the WebGPU pass need.
// DOM element ids
pub const CANVAS_ID: &str = "app-canvas";
pub const NARRATIVE_ID: &str = "narrative";
pub const NARRATIVE_TEXT_ID: &str = "narrative-text";
pub const CONTINUE_BUTTON_ID: &str = "narrative-continue";
pub const TOOLS_PANEL_ID: &str = "tools-panel";
pub const SCALE_SLIDER_ID: &str = "tool-scale";
pub const ROTATION_SLIDER_ID: &str = "tool-rotation";
pub const SCALE_READOUT_ID: &str = "tool-scale-value";
pub const ROTATION_READOUT_ID: &str = "tool-rotation-value";
pub const LABEL_LAYER_ID: &str = "scene-labels";

// Selectors for repeated controls
pub const SHAPE_BUTTON_SELECTOR: &str = "[data-shape]";
pub const SWATCH_SELECTOR: &str = "[data-swatch]";

// Class toggled on hidden panels
pub const HIDDEN_CLASS: &str = "hidden";
pub const ACTIVE_CLASS: &str = "active";

// Rendering
pub const CLEAR_COLOR: [f64; 4] = [0.93, 0.95, 1.0, 1.0]; // pale indigo background
pub const MAX_SPHERES: usize = 32;
pub const MAX_SEGMENTS: usize = 256;
pub const LINE_WIDTH_PX: f32 = 3.0;

// Frame statistics are logged at most this often (seconds)
pub const FRAME_LOG_INTERVAL_SEC: f32 = 5.0;
