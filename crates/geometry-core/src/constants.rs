use glam::Vec3;

// Shared geometry and interaction constants used by the core and the web frontend.

// Projection
pub const PLANE_PARALLEL_EPSILON: f32 = 1e-4; // |n·d| at or below this counts as parallel

// Interaction
pub const POINT_PICK_RADIUS: f32 = 0.3; // sphere hit area of a draggable point

// Transformations scene
pub const ROTATION_STEP_RAD: f32 = 0.005; // added once per rendered frame
pub const DEFAULT_SCALE: f32 = 1.0;

// Camera (fixed; orbiting is left to the host)
pub const CAMERA_EYE: [f32; 3] = [0.0, 0.0, 10.0];
pub const CAMERA_FOVY_DEG: f32 = 75.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 1000.0;

// Fixed primitive sizes
pub const POINT_RADIUS: f32 = 0.3;
pub const EXPLORE_POINT_RADIUS: f32 = 0.2;
pub const EXPLORE_CIRCLE_RADIUS: f32 = 1.5;
pub const CUBE_SIDE: f32 = 2.0;
pub const TRANSFORM_LABEL_OFFSET: f32 = 2.5; // label distance above/below the cube

// Edge colors (rgba)
pub const LINE_EDGE_COLORS: [[f32; 4]; 3] = [
    [100.0 / 255.0, 100.0 / 255.0, 1.0, 0.8], // 0-1
    [100.0 / 255.0, 1.0, 100.0 / 255.0, 0.8], // 1-2
    [1.0, 100.0 / 255.0, 100.0 / 255.0, 0.8], // 2-0
];
pub const SHAPE_OUTLINE_COLOR: [f32; 4] = [180.0 / 255.0, 180.0 / 255.0, 1.0, 0.8];
pub const EXPLORE_DEFAULT_COLOR: [f32; 4] = [0.55, 0.57, 0.62, 1.0]; // unlit default material

// Initial point sets
pub const POINTS_SCENE_POSITIONS: [[f32; 3]; 3] =
    [[-2.0, 0.0, 0.0], [0.0, 2.0, 0.0], [2.0, -1.0, 0.0]];
pub const TRIANGLE_SCENE_POSITIONS: [[f32; 3]; 3] =
    [[-2.0, 1.0, 0.0], [2.0, 1.0, 0.0], [0.0, -2.0, 0.0]];

// Exploration primitives
pub const EXPLORE_LINE: [[f32; 3]; 2] = [[-2.0, 0.0, 0.0], [2.0, 0.0, 0.0]];
pub const EXPLORE_TRIANGLE: [[f32; 3]; 3] = [[-2.0, -1.0, 0.0], [2.0, -1.0, 0.0], [0.0, 2.0, 0.0]];

pub const PLACEHOLDER_PROMPT: &str = "Select a shape from the panel";

#[inline]
pub fn camera_eye_vec3() -> Vec3 {
    Vec3::from_array(CAMERA_EYE)
}
