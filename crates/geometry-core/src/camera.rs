//! Camera description and pointer-to-ray conversion.
//!
//! These types avoid referencing platform-specific APIs. The web frontend
//! feeds canvas sizes in and gets rays back; tests drive the same path with
//! plain numbers.

use crate::constants::{camera_eye_vec3, CAMERA_FOVY_DEG, CAMERA_ZFAR, CAMERA_ZNEAR};
use crate::projector::Ray;
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Source of world-space rays for normalized device coordinates.
pub trait RayCaster {
    fn ray_from_ndc(&self, ndc: Vec2) -> Ray;
}

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: camera_eye_vec3(),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: CAMERA_ZNEAR,
            zfar: CAMERA_ZFAR,
        }
    }
}

impl Camera {
    /// Default camera sized for a `width` x `height` viewport.
    pub fn for_viewport(width: f32, height: f32) -> Self {
        let mut cam = Self::default();
        cam.set_viewport(width, height);
        cam
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.aspect = width / height.max(1.0);
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Project a world-space point to NDC. `None` when it sits behind the eye.
    pub fn world_to_ndc(&self, p: Vec3) -> Option<Vec2> {
        let clip = self.view_proj() * p.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        Some(Vec2::new(clip.x / clip.w, clip.y / clip.w))
    }
}

impl RayCaster for Camera {
    fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let inv = self.view_proj().inverse();
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let far: Vec3 = p_far.truncate() / p_far.w;
        Ray::new(self.eye, (far - self.eye).normalize())
    }
}

/// Convert a pointer position in pixels to normalized device coordinates.
///
/// `y` grows downwards in pixel space and upwards in NDC. A degenerate
/// viewport maps everything to the centre.
#[inline]
pub fn pointer_to_ndc(px: Vec2, viewport: Vec2) -> Vec2 {
    if viewport.x <= 0.0 || viewport.y <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        (px.x / viewport.x) * 2.0 - 1.0,
        -(px.y / viewport.y) * 2.0 + 1.0,
    )
}

/// Inverse of [`pointer_to_ndc`], used to place DOM labels.
#[inline]
pub fn ndc_to_pointer(ndc: Vec2, viewport: Vec2) -> Vec2 {
    Vec2::new(
        (ndc.x + 1.0) * 0.5 * viewport.x,
        (1.0 - ndc.y) * 0.5 * viewport.y,
    )
}
