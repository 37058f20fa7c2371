//! Ray/plane projection used to turn a pointer ray into a drag position.
//!
//! There is exactly one projection routine in the crate. Every draggable
//! point goes through [`project_to_drag_plane`], so the parallel-ray and
//! behind-origin rules live in one place.

use crate::constants::PLANE_PARALLEL_EPSILON;
use glam::Vec3;

/// Half-line starting at `origin` and extending along `direction`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Infinite plane with `normal · p + constant = 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane {
    pub normal: Vec3,
    pub constant: f32,
}

impl Plane {
    /// The z = 0 plane every point is dragged on.
    pub const XY: Self = Self {
        normal: Vec3::Z,
        constant: 0.0,
    };

    pub const fn new(normal: Vec3, constant: f32) -> Self {
        Self { normal, constant }
    }
}

/// Intersect `ray` with `plane`.
///
/// Returns `None` when the ray runs parallel to the plane (`|n·d| <= 1e-4`)
/// or when the plane lies behind the ray origin (`t < 0`).
pub fn project_onto_plane(ray: &Ray, plane: &Plane) -> Option<Vec3> {
    let denom = plane.normal.dot(ray.direction);
    if denom.abs() <= PLANE_PARALLEL_EPSILON {
        return None;
    }
    let t = -(ray.origin.dot(plane.normal) + plane.constant) / denom;
    (t >= 0.0).then(|| ray.at(t))
}

/// Project onto the z = 0 drag plane, forcing z to exactly 0.
#[inline]
pub fn project_to_drag_plane(ray: &Ray) -> Option<Vec3> {
    project_onto_plane(ray, &Plane::XY).map(|hit| Vec3::new(hit.x, hit.y, 0.0))
}

/// Distance along `ray` to the nearest non-negative hit on a sphere.
#[inline]
pub fn ray_sphere(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let dir = ray.direction.normalize_or_zero();
    let oc = ray.origin - center;
    let b = oc.dot(dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sq = disc.sqrt();
    let near = -b - sq;
    if near >= 0.0 {
        return Some(near);
    }
    // origin inside the sphere
    let far = -b + sq;
    (far >= 0.0).then_some(far)
}
