use geometry_core::*;
use glam::{Vec2, Vec3};

#[test]
fn projects_straight_down_ray_to_origin() {
    let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
    let hit = project_onto_plane(&ray, &Plane::XY).expect("ray should hit z=0");
    assert!(hit.distance(Vec3::ZERO) < 1e-6);
}

#[test]
fn parallel_ray_never_intersects() {
    for origin in [
        Vec3::new(0.0, 0.0, 5.0),
        Vec3::new(3.0, -2.0, -1.0),
        Vec3::ZERO,
    ] {
        let ray = Ray::new(origin, Vec3::X);
        assert!(project_onto_plane(&ray, &Plane::XY).is_none());
    }
}

#[test]
fn nearly_parallel_ray_is_rejected_at_epsilon() {
    // n·d == 1e-4 is still treated as parallel
    let ray = Ray::new(Vec3::new(0.0, 0.0, -1.0), Vec3::new(1.0, 0.0, 1e-4));
    assert!(project_onto_plane(&ray, &Plane::XY).is_none());
}

#[test]
fn plane_behind_origin_is_rejected() {
    let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, -1.0));
    assert!(project_onto_plane(&ray, &Plane::XY).is_none());
}

#[test]
fn origin_on_plane_hits_at_origin() {
    let ray = Ray::new(Vec3::new(1.0, 2.0, 0.0), Vec3::new(0.0, 0.0, -1.0));
    let hit = project_onto_plane(&ray, &Plane::XY).expect("t = 0 is a hit");
    assert!(hit.distance(Vec3::new(1.0, 2.0, 0.0)) < 1e-6);
}

#[test]
fn offset_plane_uses_constant() {
    // normal·p + constant = 0  =>  z = 2
    let plane = Plane::new(Vec3::Z, -2.0);
    let ray = Ray::new(Vec3::new(1.0, 1.0, 6.0), Vec3::new(0.0, 0.0, -1.0));
    let hit = project_onto_plane(&ray, &plane).expect("should hit z=2");
    assert!((hit.z - 2.0).abs() < 1e-5);
}

#[test]
fn drag_plane_projection_forces_zero_z() {
    let ray = Ray::new(
        Vec3::new(0.3, -0.7, 10.0),
        Vec3::new(0.123, 0.456, -1.0).normalize(),
    );
    let hit = project_to_drag_plane(&ray).expect("oblique ray should hit");
    assert_eq!(hit.z, 0.0);
    let t = 10.0 / -ray.direction.z;
    let expected = ray.at(t);
    assert!((hit.x - expected.x).abs() < 1e-4);
    assert!((hit.y - expected.y).abs() < 1e-4);
}

#[test]
fn camera_centre_ray_hits_origin() {
    let cam = Camera::for_viewport(800.0, 600.0);
    let ray = cam.ray_from_ndc(Vec2::ZERO);
    assert!(ray.origin.distance(Vec3::new(0.0, 0.0, 10.0)) < 1e-6);
    let hit = project_to_drag_plane(&ray).expect("centre ray should hit");
    assert!(hit.length() < 1e-3);
}

#[test]
fn camera_ray_round_trips_through_world_to_ndc() {
    let cam = Camera::for_viewport(1024.0, 768.0);
    let ndc = Vec2::new(0.25, -0.4);
    let hit = project_to_drag_plane(&cam.ray_from_ndc(ndc)).expect("should hit");
    let back = cam.world_to_ndc(hit).expect("point is in front of the camera");
    assert!((back - ndc).length() < 1e-2, "got {:?}", back);
}

#[test]
fn world_to_ndc_rejects_points_behind_eye() {
    let cam = Camera::default();
    assert!(cam.world_to_ndc(Vec3::new(0.0, 0.0, 20.0)).is_none());
}

#[test]
fn pointer_to_ndc_maps_corners() {
    let vp = Vec2::new(800.0, 600.0);
    assert_eq!(pointer_to_ndc(Vec2::ZERO, vp), Vec2::new(-1.0, 1.0));
    assert_eq!(pointer_to_ndc(vp, vp), Vec2::new(1.0, -1.0));
    assert_eq!(pointer_to_ndc(vp * 0.5, vp), Vec2::ZERO);
}

#[test]
fn pointer_to_ndc_handles_empty_viewport() {
    assert_eq!(
        pointer_to_ndc(Vec2::new(10.0, 10.0), Vec2::ZERO),
        Vec2::ZERO
    );
}

#[test]
fn ndc_to_pointer_inverts_pointer_to_ndc() {
    let vp = Vec2::new(640.0, 480.0);
    let px = Vec2::new(123.0, 321.0);
    let back = ndc_to_pointer(pointer_to_ndc(px, vp), vp);
    assert!((back - px).length() < 1e-3);
}

#[test]
fn ray_sphere_hits_and_misses() {
    let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, -1.0));
    let t = ray_sphere(&ray, Vec3::ZERO, 0.3).expect("should hit");
    assert!((t - 9.7).abs() < 1e-4);
    assert!(ray_sphere(&ray, Vec3::new(1.0, 0.0, 0.0), 0.3).is_none());
}

#[test]
fn ray_sphere_ignores_spheres_behind() {
    let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, 0.0, 1.0));
    assert!(ray_sphere(&ray, Vec3::ZERO, 0.3).is_none());
}
