use geometry_core::*;
use glam::{Vec2, Vec3};
use std::f32::consts::TAU;

struct TopDown;

impl RayCaster for TopDown {
    fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        Ray::new(Vec3::new(ndc.x * 5.0, ndc.y * 5.0, 5.0), Vec3::new(0.0, 0.0, -1.0))
    }
}

#[test]
fn triangle_area_of_right_triangle() {
    let area = triangle_area(Vec3::ZERO, Vec3::new(4.0, 0.0, 0.0), Vec3::new(0.0, 3.0, 0.0));
    assert!((area - 6.0).abs() < 1e-6);
    assert_eq!(format_area(area), "Area: 6.00");
}

#[test]
fn triangle_area_ignores_winding_and_z() {
    let a = Vec3::new(0.0, 0.0, 1.0);
    let b = Vec3::new(0.0, 3.0, -2.0);
    let c = Vec3::new(4.0, 0.0, 5.0);
    assert!((triangle_area(a, b, c) - 6.0).abs() < 1e-6);
}

#[test]
fn degenerate_triangle_has_zero_area() {
    let area = triangle_area(Vec3::ZERO, Vec3::new(1.0, 1.0, 0.0), Vec3::new(2.0, 2.0, 0.0));
    assert_eq!(area, 0.0);
}

#[test]
fn centroid_of_initial_triangle_is_origin() {
    let c = centroid(&[
        Vec3::new(-2.0, 1.0, 0.0),
        Vec3::new(2.0, 1.0, 0.0),
        Vec3::new(0.0, -2.0, 0.0),
    ]);
    assert!(c.length() < 1e-6);
    assert_eq!(centroid(&[]), Vec3::ZERO);
}

#[test]
fn edges_close_the_loop() {
    let set = PointSet::from_positions(&TRIANGLE_SCENE_POSITIONS);
    let edges: Vec<_> = set.edges().collect();
    assert_eq!(edges, vec![(0, 1), (1, 2), (2, 0)]);
    let outline = set.closed_outline();
    assert_eq!(outline.len(), 4);
    assert_eq!(outline[0], outline[3]);
}

#[test]
fn with_position_out_of_range_is_noop() {
    let set = PointSet::from_positions(&POINTS_SCENE_POSITIONS);
    assert_eq!(set.with_position(9, Vec3::ONE), set);
}

#[test]
fn wrap_angle_stays_in_range() {
    assert_eq!(wrap_angle(0.0), 0.0);
    assert!((wrap_angle(TAU + 0.5) - 0.5).abs() < 1e-5);
    let w = wrap_angle(-0.25);
    assert!((0.0..TAU).contains(&w));
    assert!((w - (TAU - 0.25)).abs() < 1e-5);
}

#[test]
fn rotation_and_scale_labels() {
    assert_eq!(degrees_label(std::f32::consts::FRAC_PI_2), 90);
    assert_eq!(format_rotation(std::f32::consts::PI), "Rotation: 180°");
    assert_eq!(format_scale(1.0), "Scale: 1.00");
    assert_eq!(format_scale(1.456), "Scale: 1.46");
}

#[test]
fn two_decimal_labels_round_ties_up() {
    let area = triangle_area(Vec3::ZERO, Vec3::new(0.5, 0.0, 0.0), Vec3::new(0.0, 0.5, 0.0));
    assert_eq!(area, 0.125);
    assert_eq!(format_area(area), "Area: 0.13");
    assert_eq!(format_scale(0.625), "Scale: 0.63");
    assert_eq!(format_scale(0.5), "Scale: 0.50");
}

#[test]
fn rotation_label_never_reads_360() {
    assert_eq!(degrees_label(wrap_angle(TAU - 0.003)), 0);
    assert_eq!(format_rotation(wrap_angle(TAU - 0.003)), "Rotation: 0°");
    assert_eq!(degrees_label(wrap_angle(TAU - 0.02)), 359);
}

#[test]
fn transformations_tick_accumulates_and_wraps() {
    let mut scene = Scene::initial(SceneKind::Transformations);
    for _ in 0..200 {
        scene = scene.apply(&SceneEvent::Tick, &TopDown);
    }
    match &scene {
        Scene::Transformations(t) => assert!((t.rotation - 1.0).abs() < 1e-3),
        other => panic!("unexpected scene {:?}", other.kind()),
    }

    // Enough ticks to pass a full turn
    for _ in 0..1200 {
        scene = scene.apply(&SceneEvent::Tick, &TopDown);
    }
    match &scene {
        Scene::Transformations(t) => {
            assert!((0.0..TAU).contains(&t.rotation));
            let expected = (1400.0 * ROTATION_STEP_RAD) % TAU;
            assert!((t.rotation - expected).abs() < 1e-2);
        }
        other => panic!("unexpected scene {:?}", other.kind()),
    }
}

#[test]
fn transformations_set_scale_updates_labels_and_box() {
    let scene =
        Scene::initial(SceneKind::Transformations).apply(&SceneEvent::SetScale(1.5), &TopDown);
    let dl = scene.draw_list();
    assert_eq!(dl.boxes.len(), 1);
    assert_eq!(dl.boxes[0].scale, 1.5);
    let texts: Vec<&str> = dl.labels.iter().map(|l| l.text.as_str()).collect();
    assert_eq!(texts, vec!["Rotation: 0°", "Scale: 1.50"]);
    assert!((dl.labels[0].position.y - 3.75).abs() < 1e-6);
    assert!((dl.labels[1].position.y + 3.75).abs() < 1e-6);
}

#[test]
fn ticks_do_not_touch_point_scenes() {
    let scene = Scene::initial(SceneKind::Shapes);
    assert_eq!(scene.clone().apply(&SceneEvent::Tick, &TopDown), scene);
}

#[test]
fn shapes_scene_labels_area_at_centroid() {
    let dl = Scene::initial(SceneKind::Shapes).draw_list();
    assert_eq!(dl.spheres.len(), 3);
    assert_eq!(dl.lines.len(), 1);
    assert_eq!(dl.lines[0].points.len(), 4);
    assert_eq!(dl.labels.len(), 1);
    // (-2,1) (2,1) (0,-2): base 4, height 3
    assert_eq!(dl.labels[0].text, "Area: 6.00");
    assert!(dl.labels[0].position.length() < 1e-6);
}

#[test]
fn shapes_area_follows_a_drag() {
    let viewport = Vec2::new(800.0, 600.0);
    // world (0,-2) <-> ndc (0,-0.4) <-> px (400, 420)
    let down = PointerInput::new(PointerKind::Down, 1, Vec2::new(400.0, 420.0), viewport);
    // world (0,-5) <-> ndc (0,-1) <-> px (400, 600)
    let mv = PointerInput::new(PointerKind::Move, 1, Vec2::new(400.0, 600.0), viewport);
    let scene = Scene::initial(SceneKind::Shapes)
        .apply(&SceneEvent::Pointer(down), &TopDown)
        .apply(&SceneEvent::Pointer(mv), &TopDown);
    let dl = scene.draw_list();
    // base 4, height 6
    assert_eq!(dl.labels[0].text, "Area: 12.00");
    assert!((dl.labels[0].position - Vec3::new(0.0, -1.0, 0.0)).length() < 1e-4);
}

#[test]
fn lines_scene_has_three_colored_edges() {
    let dl = Scene::initial(SceneKind::Lines).draw_list();
    assert_eq!(dl.spheres.len(), 3);
    assert_eq!(dl.lines.len(), 3);
    for (i, strip) in dl.lines.iter().enumerate() {
        assert_eq!(strip.points.len(), 2);
        assert_eq!(strip.color.to_array(), LINE_EDGE_COLORS[i]);
    }
    assert!(dl.labels.is_empty());
    assert_eq!(dl.lines[2].points[1], dl.lines[0].points[0]);
}

#[test]
fn points_scene_draws_only_spheres() {
    let dl = Scene::initial(SceneKind::Points).draw_list();
    assert_eq!(dl.spheres.len(), 3);
    assert!(dl.lines.is_empty() && dl.boxes.is_empty() && dl.labels.is_empty());
    assert!(dl.spheres.iter().all(|s| s.radius == POINT_RADIUS));
}

#[test]
fn exploration_dispatches_on_selection() {
    let placeholder = Scene::Exploration(None).draw_list();
    assert_eq!(placeholder.labels.len(), 1);
    assert_eq!(placeholder.labels[0].text, PLACEHOLDER_PROMPT);

    let point = Scene::Exploration(Some(SelectedShape::Point)).draw_list();
    assert_eq!(point.spheres.len(), 1);
    assert_eq!(point.spheres[0].radius, 0.2);

    let line = Scene::Exploration(Some(SelectedShape::Line)).draw_list();
    let seg: Vec<_> = line.lines[0].segments().collect();
    assert_eq!(seg.len(), 1);
    assert!((seg[0].0.distance(seg[0].1) - 4.0).abs() < 1e-6);

    let tri = Scene::Exploration(Some(SelectedShape::Triangle)).draw_list();
    assert_eq!(tri.lines[0].points.len(), 4);

    let circle = Scene::Exploration(Some(SelectedShape::Circle)).draw_list();
    assert_eq!(circle.spheres[0].radius, 1.5);

    let cube = Scene::Exploration(Some(SelectedShape::Cube)).draw_list();
    assert_eq!(cube.boxes.len(), 1);
    assert_eq!(cube.segments().len(), 12);
    for shape in SelectedShape::ALL {
        assert!(Scene::Exploration(Some(shape)).draw_list().labels.is_empty());
    }
}

#[test]
fn box_edges_have_side_length() {
    let b = BoxDraw {
        center: Vec3::ZERO,
        side: 2.0,
        rotation_y: 0.7,
        scale: 1.5,
        color: glam::Vec4::ONE,
    };
    for (p, q) in b.edges() {
        assert!((p.distance(q) - 3.0).abs() < 1e-4);
    }
    let top = b.corners().iter().map(|c| c.y).fold(f32::MIN, f32::max);
    assert!((top - 1.5).abs() < 1e-5);
}
