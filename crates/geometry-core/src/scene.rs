//! Scene variants and their reducers.
//!
//! A scene is rebuilt from its initial constants whenever it becomes active,
//! then evolves only through [`Scene::apply`]. Derived values (area,
//! centroid, rotation label) are recomputed from the current state each time
//! a draw list is requested, so they can never lag behind a drag.

use crate::camera::RayCaster;
use crate::constants::*;
use crate::draw::{BoxDraw, DrawList, Label, LineStrip, SphereDraw};
use crate::drag::{DragPointSet, PointerInput};
use crate::geometry::{format_area, format_rotation, format_scale, wrap_angle, PointSet, Swatch};
use crate::tools::SelectedShape;
use glam::{Vec3, Vec4};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SceneKind {
    Points,
    Lines,
    Shapes,
    Transformations,
    Exploration,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SceneEvent {
    Pointer(PointerInput),
    /// One rendered frame elapsed.
    Tick,
    SetScale(f32),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformState {
    /// Always within [0, 2π).
    pub rotation: f32,
    pub scale: f32,
}

impl Default for TransformState {
    fn default() -> Self {
        Self {
            rotation: 0.0,
            scale: DEFAULT_SCALE,
        }
    }
}

impl TransformState {
    pub fn tick(self) -> Self {
        Self {
            rotation: wrap_angle(self.rotation + ROTATION_STEP_RAD),
            ..self
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Scene {
    Points(DragPointSet),
    Lines(DragPointSet),
    Shapes(DragPointSet),
    Transformations(TransformState),
    Exploration(Option<SelectedShape>),
}

impl Scene {
    /// Fresh scene of the given kind, seeded with its initial constants.
    pub fn initial(kind: SceneKind) -> Self {
        match kind {
            SceneKind::Points => Scene::Points(DragPointSet::new(PointSet::from_positions(
                &POINTS_SCENE_POSITIONS,
            ))),
            SceneKind::Lines => Scene::Lines(DragPointSet::new(PointSet::from_positions(
                &TRIANGLE_SCENE_POSITIONS,
            ))),
            SceneKind::Shapes => Scene::Shapes(DragPointSet::new(PointSet::from_positions(
                &TRIANGLE_SCENE_POSITIONS,
            ))),
            SceneKind::Transformations => Scene::Transformations(TransformState::default()),
            SceneKind::Exploration => Scene::Exploration(None),
        }
    }

    pub fn kind(&self) -> SceneKind {
        match self {
            Scene::Points(_) => SceneKind::Points,
            Scene::Lines(_) => SceneKind::Lines,
            Scene::Shapes(_) => SceneKind::Shapes,
            Scene::Transformations(_) => SceneKind::Transformations,
            Scene::Exploration(_) => SceneKind::Exploration,
        }
    }

    /// Draggable points of this scene, if it has any.
    pub fn point_set(&self) -> Option<&DragPointSet> {
        match self {
            Scene::Points(s) | Scene::Lines(s) | Scene::Shapes(s) => Some(s),
            _ => None,
        }
    }

    pub fn apply(self, event: &SceneEvent, caster: &impl RayCaster) -> Self {
        match (self, event) {
            (Scene::Points(s), SceneEvent::Pointer(p)) => {
                Scene::Points(s.handle_pointer(p, caster))
            }
            (Scene::Lines(s), SceneEvent::Pointer(p)) => {
                Scene::Lines(s.handle_pointer(p, caster))
            }
            (Scene::Shapes(s), SceneEvent::Pointer(p)) => {
                Scene::Shapes(s.handle_pointer(p, caster))
            }
            (Scene::Transformations(t), SceneEvent::Tick) => Scene::Transformations(t.tick()),
            (Scene::Transformations(t), SceneEvent::SetScale(scale)) => {
                Scene::Transformations(TransformState {
                    scale: *scale,
                    ..t
                })
            }
            (scene, _) => scene,
        }
    }

    /// Exploration scene showing `shape`; other variants are returned as is.
    pub fn with_selection(self, shape: Option<SelectedShape>) -> Self {
        match self {
            Scene::Exploration(_) => Scene::Exploration(shape),
            other => other,
        }
    }

    pub fn draw_list(&self) -> DrawList {
        let mut out = DrawList::default();
        match self {
            Scene::Points(s) => push_points(&mut out, s.points()),
            Scene::Lines(s) => {
                push_points(&mut out, s.points());
                let pts = s.points();
                for (edge, (a, b)) in pts.edges().enumerate() {
                    if let (Some(pa), Some(pb)) = (pts.get(a), pts.get(b)) {
                        out.lines.push(LineStrip {
                            points: vec![pa.position, pb.position],
                            color: Vec4::from_array(
                                LINE_EDGE_COLORS[edge % LINE_EDGE_COLORS.len()],
                            ),
                        });
                    }
                }
            }
            Scene::Shapes(s) => {
                push_points(&mut out, s.points());
                out.lines.push(LineStrip {
                    points: s.points().closed_outline(),
                    color: Vec4::from_array(SHAPE_OUTLINE_COLOR),
                });
                if let Some((center, area)) = s.points().triangle_metrics() {
                    out.labels.push(Label {
                        text: format_area(area),
                        position: center,
                    });
                }
            }
            Scene::Transformations(t) => {
                out.boxes.push(BoxDraw {
                    center: Vec3::ZERO,
                    side: CUBE_SIDE,
                    rotation_y: t.rotation,
                    scale: t.scale,
                    color: Swatch::RoyalBlue.rgba(),
                });
                // labels sit on the Y axis, so the group rotation leaves them in place
                out.labels.push(Label {
                    text: format_rotation(t.rotation),
                    position: Vec3::new(0.0, TRANSFORM_LABEL_OFFSET * t.scale, 0.0),
                });
                out.labels.push(Label {
                    text: format_scale(t.scale),
                    position: Vec3::new(0.0, -TRANSFORM_LABEL_OFFSET * t.scale, 0.0),
                });
            }
            Scene::Exploration(shape) => push_exploration(&mut out, *shape),
        }
        out
    }
}

fn push_points(out: &mut DrawList, points: &PointSet) {
    out.spheres.extend(points.iter().map(|p| SphereDraw {
        center: p.position,
        radius: POINT_RADIUS,
        color: p.color.rgba(),
    }));
}

fn push_exploration(out: &mut DrawList, shape: Option<SelectedShape>) {
    let neutral = Vec4::from_array(EXPLORE_DEFAULT_COLOR);
    match shape {
        Some(SelectedShape::Point) => out.spheres.push(SphereDraw {
            center: Vec3::ZERO,
            radius: EXPLORE_POINT_RADIUS,
            color: neutral,
        }),
        Some(SelectedShape::Line) => out.lines.push(LineStrip {
            points: EXPLORE_LINE.iter().copied().map(Vec3::from_array).collect(),
            color: Swatch::Blue.rgba(),
        }),
        Some(SelectedShape::Triangle) => {
            let mut points: Vec<Vec3> =
                EXPLORE_TRIANGLE.iter().copied().map(Vec3::from_array).collect();
            points.push(points[0]);
            out.lines.push(LineStrip {
                points,
                color: Swatch::Green.rgba(),
            });
        }
        Some(SelectedShape::Circle) => out.spheres.push(SphereDraw {
            center: Vec3::ZERO,
            radius: EXPLORE_CIRCLE_RADIUS,
            color: neutral,
        }),
        Some(SelectedShape::Cube) => out.boxes.push(BoxDraw {
            center: Vec3::ZERO,
            side: CUBE_SIDE,
            rotation_y: 0.0,
            scale: 1.0,
            color: neutral,
        }),
        None => out.labels.push(Label {
            text: PLACEHOLDER_PROMPT.to_string(),
            position: Vec3::ZERO,
        }),
    }
}
