//! Drag sessions for points constrained to the z = 0 plane.
//!
//! Each point owns a [`DraggablePoint`]. A pointer-down captures the pointer
//! id, moves carrying that id are projected onto the drag plane, and the
//! matching pointer-up releases it. Anything else is ignored.

use crate::camera::{pointer_to_ndc, RayCaster};
use crate::constants::POINT_PICK_RADIUS;
use crate::geometry::PointSet;
use crate::projector::{project_to_drag_plane, ray_sphere};
use glam::{Vec2, Vec3};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Down,
    Move,
    Up,
}

/// Raw pointer event in canvas pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerInput {
    pub kind: PointerKind,
    pub pointer_id: i32,
    pub position_px: Vec2,
    pub viewport_px: Vec2,
}

impl PointerInput {
    pub fn new(kind: PointerKind, pointer_id: i32, position_px: Vec2, viewport_px: Vec2) -> Self {
        Self {
            kind,
            pointer_id,
            position_px,
            viewport_px,
        }
    }

    #[inline]
    pub fn ndc(&self) -> Vec2 {
        pointer_to_ndc(self.position_px, self.viewport_px)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DragSession {
    #[default]
    Idle,
    Dragging {
        pointer_id: i32,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DraggablePoint {
    pub session: DragSession,
}

impl DraggablePoint {
    pub fn is_dragging(&self) -> bool {
        matches!(self.session, DragSession::Dragging { .. })
    }

    pub fn captured_by(&self, pointer_id: i32) -> bool {
        self.session == DragSession::Dragging { pointer_id }
    }

    /// Advance the session for an event already routed to this point.
    ///
    /// Returns the next state and, for a committed move, the new position.
    pub fn step(self, input: &PointerInput, caster: &impl RayCaster) -> (Self, Option<Vec3>) {
        match (self.session, input.kind) {
            (DragSession::Idle, PointerKind::Down) => (
                Self {
                    session: DragSession::Dragging {
                        pointer_id: input.pointer_id,
                    },
                },
                None,
            ),
            (DragSession::Dragging { pointer_id }, PointerKind::Move)
                if pointer_id == input.pointer_id =>
            {
                let ray = caster.ray_from_ndc(input.ndc());
                (self, project_to_drag_plane(&ray))
            }
            (DragSession::Dragging { pointer_id }, PointerKind::Up)
                if pointer_id == input.pointer_id =>
            {
                (Self::default(), None)
            }
            _ => (self, None),
        }
    }
}

/// A point set together with the drag session of each point.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DragPointSet {
    points: PointSet,
    handles: SmallVec<[DraggablePoint; 3]>,
}

impl DragPointSet {
    pub fn new(points: PointSet) -> Self {
        let handles = (0..points.len()).map(|_| DraggablePoint::default()).collect();
        Self { points, handles }
    }

    pub fn points(&self) -> &PointSet {
        &self.points
    }

    pub fn handle(&self, index: usize) -> Option<&DraggablePoint> {
        self.handles.get(index)
    }

    /// Index of the nearest point whose hit sphere the pointer ray crosses.
    pub fn pick(&self, input: &PointerInput, caster: &impl RayCaster) -> Option<usize> {
        let ray = caster.ray_from_ndc(input.ndc());
        let mut best = None::<(usize, f32)>;
        for (i, p) in self.points.iter().enumerate() {
            if let Some(t) = ray_sphere(&ray, p.position, POINT_PICK_RADIUS) {
                match best {
                    Some((_, bt)) if t >= bt => {}
                    _ => best = Some((i, t)),
                }
            }
        }
        best.map(|(i, _)| i)
    }

    /// Route one pointer event and apply the resulting position updates.
    ///
    /// A down goes to the picked point only; moves and ups go to whichever
    /// points captured that pointer id.
    pub fn handle_pointer(&self, input: &PointerInput, caster: &impl RayCaster) -> Self {
        let targets: SmallVec<[usize; 3]> = match input.kind {
            PointerKind::Down => self.pick(input, caster).into_iter().collect(),
            PointerKind::Move | PointerKind::Up => self
                .handles
                .iter()
                .enumerate()
                .filter(|(_, h)| h.captured_by(input.pointer_id))
                .map(|(i, _)| i)
                .collect(),
        };

        let mut next = self.clone();
        for i in targets {
            let (handle, moved) = next.handles[i].step(input, caster);
            match (next.handles[i].is_dragging(), handle.is_dragging()) {
                (false, true) => log::debug!("[drag] begin on point {}", i),
                (true, false) => log::debug!("[drag] end on point {}", i),
                _ => {}
            }
            next.handles[i] = handle;
            if let Some(pos) = moved {
                next.points = next.points.with_position(i, pos);
            }
        }
        next
    }
}
