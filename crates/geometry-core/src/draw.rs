//! Declarative draw list handed to the renderer every frame.

use glam::{Mat4, Vec3, Vec4};

#[derive(Clone, Debug, PartialEq)]
pub struct SphereDraw {
    pub center: Vec3,
    pub radius: f32,
    pub color: Vec4,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LineStrip {
    pub points: Vec<Vec3>,
    pub color: Vec4,
}

impl LineStrip {
    /// Consecutive point pairs.
    pub fn segments(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }
}

/// Axis-aligned cube rotated about Y, then uniformly scaled about its center.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxDraw {
    pub center: Vec3,
    pub side: f32,
    pub rotation_y: f32,
    pub scale: f32,
    pub color: Vec4,
}

impl BoxDraw {
    pub fn transform(&self) -> Mat4 {
        Mat4::from_translation(self.center)
            * Mat4::from_rotation_y(self.rotation_y)
            * Mat4::from_scale(Vec3::splat(self.scale * self.side * 0.5))
    }

    pub fn corners(&self) -> [Vec3; 8] {
        let m = self.transform();
        let mut out = [Vec3::ZERO; 8];
        for (i, c) in out.iter_mut().enumerate() {
            let local = Vec3::new(
                if i & 1 == 0 { -1.0 } else { 1.0 },
                if i & 2 == 0 { -1.0 } else { 1.0 },
                if i & 4 == 0 { -1.0 } else { 1.0 },
            );
            *c = m.transform_point3(local);
        }
        out
    }

    /// The twelve cube edges in world space.
    pub fn edges(&self) -> [(Vec3, Vec3); 12] {
        let c = self.corners();
        // corners differ in exactly one bit along an edge
        #[rustfmt::skip]
        const PAIRS: [(usize, usize); 12] = [
            (0, 1), (2, 3), (4, 5), (6, 7),
            (0, 2), (1, 3), (4, 6), (5, 7),
            (0, 4), (1, 5), (2, 6), (3, 7),
        ];
        PAIRS.map(|(a, b)| (c[a], c[b]))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub text: String,
    pub position: Vec3,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawList {
    pub spheres: Vec<SphereDraw>,
    pub lines: Vec<LineStrip>,
    pub boxes: Vec<BoxDraw>,
    pub labels: Vec<Label>,
}

impl DrawList {
    /// Every straight segment to draw: strip segments followed by box edges.
    pub fn segments(&self) -> Vec<(Vec3, Vec3, Vec4)> {
        let mut out = Vec::new();
        for strip in &self.lines {
            out.extend(strip.segments().map(|(a, b)| (a, b, strip.color)));
        }
        for b in &self.boxes {
            out.extend(b.edges().into_iter().map(|(p, q)| (p, q, b.color)));
        }
        out
    }
}
