//! Points, point sets and the quantities derived from them.

use crate::error::ParseError;
use glam::{Vec3, Vec4};
use smallvec::SmallVec;
use std::f32::consts::TAU;
use std::str::FromStr;

/// Named colors used for points and the tool panel swatches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Swatch {
    Red,
    Blue,
    Green,
    Yellow,
    RoyalBlue,
}

impl Swatch {
    pub fn name(self) -> &'static str {
        match self {
            Swatch::Red => "red",
            Swatch::Blue => "blue",
            Swatch::Green => "green",
            Swatch::Yellow => "yellow",
            Swatch::RoyalBlue => "royalblue",
        }
    }

    pub fn rgba(self) -> Vec4 {
        match self {
            Swatch::Red => Vec4::new(0.94, 0.27, 0.27, 1.0),
            Swatch::Blue => Vec4::new(0.23, 0.51, 0.96, 1.0),
            Swatch::Green => Vec4::new(0.13, 0.77, 0.37, 1.0),
            Swatch::Yellow => Vec4::new(0.92, 0.70, 0.03, 1.0),
            Swatch::RoyalBlue => Vec4::new(0.25, 0.41, 0.88, 1.0),
        }
    }
}

impl FromStr for Swatch {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" => Ok(Swatch::Red),
            "blue" => Ok(Swatch::Blue),
            "green" => Ok(Swatch::Green),
            "yellow" => Ok(Swatch::Yellow),
            "royalblue" => Ok(Swatch::RoyalBlue),
            _ => Err(ParseError::UnknownColor(s.to_string())),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub position: Vec3,
    pub color: Swatch,
}

impl Point {
    pub fn new(position: Vec3, color: Swatch) -> Self {
        Self { position, color }
    }
}

/// Ordered points; order decides edge identity (edge i joins i and i+1 mod N).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointSet {
    points: SmallVec<[Point; 3]>,
}

impl PointSet {
    pub fn new(points: impl IntoIterator<Item = Point>) -> Self {
        Self {
            points: points.into_iter().collect(),
        }
    }

    /// Points from raw positions, colored red, blue, green in order.
    pub fn from_positions(positions: &[[f32; 3]]) -> Self {
        const ORDER: [Swatch; 3] = [Swatch::Red, Swatch::Blue, Swatch::Green];
        Self::new(
            positions
                .iter()
                .enumerate()
                .map(|(i, p)| Point::new(Vec3::from_array(*p), ORDER[i % ORDER.len()])),
        )
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }

    pub fn positions(&self) -> SmallVec<[Vec3; 3]> {
        self.points.iter().map(|p| p.position).collect()
    }

    /// Copy of the set with point `index` moved to `position`.
    ///
    /// Only that slot changes; an out-of-range index returns the set as is.
    pub fn with_position(&self, index: usize, position: Vec3) -> Self {
        let mut next = self.clone();
        if let Some(p) = next.points.get_mut(index) {
            p.position = position;
        }
        next
    }

    /// Edges as (from, to) index pairs, closing back to the first point.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.points.len();
        (0..n).filter(move |_| n > 1).map(move |i| (i, (i + 1) % n))
    }

    /// Positions with the first one repeated at the end.
    pub fn closed_outline(&self) -> Vec<Vec3> {
        let mut out: Vec<Vec3> = self.points.iter().map(|p| p.position).collect();
        if let Some(first) = out.first().copied() {
            out.push(first);
        }
        out
    }

    /// Centroid and area of the first three points.
    pub fn triangle_metrics(&self) -> Option<(Vec3, f32)> {
        match self.points.as_slice() {
            [a, b, c, ..] => Some((
                centroid(&[a.position, b.position, c.position]),
                triangle_area(a.position, b.position, c.position),
            )),
            _ => None,
        }
    }
}

/// Componentwise mean. Empty input yields the origin.
pub fn centroid(points: &[Vec3]) -> Vec3 {
    if points.is_empty() {
        return Vec3::ZERO;
    }
    points.iter().copied().sum::<Vec3>() / points.len() as f32
}

/// Shoelace area of the triangle's projection onto the xy plane.
pub fn triangle_area(a: Vec3, b: Vec3, c: Vec3) -> f32 {
    (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y)).abs() * 0.5
}

/// Round to two decimals, ties away from zero (`0.125` -> `0.13`).
#[inline]
fn round_hundredths(v: f32) -> f32 {
    (v * 100.0).round() / 100.0
}

pub fn format_area(area: f32) -> String {
    format!("Area: {:.2}", round_hundredths(area))
}

/// Wrap into [0, 2π).
#[inline]
pub fn wrap_angle(rad: f32) -> f32 {
    let wrapped = rad.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negatives
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

#[inline]
/// Whole degrees in `0..360`; the last half degree reads 0, not 360.
#[inline]
pub fn degrees_label(rad: f32) -> i32 {
    (rad.to_degrees().round() as i32).rem_euclid(360)
}

pub fn format_rotation(rad: f32) -> String {
    format!("Rotation: {}°", degrees_label(rad))
}

pub fn format_scale(scale: f32) -> String {
    format!("Scale: {:.2}", round_hundredths(scale))
}
