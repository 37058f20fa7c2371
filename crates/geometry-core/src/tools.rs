//! Exploration tool panel state.
//!
//! Only the shape selection reaches the renderer. Scale, rotation and color
//! are stored and echoed back to the panel but drive nothing else.

use crate::error::ParseError;
use crate::geometry::Swatch;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectedShape {
    Point,
    Line,
    Triangle,
    Circle,
    Cube,
}

impl SelectedShape {
    pub const ALL: [SelectedShape; 5] = [
        SelectedShape::Point,
        SelectedShape::Line,
        SelectedShape::Triangle,
        SelectedShape::Circle,
        SelectedShape::Cube,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SelectedShape::Point => "Point",
            SelectedShape::Line => "Line",
            SelectedShape::Triangle => "Triangle",
            SelectedShape::Circle => "Circle",
            SelectedShape::Cube => "Cube",
        }
    }
}

impl std::fmt::Display for SelectedShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SelectedShape {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "point" => Ok(SelectedShape::Point),
            "line" => Ok(SelectedShape::Line),
            "triangle" => Ok(SelectedShape::Triangle),
            "circle" => Ok(SelectedShape::Circle),
            "cube" => Ok(SelectedShape::Cube),
            _ => Err(ParseError::UnknownShape(s.to_string())),
        }
    }
}

/// Range input model: clamps to `[min, max]` and snaps to `step` from `min`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Slider {
    pub min: f32,
    pub max: f32,
    pub step: f32,
    pub value: f32,
}

impl Slider {
    pub const fn new(min: f32, max: f32, step: f32, value: f32) -> Self {
        Self {
            min,
            max,
            step,
            value,
        }
    }

    pub fn scale() -> Self {
        Self::new(0.5, 2.0, 0.1, 1.0)
    }

    pub fn rotation() -> Self {
        Self::new(0.0, 360.0, 1.0, 0.0)
    }

    pub fn set(self, v: f32) -> Self {
        if !v.is_finite() {
            return self;
        }
        let mut value = v.clamp(self.min, self.max);
        if self.step > 0.0 {
            let steps = ((value - self.min) / self.step).round();
            value = (self.min + steps * self.step).clamp(self.min, self.max);
        }
        Self { value, ..self }
    }

    /// Parse the raw string value of an `<input type="range">`.
    pub fn set_str(self, raw: &str) -> Result<Self, ParseError> {
        let v: f32 = raw
            .trim()
            .parse()
            .map_err(|_| ParseError::InvalidNumber(raw.to_string()))?;
        Ok(self.set(v))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToolEvent {
    SelectShape(SelectedShape),
    SetScale(f32),
    SetRotation(f32),
    SetColor(Swatch),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ToolPanel {
    pub selected: Option<SelectedShape>,
    pub scale: Slider,
    pub rotation: Slider,
    pub color: Option<Swatch>,
}

impl Default for ToolPanel {
    fn default() -> Self {
        Self {
            selected: None,
            scale: Slider::scale(),
            rotation: Slider::rotation(),
            color: None,
        }
    }
}

impl ToolPanel {
    pub const SWATCHES: [Swatch; 4] = [Swatch::Red, Swatch::Blue, Swatch::Green, Swatch::Yellow];

    pub fn apply(self, event: ToolEvent) -> Self {
        match event {
            ToolEvent::SelectShape(shape) => {
                log::info!("[tools] selected {}", shape);
                Self {
                    selected: Some(shape),
                    ..self
                }
            }
            ToolEvent::SetScale(v) => Self {
                scale: self.scale.set(v),
                ..self
            },
            ToolEvent::SetRotation(v) => Self {
                rotation: self.rotation.set(v),
                ..self
            },
            ToolEvent::SetColor(c) => Self {
                color: Some(c),
                ..self
            },
        }
    }
}
