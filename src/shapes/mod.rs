//! Shape definitions for the canvas editor.

pub mod line;

pub use line::{GrabState, Line, LineHandle, LineOptions, LineOptionsError};

use kurbo::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// Named color presets, rendered as CSS color specifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BasicColor {
    #[default]
    Black,
    White,
    Red,
    Green,
    Blue,
}

impl BasicColor {
    /// Get the CSS color specifier for this preset.
    pub fn as_css(&self) -> &'static str {
        match self {
            BasicColor::Black => "black",
            BasicColor::White => "white",
            BasicColor::Red => "red",
            BasicColor::Green => "green",
            BasicColor::Blue => "blue",
        }
    }
}

/// Stroke width presets, in drawing-surface units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrokeWeight {
    Thin,
    #[default]
    Medium,
    Thick,
}

impl StrokeWeight {
    /// Get the stroke width for this preset.
    pub fn width(&self) -> f64 {
        match self {
            StrokeWeight::Thin => 1.0,
            StrokeWeight::Medium => 3.0,
            StrokeWeight::Thick => 5.0,
        }
    }
}

/// Euclidean distance between two points.
pub fn point_distance(a: Point, b: Point) -> f64 {
    kurbo::Vec2::new(b.x - a.x, b.y - a.y).hypot()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_values() {
        assert_eq!(BasicColor::default().as_css(), "black");
        assert!((StrokeWeight::default().width() - 3.0).abs() < f64::EPSILON);
        assert!((StrokeWeight::Thin.width() - 1.0).abs() < f64::EPSILON);
        assert!((StrokeWeight::Thick.width() - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_point_distance() {
        let d = point_distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        assert!((d - 5.0).abs() < f64::EPSILON);
        assert!(point_distance(Point::new(7.0, 7.0), Point::new(7.0, 7.0)).abs() < f64::EPSILON);
    }
}
