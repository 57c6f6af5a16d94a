//! Pointer click events and screen-to-surface coordinate translation.

use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// A click-equivalent pointer event in absolute screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerClick {
    pub x: f64,
    pub y: f64,
}

impl PointerClick {
    /// Create a new click event at the given screen position.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Access to the geometry of the surface pointer events are measured against.
///
/// Hosts implement this over their windowing layer; the only capability
/// shapes need is the surface's bounding rectangle for coordinate
/// translation.
pub trait EventSource {
    /// Bounding rectangle of the drawing surface in screen coordinates.
    fn bounding_rect(&self) -> Rect;
}

/// Translate an absolute-screen click into surface-local coordinates.
pub fn surface_local(click: PointerClick, bounds: Rect) -> Point {
    Point::new(click.x - bounds.x0, click.y - bounds.y0)
}
