//! Line shape.

use super::{BasicColor, ShapeId, StrokeWeight, point_distance};
use crate::input::{EventSource, PointerClick, surface_local};
use crate::surface::DrawSurface;
use kurbo::Point;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Handle hit tolerance around each endpoint, in pixels, before any grab.
pub const HANDLE_RADIUS_IDLE: f64 = 15.0;
/// Handle hit tolerance once a handle has been grabbed.
pub const HANDLE_RADIUS_GRABBED: f64 = 10.0;

/// Which endpoint handle of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineHandle {
    /// The `A` endpoint.
    A,
    /// The `B` endpoint.
    B,
}

/// Interaction state of a line's endpoint handles.
///
/// The transition out of `Idle` is one-way: once any handle has been
/// grabbed, the hit radius stays at [`HANDLE_RADIUS_GRABBED`]. A later
/// qualifying click updates which handle is recorded but never restores
/// the idle radius. Drag-continuation is up to the host editor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GrabState {
    /// No handle has been grabbed yet.
    #[default]
    Idle,
    /// A handle was grabbed at least once; holds the most recent one.
    HandleGrabbed(LineHandle),
}

/// Errors from building a line out of an options bag.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LineOptionsError {
    #[error("missing required option: point_a")]
    MissingPointA,
    #[error("missing required option: point_b")]
    MissingPointB,
}

/// Construction options for a [`Line`].
///
/// Both endpoints are required; color and width fall back to the
/// [`BasicColor`] / [`StrokeWeight`] defaults when absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LineOptions {
    pub point_a: Option<Point>,
    pub point_b: Option<Point>,
    pub color: Option<String>,
    pub width: Option<f64>,
}

impl LineOptions {
    /// Create options with both required endpoints set.
    pub fn new(point_a: Point, point_b: Point) -> Self {
        Self {
            point_a: Some(point_a),
            point_b: Some(point_b),
            ..Self::default()
        }
    }

    /// Set the stroke color (a CSS color specifier).
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Set the stroke width.
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    /// Resolve the options into a line.
    ///
    /// Fails only when a required endpoint is missing. Defaulting happens
    /// here and nowhere else: an empty color or zero width falls back to
    /// the presets, anything else (negative widths, unknown color names)
    /// is passed through for the surface to deal with.
    pub fn build(self) -> Result<Line, LineOptionsError> {
        let point_a = self.point_a.ok_or(LineOptionsError::MissingPointA)?;
        let point_b = self.point_b.ok_or(LineOptionsError::MissingPointB)?;
        Ok(Line {
            id: Uuid::new_v4(),
            point_a,
            point_b,
            color: self
                .color
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| BasicColor::Black.as_css().to_owned()),
            width: self
                .width
                .filter(|w| *w != 0.0)
                .unwrap_or_else(|| StrokeWeight::Medium.width()),
            grab_state: GrabState::Idle,
        })
    }
}

/// A straight line segment with editable endpoint handles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Line {
    id: ShapeId,
    /// The `A` endpoint.
    pub point_a: Point,
    /// The `B` endpoint.
    pub point_b: Point,
    /// Stroke color (CSS color specifier).
    pub color: String,
    /// Stroke width in drawing-surface units.
    pub width: f64,
    #[serde(default)]
    grab_state: GrabState,
}

impl Line {
    /// Create a new line with default color and width.
    pub fn new(point_a: Point, point_b: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            point_a,
            point_b,
            color: BasicColor::Black.as_css().to_owned(),
            width: StrokeWeight::Medium.width(),
            grab_state: GrabState::Idle,
        }
    }

    /// Get the unique identifier.
    pub fn id(&self) -> ShapeId {
        self.id
    }

    /// Replace the `A` endpoint wholesale.
    pub fn set_point_a(&mut self, coords: Point) {
        self.point_a = coords;
    }

    /// Replace the `B` endpoint wholesale.
    pub fn set_point_b(&mut self, coords: Point) {
        self.point_b = coords;
    }

    /// Get the length of the line.
    pub fn length(&self) -> f64 {
        point_distance(self.point_a, self.point_b)
    }

    /// Get the midpoint of the line.
    pub fn midpoint(&self) -> Point {
        Point::new(
            (self.point_a.x + self.point_b.x) / 2.0,
            (self.point_a.y + self.point_b.y) / 2.0,
        )
    }

    /// Current interaction state of the handles.
    pub fn grab_state(&self) -> GrabState {
        self.grab_state
    }

    /// Current hit tolerance around each endpoint handle.
    pub fn handle_radius(&self) -> f64 {
        match self.grab_state {
            GrabState::Idle => HANDLE_RADIUS_IDLE,
            GrabState::HandleGrabbed(_) => HANDLE_RADIUS_GRABBED,
        }
    }

    /// Position of the given endpoint handle.
    pub fn handle_position(&self, handle: LineHandle) -> Point {
        match handle {
            LineHandle::A => self.point_a,
            LineHandle::B => self.point_b,
        }
    }

    /// Draw the line on the given surface.
    ///
    /// Issues the exact sequence `begin_path`, `move_to(A)`, `line_to(B)`,
    /// stroke style, `stroke`, `move_to(A)`. Does not mutate the line, so
    /// repeated calls with unchanged state produce identical output.
    /// Surface faults propagate untranslated.
    pub fn draw<S: DrawSurface>(&self, surface: &mut S) -> Result<(), S::Error> {
        surface.begin_path()?;
        surface.move_to(self.point_a)?;
        surface.line_to(self.point_b)?;
        surface.set_stroke_color(&self.color)?;
        surface.set_stroke_width(self.width)?;
        surface.stroke()?;
        surface.move_to(self.point_a)?;
        Ok(())
    }

    /// Test a surface-local point against the endpoint handles and grab
    /// the one it hits, if any.
    ///
    /// Hits are boundary-inclusive (`distance <= radius`). The `A` handle
    /// is tested first, so a point within radius of both endpoints grabs
    /// `A`. A hit shrinks the radius to [`HANDLE_RADIUS_GRABBED`] for all
    /// subsequent tests.
    pub fn grab_handle(&mut self, position: Point) -> Option<LineHandle> {
        let radius = self.handle_radius();
        let hit = if point_distance(position, self.point_a) <= radius {
            Some(LineHandle::A)
        } else if point_distance(position, self.point_b) <= radius {
            Some(LineHandle::B)
        } else {
            None
        };
        if let Some(handle) = hit {
            log::debug!("line {}: grabbed handle {:?}", self.id, handle);
            self.grab_state = GrabState::HandleGrabbed(handle);
        }
        hit
    }

    /// Handle a pointer click given in absolute screen coordinates.
    ///
    /// Translates the click into surface-local coordinates via the event
    /// source's bounding rectangle, then delegates to [`Line::grab_handle`].
    pub fn handle_click<E: EventSource>(
        &mut self,
        click: PointerClick,
        source: &E,
    ) -> Option<LineHandle> {
        let local = surface_local(click, source.bounding_rect());
        self.grab_handle(local)
    }
}
