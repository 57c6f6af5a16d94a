//! Drawing-surface trait abstraction.
//!
//! Shapes render by issuing path/stroke commands against whatever implements
//! [`DrawSurface`] (a 2D canvas context, a command buffer, ...). Faults are
//! the surface's own error type and propagate untranslated.

use kurbo::Point;

/// Path and stroke commands a shape needs from its rendering target.
pub trait DrawSurface {
    /// Fault type raised by the surface itself.
    type Error;

    /// Begin a new path.
    fn begin_path(&mut self) -> Result<(), Self::Error>;

    /// Move the current position without drawing.
    fn move_to(&mut self, point: Point) -> Result<(), Self::Error>;

    /// Append a straight segment from the current position.
    fn line_to(&mut self, point: Point) -> Result<(), Self::Error>;

    /// Set the stroke color from a CSS color specifier.
    ///
    /// Malformed specifiers are the surface's problem; shapes pass the
    /// string through verbatim.
    fn set_stroke_color(&mut self, color: &str) -> Result<(), Self::Error>;

    /// Set the stroke width in drawing-surface units.
    fn set_stroke_width(&mut self, width: f64) -> Result<(), Self::Error>;

    /// Stroke the current path.
    fn stroke(&mut self) -> Result<(), Self::Error>;
}

/// A single recorded surface command.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceCommand {
    BeginPath,
    MoveTo(Point),
    LineTo(Point),
    SetStrokeColor(String),
    SetStrokeWidth(f64),
    Stroke,
}

/// An infallible [`DrawSurface`] that records every command it receives.
///
/// Useful for hosts that batch commands, and for asserting exact command
/// sequences in tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    /// Commands in the order they were issued.
    pub commands: Vec<SurfaceCommand>,
}

impl RecordingSurface {
    /// Create an empty recording surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl DrawSurface for RecordingSurface {
    type Error = std::convert::Infallible;

    fn begin_path(&mut self) -> Result<(), Self::Error> {
        self.commands.push(SurfaceCommand::BeginPath);
        Ok(())
    }

    fn move_to(&mut self, point: Point) -> Result<(), Self::Error> {
        self.commands.push(SurfaceCommand::MoveTo(point));
        Ok(())
    }

    fn line_to(&mut self, point: Point) -> Result<(), Self::Error> {
        self.commands.push(SurfaceCommand::LineTo(point));
        Ok(())
    }

    fn set_stroke_color(&mut self, color: &str) -> Result<(), Self::Error> {
        self.commands
            .push(SurfaceCommand::SetStrokeColor(color.to_string()));
        Ok(())
    }

    fn set_stroke_width(&mut self, width: f64) -> Result<(), Self::Error> {
        self.commands.push(SurfaceCommand::SetStrokeWidth(width));
        Ok(())
    }

    fn stroke(&mut self) -> Result<(), Self::Error> {
        self.commands.push(SurfaceCommand::Stroke);
        Ok(())
    }
}
