//! SketchLine
//!
//! An editable line shape primitive for interactive 2D canvas editors: a
//! data object holding two endpoints, a stroke color, and a stroke width,
//! able to render itself onto an abstract drawing surface and to detect
//! proximity clicks near its endpoint handles.
//!
//! The host editor owns the [`Line`], calls [`Line::draw`] against whatever
//! implements [`DrawSurface`], and forwards pointer clicks through
//! [`Line::handle_click`].

pub mod input;
pub mod shapes;
pub mod surface;

pub use input::{EventSource, PointerClick};
pub use shapes::{BasicColor, ShapeId, StrokeWeight};
pub use shapes::line::{GrabState, Line, LineHandle, LineOptions, LineOptionsError};
pub use surface::{DrawSurface, RecordingSurface, SurfaceCommand};
