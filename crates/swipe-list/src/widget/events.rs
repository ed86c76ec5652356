//! Touch input delivered to the widget.

use super::geometry::Point;

/// Phase of a single-pointer touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TouchPhase {
    /// The pointer went down.
    Started,
    /// The pointer moved while down.
    Moved,
    /// The pointer was lifted.
    Ended,
    /// The platform cancelled the gesture. Treated exactly like `Ended`.
    Cancelled,
}

/// A pointer event in widget-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchEvent {
    /// Phase of the touch.
    pub phase: TouchPhase,
    /// Position of the pointer.
    pub position: Point,
}

impl TouchEvent {
    /// Creates a touch event.
    pub fn new(phase: TouchPhase, position: impl Into<Point>) -> Self {
        Self {
            phase,
            position: position.into(),
        }
    }

    /// A `Started` event at `(x, y)`.
    pub fn down(x: f32, y: f32) -> Self {
        Self::new(TouchPhase::Started, Point::new(x, y))
    }

    /// A `Moved` event at `(x, y)`.
    pub fn moved(x: f32, y: f32) -> Self {
        Self::new(TouchPhase::Moved, Point::new(x, y))
    }

    /// An `Ended` event at `(x, y)`.
    pub fn up(x: f32, y: f32) -> Self {
        Self::new(TouchPhase::Ended, Point::new(x, y))
    }

    /// A `Cancelled` event at `(x, y)`.
    pub fn cancel(x: f32, y: f32) -> Self {
        Self::new(TouchPhase::Cancelled, Point::new(x, y))
    }
}
