//! The drag session: which row is being dragged and by how much.

use super::geometry::Point;

/// Where a drag session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragPhase {
    /// The pointer went down on a row; no horizontal movement yet.
    Pressed,
    /// The row follows horizontal pointer movement.
    Dragging,
    /// The row is animating back to rest.
    SnappingBack,
    /// The row is animating off-screen and will be deleted.
    Sliding,
    /// The delete-slide finished; the deletion listener is running.
    Completing,
}

impl DragPhase {
    /// Whether the pointer still drives this session.
    pub fn is_tracking(self) -> bool {
        matches!(self, Self::Pressed | Self::Dragging)
    }

    /// Whether an animation owns this session.
    pub fn is_animating(self) -> bool {
        matches!(self, Self::SnappingBack | Self::Sliding)
    }
}

/// The transient state of a single drag.
///
/// A widget holds at most one session; no session means no row is dragged
/// and the offset reads as zero.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    index: usize,
    pub(crate) offset: f32,
    pub(crate) last: Point,
    pub(crate) phase: DragPhase,
    row_count: usize,
    abandoned_offset: Option<f32>,
}

impl DragSession {
    pub(crate) fn begin(index: usize, at: Point, row_count: usize) -> Self {
        Self {
            index,
            offset: 0.0,
            last: at,
            phase: DragPhase::Pressed,
            row_count,
            abandoned_offset: None,
        }
    }

    /// Row being dragged.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Signed horizontal displacement of the dragged row.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Last pointer position that moved the row.
    pub fn last_position(&self) -> Point {
        self.last
    }

    /// Lifecycle phase.
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// Row count of the bound data when the session began.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Whether the session no longer matches a data set of `row_count` rows.
    pub(crate) fn is_stale(&self, row_count: usize) -> bool {
        self.row_count != row_count || self.index >= row_count
    }

    /// Records the offset at which the pointer gave up the row for a scroll.
    pub(crate) fn abandon(&mut self) {
        self.abandoned_offset = Some(self.offset);
    }

    /// The offset recorded by [`abandon`](Self::abandon), at most once.
    pub(crate) fn take_abandoned_offset(&mut self) -> Option<f32> {
        self.abandoned_offset.take()
    }

    /// Adds the horizontal delta to `to` and makes it the last position.
    pub(crate) fn follow(&mut self, to: Point) {
        self.offset += to.x - self.last.x;
        self.last = to;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_at_rest() {
        let session = DragSession::begin(2, Point::new(10.0, 40.0), 15);
        assert_eq!(session.index(), 2);
        assert_eq!(session.offset(), 0.0);
        assert_eq!(session.phase(), DragPhase::Pressed);
        assert!(session.phase().is_tracking());
        assert!(!session.phase().is_animating());
    }

    #[test]
    fn test_follow_accumulates_horizontal_only() {
        let mut session = DragSession::begin(0, Point::new(10.0, 0.0), 3);
        session.follow(Point::new(50.0, 5.0));
        session.follow(Point::new(30.0, 9.0));
        assert_eq!(session.offset(), 20.0);
        assert_eq!(session.last_position(), Point::new(30.0, 9.0));
    }

    #[test]
    fn test_abandoned_offset_taken_once() {
        let mut session = DragSession::begin(1, Point::ZERO, 3);
        assert_eq!(session.take_abandoned_offset(), None);

        session.follow(Point::new(45.0, 0.0));
        session.abandon();
        session.follow(Point::new(60.0, 0.0));
        assert_eq!(session.take_abandoned_offset(), Some(45.0));
        assert_eq!(session.take_abandoned_offset(), None);
    }

    #[test]
    fn test_staleness() {
        let session = DragSession::begin(4, Point::ZERO, 5);
        assert!(!session.is_stale(5));
        assert!(session.is_stale(6));
        assert!(session.is_stale(4));
    }
}
