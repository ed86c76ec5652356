//! Mapping touch points to rows.
//!
//! Layout belongs to the host list; the widget only needs to ask which row,
//! if any, occupies a point.

use super::geometry::Point;

/// Resolves a widget-local point to the row displayed there.
pub trait RowLocator {
    /// The row under `point`, or `None` for empty space.
    fn row_at(&self, point: Point, row_count: usize) -> Option<usize>;
}

impl<F> RowLocator for F
where
    F: Fn(Point, usize) -> Option<usize>,
{
    fn row_at(&self, point: Point, row_count: usize) -> Option<usize> {
        self(point, row_count)
    }
}

/// Locator for a vertical list of equally tall rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedHeightLocator {
    row_height: f32,
    scroll_y: f32,
}

impl FixedHeightLocator {
    /// Creates a locator for rows `row_height` pixels tall.
    pub fn new(row_height: f32) -> Self {
        Self {
            row_height,
            scroll_y: 0.0,
        }
    }

    /// Row height in pixels.
    pub fn row_height(&self) -> f32 {
        self.row_height
    }

    /// Vertical scroll position in pixels.
    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    /// Sets the vertical scroll position.
    pub fn set_scroll_y(&mut self, scroll_y: f32) {
        self.scroll_y = scroll_y;
    }

    /// Sets the vertical scroll position using builder pattern.
    pub fn with_scroll_y(mut self, scroll_y: f32) -> Self {
        self.scroll_y = scroll_y;
        self
    }
}

impl RowLocator for FixedHeightLocator {
    fn row_at(&self, point: Point, row_count: usize) -> Option<usize> {
        if !point.x.is_finite() || !point.y.is_finite() {
            return None;
        }
        if self.row_height <= 0.0 || point.x < 0.0 {
            return None;
        }
        let content_y = point.y + self.scroll_y;
        if content_y < 0.0 {
            return None;
        }
        let row = (content_y / self.row_height) as usize;
        (row < row_count).then_some(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_height_rows() {
        let locator = FixedHeightLocator::new(40.0);
        assert_eq!(locator.row_at(Point::new(10.0, 0.0), 3), Some(0));
        assert_eq!(locator.row_at(Point::new(10.0, 39.9), 3), Some(0));
        assert_eq!(locator.row_at(Point::new(10.0, 40.0), 3), Some(1));
        assert_eq!(locator.row_at(Point::new(10.0, 119.0), 3), Some(2));
    }

    #[test]
    fn test_below_last_row_is_empty() {
        let locator = FixedHeightLocator::new(40.0);
        assert_eq!(locator.row_at(Point::new(10.0, 120.0), 3), None);
        assert_eq!(locator.row_at(Point::new(10.0, -1.0), 3), None);
        assert_eq!(locator.row_at(Point::new(10.0, 0.0), 0), None);
    }

    #[test]
    fn test_non_finite_points_are_empty() {
        let locator = FixedHeightLocator::new(40.0);
        assert_eq!(locator.row_at(Point::new(10.0, f32::NAN), 3), None);
        assert_eq!(locator.row_at(Point::new(f32::NAN, 10.0), 3), None);
        assert_eq!(locator.row_at(Point::new(10.0, f32::INFINITY), 3), None);
    }

    #[test]
    fn test_scroll_offsets_rows() {
        let locator = FixedHeightLocator::new(40.0).with_scroll_y(80.0);
        assert_eq!(locator.row_at(Point::new(0.0, 0.0), 10), Some(2));
    }

    #[test]
    fn test_closure_locator() {
        let locator = |point: Point, _count: usize| (point.x > 0.0).then_some(7);
        assert_eq!(locator.row_at(Point::new(1.0, 1.0), 10), Some(7));
        assert_eq!(locator.row_at(Point::new(-1.0, 1.0), 10), None);
    }
}
