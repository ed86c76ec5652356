//! Paint-time translation and fade of the dragged row.
//!
//! The effect never touches layout: rows keep their slots and only the
//! dragged one is drawn shifted and faded.

use crate::model::ViewId;

/// The drawing primitives the widget needs from the host renderer.
pub trait RowPainter {
    /// Starts an offscreen layer composited at `alpha` (0.0..=1.0) on restore.
    fn save_layer_alpha(&mut self, alpha: f32);

    /// Shifts subsequent drawing.
    fn translate(&mut self, dx: f32, dy: f32);

    /// Draws a row view at its laid-out position.
    fn draw_row(&mut self, view: ViewId);

    /// Pops the state pushed by the last `save_layer_alpha`.
    fn restore(&mut self);
}

/// Transform applied to the dragged row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowEffect {
    /// Horizontal translation in pixels.
    pub offset: f32,
    /// Layer opacity.
    pub alpha: f32,
}

impl RowEffect {
    /// The untransformed effect.
    pub const IDENTITY: Self = Self {
        offset: 0.0,
        alpha: 1.0,
    };

    /// Effect for a row dragged by `offset` in a widget `width` pixels wide.
    ///
    /// Opacity falls linearly from 1 at rest to 0 at a full width.
    pub fn for_offset(offset: f32, width: f32) -> Self {
        let alpha = if width > 0.0 {
            (1.0 - offset.abs() / width).clamp(0.0, 1.0)
        } else {
            1.0
        };
        Self { offset, alpha }
    }

    /// Whether this effect leaves the row unchanged.
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Draws `view` with this effect, leaving the painter as it found it.
    pub fn paint(&self, painter: &mut dyn RowPainter, view: ViewId) {
        if self.is_identity() {
            painter.draw_row(view);
            return;
        }
        painter.save_layer_alpha(self.alpha);
        painter.translate(self.offset, 0.0);
        painter.draw_row(view);
        painter.translate(-self.offset, 0.0);
        painter.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_falls_with_offset() {
        assert_eq!(RowEffect::for_offset(0.0, 300.0).alpha, 1.0);
        assert_eq!(RowEffect::for_offset(150.0, 300.0).alpha, 0.5);
        assert_eq!(RowEffect::for_offset(-150.0, 300.0).alpha, 0.5);
        assert_eq!(RowEffect::for_offset(450.0, 300.0).alpha, 0.0);
    }

    #[test]
    fn test_zero_width_keeps_opaque() {
        let effect = RowEffect::for_offset(10.0, 0.0);
        assert_eq!(effect.alpha, 1.0);
        assert_eq!(effect.offset, 10.0);
    }

    #[test]
    fn test_identity() {
        assert!(RowEffect::for_offset(0.0, 300.0).is_identity());
        assert!(!RowEffect::for_offset(1.0, 300.0).is_identity());
    }
}
