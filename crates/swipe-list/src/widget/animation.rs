//! Snap-back and delete-slide animations.
//!
//! Both animations are linear and tick-driven: a bounded timer fires a fixed
//! number of times and every tick moves the dragged row's offset by a fixed
//! step. The step functions are pure so they can be checked without a timer.

use swipe_list_core::TimerId;

/// Which animation a run performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationKind {
    /// Return the row to its rest position.
    SnapBack,
    /// Continue the row off-screen, then delete it.
    DeleteSlide,
}

/// Moves `offset` toward zero by `step` without crossing zero.
#[inline]
pub fn snap_back_step(offset: f32, step: f32) -> f32 {
    if offset > 0.0 {
        (offset - step).max(0.0)
    } else if offset < 0.0 {
        (offset + step).min(0.0)
    } else {
        0.0
    }
}

/// Moves `offset` away from zero by `step`, keeping its direction.
#[inline]
pub fn delete_slide_step(offset: f32, step: f32) -> f32 {
    if offset > 0.0 {
        offset + step
    } else if offset < 0.0 {
        offset - step
    } else {
        0.0
    }
}

/// Per-tick snap-back distance: the whole width over one run.
#[inline]
pub fn snap_back_step_size(width: f32, ticks: u32) -> f32 {
    width / ticks as f32
}

/// Per-tick delete-slide distance: `width / divisor` over one run.
#[inline]
pub fn delete_slide_step_size(width: f32, divisor: f32, ticks: u32) -> f32 {
    width / divisor / ticks as f32
}

/// Result of advancing a run by one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutcome {
    /// Offset after the tick.
    pub offset: f32,
    /// Whether the run is over.
    pub finished: bool,
}

/// One animation run bound to the timer that drives it.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationRun {
    kind: AnimationKind,
    timer: TimerId,
    ticks: u32,
    elapsed: u32,
    position: usize,
}

impl AnimationRun {
    pub(crate) fn new(kind: AnimationKind, timer: TimerId, ticks: u32, position: usize) -> Self {
        Self {
            kind,
            timer,
            ticks,
            elapsed: 0,
            position,
        }
    }

    /// Which animation this is.
    pub fn kind(&self) -> AnimationKind {
        self.kind
    }

    /// The timer driving this run.
    pub fn timer(&self) -> TimerId {
        self.timer
    }

    /// Row the run was started for.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Total ticks in the run.
    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Ticks applied so far.
    pub fn elapsed(&self) -> u32 {
        self.elapsed
    }

    /// Applies one tick to `offset`.
    ///
    /// `width` is the widget width at the time of the tick. A snap-back
    /// finishes early on the tick that reaches zero.
    pub(crate) fn advance(&mut self, offset: f32, width: f32, slide_divisor: f32) -> TickOutcome {
        self.elapsed += 1;
        let last = self.elapsed >= self.ticks;

        match self.kind {
            AnimationKind::SnapBack => {
                let offset = snap_back_step(offset, snap_back_step_size(width, self.ticks));
                TickOutcome {
                    offset,
                    finished: last || offset == 0.0,
                }
            }
            AnimationKind::DeleteSlide => TickOutcome {
                offset: delete_slide_step(
                    offset,
                    delete_slide_step_size(width, slide_divisor, self.ticks),
                ),
                finished: last,
            },
        }
    }
}
