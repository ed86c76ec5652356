//! The swipe-to-delete widget.
//!
//! [`SwipeListView`] is the widget itself. The remaining types are the pieces
//! it is built from and the seams the host plugs into:
//!
//! - [`RowLocator`]: which row is under a touch point
//! - [`RowPainter`]: how a row is drawn shifted and faded
//! - [`ItemDeleteListener`]: who removes the row once it slid away
//! - [`SwipeConfig`]: thresholds and animation timing
//!
//! # Lifecycle of a swipe
//!
//! ```text
//!  down        move (|dx| > |dy|)        up / cancel
//! ──────> Pressed ──────────────> Dragging ─────┬──────────────> SnappingBack ──> (none)
//!                                               │ |offset| > w/2
//!                                               └──────────────> Sliding ──> Completing ──> (none)
//! ```

mod animation;
mod config;
mod effect;
mod events;
mod geometry;
mod listener;
mod locator;
mod session;
mod swipe_list;

pub use animation::{
    AnimationKind, AnimationRun, TickOutcome, delete_slide_step, delete_slide_step_size,
    snap_back_step, snap_back_step_size,
};
pub use config::{
    AnimationTiming, DEFAULT_ANIMATION_DURATION_MS, DEFAULT_ANIMATION_PERIOD_MS,
    DEFAULT_DEAD_ZONE, DEFAULT_DELETE_THRESHOLD, DEFAULT_SLIDE_DIVISOR, DEFAULT_VERTICAL_SLOP,
    SwipeConfig,
};
pub use effect::{RowEffect, RowPainter};
pub use events::{TouchEvent, TouchPhase};
pub use geometry::Point;
pub use listener::ItemDeleteListener;
pub use locator::{FixedHeightLocator, RowLocator};
pub use session::{DragPhase, DragSession};
pub use swipe_list::SwipeListView;
