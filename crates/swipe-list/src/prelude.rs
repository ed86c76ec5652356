//! Commonly used types.
//!
//! ```
//! use swipe_list::prelude::*;
//! ```

pub use swipe_list_core::{Clock, ConfigError, ManualClock, Signal, SwipeListError, SystemClock};

pub use crate::model::{ListRowProvider, RowProvider, TagKey, TaggingAdapter, ViewId};
pub use crate::widget::{
    AnimationKind, AnimationTiming, DragPhase, FixedHeightLocator, ItemDeleteListener, Point,
    RowEffect, RowLocator, RowPainter, SwipeConfig, SwipeListView, TouchEvent, TouchPhase,
};
