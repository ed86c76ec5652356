//! A list widget whose rows are deleted by swiping them sideways.
//!
//! The crate is headless: it owns the gesture and animation state machine and
//! leaves layout, view recycling and drawing to the host toolkit through a
//! few small traits.
//!
//! - [`model`]: row providers and the view-to-row tagging side-table
//! - [`widget`]: [`SwipeListView`](widget::SwipeListView) and its parts
//!
//! The [`prelude`] re-exports everything a host usually needs.

pub mod model;
pub mod prelude;
pub mod widget;

pub use swipe_list_core::{
    Clock, ConfigError, ManualClock, Result, Signal, SwipeListError, SystemClock, TimerError,
};
