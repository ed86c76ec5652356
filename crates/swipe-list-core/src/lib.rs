//! Core systems for swipe-list.
//!
//! This crate provides the foundation the swipe-list widget is built on:
//!
//! - **Signals**: outbound notifications with connect/disconnect/emit
//! - **Timers**: bounded periodic timers driven by the host loop
//! - **Clocks**: the system clock and a manually advanced clock for tests
//! - **Errors**: configuration and timer errors
//!
//! # Timer Example
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//! use swipe_list_core::{ManualClock, TimerManager};
//!
//! let clock = ManualClock::new();
//! let mut timers = TimerManager::with_clock(Arc::new(clock.clone()));
//! let id = timers.start_bounded(Duration::from_millis(50), 6);
//!
//! clock.advance(Duration::from_millis(50));
//! let ticks = timers.process_expired();
//! assert_eq!(ticks[0].id, id);
//! assert_eq!(ticks[0].count, 1);
//! ```

mod clock;
mod error;
pub mod logging;
pub mod signal;
mod timer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{ConfigError, Result, SwipeListError, TimerError};
pub use logging::PerfSpan;
pub use signal::{ConnectionId, Signal};
pub use timer::{TimerId, TimerManager, TimerTick};
