//! Logging facilities for swipe-list.
//!
//! swipe-list uses the `tracing` crate for instrumentation. To see logs,
//! install a subscriber in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("swipe_list=debug,swipe_list_core=trace")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "swipe_list_core";
    /// Timer system target.
    pub const TIMER: &str = "swipe_list_core::timer";
    /// Signal system target.
    pub const SIGNAL: &str = "swipe_list_core::signal";
    /// Touch handling and drag session target.
    pub const GESTURE: &str = "swipe_list::gesture";
    /// Snap-back and delete-slide animation target.
    pub const ANIMATION: &str = "swipe_list::animation";
    /// Row provider and tagging target.
    pub const MODEL: &str = "swipe_list::model";
}

/// A guard for a performance measurement span.
///
/// The span stays entered until the guard is dropped.
#[derive(Debug)]
pub struct PerfSpan {
    _span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create and enter a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::trace_span!(target: "swipe_list::perf", "perf", operation = name);
        Self {
            _span: span.entered(),
        }
    }
}
