//! Error types for swipe-list.

use std::time::Duration;

/// Errors raised while configuring a swipe list before it is used.
///
/// These are setup-time failures: once a widget has been configured
/// successfully it never produces them again.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A row provider was attached before a tag key was assigned.
    #[error("a tag key must be set before a row provider is attached")]
    MissingTagKey,

    /// Rows were requested before a row provider was attached.
    #[error("no row provider is attached")]
    MissingRowProvider,

    /// The animation duration is not an exact, non-zero multiple of the tick period.
    #[error("animation duration {duration:?} is not a whole number of {period:?} ticks")]
    InvalidTiming { duration: Duration, period: Duration },

    /// A ratio or distance setting is out of its valid range.
    #[error("invalid value for '{name}': {value}")]
    InvalidValue { name: &'static str, value: f32 },
}

/// Timer-specific errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimerError {
    /// The timer ID is invalid or the timer already finished.
    #[error("invalid or expired timer id")]
    InvalidTimerId,
}

/// The main error type for swipe-list operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SwipeListError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Timer-related error.
    #[error("timer error: {0}")]
    Timer(#[from] TimerError),
}

/// A specialized Result type for swipe-list operations.
pub type Result<T> = std::result::Result<T, SwipeListError>;
