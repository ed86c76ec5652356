//! Tunables for the swipe gesture and its animations.

use std::time::Duration;

use swipe_list_core::ConfigError;

/// Default total duration of the snap-back and delete-slide animations.
pub const DEFAULT_ANIMATION_DURATION_MS: u64 = 300;

/// Default interval between animation ticks.
pub const DEFAULT_ANIMATION_PERIOD_MS: u64 = 50;

/// Default fraction of the row width a drag must exceed to delete the row.
pub const DEFAULT_DELETE_THRESHOLD: f32 = 0.5;

/// Default drag distance below which a release is still treated as a tap.
pub const DEFAULT_DEAD_ZONE: f32 = 20.0;

/// Default vertical movement after which a press is treated as a scroll.
pub const DEFAULT_VERTICAL_SLOP: f32 = 20.0;

/// Default divisor of the row width covered by a delete-slide.
pub const DEFAULT_SLIDE_DIVISOR: f32 = 3.0;

/// Duration and tick period of an animation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationTiming {
    duration: Duration,
    period: Duration,
}

impl AnimationTiming {
    /// Creates a timing. Validity is checked by [`tick_count`](Self::tick_count).
    pub const fn new(duration: Duration, period: Duration) -> Self {
        Self { duration, period }
    }

    /// Total duration of a run.
    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Interval between ticks.
    #[inline]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Number of ticks in a run.
    ///
    /// The duration must be an exact, non-zero multiple of a non-zero period.
    pub fn tick_count(&self) -> Result<u32, ConfigError> {
        let invalid = ConfigError::InvalidTiming {
            duration: self.duration,
            period: self.period,
        };
        let period = self.period.as_nanos();
        let duration = self.duration.as_nanos();
        if period == 0 || duration == 0 || duration % period != 0 {
            return Err(invalid);
        }
        u32::try_from(duration / period).map_err(|_| invalid)
    }
}

impl Default for AnimationTiming {
    fn default() -> Self {
        Self::new(
            Duration::from_millis(DEFAULT_ANIMATION_DURATION_MS),
            Duration::from_millis(DEFAULT_ANIMATION_PERIOD_MS),
        )
    }
}

/// Configuration for a swipe list.
#[derive(Debug, Clone, PartialEq)]
pub struct SwipeConfig {
    /// Timing shared by both animations.
    pub timing: AnimationTiming,
    /// Fraction of the width `|offset|` must strictly exceed on release to delete.
    pub delete_threshold: f32,
    /// Drag distance at or below which a release is not consumed.
    pub dead_zone: f32,
    /// Vertical movement beyond which a press turns into a scroll.
    pub vertical_slop: f32,
    /// A delete-slide covers `width / slide_divisor` over its run.
    pub slide_divisor: f32,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            timing: AnimationTiming::default(),
            delete_threshold: DEFAULT_DELETE_THRESHOLD,
            dead_zone: DEFAULT_DEAD_ZONE,
            vertical_slop: DEFAULT_VERTICAL_SLOP,
            slide_divisor: DEFAULT_SLIDE_DIVISOR,
        }
    }
}

impl SwipeConfig {
    /// Sets the animation timing.
    pub fn with_timing(mut self, timing: AnimationTiming) -> Self {
        self.timing = timing;
        self
    }

    /// Sets the delete threshold as a fraction of the width.
    pub fn with_delete_threshold(mut self, threshold: f32) -> Self {
        self.delete_threshold = threshold;
        self
    }

    /// Sets the dead zone in pixels.
    pub fn with_dead_zone(mut self, dead_zone: f32) -> Self {
        self.dead_zone = dead_zone;
        self
    }

    /// Sets the vertical slop in pixels.
    pub fn with_vertical_slop(mut self, slop: f32) -> Self {
        self.vertical_slop = slop;
        self
    }

    /// Sets the delete-slide divisor.
    pub fn with_slide_divisor(mut self, divisor: f32) -> Self {
        self.slide_divisor = divisor;
        self
    }

    /// Checks every setting, returning the animation tick count on success.
    pub fn validate(&self) -> Result<u32, ConfigError> {
        let ticks = self.timing.tick_count()?;
        check("delete_threshold", self.delete_threshold, |v| v > 0.0 && v <= 1.0)?;
        check("dead_zone", self.dead_zone, |v| v >= 0.0)?;
        check("vertical_slop", self.vertical_slop, |v| v >= 0.0)?;
        check("slide_divisor", self.slide_divisor, |v| v > 0.0)?;
        Ok(ticks)
    }
}

fn check(name: &'static str, value: f32, valid: impl Fn(f32) -> bool) -> Result<(), ConfigError> {
    if value.is_finite() && valid(value) {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue { name, value })
    }
}
