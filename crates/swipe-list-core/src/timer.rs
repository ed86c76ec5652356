//! Timer system for swipe-list.
//!
//! Animations are driven by bounded timers: a timer fires a fixed number of
//! times at a fixed interval and then removes itself. A widget owns
//! its [`TimerManager`] and the host event loop calls
//! [`TimerManager::process_expired`] whenever it wakes up; the manager reads
//! time from an injected [`Clock`].

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use slotmap::{new_key_type, SlotMap};

use crate::clock::{Clock, SystemClock};
use crate::error::{Result, TimerError};
use crate::logging::targets;

new_key_type! {
    /// A unique identifier for a timer.
    pub struct TimerId;
}

/// A single timer fire reported by [`TimerManager::process_expired`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerTick {
    /// The timer that fired.
    pub id: TimerId,
    /// How many times this timer has fired, including this one.
    pub count: u32,
    /// Whether this was the timer's final fire.
    pub is_last: bool,
}

/// Internal timer data.
#[derive(Debug)]
struct TimerData {
    /// When this timer should next fire.
    next_fire: Instant,
    /// The interval between fires.
    interval: Duration,
    /// Total number of fires.
    ticks: u32,
    /// Number of fires so far.
    fired: u32,
}

/// An entry in the timer queue (min-heap by fire time).
#[derive(Debug, Clone, Copy)]
struct TimerQueueEntry {
    id: TimerId,
    fire_time: Instant,
}

impl PartialEq for TimerQueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.fire_time == other.fire_time
    }
}

impl Eq for TimerQueueEntry {}

impl PartialOrd for TimerQueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TimerQueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap (BinaryHeap is max-heap by default).
        other.fire_time.cmp(&self.fire_time)
    }
}

/// Manages the timers of one widget.
pub struct TimerManager {
    clock: Arc<dyn Clock>,
    /// All live timers.
    timers: SlotMap<TimerId, TimerData>,
    /// Priority queue of pending timer fires.
    queue: BinaryHeap<TimerQueueEntry>,
}

impl std::fmt::Debug for TimerManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerManager")
            .field("timers", &self.timers)
            .field("queued", &self.queue.len())
            .finish()
    }
}

impl TimerManager {
    /// Create a timer manager reading the system clock.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Create a timer manager reading the given clock.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            timers: SlotMap::with_key(),
            queue: BinaryHeap::new(),
        }
    }

    /// The clock this manager reads.
    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    /// Start a timer that fires `ticks` times, `interval` apart, then stops.
    ///
    /// A zero tick count yields a timer that is already finished.
    pub fn start_bounded(&mut self, interval: Duration, ticks: u32) -> TimerId {
        let next_fire = self.clock.now() + interval;
        let id = self.timers.insert(TimerData {
            next_fire,
            interval,
            ticks,
            fired: 0,
        });
        if ticks == 0 {
            self.timers.remove(id);
            return id;
        }
        self.queue.push(TimerQueueEntry {
            id,
            fire_time: next_fire,
        });
        tracing::trace!(target: targets::TIMER, ?id, ?interval, ticks, "timer started");
        id
    }

    /// Stop and remove a timer.
    pub fn stop(&mut self, id: TimerId) -> Result<()> {
        if self.timers.remove(id).is_some() {
            tracing::trace!(target: targets::TIMER, ?id, "timer stopped");
            Ok(())
        } else {
            Err(TimerError::InvalidTimerId.into())
        }
    }

    /// Check if a timer is currently active.
    pub fn is_active(&self, id: TimerId) -> bool {
        self.timers.contains_key(id)
    }

    /// Get the duration until the next timer fires, if any.
    pub fn time_until_next(&mut self) -> Option<Duration> {
        // Drop stopped timers from the front of the queue.
        while let Some(entry) = self.queue.peek() {
            if self.timers.contains_key(entry.id) {
                break;
            }
            self.queue.pop();
        }

        let now = self.clock.now();
        self.queue
            .peek()
            .map(|entry| entry.fire_time.saturating_duration_since(now))
    }

    /// Process all timers that should have fired by now.
    ///
    /// A timer that fell behind fires once for every interval it missed, so
    /// bounded timers always report their full tick count.
    #[tracing::instrument(skip(self), target = "swipe_list_core::timer", level = "trace")]
    pub fn process_expired(&mut self) -> Vec<TimerTick> {
        let now = self.clock.now();
        let mut fired_ticks = Vec::new();

        while let Some(entry) = self.queue.peek().copied() {
            if entry.fire_time > now {
                break;
            }
            self.queue.pop();

            let id = entry.id;
            let Some(timer) = self.timers.get_mut(id) else {
                continue;
            };
            // Stale queue entry from before a reschedule.
            if timer.next_fire != entry.fire_time {
                continue;
            }

            timer.fired += 1;
            let is_last = timer.fired >= timer.ticks;
            tracing::trace!(target: targets::TIMER, ?id, count = timer.fired, is_last, "timer fired");
            fired_ticks.push(TimerTick {
                id,
                count: timer.fired,
                is_last,
            });

            if is_last {
                self.timers.remove(id);
            } else {
                timer.next_fire += timer.interval;
                self.queue.push(TimerQueueEntry {
                    id,
                    fire_time: timer.next_fire,
                });
            }
        }

        fired_ticks
    }

    /// Get the number of active timers.
    pub fn active_count(&self) -> usize {
        self.timers.len()
    }
}

impl Default for TimerManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    fn manager() -> (ManualClock, TimerManager) {
        let clock = ManualClock::new();
        let timers = TimerManager::with_clock(Arc::new(clock.clone()));
        (clock, timers)
    }

    #[test]
    fn test_single_tick_timer() {
        let (clock, mut timers) = manager();
        let id = timers.start_bounded(Duration::from_millis(100), 1);

        clock.advance(Duration::from_millis(99));
        assert!(timers.process_expired().is_empty());

        clock.advance(Duration::from_millis(1));
        let fired = timers.process_expired();
        assert_eq!(fired, vec![TimerTick { id, count: 1, is_last: true }]);
        assert!(!timers.is_active(id));

        clock.advance(Duration::from_millis(500));
        assert!(timers.process_expired().is_empty());
    }

    #[test]
    fn test_bounded_timer_fires_exact_count() {
        let (clock, mut timers) = manager();
        let id = timers.start_bounded(Duration::from_millis(50), 6);

        let mut counts = Vec::new();
        for _ in 0..10 {
            clock.advance(Duration::from_millis(50));
            for tick in timers.process_expired() {
                assert_eq!(tick.id, id);
                counts.push((tick.count, tick.is_last));
            }
        }

        assert_eq!(counts.len(), 6);
        assert_eq!(counts.last(), Some(&(6, true)));
        assert!(counts[..5].iter().all(|(_, last)| !last));
        assert_eq!(timers.active_count(), 0);
    }

    #[test]
    fn test_bounded_timer_catches_up() {
        let (clock, mut timers) = manager();
        timers.start_bounded(Duration::from_millis(50), 6);

        clock.advance(Duration::from_millis(175));
        let fired = timers.process_expired();
        assert_eq!(fired.len(), 3);
        assert_eq!(fired[2].count, 3);

        clock.advance(Duration::from_secs(1));
        let fired = timers.process_expired();
        assert_eq!(fired.len(), 3);
        assert!(fired[2].is_last);
    }

    #[test]
    fn test_zero_tick_bounded_timer_is_inactive() {
        let (_clock, mut timers) = manager();
        let id = timers.start_bounded(Duration::from_millis(50), 0);
        assert!(!timers.is_active(id));
        assert_eq!(timers.time_until_next(), None);
    }

    #[test]
    fn test_stop_timer() {
        let (clock, mut timers) = manager();
        let id = timers.start_bounded(Duration::from_millis(10), 3);
        assert!(timers.is_active(id));

        timers.stop(id).unwrap();
        assert!(!timers.is_active(id));
        assert!(timers.stop(id).is_err());

        clock.advance(Duration::from_millis(100));
        assert!(timers.process_expired().is_empty());
    }

    #[test]
    fn test_time_until_next() {
        let (clock, mut timers) = manager();
        assert_eq!(timers.time_until_next(), None);

        timers.start_bounded(Duration::from_millis(50), 6);
        assert_eq!(timers.time_until_next(), Some(Duration::from_millis(50)));

        clock.advance(Duration::from_millis(20));
        assert_eq!(timers.time_until_next(), Some(Duration::from_millis(30)));

        clock.advance(Duration::from_millis(40));
        assert_eq!(timers.time_until_next(), Some(Duration::ZERO));
    }
}
