//! SwipeListView: a list whose rows can be swiped away.
//!
//! [`SwipeListView`] sits between the host list and its row provider. It
//! watches touch input for horizontal drags on a row, shifts and fades that
//! row while it is dragged, and on release either snaps it back or slides it
//! off-screen and reports the deletion to an [`ItemDeleteListener`].
//!
//! The widget is headless and single-threaded. The host feeds it touch
//! events, asks it to render and paint rows, and calls
//! [`SwipeListView::process_timers`] when its event loop wakes up; the widget
//! asks for redraws through the `update_requested` signal.
//!
//! # Gesture policy
//!
//! - A press on a row starts a drag session but is never consumed, so the
//!   host still sees taps.
//! - A move that is more horizontal than vertical drags the row and is
//!   consumed. A mostly vertical move of more than `vertical_slop` pixels is
//!   treated as a scroll: the drag is abandoned and the row snaps back.
//! - On release (or cancel) the row is deleted if `|offset|` is strictly
//!   greater than `delete_threshold * width`, otherwise it snaps back. The
//!   release is consumed only if the row moved more than `dead_zone` pixels.
//! - A press during an animation settles the animation first: a snap-back is
//!   cut short, a delete-slide completes immediately and reports its deletion.
//! - When the data set changes under an active session, the session is
//!   dropped without reporting a deletion.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use std::time::Duration;
//! use swipe_list::prelude::*;
//!
//! type Rows = ListRowProvider<String>;
//!
//! let clock = ManualClock::new();
//! let mut list = SwipeListView::new(FixedHeightLocator::new(40.0))
//!     .with_clock(Arc::new(clock.clone()))
//!     .with_width(300.0);
//! list.set_tag_key(TagKey::new(1));
//! list.set_row_provider(Rows::new(vec!["One".into(), "Two".into(), "Three".into()]))?;
//! list.set_item_delete_listener(|list: &mut SwipeListView<Rows>, position: usize| {
//!     if let Some(rows) = list.row_provider_mut() {
//!         rows.remove(position);
//!     }
//!     list.notify_data_changed();
//! });
//!
//! list.handle_touch(&TouchEvent::down(10.0, 50.0));
//! list.handle_touch(&TouchEvent::moved(210.0, 50.0));
//! assert!(list.handle_touch(&TouchEvent::up(210.0, 50.0)));
//!
//! for _ in 0..6 {
//!     clock.advance(Duration::from_millis(50));
//!     list.process_timers();
//! }
//! assert_eq!(list.row_count(), 2);
//! assert_eq!(list.item(1).map(String::as_str), Some("Three"));
//! # Ok::<(), swipe_list::SwipeListError>(())
//! ```

use std::sync::Arc;
use std::time::Duration;

use swipe_list_core::logging::targets;
use swipe_list_core::{Clock, ConfigError, PerfSpan, Result, Signal, TimerManager};

use crate::model::{RowProvider, TagKey, TaggingAdapter, ViewId};

use super::animation::{AnimationKind, AnimationRun};
use super::config::{DEFAULT_ANIMATION_DURATION_MS, DEFAULT_ANIMATION_PERIOD_MS, SwipeConfig};
use super::effect::{RowEffect, RowPainter};
use super::events::{TouchEvent, TouchPhase};
use super::geometry::Point;
use super::listener::ItemDeleteListener;
use super::locator::RowLocator;
use super::session::{DragPhase, DragSession};

const DEFAULT_TICKS: u32 = (DEFAULT_ANIMATION_DURATION_MS / DEFAULT_ANIMATION_PERIOD_MS) as u32;

/// A list widget whose rows are deleted by swiping them sideways.
///
/// # Signals
///
/// - `update_requested()`: the list needs to be redrawn
/// - `item_deleted(usize)`: a delete-slide completed; emitted after the
///   deletion listener returned
pub struct SwipeListView<P: RowProvider> {
    // Configuration
    config: SwipeConfig,
    ticks: u32,
    width: f32,
    tag_key: Option<TagKey>,

    // Collaborators
    adapter: Option<TaggingAdapter<P>>,
    locator: Box<dyn RowLocator>,
    delete_listener: Option<Box<dyn ItemDeleteListener<P>>>,

    // Interaction state
    session: Option<DragSession>,
    animation: Option<AnimationRun>,
    timers: TimerManager,

    // Signals
    /// Emitted whenever the list needs to be redrawn.
    pub update_requested: Signal<()>,
    /// Emitted with the deleted position once a delete-slide completed.
    pub item_deleted: Signal<usize>,
}

impl<P: RowProvider> SwipeListView<P> {
    /// Creates a list resolving touch points with `locator`.
    ///
    /// The list starts with the default [`SwipeConfig`], the system clock, a
    /// zero width and no tag key.
    pub fn new(locator: impl RowLocator + 'static) -> Self {
        Self {
            config: SwipeConfig::default(),
            ticks: DEFAULT_TICKS,
            width: 0.0,
            tag_key: None,
            adapter: None,
            locator: Box::new(locator),
            delete_listener: None,
            session: None,
            animation: None,
            timers: TimerManager::new(),
            update_requested: Signal::new(),
            item_deleted: Signal::new(),
        }
    }

    /// Sets the configuration using builder pattern.
    pub fn with_config(mut self, config: SwipeConfig) -> Result<Self> {
        self.set_config(config)?;
        Ok(self)
    }

    /// Drives animation timers from `clock` using builder pattern.
    ///
    /// Must be called before any touch input; pending timers are discarded.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.timers = TimerManager::with_clock(clock);
        self.animation = None;
        self
    }

    /// Sets the width using builder pattern.
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    /// Sets the tag key using builder pattern.
    pub fn with_tag_key(mut self, key: TagKey) -> Self {
        self.set_tag_key(key);
        self
    }

    /// Attaches a row provider using builder pattern.
    pub fn with_row_provider(mut self, provider: P) -> Result<Self> {
        self.set_row_provider(provider)?;
        Ok(self)
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// The current configuration.
    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    /// Replaces the configuration after validating it.
    pub fn set_config(&mut self, config: SwipeConfig) -> Result<()> {
        let ticks = config.validate().inspect_err(|err| {
            tracing::error!(target: targets::ANIMATION, %err, "rejected swipe configuration");
        })?;
        self.config = config;
        self.ticks = ticks;
        Ok(())
    }

    /// The widget's rendered width in pixels.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Updates the rendered width. Running animations pick it up on their
    /// next tick.
    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    /// The key row tags are stored under.
    pub fn tag_key(&self) -> Option<TagKey> {
        self.tag_key
    }

    /// Assigns the tag key. Must happen before a row provider is attached.
    pub fn set_tag_key(&mut self, key: TagKey) {
        self.tag_key = Some(key);
        if let Some(adapter) = self.adapter.as_mut() {
            adapter.set_tag_key(key);
        }
    }

    // =========================================================================
    // Row provider
    // =========================================================================

    /// Attaches a row provider, wrapping it so rendered rows get tagged.
    ///
    /// Fails with [`ConfigError::MissingTagKey`] if no tag key was set.
    pub fn set_row_provider(&mut self, provider: P) -> Result<()> {
        let Some(key) = self.tag_key else {
            tracing::error!(target: targets::MODEL, "row provider attached before a tag key was set");
            return Err(ConfigError::MissingTagKey.into());
        };
        self.abort_session("row provider replaced");
        self.adapter = Some(TaggingAdapter::new(provider, key));
        tracing::debug!(target: targets::MODEL, rows = self.row_count(), "row provider attached");
        self.request_update();
        Ok(())
    }

    /// Detaches and returns the row provider.
    pub fn take_row_provider(&mut self) -> Option<P> {
        self.abort_session("row provider removed");
        let provider = self.adapter.take().map(TaggingAdapter::into_inner);
        if provider.is_some() {
            self.request_update();
        }
        provider
    }

    /// The wrapped row provider.
    pub fn row_provider(&self) -> Option<&P> {
        self.adapter.as_ref().map(TaggingAdapter::inner)
    }

    /// The wrapped row provider, mutably. Call
    /// [`notify_data_changed`](Self::notify_data_changed) after changing its data.
    pub fn row_provider_mut(&mut self) -> Option<&mut P> {
        self.adapter.as_mut().map(TaggingAdapter::inner_mut)
    }

    /// The tagging adapter around the row provider.
    pub fn adapter(&self) -> Option<&TaggingAdapter<P>> {
        self.adapter.as_ref()
    }

    /// Number of rows, or 0 without a provider.
    pub fn row_count(&self) -> usize {
        self.adapter.as_ref().map_or(0, TaggingAdapter::count)
    }

    /// The item at `index`.
    pub fn item(&self, index: usize) -> Option<&P::Item> {
        self.adapter.as_ref()?.item(index)
    }

    /// The stable id of the item at `index`.
    pub fn stable_id(&self, index: usize) -> Option<u64> {
        self.adapter.as_ref()?.stable_id(index)
    }

    /// Must be called by the owner whenever the backing data changes.
    ///
    /// Drops all row tags (the host re-renders visible rows next) and aborts
    /// an active drag or animation whose row no longer matches the data.
    pub fn notify_data_changed(&mut self) {
        if let Some(adapter) = self.adapter.as_mut() {
            adapter.clear_tags();
        }
        let row_count = self.row_count();
        let stale = self
            .session
            .as_ref()
            .is_some_and(|s| s.phase() != DragPhase::Completing && s.is_stale(row_count));
        if stale {
            self.abort_session("data set changed");
        }
        self.request_update();
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Renders row `index` through the provider, possibly reusing `recycled`,
    /// and tags the returned view with `index`.
    pub fn render_row(&mut self, index: usize, recycled: Option<ViewId>) -> Result<ViewId> {
        let adapter = self
            .adapter
            .as_mut()
            .ok_or(ConfigError::MissingRowProvider)?;
        Ok(adapter.render_row(index, recycled))
    }

    /// Forgets the tag of a view the host recycler discarded.
    pub fn release_view(&mut self, view: ViewId) {
        if let Some(adapter) = self.adapter.as_mut() {
            adapter.release_view(view);
        }
    }

    /// The row `view` was most recently rendered for.
    pub fn tag_of(&self, view: ViewId) -> Option<usize> {
        self.adapter.as_ref()?.tag_of(view)
    }

    /// The paint-time effect for `view`: identity unless it shows the dragged row.
    pub fn row_effect(&self, view: ViewId) -> RowEffect {
        match (&self.session, self.tag_of(view)) {
            (Some(session), Some(row)) if row == session.index() => {
                RowEffect::for_offset(session.offset(), self.width)
            }
            _ => RowEffect::IDENTITY,
        }
    }

    /// Draws `view`, shifted and faded if it shows the dragged row.
    pub fn paint_row(&self, painter: &mut dyn RowPainter, view: ViewId) {
        self.row_effect(view).paint(painter, view);
    }

    /// Whether the host should hide its press highlight because a row is
    /// being dragged sideways.
    pub fn suppresses_press_highlight(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.phase() == DragPhase::Dragging)
    }

    // =========================================================================
    // Deletion listener
    // =========================================================================

    /// Registers the listener told about completed deletions.
    pub fn set_item_delete_listener<L>(&mut self, listener: L)
    where
        L: ItemDeleteListener<P> + 'static,
    {
        self.delete_listener = Some(Box::new(listener));
    }

    /// Removes the deletion listener.
    pub fn clear_item_delete_listener(&mut self) {
        self.delete_listener = None;
    }

    // =========================================================================
    // Drag state
    // =========================================================================

    /// The active drag session.
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// Row being dragged.
    pub fn dragged_index(&self) -> Option<usize> {
        self.session.as_ref().map(DragSession::index)
    }

    /// Phase of the active drag session.
    pub fn phase(&self) -> Option<DragPhase> {
        self.session.as_ref().map(DragSession::phase)
    }

    /// Horizontal offset of the dragged row; zero without a session.
    pub fn offset(&self) -> f32 {
        self.session.as_ref().map_or(0.0, DragSession::offset)
    }

    /// The running animation.
    pub fn animation(&self) -> Option<&AnimationRun> {
        self.animation.as_ref()
    }

    /// Whether an animation is running.
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    // =========================================================================
    // Touch handling
    // =========================================================================

    /// Dispatches a touch event. Returns `true` if the event was consumed.
    pub fn handle_touch(&mut self, event: &TouchEvent) -> bool {
        match event.phase {
            TouchPhase::Started => self.touch_down(event.position),
            TouchPhase::Moved => self.touch_move(event.position),
            TouchPhase::Ended => self.touch_up(event.position),
            TouchPhase::Cancelled => self.touch_cancel(event.position),
        }
    }

    /// Pointer down: starts a drag session on the row under `point`.
    ///
    /// Never consumes the event.
    pub fn touch_down(&mut self, point: Point) -> bool {
        self.quiesce();

        let row_count = self.row_count();
        let Some(index) = self
            .locator
            .row_at(point, row_count)
            .filter(|&row| row < row_count)
        else {
            tracing::trace!(target: targets::GESTURE, x = point.x, y = point.y, "press outside any row");
            return false;
        };

        self.session = Some(DragSession::begin(index, point, row_count));
        tracing::debug!(target: targets::GESTURE, index, "drag session started");
        self.request_update();
        false
    }

    /// Pointer move: drags the row horizontally, or abandons the drag when
    /// the movement is mostly vertical.
    pub fn touch_move(&mut self, point: Point) -> bool {
        let vertical_slop = self.config.vertical_slop;
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        if !session.phase().is_tracking() {
            return false;
        }

        let last = session.last_position();
        let dx = point.x - last.x;
        let dy = point.y - last.y;

        if dx.abs() > dy.abs() {
            session.follow(point);
            session.phase = DragPhase::Dragging;
            tracing::trace!(target: targets::GESTURE, offset = session.offset(), "row dragged");
            self.request_update();
            true
        } else if dy.abs() > vertical_slop {
            tracing::debug!(target: targets::GESTURE, dy, "vertical movement, abandoning drag");
            session.abandon();
            self.start_animation(AnimationKind::SnapBack);
            false
        } else {
            false
        }
    }

    /// Pointer up or cancel: commits to a delete-slide or a snap-back.
    ///
    /// Consumes the event only if the row moved more than the dead zone,
    /// including when the drag was already abandoned for a vertical scroll.
    pub fn touch_up(&mut self, point: Point) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        if !session.phase().is_tracking() {
            // The release of a drag abandoned for a scroll is still reported
            // by how far the row had moved; it never commits anything.
            let dead_zone = self.config.dead_zone;
            return session.phase().is_animating()
                && session
                    .take_abandoned_offset()
                    .is_some_and(|offset| offset.abs() > dead_zone);
        }

        session.follow(point);
        let offset = session.offset();
        let kind = if self.is_to_be_deleted(offset) {
            AnimationKind::DeleteSlide
        } else {
            AnimationKind::SnapBack
        };
        tracing::debug!(target: targets::GESTURE, offset, width = self.width, ?kind, "drag released");

        self.start_animation(kind);
        self.request_update();
        offset.abs() > self.config.dead_zone
    }

    /// Gesture cancelled by the platform. Resolved exactly like a release.
    pub fn touch_cancel(&mut self, point: Point) -> bool {
        self.touch_up(point)
    }

    fn is_to_be_deleted(&self, offset: f32) -> bool {
        offset.abs() > self.width * self.config.delete_threshold
    }

    // =========================================================================
    // Animation
    // =========================================================================

    /// Time until the next animation tick is due, if an animation is running.
    pub fn time_until_next_tick(&mut self) -> Option<Duration> {
        self.timers.time_until_next()
    }

    /// Applies every animation tick that is due. Returns the number applied.
    pub fn process_timers(&mut self) -> usize {
        let _perf = PerfSpan::new("swipe_list::process_timers");
        let mut applied = 0;

        for tick in self.timers.process_expired() {
            let Some(run) = self.animation.as_mut() else {
                continue;
            };
            if run.timer() != tick.id {
                continue;
            }
            let Some(session) = self.session.as_mut() else {
                continue;
            };

            let outcome = run.advance(session.offset, self.width, self.config.slide_divisor);
            session.offset = outcome.offset;
            applied += 1;
            tracing::trace!(target: targets::ANIMATION, tick = tick.count, offset = outcome.offset, "animation tick");

            if outcome.finished {
                self.finish_animation();
            } else {
                self.request_update();
            }
        }

        applied
    }

    fn start_animation(&mut self, kind: AnimationKind) {
        if let Some(previous) = self.animation.take() {
            self.stop_timer(&previous);
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };

        session.phase = match kind {
            AnimationKind::SnapBack => DragPhase::SnappingBack,
            AnimationKind::DeleteSlide => DragPhase::Sliding,
        };
        let position = session.index();
        let timer = self
            .timers
            .start_bounded(self.config.timing.period(), self.ticks);
        self.animation = Some(AnimationRun::new(kind, timer, self.ticks, position));
        tracing::debug!(target: targets::ANIMATION, ?kind, position, ticks = self.ticks, "animation started");
    }

    fn finish_animation(&mut self) {
        let Some(run) = self.animation.take() else {
            return;
        };
        self.stop_timer(&run);

        match run.kind() {
            AnimationKind::SnapBack => {
                tracing::debug!(target: targets::ANIMATION, position = run.position(), "snap-back finished");
                self.end_session();
            }
            AnimationKind::DeleteSlide => {
                tracing::debug!(target: targets::ANIMATION, position = run.position(), "delete-slide finished");
                self.complete_deletion(run.position());
            }
        }
    }

    /// Settles an in-flight animation before a new press.
    fn quiesce(&mut self) {
        if let Some(run) = self.animation.take() {
            self.stop_timer(&run);
            match run.kind() {
                AnimationKind::SnapBack => {
                    tracing::debug!(target: targets::ANIMATION, "snap-back interrupted by press");
                    self.end_session();
                }
                AnimationKind::DeleteSlide => {
                    tracing::debug!(target: targets::ANIMATION, "delete-slide completed early by press");
                    self.complete_deletion(run.position());
                }
            }
        } else if self.session.take().is_some() {
            self.request_update();
        }
    }

    fn complete_deletion(&mut self, position: usize) {
        if let Some(session) = self.session.as_mut() {
            session.phase = DragPhase::Completing;
        }

        if let Some(mut listener) = self.delete_listener.take() {
            listener.on_item_deleted(self, position);
            if self.delete_listener.is_none() {
                self.delete_listener = Some(listener);
            }
        }
        self.item_deleted.emit(position);

        if self
            .session
            .as_ref()
            .is_some_and(|s| s.phase() == DragPhase::Completing)
        {
            self.session = None;
        }
        self.request_update();
    }

    fn end_session(&mut self) {
        self.session = None;
        self.request_update();
    }

    fn abort_session(&mut self, reason: &'static str) {
        if let Some(run) = self.animation.take() {
            self.stop_timer(&run);
        }
        if let Some(session) = self.session.take() {
            tracing::debug!(target: targets::GESTURE, index = session.index(), reason, "drag session aborted");
        }
    }

    fn stop_timer(&mut self, run: &AnimationRun) {
        if self.timers.is_active(run.timer()) {
            let _ = self.timers.stop(run.timer());
        }
    }

    fn request_update(&self) {
        self.update_requested.emit(());
    }
}
