//! The carousel engine.
//!
//! `Carousel` is the single, inspectable state object behind one slider. The
//! host forwards pointer, touch, resize, and timer callbacks to it and carries
//! out the [`Effect`]s it returns. Nothing here reads a clock or touches the
//! DOM, so every behavior can be driven directly from tests.
//!
//! Invariant: `0 <= current_index <= bounds.max_index` after every call.

use crate::autoplay::{AutoplayCommand, AutoplayKey, AutoplaySupervisor};
use crate::bounds::Bounds;
use crate::config::CarouselConfig;
use crate::consts::DEFAULT_VIEWPORT_WIDTH;
use crate::drag::{DragRelease, DragState, Gesture};
use crate::indicators::{Indicator, indicators};
use crate::render::{TrackStyle, card_basis_percent, card_flex};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Side effects the host must perform after a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Attach window-level mouse move/up listeners for the drag in progress.
    ListenPointer,
    /// Detach the listeners attached for `ListenPointer`.
    UnlistenPointer,
    /// Call [`Carousel::settle`] with `token` after `delay_ms`.
    ScheduleSettle { token: u64, delay_ms: u32 },
    /// Call [`Carousel::autoplay_tick`] with `generation` every `interval_ms`
    /// until it reports [`TickOutcome::Stale`].
    StartAutoplay { generation: u64, interval_ms: u32 },
    /// All autoplay timers are stale; cancel them if you hold handles.
    StopAutoplay,
}

/// Result of an autoplay timer firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The carousel moved to `index`.
    Advanced { index: usize },
    /// The timer belongs to an old generation; the host should drop it.
    Stale,
}

impl TickOutcome {
    #[must_use]
    pub fn is_live(self) -> bool {
        !matches!(self, Self::Stale)
    }
}

#[derive(Debug, Clone)]
pub struct Carousel {
    config: CarouselConfig,
    item_count: usize,
    viewport_width: f64,
    items_per_view: usize,
    bounds: Bounds,
    current_index: usize,
    gesture: Gesture,
    settle_seq: u64,
    autoplay: AutoplaySupervisor,
}

impl Default for Carousel {
    fn default() -> Self {
        Self::new(CarouselConfig::default())
    }
}

impl Carousel {
    /// Create an empty carousel sized for [`DEFAULT_VIEWPORT_WIDTH`].
    ///
    /// No autoplay timer exists until the first [`Carousel::set_item_count`]
    /// or [`Carousel::resize`].
    #[must_use]
    pub fn new(config: CarouselConfig) -> Self {
        let items_per_view = config.breakpoints.items_per_view(DEFAULT_VIEWPORT_WIDTH);
        let autoplay = AutoplaySupervisor::new(config.autoplay);
        Self {
            config,
            item_count: 0,
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            items_per_view,
            bounds: Bounds::new(0, items_per_view),
            current_index: 0,
            gesture: Gesture::Idle,
            settle_seq: 0,
            autoplay,
        }
    }

    // --- Inputs from the host ---

    /// Replace the number of cards. Re-clamps the index and restarts autoplay
    /// if the bounds changed.
    pub fn set_item_count(&mut self, item_count: usize) -> Vec<Effect> {
        self.item_count = item_count;
        self.recompute()
    }

    /// Apply a viewport width. Recomputes cards per view and, if it changed,
    /// re-clamps the index immediately. Calling twice with the same width is a no-op.
    pub fn resize(&mut self, viewport_width: f64) -> Vec<Effect> {
        if viewport_width.is_finite() {
            self.viewport_width = viewport_width;
        }
        self.items_per_view = self.config.breakpoints.items_per_view(self.viewport_width);
        self.recompute()
    }

    // --- Navigation ---

    /// One slide forward, stopping at `max_index`.
    pub fn next(&mut self) -> usize {
        self.set_index(self.current_index.saturating_add(1).min(self.bounds.max_index))
    }

    /// One slide back, stopping at 0.
    pub fn prev(&mut self) -> usize {
        self.set_index(self.current_index.saturating_sub(1))
    }

    /// Jump to `index`, clamped into range.
    pub fn go_to(&mut self, index: i64) -> usize {
        self.set_index(self.bounds.clamp(index))
    }

    // --- Gesture ---

    /// Open a drag at `pointer_x`. Ignored while a drag is already open and on
    /// single-page carousels, which are static.
    pub fn on_drag_start(&mut self, pointer_x: f64) -> Vec<Effect> {
        if self.gesture.is_dragging() || !self.bounds.has_controls() || !pointer_x.is_finite() {
            return Vec::new();
        }
        // A pending settle from the previous gesture must not clear this one.
        self.settle_seq += 1;
        self.gesture = Gesture::Dragging(DragState::new(pointer_x, self.current_index));

        let mut effects = vec![Effect::ListenPointer];
        self.sync_autoplay(&mut effects);
        effects
    }

    /// Track the pointer. No-op unless a drag is open.
    pub fn on_drag_move(&mut self, pointer_x: f64) {
        if let Gesture::Dragging(state) = &mut self.gesture {
            state.update(pointer_x, self.config.move_threshold_px);
        }
    }

    /// Close the drag: step one slide if the release passed the swipe
    /// threshold, then either settle (if the pointer really moved) or go idle.
    pub fn on_drag_end(&mut self) -> Vec<Effect> {
        let Gesture::Dragging(state) = self.gesture else {
            return Vec::new();
        };

        match DragRelease::classify(state.translate_x, self.config.swipe_threshold_px) {
            DragRelease::Advance => {
                self.next();
            }
            DragRelease::Retreat => {
                self.prev();
            }
            DragRelease::Stay => {}
        }

        let mut effects = vec![Effect::UnlistenPointer];
        if state.has_moved {
            self.settle_seq += 1;
            self.gesture = Gesture::Settling { token: self.settle_seq };
            effects.push(Effect::ScheduleSettle { token: self.settle_seq, delay_ms: self.config.settle_delay_ms });
        } else {
            self.gesture = Gesture::Idle;
        }
        self.sync_autoplay(&mut effects);
        effects
    }

    /// Settle timer callback. Returns `true` if it ended the settling phase;
    /// stale tokens are ignored.
    pub fn settle(&mut self, token: u64) -> bool {
        match self.gesture {
            Gesture::Settling { token: pending } if pending == token => {
                self.gesture = Gesture::Idle;
                true
            }
            _ => false,
        }
    }

    /// Whether a click on card content should be cancelled because it is the
    /// tail of a drag.
    #[must_use]
    pub fn should_suppress_click(&self) -> bool {
        self.gesture.has_moved()
    }

    // --- Autoplay ---

    /// Autoplay timer callback. Advances one slide, wrapping to 0 past the end.
    pub fn autoplay_tick(&mut self, generation: u64) -> TickOutcome {
        if !self.autoplay.is_current(generation) || self.gesture.is_dragging() {
            return TickOutcome::Stale;
        }
        let index = self.set_index(self.bounds.next_wrapping(self.current_index));
        TickOutcome::Advanced { index }
    }

    /// Tear down: close any drag and invalidate every timer. Used on unmount.
    pub fn shutdown(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        if self.gesture.is_dragging() {
            effects.push(Effect::UnlistenPointer);
        }
        self.gesture = Gesture::Idle;
        self.settle_seq += 1;
        if let Some(AutoplayCommand::Stop) = self.autoplay.stop() {
            effects.push(Effect::StopAutoplay);
        }
        effects
    }

    // --- Queries ---

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn items_per_view(&self) -> usize {
        self.items_per_view
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    #[must_use]
    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    #[must_use]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[must_use]
    pub fn total_slides(&self) -> usize {
        self.bounds.total_slides
    }

    #[must_use]
    pub fn max_index(&self) -> usize {
        self.bounds.max_index
    }

    #[must_use]
    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    #[must_use]
    pub fn has_moved(&self) -> bool {
        self.gesture.has_moved()
    }

    #[must_use]
    pub fn translate_x(&self) -> f64 {
        self.gesture.translate_x()
    }

    #[must_use]
    pub fn autoplay_running(&self) -> bool {
        self.autoplay.is_running()
    }

    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Prev/next buttons, dots, and autoplay exist only with more than one slide.
    #[must_use]
    pub fn show_controls(&self) -> bool {
        self.bounds.has_controls()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    /// Transform and transition for the track element.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn track_style(&self) -> TrackStyle {
        TrackStyle {
            offset_percent: self.current_index as f64 * card_basis_percent(self.items_per_view),
            drag_px: self.gesture.translate_x(),
            animate: !self.gesture.is_dragging(),
            transition_ms: self.config.transition_ms,
        }
    }

    /// CSS `flex` value for each card.
    #[must_use]
    pub fn card_flex(&self) -> String {
        card_flex(self.items_per_view)
    }

    #[must_use]
    pub fn indicators(&self) -> Vec<Indicator> {
        indicators(self.current_index, self.bounds.total_slides, self.config.indicator_window)
    }

    // --- Internals ---

    fn set_index(&mut self, index: usize) -> usize {
        let index = index.min(self.bounds.max_index);
        if index != self.current_index {
            #[cfg(feature = "tracing")]
            tracing::debug!(from = self.current_index, to = index, "carousel index changed");
            self.current_index = index;
        }
        self.current_index
    }

    fn recompute(&mut self) -> Vec<Effect> {
        self.bounds = Bounds::new(self.item_count, self.items_per_view);
        self.current_index = self.current_index.min(self.bounds.max_index);
        let mut effects = Vec::new();
        self.sync_autoplay(&mut effects);
        effects
    }

    fn sync_autoplay(&mut self, effects: &mut Vec<Effect>) {
        let key = AutoplayKey {
            total_slides: self.bounds.total_slides,
            max_index: self.bounds.max_index,
            dragging: self.gesture.is_dragging(),
        };
        match self.autoplay.sync(key) {
            Some(AutoplayCommand::Start { generation }) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(generation, total_slides = key.total_slides, "carousel autoplay restarted");
                effects.push(Effect::StartAutoplay { generation, interval_ms: self.config.autoplay_interval_ms });
            }
            Some(AutoplayCommand::Stop) => effects.push(Effect::StopAutoplay),
            None => {}
        }
    }
}
