//! Drag gesture state machine.
//!
//! A gesture opens on pointer-down/touch-start, tracks the live horizontal
//! offset while the pointer moves, and is classified on release. A release
//! that followed real movement does not return straight to `Idle`: it parks
//! in `Settling` until the host's settle timer fires, because the browser
//! dispatches the trailing `click` after `pointerup` and that click must still
//! be recognised as part of the drag.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

/// Live state of an open drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    /// Pointer x (CSS px) at drag start.
    pub start_x: f64,
    /// Slide index when the drag started.
    pub start_index: usize,
    /// Current pointer x minus `start_x`. Negative means dragged left.
    pub translate_x: f64,
    /// Set once `|translate_x|` exceeds the move threshold; never cleared while open.
    pub has_moved: bool,
}

impl DragState {
    #[must_use]
    pub fn new(start_x: f64, start_index: usize) -> Self {
        Self { start_x, start_index, translate_x: 0.0, has_moved: false }
    }

    /// Apply a pointer-move at `pointer_x`.
    pub fn update(&mut self, pointer_x: f64, move_threshold_px: f64) {
        if !pointer_x.is_finite() {
            return;
        }
        let walk = pointer_x - self.start_x;
        if walk.abs() > move_threshold_px {
            self.has_moved = true;
        }
        self.translate_x = walk;
    }
}

/// Gesture phase tracked between pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    /// No gesture; clicks pass through.
    #[default]
    Idle,
    /// Pointer is down and being tracked.
    Dragging(DragState),
    /// Released after moving; clicks are swallowed until `settle(token)`.
    Settling {
        /// Matches the `ScheduleSettle` effect that will end this phase.
        token: u64,
    },
}

impl Gesture {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    /// Whether a click on card content right now belongs to a drag.
    #[must_use]
    pub fn has_moved(&self) -> bool {
        match self {
            Self::Idle => false,
            Self::Dragging(state) => state.has_moved,
            Self::Settling { .. } => true,
        }
    }

    /// Live pixel offset; zero unless dragging.
    #[must_use]
    pub fn translate_x(&self) -> f64 {
        match self {
            Self::Dragging(state) => state.translate_x,
            Self::Idle | Self::Settling { .. } => 0.0,
        }
    }
}

/// What a release does to the slide index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragRelease {
    /// Dragged left past the threshold: go to the next slide.
    Advance,
    /// Dragged right past the threshold: go to the previous slide.
    Retreat,
    /// Within the threshold: snap back.
    Stay,
}

impl DragRelease {
    /// Classify a final offset. Exactly `±threshold` stays.
    #[must_use]
    pub fn classify(translate_x: f64, swipe_threshold_px: f64) -> Self {
        if translate_x < -swipe_threshold_px {
            Self::Advance
        } else if translate_x > swipe_threshold_px {
            Self::Retreat
        } else {
            Self::Stay
        }
    }
}
