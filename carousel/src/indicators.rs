//! Indicator dots.
//!
//! With many slides only a bounded window of dots is rendered, centred on the
//! current slide where possible and clipped at both ends of `[0, total_slides)`.

#[cfg(test)]
#[path = "indicators_test.rs"]
mod indicators_test;

use std::ops::Range;

/// One rendered dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indicator {
    /// Slide this dot jumps to.
    pub index: usize,
    pub active: bool,
}

/// Slide indices whose dots are visible.
#[must_use]
pub fn indicator_window(current: usize, total_slides: usize, window: usize) -> Range<usize> {
    if total_slides == 0 || window == 0 {
        return 0..0;
    }
    let window = window.min(total_slides);
    let current = current.min(total_slides - 1);
    let start = current
        .saturating_sub(window / 2)
        .min(total_slides - window);
    start..start + window
}

/// Dots for the visible window, with the current slide marked active.
#[must_use]
pub fn indicators(current: usize, total_slides: usize, window: usize) -> Vec<Indicator> {
    indicator_window(current, total_slides, window)
        .map(|index| Indicator { index, active: index == current })
        .collect()
}
