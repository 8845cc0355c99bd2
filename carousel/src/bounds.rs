//! Slide bounds derived from item count and cards per view.

#[cfg(test)]
#[path = "bounds_test.rs"]
mod bounds_test;

/// Valid scroll positions for `item_count` cards shown `items_per_view` at a time.
///
/// `total_slides = max(0, item_count - items_per_view + 1)` and
/// `max_index = max(0, total_slides - 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    pub item_count: usize,
    pub items_per_view: usize,
    pub total_slides: usize,
    pub max_index: usize,
}

impl Bounds {
    #[must_use]
    pub fn new(item_count: usize, items_per_view: usize) -> Self {
        let items_per_view = items_per_view.max(1);
        let total_slides = if item_count >= items_per_view { item_count - items_per_view + 1 } else { 0 };
        Self { item_count, items_per_view, total_slides, max_index: total_slides.saturating_sub(1) }
    }

    /// Clamp any signed index into `[0, max_index]`.
    #[must_use]
    pub fn clamp(&self, index: i64) -> usize {
        if index <= 0 {
            return 0;
        }
        usize::try_from(index).map_or(self.max_index, |i| i.min(self.max_index))
    }

    /// Step forward one slide, wrapping to 0 past `max_index`. Autoplay only.
    #[must_use]
    pub fn next_wrapping(&self, index: usize) -> usize {
        if index >= self.max_index { 0 } else { index + 1 }
    }

    /// Navigation controls, indicators, and autoplay only exist with more than one slide.
    #[must_use]
    pub fn has_controls(&self) -> bool {
        self.total_slides > 1
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }
}
