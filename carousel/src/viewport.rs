//! Responsive breakpoint table: viewport width → cards per view.
//!
//! The table is an ordered list of `(max_width, items_per_view)` steps. The
//! first step whose `max_width` is strictly greater than the measured width
//! wins; widths past the last step use the fallback.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::consts::{DESKTOP_ITEMS_PER_VIEW, MOBILE_MAX_WIDTH, TABLET_MAX_WIDTH};

/// One row of the breakpoint table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breakpoint {
    /// Exclusive upper bound on viewport width (CSS px) for this step.
    pub max_width: f64,
    /// Cards visible at once below `max_width`.
    pub items_per_view: usize,
}

/// Ordered breakpoint table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breakpoints {
    pub steps: Vec<Breakpoint>,
    /// Cards per view when the width is past every step.
    pub fallback: usize,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            steps: vec![
                Breakpoint { max_width: MOBILE_MAX_WIDTH, items_per_view: 1 },
                Breakpoint { max_width: TABLET_MAX_WIDTH, items_per_view: 2 },
            ],
            fallback: DESKTOP_ITEMS_PER_VIEW,
        }
    }
}

impl Breakpoints {
    /// Cards per view for a viewport `width` in CSS pixels. Never returns 0.
    ///
    /// Non-finite widths (an unmeasured window) resolve to the fallback.
    #[must_use]
    pub fn items_per_view(&self, width: f64) -> usize {
        if !width.is_finite() {
            return self.fallback.max(1);
        }
        self.steps
            .iter()
            .find(|step| width < step.max_width)
            .map_or(self.fallback, |step| step.items_per_view)
            .max(1)
    }

    /// Check that widths are finite, positive, strictly ascending, and that
    /// every step shows at least one card.
    ///
    /// # Errors
    ///
    /// Returns the first violation found, in table order.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut previous: Option<f64> = None;
        for (index, step) in self.steps.iter().enumerate() {
            if !step.max_width.is_finite() || step.max_width <= 0.0 {
                return Err(ConfigError::InvalidWidth { index });
            }
            if previous.is_some_and(|prev| step.max_width <= prev) {
                return Err(ConfigError::UnorderedBreakpoints { index });
            }
            if step.items_per_view == 0 {
                return Err(ConfigError::ZeroItemsPerView { index });
            }
            previous = Some(step.max_width);
        }
        if self.fallback == 0 {
            return Err(ConfigError::ZeroFallback);
        }
        Ok(())
    }
}
