//! Typed carousel configuration.
//!
//! Hosts normally use [`CarouselConfig::default`]. A page that wants a
//! different breakpoint table or slower autoplay builds its own value and
//! checks it with [`CarouselConfig::validate`] before constructing the engine.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    AUTOPLAY_INTERVAL_MS, INDICATOR_WINDOW, MOVE_THRESHOLD_PX, SETTLE_DELAY_MS, SWIPE_THRESHOLD_PX, TRANSITION_MS,
};
use crate::viewport::Breakpoints;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("breakpoint {index} has a non-finite or non-positive width")]
    InvalidWidth { index: usize },
    #[error("breakpoint {index} is not wider than the previous one")]
    UnorderedBreakpoints { index: usize },
    #[error("breakpoint {index} shows zero cards")]
    ZeroItemsPerView { index: usize },
    #[error("fallback items per view must be at least 1")]
    ZeroFallback,
    #[error("{name} must be finite and positive")]
    NonPositive { name: &'static str },
    #[error("swipe threshold ({swipe}px) must not be below the move threshold ({movement}px)")]
    ThresholdOrder { swipe: f64, movement: f64 },
}

/// All tunables of a carousel instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    pub breakpoints: Breakpoints,
    pub move_threshold_px: f64,
    pub swipe_threshold_px: f64,
    pub autoplay: bool,
    pub autoplay_interval_ms: u32,
    pub settle_delay_ms: u32,
    pub transition_ms: u32,
    pub indicator_window: usize,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            breakpoints: Breakpoints::default(),
            move_threshold_px: MOVE_THRESHOLD_PX,
            swipe_threshold_px: SWIPE_THRESHOLD_PX,
            autoplay: true,
            autoplay_interval_ms: AUTOPLAY_INTERVAL_MS,
            settle_delay_ms: SETTLE_DELAY_MS,
            transition_ms: TRANSITION_MS,
            indicator_window: INDICATOR_WINDOW,
        }
    }
}

impl CarouselConfig {
    /// Same defaults with autoplay switched off.
    #[must_use]
    pub fn without_autoplay() -> Self {
        Self { autoplay: false, ..Self::default() }
    }

    /// Validate the breakpoint table, thresholds, and timings.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.breakpoints.validate()?;
        if !self.move_threshold_px.is_finite() || self.move_threshold_px <= 0.0 {
            return Err(ConfigError::NonPositive { name: "move_threshold_px" });
        }
        if !self.swipe_threshold_px.is_finite() || self.swipe_threshold_px <= 0.0 {
            return Err(ConfigError::NonPositive { name: "swipe_threshold_px" });
        }
        if self.swipe_threshold_px < self.move_threshold_px {
            return Err(ConfigError::ThresholdOrder {
                swipe: self.swipe_threshold_px,
                movement: self.move_threshold_px,
            });
        }
        if self.autoplay_interval_ms == 0 {
            return Err(ConfigError::NonPositive { name: "autoplay_interval_ms" });
        }
        if self.indicator_window == 0 {
            return Err(ConfigError::NonPositive { name: "indicator_window" });
        }
        Ok(())
    }
}
