//! Shared numeric constants for the carousel crate.

// ── Gesture ─────────────────────────────────────────────────────

/// Cumulative pointer travel (px) above which a gesture counts as a drag.
pub const MOVE_THRESHOLD_PX: f64 = 5.0;

/// Net release offset (px) beyond which a drag changes the slide.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

// ── Timing ──────────────────────────────────────────────────────

/// Autoplay period in milliseconds.
pub const AUTOPLAY_INTERVAL_MS: u32 = 5_000;

/// Delay after release before `has_moved` clears, so the trailing click still sees it.
pub const SETTLE_DELAY_MS: u32 = 100;

/// Snap animation duration in milliseconds. Cosmetic; never awaited by logic.
pub const TRANSITION_MS: u32 = 300;

// ── Layout ──────────────────────────────────────────────────────

/// Maximum number of indicator dots shown at once.
pub const INDICATOR_WINDOW: usize = 5;

/// Viewports narrower than this show one card.
pub const MOBILE_MAX_WIDTH: f64 = 768.0;

/// Viewports narrower than this (and at least [`MOBILE_MAX_WIDTH`]) show two cards.
pub const TABLET_MAX_WIDTH: f64 = 1024.0;

/// Cards per view on wide viewports.
pub const DESKTOP_ITEMS_PER_VIEW: usize = 3;

/// Width assumed before the host has measured the window (server render).
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 1280.0;
