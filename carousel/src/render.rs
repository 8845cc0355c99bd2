//! Track transform and card sizing.
//!
//! The track is a flex row of cards, each `100 / items_per_view` percent wide.
//! It is shifted left by `current_index` card widths, plus the live drag offset
//! in pixels while a drag is open. The snap transition is off during a drag
//! so the track follows the pointer exactly.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

/// Everything the host needs to style the track element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackStyle {
    /// Distance the track is shifted left, in percent of the viewport.
    pub offset_percent: f64,
    /// Live drag offset in CSS px (negative = dragged left).
    pub drag_px: f64,
    /// Whether the snap transition is enabled.
    pub animate: bool,
    pub transition_ms: u32,
}

impl TrackStyle {
    /// Value for the CSS `transform` property.
    #[must_use]
    pub fn css_transform(&self) -> String {
        let offset = format_number(-self.offset_percent);
        if self.drag_px == 0.0 {
            return format!("translateX({offset}%)");
        }
        let sign = if self.drag_px < 0.0 { '-' } else { '+' };
        let drag = format_number(self.drag_px.abs());
        format!("translateX(calc({offset}% {sign} {drag}px))")
    }

    /// Value for the CSS `transition` property.
    #[must_use]
    pub fn css_transition(&self) -> String {
        if self.animate {
            format!("transform {}ms ease-out", self.transition_ms)
        } else {
            "none".to_owned()
        }
    }
}

/// Width of one card as a percentage of the viewport.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn card_basis_percent(items_per_view: usize) -> f64 {
    100.0 / items_per_view.max(1) as f64
}

/// Value for a card's CSS `flex` property.
#[must_use]
pub fn card_flex(items_per_view: usize) -> String {
    format!("0 0 {}%", format_number(card_basis_percent(items_per_view)))
}

/// Format with at most four decimals and no trailing zeros.
fn format_number(value: f64) -> String {
    let fixed = format!("{value:.4}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "" | "-" | "-0" => "0".to_owned(),
        other => other.to_owned(),
    }
}
