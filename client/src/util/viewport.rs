//! Browser measurement helpers for the carousel host.
//!
//! Everything here reads live DOM values, so it only exists under the
//! `hydrate` feature. Non-finite or missing values are reported as `None`
//! and the engine keeps its previous width.

/// Current `window.innerWidth` in CSS pixels.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn window_width() -> Option<f64> {
    let width = web_sys::window()?.inner_width().ok()?.as_f64()?;
    width.is_finite().then_some(width)
}

/// Horizontal client coordinate of the first active touch point.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn first_touch_x(ev: &web_sys::TouchEvent) -> Option<f64> {
    ev.touches().get(0).map(|touch| f64::from(touch.client_x()))
}

/// Horizontal client coordinate of a mouse event.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn mouse_x(ev: &web_sys::MouseEvent) -> f64 {
    f64::from(ev.client_x())
}
