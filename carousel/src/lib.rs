//! Carousel interaction engine for the site's blog and testimonial sliders.
//!
//! This crate holds the browser-independent half of the draggable carousel:
//! index math, the drag gesture state machine, click-vs-drag disambiguation,
//! autoplay supervision, and the transform the track should render. It never
//! touches the DOM. The host (the Leptos `Carousel` component in `client`)
//! feeds raw pointer/touch/resize events in, executes the returned
//! [`engine::Effect`]s (listeners, timers), and renders [`render::TrackStyle`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level [`engine::Carousel`] state and its operations |
//! | [`bounds`] | Slide count, max index, and clamping |
//! | [`drag`] | Gesture state machine and release classification |
//! | [`autoplay`] | Autoplay supervisor with generation tokens |
//! | [`viewport`] | Breakpoint table mapping viewport width to cards per view |
//! | [`indicators`] | Bounded window of indicator dots |
//! | [`render`] | Track transform/transition and card sizing |
//! | [`config`] | Typed configuration with validation |
//! | [`sim`] | Virtual-time host that executes effects against a fake clock |
//! | [`consts`] | Shared thresholds and timings |

pub mod autoplay;
pub mod bounds;
pub mod config;
pub mod consts;
pub mod drag;
pub mod engine;
pub mod indicators;
pub mod render;
pub mod sim;
pub mod viewport;

pub use config::CarouselConfig;
pub use engine::{Carousel, Effect};
