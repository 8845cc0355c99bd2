//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `carousel` is the generic slider; `blog_slider` and `testimonials` host it
//! with their card renderers. Components read shared content from context
//! providers set up in `app`.

pub mod blog_slider;
pub mod carousel;
pub mod contact_form;
pub mod post_card;
pub mod testimonial_card;
pub mod testimonials;
