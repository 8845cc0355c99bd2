//! Reactive state shared through Leptos context.

pub mod content;
