//! Content state for posts and testimonials.
//!
//! DESIGN
//! ======
//! Pages load content once after hydration and publish it here so the home
//! page sliders and the list pages share one copy. A failed load keeps any
//! previously loaded items and records a transient notice for the page.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use crate::net::types::{PostSummary, Testimonial};

/// Load progress of one content list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Shared content state provided by `App`.
#[derive(Clone, Debug, Default)]
pub struct ContentState {
    pub posts: Vec<PostSummary>,
    pub posts_status: LoadStatus,
    pub testimonials: Vec<Testimonial>,
    pub testimonials_status: LoadStatus,
    /// Inline notice for the most recent failure.
    pub notice: Option<String>,
}

impl ContentState {
    /// Mark posts as loading. Returns `false` if a load is already running
    /// or finished, so callers fetch at most once per page view.
    pub fn begin_posts(&mut self) -> bool {
        if matches!(self.posts_status, LoadStatus::Loading | LoadStatus::Loaded) {
            return false;
        }
        self.posts_status = LoadStatus::Loading;
        true
    }

    pub fn finish_posts(&mut self, result: Result<Vec<PostSummary>, String>) {
        match result {
            Ok(posts) => {
                self.posts = posts;
                self.posts_status = LoadStatus::Loaded;
            }
            Err(e) => {
                self.posts_status = LoadStatus::Failed;
                self.notice = Some(format!("Yazılar yüklenemedi: {e}"));
            }
        }
    }

    /// Same contract as [`ContentState::begin_posts`].
    pub fn begin_testimonials(&mut self) -> bool {
        if matches!(self.testimonials_status, LoadStatus::Loading | LoadStatus::Loaded) {
            return false;
        }
        self.testimonials_status = LoadStatus::Loading;
        true
    }

    pub fn finish_testimonials(&mut self, result: Result<Vec<Testimonial>, String>) {
        match result {
            Ok(items) => {
                self.testimonials = items;
                self.testimonials_status = LoadStatus::Loaded;
            }
            Err(e) => {
                self.testimonials_status = LoadStatus::Failed;
                self.notice = Some(format!("Yorumlar yüklenemedi: {e}"));
            }
        }
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    #[must_use]
    pub fn posts_loading(&self) -> bool {
        matches!(self.posts_status, LoadStatus::Idle | LoadStatus::Loading)
    }

    #[must_use]
    pub fn testimonials_loading(&self) -> bool {
        matches!(self.testimonials_status, LoadStatus::Idle | LoadStatus::Loading)
    }
}
