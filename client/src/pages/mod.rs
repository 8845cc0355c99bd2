//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. List content is fetched once after hydration through the
//! loaders below and shared via `ContentState`.

pub mod blog;
pub mod blog_post;
pub mod home;
pub mod testimonials;

use leptos::prelude::*;

use crate::state::content::ContentState;

/// Fetch posts into `content` unless a load already ran.
pub(crate) fn load_posts(content: RwSignal<ContentState>) {
    if !content.try_update(ContentState::begin_posts).unwrap_or(false) {
        return;
    }
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_posts(None).await;
        if let Err(e) = &result {
            log::warn!("posts load failed: {e}");
        }
        content.try_update(|s| s.finish_posts(result));
    });
}

/// Fetch testimonials into `content` unless a load already ran.
pub(crate) fn load_testimonials(content: RwSignal<ContentState>) {
    if !content.try_update(ContentState::begin_testimonials).unwrap_or(false) {
        return;
    }
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_testimonials(None).await;
        if let Err(e) = &result {
            log::warn!("testimonials load failed: {e}");
        }
        content.try_update(|s| s.finish_testimonials(result));
    });
}

/// Dismissible banner for the latest content load failure.
#[component]
pub fn ContentNotice() -> impl IntoView {
    let content = expect_context::<RwSignal<ContentState>>();
    move || {
        content.with(|s| s.notice.clone()).map(|notice| {
            view! {
                <div class="notice notice--error" role="alert">
                    <span>{notice}</span>
                    <button class="notice__close" aria-label="Kapat" on:click=move |_| content.update(ContentState::dismiss_notice)>
                        "×"
                    </button>
                </div>
            }
        })
    }
}
