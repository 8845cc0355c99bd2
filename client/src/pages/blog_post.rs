//! Single blog post rendered from Markdown.
//!
//! DESIGN
//! ======
//! The body is authored in Markdown and rendered with `pulldown-cmark`. Raw
//! HTML events are dropped before rendering so only Markdown-generated markup
//! reaches `inner_html`.
//!
//! A response is applied only if the route still shows the slug it was
//! requested for; navigating between posts quickly never shows a stale body.

#[cfg(test)]
#[path = "blog_post_test.rs"]
mod blog_post_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use pulldown_cmark::{Event, Options, Parser, html};

use crate::net::types::Post;
use crate::util::format::format_date_tr;

/// What the post page currently shows.
#[derive(Clone, Debug, PartialEq)]
pub enum PostView {
    Loading,
    Found(Post),
    Missing,
    Failed(String),
}

impl PostView {
    /// Map a fetch result to the view it produces.
    #[must_use]
    pub fn from_result(result: Result<Option<Post>, String>) -> Self {
        match result {
            Ok(Some(post)) => Self::Found(post),
            Ok(None) => Self::Missing,
            Err(e) => Self::Failed(e),
        }
    }
}

pub(crate) fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_FOOTNOTES);

    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

#[component]
pub fn BlogPostPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.read().get("slug").unwrap_or_default();
    let state = RwSignal::new(PostView::Loading);

    Effect::new(move || {
        let requested = slug();
        state.set(PostView::Loading);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_post(&requested).await;
            if let Err(e) = &result {
                log::warn!("post load failed: {e}");
            }
            if params.try_with_untracked(|p| p.get("slug").as_deref() == Some(requested.as_str())) == Some(true) {
                state.try_set(PostView::from_result(result));
            }
        });
        #[cfg(not(feature = "hydrate"))]
        drop(requested);
    });

    move || match state.get() {
        PostView::Loading => view! { <p class="post__loading">"Yazı yükleniyor..."</p> }.into_any(),
        PostView::Missing => view! {
            <section class="post post--missing">
                <h1>"Yazı bulunamadı"</h1>
                <a href="/blog">"Tüm yazılara dön"</a>
            </section>
        }
        .into_any(),
        PostView::Failed(_) => view! {
            <section class="post post--failed">
                <p class="notice notice--error">"Yazı yüklenemedi, lütfen daha sonra tekrar deneyin."</p>
                <a href="/blog">"Tüm yazılara dön"</a>
            </section>
        }
        .into_any(),
        PostView::Found(post) => {
            let body_html = render_markdown_html(&post.body);
            view! {
                <article class="post">
                    {post.cover_image_url.map(|src| view! { <img class="post__cover" src=src alt=""/> })}
                    <h1 class="post__title">{post.title}</h1>
                    <time class="post__date" datetime=post.published_at.clone()>
                        {format_date_tr(&post.published_at)}
                    </time>
                    <div class="post__body" inner_html=body_html></div>
                    <a class="post__back" href="/blog">"← Tüm yazılar"</a>
                </article>
            }
            .into_any()
        }
    }
}
