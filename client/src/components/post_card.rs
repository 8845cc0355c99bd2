//! Blog post summary card.

use leptos::prelude::*;

use crate::components::carousel::use_drag_guard;
use crate::net::types::PostSummary;
use crate::util::format::{excerpt, format_date_tr};

const EXCERPT_CHARS: usize = 140;

/// Card linking to `/blog/{slug}`. Inside a carousel, the click that ends a
/// drag is cancelled so swiping never opens a post.
#[component]
pub fn PostCard(post: PostSummary) -> impl IntoView {
    let guard = use_drag_guard();
    let href = format!("/blog/{}", post.slug);
    let on_click = move |ev: leptos::ev::MouseEvent| {
        if let Some(guard) = guard {
            guard.intercept(&ev);
        }
    };

    view! {
        <article class="post-card">
            <a class="post-card__link" href=href draggable="false" on:click=on_click>
                {post.cover_image_url.map(|src| {
                    view! { <img class="post-card__cover" src=src alt="" loading="lazy" draggable="false"/> }
                })}
                <div class="post-card__body">
                    <time class="post-card__date" datetime=post.published_at.clone()>
                        {format_date_tr(&post.published_at)}
                    </time>
                    <h3 class="post-card__title">{post.title}</h3>
                    <p class="post-card__excerpt">{excerpt(&post.excerpt, EXCERPT_CHARS)}</p>
                    <span class="post-card__more">"Devamını oku →"</span>
                </div>
            </a>
        </article>
    }
}
