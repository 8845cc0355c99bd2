//! Home page blog slider.
//!
//! SYSTEM CONTEXT
//! ==============
//! Hosts `DraggableCarousel` over the published posts in `ContentState`.
//! Loading and failure are rendered here; the carousel only ever sees a list.

use leptos::prelude::*;

use crate::components::carousel::DraggableCarousel;
use crate::components::post_card::PostCard;
use crate::net::types::PostSummary;
use crate::state::content::ContentState;

#[component]
pub fn BlogSlider() -> impl IntoView {
    let content = expect_context::<RwSignal<ContentState>>();
    let posts = Signal::derive(move || content.with(|s| s.posts.clone()));

    view! {
        <section class="blog-slider">
            <header class="section-header">
                <h2>"Blogdan Yazılar"</h2>
                <a class="section-header__more" href="/blog">"Tüm yazılar"</a>
            </header>
            <Show
                when=move || !content.with(ContentState::posts_loading)
                fallback=|| view! { <p class="blog-slider__loading">"Yazılar yükleniyor..."</p> }
            >
                <Show
                    when=move || posts.with(|p| !p.is_empty())
                    fallback=|| view! { <p class="blog-slider__empty">"Henüz yayınlanmış yazı yok."</p> }
                >
                    <DraggableCarousel
                        items=posts
                        item_key=|post: &PostSummary| post.id.clone()
                        render=|post: PostSummary| view! { <PostCard post=post/> }
                        label="Blog yazıları"
                    />
                </Show>
            </Show>
        </section>
    }
}
