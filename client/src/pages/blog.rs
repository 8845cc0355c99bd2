//! Blog index: every published post as a card grid.

use leptos::prelude::*;

use super::{ContentNotice, load_posts};
use crate::components::post_card::PostCard;
use crate::net::types::PostSummary;
use crate::state::content::ContentState;

#[component]
pub fn BlogPage() -> impl IntoView {
    let content = expect_context::<RwSignal<ContentState>>();
    Effect::new(move || load_posts(content));

    let posts = move || content.with(|s| s.posts.clone());

    view! {
        <section class="blog-index">
            <h1>"Blog"</h1>
            <ContentNotice/>
            <Show
                when=move || !content.with(ContentState::posts_loading)
                fallback=|| view! { <p class="blog-index__loading">"Yazılar yükleniyor..."</p> }
            >
                <Show
                    when=move || content.with(|s| !s.posts.is_empty())
                    fallback=|| view! { <p class="blog-index__empty">"Henüz yayınlanmış yazı yok."</p> }
                >
                    <div class="blog-index__grid">
                        <For
                            each=posts
                            key=|post: &PostSummary| post.id.clone()
                            children=|post: PostSummary| view! { <PostCard post=post/> }
                        />
                    </div>
                </Show>
            </Show>
        </section>
    }
}
