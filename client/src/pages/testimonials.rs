//! All approved testimonials as a list.

use leptos::prelude::*;

use super::{ContentNotice, load_testimonials};
use crate::components::testimonial_card::TestimonialCard;
use crate::net::types::Testimonial;
use crate::state::content::ContentState;

#[component]
pub fn TestimonialsPage() -> impl IntoView {
    let content = expect_context::<RwSignal<ContentState>>();
    Effect::new(move || load_testimonials(content));

    let items = move || content.with(|s| s.testimonials.clone());

    view! {
        <section class="testimonials-page">
            <h1>"Danışan Yorumları"</h1>
            <ContentNotice/>
            <Show
                when=move || !content.with(ContentState::testimonials_loading)
                fallback=|| view! { <p class="testimonials-page__loading">"Yorumlar yükleniyor..."</p> }
            >
                <Show
                    when=move || content.with(|s| !s.testimonials.is_empty())
                    fallback=|| view! { <p class="testimonials-page__empty">"Henüz yorum yok."</p> }
                >
                    <div class="testimonials-page__list">
                        <For
                            each=items
                            key=|t: &Testimonial| t.id.clone()
                            children=|t: Testimonial| view! { <TestimonialCard testimonial=t/> }
                        />
                    </div>
                </Show>
            </Show>
        </section>
    }
}
