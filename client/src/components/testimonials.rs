//! Testimonials carousel.

use leptos::prelude::*;

use crate::components::carousel::DraggableCarousel;
use crate::components::testimonial_card::TestimonialCard;
use crate::net::types::Testimonial;
use crate::state::content::ContentState;

/// Approved testimonials in a carousel. Renders nothing while loading or
/// when there are none, so the home page simply omits the section.
#[component]
pub fn TestimonialsCarousel() -> impl IntoView {
    let content = expect_context::<RwSignal<ContentState>>();
    let items = Signal::derive(move || content.with(|s| s.testimonials.clone()));

    view! {
        <Show when=move || items.with(|t| !t.is_empty())>
            <section class="testimonials">
                <header class="section-header">
                    <h2>"Danışan Yorumları"</h2>
                    <a class="section-header__more" href="/yorumlar">"Tüm yorumlar"</a>
                </header>
                <DraggableCarousel
                    items=items
                    item_key=|t: &Testimonial| t.id.clone()
                    render=|t: Testimonial| view! { <TestimonialCard testimonial=t/> }
                    label="Danışan yorumları"
                />
            </section>
        </Show>
    }
}
