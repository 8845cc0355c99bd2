//! Home page: hero, blog slider, testimonials, contact form.

use leptos::prelude::*;

use super::{ContentNotice, load_posts, load_testimonials};
use crate::components::blog_slider::BlogSlider;
use crate::components::contact_form::ContactForm;
use crate::components::testimonials::TestimonialsCarousel;
use crate::state::content::ContentState;

#[component]
pub fn HomePage() -> impl IntoView {
    let content = expect_context::<RwSignal<ContentState>>();

    // Effects only run after hydration, so the server render shows the
    // loading fallbacks and the browser fetches.
    Effect::new(move || {
        load_posts(content);
        load_testimonials(content);
    });

    view! {
        <section class="hero">
            <h1 class="hero__title">"Kendinize iyi bakmanın en güvenli yolu"</h1>
            <p class="hero__lead">
                "Bireysel, çift ve aile terapisi için yüz yüze ve online görüşmeler."
            </p>
            <a class="btn hero__cta" href="#iletisim">"Randevu al"</a>
        </section>
        <ContentNotice/>
        <BlogSlider/>
        <TestimonialsCarousel/>
        <section class="contact" id="iletisim">
            <h2>"İletişim"</h2>
            <ContactForm/>
        </section>
    }
}
