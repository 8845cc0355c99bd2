//! Testimonial quote card.

use leptos::prelude::*;

use crate::components::carousel::use_drag_guard;
use crate::net::types::Testimonial;
use crate::util::format::{excerpt, initials, stars};

const COLLAPSED_CHARS: usize = 220;

/// Quote card with an expand toggle for long testimonials.
#[component]
pub fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    let guard = use_drag_guard();
    let expanded = RwSignal::new(false);
    let long = testimonial.body.chars().count() > COLLAPSED_CHARS;
    let full = testimonial.body.clone();
    let short = excerpt(&testimonial.body, COLLAPSED_CHARS);

    let on_toggle = move |ev: leptos::ev::MouseEvent| {
        if guard.is_some_and(|g| g.should_suppress()) {
            ev.prevent_default();
            ev.stop_propagation();
            return;
        }
        expanded.update(|e| *e = !*e);
    };

    view! {
        <figure class="testimonial-card">
            {testimonial.rating.map(|r| view! { <span class="testimonial-card__stars" aria-label=format!("{r}/5")>{stars(r)}</span> })}
            <blockquote class="testimonial-card__quote">
                {move || if expanded.get() || !long { full.clone() } else { short.clone() }}
            </blockquote>
            <Show when=move || long>
                <button class="testimonial-card__toggle" on:click=on_toggle>
                    {move || if expanded.get() { "Daha az göster" } else { "Devamını göster" }}
                </button>
            </Show>
            <figcaption class="testimonial-card__author">
                <span class="testimonial-card__avatar" aria-hidden="true">{initials(&testimonial.author_name)}</span>
                <span class="testimonial-card__name">{testimonial.author_name.clone()}</span>
                {testimonial.author_title.map(|t| view! { <span class="testimonial-card__title">{t}</span> })}
            </figcaption>
        </figure>
    }
}
