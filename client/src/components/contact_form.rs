//! Contact form posting to `/api/contact`.
//!
//! ERROR HANDLING
//! ==============
//! Field problems are caught locally by [`validate_contact`] before any
//! request is made. Network or server failures become an inline notice and
//! leave the typed message in place so the visitor can retry.

#[cfg(test)]
#[path = "contact_form_test.rs"]
mod contact_form_test;

use leptos::prelude::*;

use crate::net::types::ContactRequest;

const MAX_MESSAGE_CHARS: usize = 5000;

/// Submission progress shown under the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitStatus {
    Idle,
    Sending,
    Sent,
    Failed(String),
}

/// Trim fields and drop an empty phone number.
#[must_use]
pub fn normalize_contact(request: &ContactRequest) -> ContactRequest {
    ContactRequest {
        name: request.name.trim().to_owned(),
        email: request.email.trim().to_owned(),
        phone: request
            .phone
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(str::to_owned),
        message: request.message.trim().to_owned(),
    }
}

/// Check a normalized request. Returns the first problem as a visitor-facing message.
///
/// # Errors
///
/// Returns a Turkish message naming the invalid field.
pub fn validate_contact(request: &ContactRequest) -> Result<(), &'static str> {
    if request.name.is_empty() {
        return Err("Lütfen adınızı yazın.");
    }
    if !looks_like_email(&request.email) {
        return Err("Lütfen geçerli bir e-posta adresi yazın.");
    }
    if request.message.is_empty() {
        return Err("Lütfen mesajınızı yazın.");
    }
    if request.message.chars().count() > MAX_MESSAGE_CHARS {
        return Err("Mesajınız çok uzun.");
    }
    Ok(())
}

fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.') && !email.contains(' ')
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let status = RwSignal::new(SubmitStatus::Idle);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked() == SubmitStatus::Sending {
            return;
        }
        let request = normalize_contact(&ContactRequest {
            name: name.get_untracked(),
            email: email.get_untracked(),
            phone: Some(phone.get_untracked()),
            message: message.get_untracked(),
        });
        if let Err(problem) = validate_contact(&request) {
            status.set(SubmitStatus::Failed(problem.to_owned()));
            return;
        }
        status.set(SubmitStatus::Sending);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::send_contact(&request).await {
                Ok(()) => {
                    message.set(String::new());
                    status.set(SubmitStatus::Sent);
                }
                Err(e) => {
                    log::warn!("contact submit failed: {e}");
                    status.set(SubmitStatus::Failed("Mesajınız gönderilemedi, lütfen tekrar deneyin.".to_owned()));
                }
            }
        });
    };

    view! {
        <form class="contact-form" on:submit=on_submit novalidate>
            <label class="contact-form__field">
                <span>"Ad Soyad"</span>
                <input type="text" name="name" autocomplete="name" bind:value=name/>
            </label>
            <label class="contact-form__field">
                <span>"E-posta"</span>
                <input type="email" name="email" autocomplete="email" bind:value=email/>
            </label>
            <label class="contact-form__field">
                <span>"Telefon (isteğe bağlı)"</span>
                <input type="tel" name="phone" autocomplete="tel" bind:value=phone/>
            </label>
            <label class="contact-form__field">
                <span>"Mesajınız"</span>
                <textarea name="message" rows="5" bind:value=message></textarea>
            </label>
            <button class="btn contact-form__submit" type="submit" disabled=move || status.get() == SubmitStatus::Sending>
                {move || if status.get() == SubmitStatus::Sending { "Gönderiliyor..." } else { "Gönder" }}
            </button>
            {move || match status.get() {
                SubmitStatus::Sent => Some(view! { <p class="contact-form__notice contact-form__notice--ok">"Mesajınız alındı, teşekkürler."</p> }.into_any()),
                SubmitStatus::Failed(problem) => Some(view! { <p class="contact-form__notice contact-form__notice--error">{problem}</p> }.into_any()),
                SubmitStatus::Idle | SubmitStatus::Sending => None,
            }}
        </form>
    }
}
