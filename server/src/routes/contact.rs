//! Contact form submission.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use client::net::types::{ContactAccepted, ContactRequest};

use super::content::content_error_to_status;
use crate::services::content;
use crate::services::mail::{self, ContactNotification};
use crate::state::AppState;

impl From<&ContactRequest> for ContactNotification {
    fn from(request: &ContactRequest) -> Self {
        Self {
            name: request.name.clone(),
            email: request.email.clone(),
            phone: request.phone.clone(),
            message: request.message.clone(),
        }
    }
}

/// `POST /api/contact`: validate, store, then notify in the background.
///
/// Responds `201` once the message is stored; mail delivery does not affect
/// the response.
pub async fn submit(
    State(state): State<AppState>,
    Json(request): Json<ContactRequest>,
) -> Result<(StatusCode, Json<ContactAccepted>), StatusCode> {
    let prepared = content::prepare_contact(&request).map_err(content_error_to_status)?;
    let id = content::create_contact_message(&state.pool, &prepared)
        .await
        .map_err(content_error_to_status)?;
    tracing::info!(%id, "contact message stored");

    mail::notify_in_background(state.mailer.clone(), ContactNotification::from(&prepared));
    Ok((StatusCode::CREATED, Json(ContactAccepted { id: id.to_string() })))
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
