//! Contact notification mail.
//!
//! SYSTEM CONTEXT
//! ==============
//! `POST /api/contact` stores the message first, then hands a copy to
//! [`notify_in_background`]. Delivery runs on its own task; failures are
//! logged and never reach the visitor, whose message is already saved.

use std::sync::Arc;

use resend_rs::Resend;
use resend_rs::types::CreateEmailBaseOptions;
use tokio::task::JoinHandle;

use crate::config::MailConfig;

const CONTACT_TEMPLATE: &str = include_str!("../../templates/contact_message.html");

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("email delivery failed: {0}")]
    Delivery(String),
}

/// What the practice receives when a visitor writes in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactNotification {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

/// Outbound mail. Enables mocking in tests.
#[async_trait::async_trait]
pub trait Mailer: Send + Sync {
    /// # Errors
    ///
    /// Returns [`MailError::Delivery`] if the provider rejects the message.
    async fn send_contact_notification(&self, notification: &ContactNotification) -> Result<(), MailError>;
}

/// Escape text for interpolation into HTML element content.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

#[must_use]
pub fn render_contact_template(notification: &ContactNotification) -> String {
    let mut out = String::with_capacity(CONTACT_TEMPLATE.len() + notification.message.len());
    let mut rest = CONTACT_TEMPLATE;
    // Single pass: substituted values are never scanned for placeholders.
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            rest = &rest[start..];
            break;
        };
        match placeholder_value(notification, &after[..end]) {
            Some(value) => out.push_str(&escape_html(value)),
            None => out.push_str(&rest[start..start + end + 4]),
        }
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    out
}

fn placeholder_value<'a>(notification: &'a ContactNotification, key: &str) -> Option<&'a str> {
    match key {
        "NAME" => Some(&notification.name),
        "EMAIL" => Some(&notification.email),
        "PHONE" => Some(notification.phone.as_deref().unwrap_or("-")),
        "MESSAGE" => Some(&notification.message),
        _ => None,
    }
}

#[must_use]
pub fn contact_subject(notification: &ContactNotification) -> String {
    format!("Yeni iletişim mesajı: {}", notification.name)
}

pub struct ResendMailer {
    resend: Resend,
    from: String,
    to: String,
}

impl ResendMailer {
    #[must_use]
    pub fn new(config: &MailConfig) -> Self {
        Self { resend: Resend::new(&config.api_key), from: config.from.clone(), to: config.to.clone() }
    }
}

#[async_trait::async_trait]
impl Mailer for ResendMailer {
    async fn send_contact_notification(&self, notification: &ContactNotification) -> Result<(), MailError> {
        let to = [self.to.as_str()];
        let subject = contact_subject(notification);
        let html = render_contact_template(notification);

        let email = CreateEmailBaseOptions::new(&self.from, to, &subject).with_html(&html);
        self.resend
            .emails
            .send(email)
            .await
            .map_err(|e| MailError::Delivery(e.to_string()))?;
        Ok(())
    }
}

/// Send `notification` on a background task. Returns `None` when no mailer
/// is configured.
pub fn notify_in_background(
    mailer: Option<Arc<dyn Mailer>>,
    notification: ContactNotification,
) -> Option<JoinHandle<()>> {
    let Some(mailer) = mailer else {
        tracing::debug!("mailer not configured; skipping contact notification");
        return None;
    };
    Some(tokio::spawn(async move {
        match mailer.send_contact_notification(&notification).await {
            Ok(()) => tracing::info!("contact notification sent"),
            Err(e) => tracing::error!(error = %e, "contact notification failed"),
        }
    }))
}

#[cfg(test)]
#[path = "mail_test.rs"]
mod tests;
