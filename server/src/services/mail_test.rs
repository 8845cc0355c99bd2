use super::*;
use std::sync::Mutex;

fn notification() -> ContactNotification {
    ContactNotification {
        name: "Ayşe <Kaya>".into(),
        email: "ayse@example.com".into(),
        phone: None,
        message: "Randevu & bilgi \"lütfen\"".into(),
    }
}

// =========================================================================
// MockMailer
// =========================================================================

#[derive(Default)]
struct MockMailer {
    sent: Mutex<Vec<ContactNotification>>,
    fail: bool,
}

#[async_trait::async_trait]
impl Mailer for MockMailer {
    async fn send_contact_notification(&self, notification: &ContactNotification) -> Result<(), MailError> {
        if self.fail {
            return Err(MailError::Delivery("boom".into()));
        }
        self.sent.lock().unwrap().push(notification.clone());
        Ok(())
    }
}

// =========================================================================
// rendering
// =========================================================================

#[test]
fn escape_html_escapes_markup_characters() {
    assert_eq!(escape_html(r#"<a href="x">'&'</a>"#), "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;");
    assert_eq!(escape_html("düz metin"), "düz metin");
}

#[test]
fn template_fills_all_placeholders_escaped() {
    let html = render_contact_template(&notification());
    assert!(html.contains("Ayşe &lt;Kaya&gt;"));
    assert!(html.contains("ayse@example.com"));
    assert!(html.contains("Randevu &amp; bilgi &quot;lütfen&quot;"));
    assert!(!html.contains("{{"));
}

#[test]
fn missing_phone_renders_dash() {
    let html = render_contact_template(&notification());
    assert!(html.contains("<td>-</td>"));
    let with_phone = ContactNotification { phone: Some("0555 000 00 00".into()), ..notification() };
    assert!(render_contact_template(&with_phone).contains("0555 000 00 00"));
}

#[test]
fn placeholder_text_in_fields_is_not_expanded() {
    let tricky = ContactNotification {
        name: "{{MESSAGE}}".into(),
        message: "GIZLI-GOVDE".into(),
        ..notification()
    };
    let html = render_contact_template(&tricky);
    assert_eq!(html.matches("GIZLI-GOVDE").count(), 1);
    assert!(html.contains("<td>{{MESSAGE}}</td>"));
}

#[test]
fn subject_names_the_sender() {
    assert_eq!(contact_subject(&notification()), "Yeni iletişim mesajı: Ayşe <Kaya>");
}

// =========================================================================
// background delivery
// =========================================================================

#[tokio::test]
async fn no_mailer_means_no_task() {
    assert!(notify_in_background(None, notification()).is_none());
}

#[tokio::test]
async fn background_send_reaches_mailer() {
    let mock = Arc::new(MockMailer::default());
    let handle = notify_in_background(Some(mock.clone() as Arc<dyn Mailer>), notification()).unwrap();
    handle.await.unwrap();
    assert_eq!(mock.sent.lock().unwrap().as_slice(), &[notification()]);
}

#[tokio::test]
async fn background_failure_is_contained() {
    let mock = Arc::new(MockMailer { fail: true, ..MockMailer::default() });
    let handle = notify_in_background(Some(mock.clone() as Arc<dyn Mailer>), notification()).unwrap();
    handle.await.unwrap();
    assert!(mock.sent.lock().unwrap().is_empty());
}
