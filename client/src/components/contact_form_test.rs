use super::*;

fn request(name: &str, email: &str, message: &str) -> ContactRequest {
    ContactRequest { name: name.to_owned(), email: email.to_owned(), phone: None, message: message.to_owned() }
}

// =============================================================
// normalize_contact
// =============================================================

#[test]
fn normalize_trims_and_drops_blank_phone() {
    let raw = ContactRequest {
        name: "  Ayşe Kaya ".to_owned(),
        email: " ayse@example.com ".to_owned(),
        phone: Some("   ".to_owned()),
        message: "\nMerhaba\n".to_owned(),
    };
    let normalized = normalize_contact(&raw);
    assert_eq!(normalized.name, "Ayşe Kaya");
    assert_eq!(normalized.email, "ayse@example.com");
    assert!(normalized.phone.is_none());
    assert_eq!(normalized.message, "Merhaba");
}

#[test]
fn normalize_keeps_phone() {
    let raw = ContactRequest { phone: Some(" 0555 000 00 00 ".to_owned()), ..request("A", "a@b.co", "m") };
    assert_eq!(normalize_contact(&raw).phone.as_deref(), Some("0555 000 00 00"));
}

// =============================================================
// validate_contact
// =============================================================

#[test]
fn valid_request_passes() {
    assert_eq!(validate_contact(&request("Ayşe", "ayse@example.com", "Randevu almak istiyorum.")), Ok(()));
}

#[test]
fn missing_name_is_rejected() {
    assert_eq!(validate_contact(&request("", "a@b.co", "m")), Err("Lütfen adınızı yazın."));
}

#[test]
fn malformed_emails_are_rejected() {
    for email in ["", "ayse", "@example.com", "ayse@example", "ayse@.com", "ayse@example.", "a b@c.de"] {
        assert!(validate_contact(&request("A", email, "m")).is_err(), "{email}");
    }
}

#[test]
fn empty_and_oversized_messages_are_rejected() {
    assert_eq!(validate_contact(&request("A", "a@b.co", "")), Err("Lütfen mesajınızı yazın."));
    let long = "a".repeat(MAX_MESSAGE_CHARS + 1);
    assert_eq!(validate_contact(&request("A", "a@b.co", &long)), Err("Mesajınız çok uzun."));
}
