use super::*;

// =============================================================
// format_date_tr
// =============================================================

#[test]
fn formats_rfc3339_date() {
    assert_eq!(format_date_tr("2024-03-15T09:30:00Z"), "15 Mart 2024");
    assert_eq!(format_date_tr("2023-12-01T00:00:00+03:00"), "1 Aralık 2023");
}

#[test]
fn late_utc_evening_is_next_day_in_turkey() {
    assert_eq!(format_date_tr("2024-03-14T22:30:00Z"), "15 Mart 2024");
    assert_eq!(format_date_tr("2023-12-31T21:00:00Z"), "1 Ocak 2024");
    assert_eq!(format_date_tr("2024-03-14T20:59:59Z"), "14 Mart 2024");
}

#[test]
fn bare_date_is_used_as_is() {
    assert_eq!(format_date_tr("2024-03-15"), "15 Mart 2024");
}

#[test]
fn invalid_date_passes_through() {
    assert_eq!(format_date_tr("yakında"), "yakında");
    assert_eq!(format_date_tr("2024-13-01T00:00:00Z"), "2024-13-01T00:00:00Z");
}

// =============================================================
// excerpt
// =============================================================

#[test]
fn short_text_is_unchanged() {
    assert_eq!(excerpt("  Kısa metin ", 40), "Kısa metin");
}

#[test]
fn long_text_cuts_at_word_boundary() {
    assert_eq!(excerpt("Kaygı, günlük hayatın doğal bir parçasıdır", 20), "Kaygı, günlük…");
}

#[test]
fn single_long_word_is_cut_hard() {
    assert_eq!(excerpt("abcdefghij", 4), "abcd…");
}

// =============================================================
// initials / stars
// =============================================================

#[test]
fn initials_from_names() {
    assert_eq!(initials("ayşe kaya"), "AK");
    assert_eq!(initials("A. K."), "AK");
    assert_eq!(initials("Mehmet Ali Demir"), "MA");
    assert_eq!(initials(""), "");
}

#[test]
fn stars_clamps_rating() {
    assert_eq!(stars(4), "★★★★☆");
    assert_eq!(stars(0), "☆☆☆☆☆");
    assert_eq!(stars(9), "★★★★★");
}
