use super::*;
use crate::state::test_helpers;

// =============================================================================
// bytes_to_hex
// =============================================================================

#[test]
fn bytes_to_hex_empty() {
    assert_eq!(bytes_to_hex(&[]), "");
}

#[test]
fn bytes_to_hex_leading_zero() {
    assert_eq!(bytes_to_hex(&[0x0a]), "0a");
}

#[test]
fn bytes_to_hex_multi_byte() {
    assert_eq!(bytes_to_hex(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
}

// =============================================================================
// hash_token
// =============================================================================

#[test]
fn hash_token_matches_known_sha256() {
    assert_eq!(hash_token("abc"), "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad");
}

#[test]
fn hash_token_is_64_hex_chars() {
    let hash = hash_token("some-session-token");
    assert_eq!(hash.len(), 64);
    assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
}

// =============================================================================
// looks_like_token
// =============================================================================

#[test]
fn looks_like_token_rejects_empty_long_and_spaced() {
    assert!(!looks_like_token(""));
    assert!(!looks_like_token(&"a".repeat(MAX_TOKEN_LEN + 1)));
    assert!(!looks_like_token("has space"));
    assert!(!looks_like_token("tab\there"));
}

#[test]
fn looks_like_token_accepts_hex() {
    assert!(looks_like_token("0123456789abcdef0123456789abcdef"));
}

#[tokio::test]
async fn malformed_token_is_rejected_without_database() {
    let state = test_helpers::test_app_state();
    assert!(!is_authenticated(&state.pool, "").await.unwrap());
    assert!(!is_authenticated(&state.pool, "not a token").await.unwrap());
}
