//! Admin session lookup.
//!
//! ARCHITECTURE
//! ============
//! Sessions are issued out of band and stored as SHA-256 hashes in
//! `admin_sessions`. A request is authenticated if the cookie token hashes to
//! an unexpired row. Raw tokens are never stored or logged.

use std::fmt::Write;

use sha2::{Digest, Sha256};
use sqlx::PgPool;

const MAX_TOKEN_LEN: usize = 256;

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Hex SHA-256 of a session token, as stored in `admin_sessions.token_hash`.
#[must_use]
pub fn hash_token(token: &str) -> String {
    bytes_to_hex(&Sha256::digest(token.as_bytes()))
}

/// Cheap shape check so obviously bogus cookies never reach the database.
#[must_use]
pub fn looks_like_token(token: &str) -> bool {
    !token.is_empty() && token.len() <= MAX_TOKEN_LEN && token.bytes().all(|b| b.is_ascii_graphic())
}

/// Whether `token` belongs to an unexpired admin session.
///
/// # Errors
///
/// Returns an error if the query fails.
pub async fn is_authenticated(pool: &PgPool, token: &str) -> Result<bool, sqlx::Error> {
    if !looks_like_token(token) {
        return Ok(false);
    }
    let found: Option<i32> =
        sqlx::query_scalar("SELECT 1 FROM admin_sessions WHERE token_hash = $1 AND expires_at > now()")
            .bind(hash_token(token))
            .fetch_optional(pool)
            .await?;
    Ok(found.is_some())
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
