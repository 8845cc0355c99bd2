//! Content store: published posts, approved testimonials, contact messages.
//!
//! DESIGN
//! ======
//! Rows are mapped straight into the wire types the client decodes
//! (`client::net::types`), so the JSON contract has a single definition.
//! Identifiers become UUID strings and timestamps RFC 3339 strings.
//!
//! Only published posts (`published_at <= now()`) and approved testimonials
//! are ever returned. Drafts and pending testimonials are invisible here.

use client::components::contact_form::{normalize_contact, validate_contact};
use client::net::api::is_valid_slug;
use client::net::types::{ContactRequest, Post, PostSummary, Testimonial};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use uuid::Uuid;

use crate::config::MAX_CONTENT_PAGE_LIMIT;

const MAX_NAME_CHARS: usize = 200;
const MAX_PHONE_CHARS: usize = 40;

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("invalid slug: {0}")]
    InvalidSlug(String),
    #[error("invalid contact message: {0}")]
    InvalidContact(&'static str),
    #[error("timestamp format failed: {0}")]
    Timestamp(#[from] time::error::Format),
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
}

/// Page size for list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListFilter {
    pub limit: u32,
}

impl ListFilter {
    /// Use `requested` if given, else `default`; always within `1..=50`.
    #[must_use]
    pub fn resolve(requested: Option<u32>, default: u32) -> Self {
        Self { limit: requested.unwrap_or(default).clamp(1, MAX_CONTENT_PAGE_LIMIT) }
    }
}

fn format_timestamp(ts: OffsetDateTime) -> Result<String, ContentError> {
    Ok(ts.format(&Rfc3339)?)
}

fn summary_from_row(row: &PgRow) -> Result<PostSummary, ContentError> {
    Ok(PostSummary {
        id: row.get::<Uuid, _>("id").to_string(),
        slug: row.get("slug"),
        title: row.get("title"),
        excerpt: row.get("excerpt"),
        cover_image_url: row.get("cover_image_url"),
        published_at: format_timestamp(row.get("published_at"))?,
    })
}

pub(crate) fn rating_from_db(raw: Option<i16>) -> Option<u8> {
    raw.and_then(|r| u8::try_from(r).ok()).filter(|r| (1..=5).contains(r))
}

fn testimonial_from_row(row: &PgRow) -> Result<Testimonial, ContentError> {
    Ok(Testimonial {
        id: row.get::<Uuid, _>("id").to_string(),
        author_name: row.get("author_name"),
        author_title: row.get("author_title"),
        body: row.get("body"),
        rating: rating_from_db(row.get("rating")),
        created_at: format_timestamp(row.get("created_at"))?,
    })
}

/// Published posts, newest first.
///
/// # Errors
///
/// Returns an error if the query fails.
pub async fn list_posts(pool: &PgPool, filter: ListFilter) -> Result<Vec<PostSummary>, ContentError> {
    let rows = sqlx::query(
        r"SELECT id, slug, title, excerpt, cover_image_url, published_at
          FROM posts
          WHERE published_at IS NOT NULL AND published_at <= now()
          ORDER BY published_at DESC, id
          LIMIT $1",
    )
    .bind(i64::from(filter.limit))
    .fetch_all(pool)
    .await?;

    rows.iter().map(summary_from_row).collect()
}

/// One published post by slug. Unknown and unpublished slugs give `None`.
///
/// # Errors
///
/// Returns [`ContentError::InvalidSlug`] for malformed slugs, or a database error.
pub async fn get_post(pool: &PgPool, slug: &str) -> Result<Option<Post>, ContentError> {
    if !is_valid_slug(slug) {
        return Err(ContentError::InvalidSlug(slug.to_owned()));
    }
    let row = sqlx::query(
        r"SELECT id, slug, title, excerpt, body, cover_image_url, published_at
          FROM posts
          WHERE slug = $1 AND published_at IS NOT NULL AND published_at <= now()",
    )
    .bind(slug)
    .fetch_optional(pool)
    .await?;

    let Some(row) = row else {
        return Ok(None);
    };
    let summary = summary_from_row(&row)?;
    Ok(Some(Post {
        id: summary.id,
        slug: summary.slug,
        title: summary.title,
        excerpt: summary.excerpt,
        body: row.get("body"),
        cover_image_url: summary.cover_image_url,
        published_at: summary.published_at,
    }))
}

/// Approved testimonials, newest first.
///
/// # Errors
///
/// Returns an error if the query fails.
pub async fn list_testimonials(pool: &PgPool, filter: ListFilter) -> Result<Vec<Testimonial>, ContentError> {
    let rows = sqlx::query(
        r"SELECT id, author_name, author_title, body, rating, created_at
          FROM testimonials
          WHERE approved
          ORDER BY created_at DESC, id
          LIMIT $1",
    )
    .bind(i64::from(filter.limit))
    .fetch_all(pool)
    .await?;

    rows.iter().map(testimonial_from_row).collect()
}

/// Normalize and validate a contact request without touching the database.
///
/// # Errors
///
/// Returns [`ContentError::InvalidContact`] naming the first invalid field.
pub fn prepare_contact(request: &ContactRequest) -> Result<ContactRequest, ContentError> {
    let normalized = normalize_contact(request);
    validate_contact(&normalized).map_err(ContentError::InvalidContact)?;
    if normalized.name.chars().count() > MAX_NAME_CHARS {
        return Err(ContentError::InvalidContact("name too long"));
    }
    if normalized
        .phone
        .as_deref()
        .is_some_and(|p| p.chars().count() > MAX_PHONE_CHARS)
    {
        return Err(ContentError::InvalidContact("phone too long"));
    }
    Ok(normalized)
}

/// Store a contact message that already passed [`prepare_contact`].
///
/// # Errors
///
/// Returns an error if the insert fails.
pub async fn create_contact_message(pool: &PgPool, message: &ContactRequest) -> Result<Uuid, ContentError> {
    let row = sqlx::query(
        r"INSERT INTO contact_messages (name, email, phone, message)
          VALUES ($1, $2, $3, $4)
          RETURNING id",
    )
    .bind(&message.name)
    .bind(&message.email)
    .bind(message.phone.as_deref())
    .bind(&message.message)
    .fetch_one(pool)
    .await?;
    Ok(row.get("id"))
}

#[cfg(test)]
#[path = "content_test.rs"]
mod tests;
