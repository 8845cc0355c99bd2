//! JSON DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! Identifiers and timestamps travel as strings (UUID and RFC 3339) so the
//! WASM bundle does not need `uuid` or `time`. Optional fields default when
//! absent so older rows without a cover image or rating still decode.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Blog post as shown on cards and in the slider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    /// Post identifier (UUID string).
    pub id: String,
    /// URL slug, unique per post.
    pub slug: String,
    pub title: String,
    /// Short plain-text teaser.
    #[serde(default)]
    pub excerpt: String,
    #[serde(default)]
    pub cover_image_url: Option<String>,
    /// Publication time (RFC 3339).
    pub published_at: String,
}

/// Full blog post with its Markdown body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub excerpt: String,
    /// Markdown source.
    pub body: String,
    #[serde(default)]
    pub cover_image_url: Option<String>,
    pub published_at: String,
}

impl Post {
    /// Card view of this post.
    #[must_use]
    pub fn summary(&self) -> PostSummary {
        PostSummary {
            id: self.id.clone(),
            slug: self.slug.clone(),
            title: self.title.clone(),
            excerpt: self.excerpt.clone(),
            cover_image_url: self.cover_image_url.clone(),
            published_at: self.published_at.clone(),
        }
    }
}

/// Approved client testimonial.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    /// Display name, often initials only.
    pub author_name: String,
    /// Optional context line such as "Çift terapisi".
    #[serde(default)]
    pub author_title: Option<String>,
    pub body: String,
    /// Star rating 1–5, if the visitor gave one.
    #[serde(default)]
    pub rating: Option<u8>,
    pub created_at: String,
}

/// Body of `POST /api/contact`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub message: String,
}

/// Response of `POST /api/contact`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactAccepted {
    pub id: String,
}
