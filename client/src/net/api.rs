//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since content is fetched after
//! hydration, not during the server render.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs instead of panics so a failed
//! fetch becomes an inline notice on the page without breaking hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ContactRequest, Post, PostSummary, Testimonial};

const CONTACT_ENDPOINT: &str = "/api/contact";

#[cfg(any(test, feature = "hydrate"))]
fn posts_endpoint(limit: Option<u32>) -> String {
    match limit {
        Some(limit) => format!("/api/posts?limit={limit}"),
        None => "/api/posts".to_owned(),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn post_endpoint(slug: &str) -> String {
    format!("/api/posts/{slug}")
}

#[cfg(any(test, feature = "hydrate"))]
fn testimonials_endpoint(limit: Option<u32>) -> String {
    match limit {
        Some(limit) => format!("/api/testimonials?limit={limit}"),
        None => "/api/testimonials".to_owned(),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} request failed: {status}")
}

/// A slug is safe to splice into a path if it is non-empty kebab-case ASCII.
#[must_use]
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

/// Fetch published posts, newest first, from `/api/posts`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with a non-OK status.
pub async fn fetch_posts(limit: Option<u32>) -> Result<Vec<PostSummary>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&posts_endpoint(limit))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("posts", resp.status()));
        }
        resp.json::<Vec<PostSummary>>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = limit;
        Err("not available on server".to_owned())
    }
}

/// Fetch one published post by slug from `/api/posts/{slug}`.
/// Returns `Ok(None)` for unknown slugs.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with an unexpected status.
pub async fn fetch_post(slug: &str) -> Result<Option<Post>, String> {
    if !is_valid_slug(slug) {
        return Ok(None);
    }
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&post_endpoint(slug))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if resp.status() == 404 {
            return Ok(None);
        }
        if !resp.ok() {
            return Err(request_failed_message("post", resp.status()));
        }
        resp.json::<Post>().await.map(Some).map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch approved testimonials, newest first, from `/api/testimonials`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server responds with a non-OK status.
pub async fn fetch_testimonials(limit: Option<u32>) -> Result<Vec<Testimonial>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&testimonials_endpoint(limit))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("testimonials", resp.status()));
        }
        resp.json::<Vec<Testimonial>>()
            .await
            .map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = limit;
        Err("not available on server".to_owned())
    }
}

/// Submit the contact form via `POST /api/contact`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects the message.
pub async fn send_contact(request: &ContactRequest) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(CONTACT_ENDPOINT)
            .json(request)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("contact", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (request, CONTACT_ENDPOINT);
        Err("not available on server".to_owned())
    }
}
