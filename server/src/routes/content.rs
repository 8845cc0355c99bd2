//! Public content routes: posts and testimonials.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use client::net::types::{Post, PostSummary, Testimonial};
use serde::Deserialize;

use crate::services::content::{self, ContentError, ListFilter};
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub limit: Option<u32>,
}

pub(crate) fn content_error_to_status(err: ContentError) -> StatusCode {
    match err {
        ContentError::InvalidSlug(_) => StatusCode::NOT_FOUND,
        ContentError::InvalidContact(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ContentError::Timestamp(_) | ContentError::Db(_) => {
            tracing::error!(error = %err, "content store failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// `GET /api/posts?limit=N`: published posts, newest first.
pub async fn list_posts(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<PostSummary>>, StatusCode> {
    let filter = ListFilter::resolve(query.limit, state.config.content_page_limit);
    content::list_posts(&state.pool, filter)
        .await
        .map(Json)
        .map_err(content_error_to_status)
}

/// `GET /api/posts/{slug}`: one published post, 404 if unknown.
pub async fn get_post(State(state): State<AppState>, Path(slug): Path<String>) -> Result<Json<Post>, StatusCode> {
    content::get_post(&state.pool, &slug)
        .await
        .map_err(content_error_to_status)?
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

/// `GET /api/testimonials?limit=N`: approved testimonials, newest first.
pub async fn list_testimonials(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Testimonial>>, StatusCode> {
    let filter = ListFilter::resolve(query.limit, state.config.content_page_limit);
    content::list_testimonials(&state.pool, filter)
        .await
        .map(Json)
        .map_err(content_error_to_status)
}

#[cfg(test)]
#[path = "content_test.rs"]
mod tests;
