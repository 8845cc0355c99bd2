//! Admin-only media upload and delete proxy.
//!
//! ERROR HANDLING
//! ==============
//! Input problems map to `400`, a missing media configuration to `503`, and
//! failures of the remote host to `502`. Remote error bodies are logged, not
//! returned.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use super::auth::AdminSession;
use crate::services::media::{DEFAULT_FOLDER, DeleteOutcome, MediaError, MediaHost, MediaKind};
use crate::state::AppState;

/// Upper bound on an upload request body.
pub const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct UploadedMedia {
    pub url: String,
    pub kind: MediaKind,
}

#[derive(Debug, Deserialize)]
pub struct DeleteMediaRequest {
    pub url: String,
    #[serde(default)]
    pub kind: Option<MediaKind>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeletedMedia {
    pub result: String,
}

pub(crate) fn media_error_to_status(err: MediaError) -> StatusCode {
    match err {
        MediaError::EmptyUpload | MediaError::InvalidFolder(_) | MediaError::InvalidUrl(_) => StatusCode::BAD_REQUEST,
        MediaError::HttpClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
        MediaError::Request(_) | MediaError::Parse(_) => {
            tracing::error!(error = %err, "media host request failed");
            StatusCode::BAD_GATEWAY
        }
        MediaError::Response { status, ref body } => {
            tracing::error!(status, %body, "media host rejected request");
            StatusCode::BAD_GATEWAY
        }
    }
}

fn media_host(state: &AppState) -> Result<Arc<dyn MediaHost>, StatusCode> {
    state.media.clone().ok_or(StatusCode::SERVICE_UNAVAILABLE)
}

/// Guess the kind of a stored URL from its delivery path.
pub(crate) fn kind_from_url(url: &str) -> MediaKind {
    if url.contains("/video/upload/") {
        MediaKind::Video
    } else if url.contains("/raw/upload/") {
        MediaKind::Raw
    } else {
        MediaKind::Image
    }
}

/// Parts of a multipart upload the handler cares about.
#[derive(Debug, Default)]
pub(crate) struct UploadForm {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub content_type: Option<String>,
    pub folder: Option<String>,
}

async fn read_upload_form(mut multipart: Multipart) -> Result<UploadForm, StatusCode> {
    let mut form = UploadForm::default();
    while let Some(field) = multipart.next_field().await.map_err(|_| StatusCode::BAD_REQUEST)? {
        match field.name() {
            Some("file") => {
                form.file_name = field.file_name().unwrap_or("upload").to_owned();
                form.content_type = field.content_type().map(str::to_owned);
                form.bytes = field.bytes().await.map_err(|_| StatusCode::BAD_REQUEST)?.to_vec();
            }
            Some("folder") => {
                form.folder = Some(field.text().await.map_err(|_| StatusCode::BAD_REQUEST)?);
            }
            _ => {}
        }
    }
    Ok(form)
}

/// `POST /api/admin/media`: multipart `file` plus optional `folder`.
pub async fn upload(
    _admin: AdminSession,
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<UploadedMedia>), StatusCode> {
    let host = media_host(&state)?;
    let form = read_upload_form(multipart).await?;
    if form.bytes.is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }
    let kind = MediaKind::from_content_type(form.content_type.as_deref());
    let folder = form.folder.unwrap_or_else(|| DEFAULT_FOLDER.to_owned());

    let url = host
        .upload(form.bytes, &form.file_name, &folder, kind)
        .await
        .map_err(media_error_to_status)?;
    Ok((StatusCode::CREATED, Json(UploadedMedia { url, kind })))
}

/// `DELETE /api/admin/media`: JSON `{ url, kind? }`; 404 if already gone.
pub async fn delete(
    _admin: AdminSession,
    State(state): State<AppState>,
    Json(request): Json<DeleteMediaRequest>,
) -> Result<Json<DeletedMedia>, StatusCode> {
    let host = media_host(&state)?;
    let kind = request.kind.unwrap_or_else(|| kind_from_url(&request.url));
    match host.delete(&request.url, kind).await.map_err(media_error_to_status)? {
        DeleteOutcome::Deleted => Ok(Json(DeletedMedia { result: "deleted".to_owned() })),
        DeleteOutcome::NotFound => Err(StatusCode::NOT_FOUND),
    }
}

#[cfg(test)]
#[path = "media_test.rs"]
mod tests;
