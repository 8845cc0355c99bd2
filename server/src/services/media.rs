//! Media host: upload and delete files on a Cloudinary-style service.
//!
//! DESIGN
//! ======
//! Handlers talk to the [`MediaHost`] trait; [`CloudinaryHost`] is the HTTP
//! adapter. Requests are signed with SHA-256 over the sorted parameter string
//! followed by the API secret. Deletion takes the delivery URL the site
//! stored, so the public id is parsed back out of it.
//!
//! TRADE-OFFS
//! ==========
//! Delivery URLs without a version segment are taken as-is after `upload/`,
//! so transformation segments are only recognized when a version follows
//! them. Every URL this adapter produces carries a version.

use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use time::OffsetDateTime;

use super::session::bytes_to_hex;
use crate::config::MediaConfig;

const API_BASE_URL: &str = "https://api.cloudinary.com/v1_1";
const DELIVERY_HOST: &str = "res.cloudinary.com";
const REQUEST_TIMEOUT_SECS: u64 = 60;
const CONNECT_TIMEOUT_SECS: u64 = 10;
const MAX_FOLDER_LEN: usize = 100;
const MAX_STEM_LEN: usize = 40;
pub const DEFAULT_FOLDER: &str = "uploads";

// =============================================================================
// TYPES
// =============================================================================

/// Resource class on the media host. Part of both API and delivery URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    Raw,
}

impl MediaKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Raw => "raw",
        }
    }

    /// Classify an upload by MIME type; anything not image or video is raw.
    #[must_use]
    pub fn from_content_type(content_type: Option<&str>) -> Self {
        match content_type.map(str::to_ascii_lowercase) {
            Some(ct) if ct.starts_with("image/") => Self::Image,
            Some(ct) if ct.starts_with("video/") => Self::Video,
            _ => Self::Raw,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    #[error("empty upload")]
    EmptyUpload,
    #[error("invalid folder: {0}")]
    InvalidFolder(String),
    #[error("not a media URL: {0}")]
    InvalidUrl(String),
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
    #[error("media request failed: {0}")]
    Request(String),
    #[error("media host error: status {status}")]
    Response { status: u16, body: String },
    #[error("media response parse failed: {0}")]
    Parse(String),
}

/// Storage for uploaded site media. Enables mocking in tests.
#[async_trait::async_trait]
pub trait MediaHost: Send + Sync {
    /// Store `bytes` under `folder` and return the public delivery URL.
    ///
    /// # Errors
    ///
    /// Returns a [`MediaError`] if the upload is empty or the host rejects it.
    async fn upload(&self, bytes: Vec<u8>, file_name: &str, folder: &str, kind: MediaKind) -> Result<String, MediaError>;

    /// Delete the file behind a delivery URL.
    ///
    /// # Errors
    ///
    /// Returns a [`MediaError`] if the URL is not a delivery URL of this host
    /// or the request fails.
    async fn delete(&self, url: &str, kind: MediaKind) -> Result<DeleteOutcome, MediaError>;
}

// =============================================================================
// HELPERS
// =============================================================================

/// Normalize an upload folder: trimmed, no leading or trailing slashes,
/// lowercase ASCII letters, digits, `-`, `_`, and `/` between segments.
///
/// # Errors
///
/// Returns [`MediaError::InvalidFolder`] for anything else.
pub fn validate_folder(raw: &str) -> Result<String, MediaError> {
    let folder = raw.trim().trim_matches('/');
    if folder.is_empty() {
        return Ok(DEFAULT_FOLDER.to_owned());
    }
    let valid_chars = folder
        .bytes()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || matches!(b, b'-' | b'_' | b'/'));
    let valid_segments = folder.split('/').all(|seg| !seg.is_empty() && seg != "..");
    if folder.len() > MAX_FOLDER_LEN || !valid_chars || !valid_segments {
        return Err(MediaError::InvalidFolder(raw.to_owned()));
    }
    Ok(folder.to_owned())
}

fn slug_stem(file_name: &str) -> String {
    let stem = file_name.rsplit_once('.').map_or(file_name, |(stem, _)| stem);
    let mut out = String::new();
    for c in stem.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_alphanumeric() {
            out.push(c);
        } else if !out.ends_with('-') && !out.is_empty() {
            out.push('-');
        }
        if out.len() >= MAX_STEM_LEN {
            break;
        }
    }
    let trimmed = out.trim_end_matches('-');
    if trimmed.is_empty() { "file".to_owned() } else { trimmed.to_owned() }
}

/// Public id for a new upload: a slug of the file name plus a random suffix.
#[must_use]
pub fn public_id_for(file_name: &str) -> String {
    let suffix: [u8; 4] = rand::rng().random();
    format!("{}-{}", slug_stem(file_name), bytes_to_hex(&suffix))
}

/// SHA-256 request signature over `params` sorted by key.
#[must_use]
pub fn sign_params(params: &[(&str, &str)], api_secret: &str) -> String {
    let mut sorted = params.to_vec();
    sorted.sort_unstable_by_key(|(k, _)| *k);
    let joined = sorted
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");
    bytes_to_hex(&Sha256::digest(format!("{joined}{api_secret}").as_bytes()))
}

fn is_version_segment(seg: &str) -> bool {
    seg.len() > 1 && seg.starts_with('v') && seg[1..].bytes().all(|b| b.is_ascii_digit())
}

/// Recover the public id from a delivery URL such as
/// `https://res.cloudinary.com/{cloud}/image/upload/v17/blog/cover-1a2b.jpg`.
///
/// # Errors
///
/// Returns [`MediaError::InvalidUrl`] if the URL belongs to another host,
/// cloud, or resource kind, or carries no public id.
pub fn public_id_from_url(url: &str, cloud_name: &str, kind: MediaKind) -> Result<String, MediaError> {
    let invalid = || MediaError::InvalidUrl(url.to_owned());
    let without_scheme = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .ok_or_else(invalid)?;
    let without_query = without_scheme.split(['?', '#']).next().unwrap_or_default();
    let mut segments = without_query.split('/');

    if segments.next() != Some(DELIVERY_HOST)
        || segments.next() != Some(cloud_name)
        || segments.next() != Some(kind.as_str())
        || segments.next() != Some("upload")
    {
        return Err(invalid());
    }

    let rest: Vec<&str> = segments.filter(|s| !s.is_empty()).collect();
    let id_segments = match rest.iter().position(|s| is_version_segment(s)) {
        Some(pos) => &rest[pos + 1..],
        None => &rest[..],
    };
    let Some((last, folders)) = id_segments.split_last() else {
        return Err(invalid());
    };

    let name = match kind {
        MediaKind::Raw => *last,
        MediaKind::Image | MediaKind::Video => last.rsplit_once('.').map_or(*last, |(stem, _)| stem),
    };
    if name.is_empty() {
        return Err(invalid());
    }

    let mut id = folders.join("/");
    if !id.is_empty() {
        id.push('/');
    }
    id.push_str(name);
    Ok(id)
}

/// Interpret the `result` field of a destroy response.
///
/// # Errors
///
/// Returns [`MediaError::Parse`] for any value other than `ok` or `not found`.
pub fn parse_destroy_result(result: &str) -> Result<DeleteOutcome, MediaError> {
    match result {
        "ok" => Ok(DeleteOutcome::Deleted),
        "not found" => Ok(DeleteOutcome::NotFound),
        other => Err(MediaError::Parse(format!("unexpected destroy result: {other}"))),
    }
}

// =============================================================================
// CLOUDINARY ADAPTER
// =============================================================================

#[derive(Deserialize)]
struct UploadResponse {
    secure_url: String,
}

#[derive(Deserialize)]
struct DestroyResponse {
    result: String,
}

pub struct CloudinaryHost {
    http: reqwest::Client,
    config: MediaConfig,
}

impl CloudinaryHost {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: MediaConfig) -> Result<Self, MediaError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| MediaError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, config })
    }

    fn endpoint(&self, kind: MediaKind, action: &str) -> String {
        format!("{API_BASE_URL}/{}/{}/{action}", self.config.cloud_name, kind.as_str())
    }

    async fn read_json<T: serde::de::DeserializeOwned>(resp: reqwest::Response) -> Result<T, MediaError> {
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(MediaError::Response { status: status.as_u16(), body });
        }
        resp.json::<T>().await.map_err(|e| MediaError::Parse(e.to_string()))
    }
}

fn unix_timestamp() -> String {
    OffsetDateTime::now_utc().unix_timestamp().to_string()
}

#[async_trait::async_trait]
impl MediaHost for CloudinaryHost {
    async fn upload(&self, bytes: Vec<u8>, file_name: &str, folder: &str, kind: MediaKind) -> Result<String, MediaError> {
        if bytes.is_empty() {
            return Err(MediaError::EmptyUpload);
        }
        let folder = validate_folder(folder)?;
        let public_id = public_id_for(file_name);
        let timestamp = unix_timestamp();
        let signature = sign_params(
            &[("folder", folder.as_str()), ("public_id", public_id.as_str()), ("timestamp", timestamp.as_str())],
            &self.config.api_secret,
        );

        let file = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_owned());
        let form = reqwest::multipart::Form::new()
            .part("file", file)
            .text("api_key", self.config.api_key.clone())
            .text("timestamp", timestamp)
            .text("folder", folder)
            .text("public_id", public_id)
            .text("signature", signature)
            .text("signature_algorithm", "sha256");

        let resp = self
            .http
            .post(self.endpoint(kind, "upload"))
            .multipart(form)
            .send()
            .await
            .map_err(|e| MediaError::Request(e.to_string()))?;
        let body: UploadResponse = Self::read_json(resp).await?;
        tracing::info!(url = %body.secure_url, kind = kind.as_str(), "media uploaded");
        Ok(body.secure_url)
    }

    async fn delete(&self, url: &str, kind: MediaKind) -> Result<DeleteOutcome, MediaError> {
        let public_id = public_id_from_url(url, &self.config.cloud_name, kind)?;
        let timestamp = unix_timestamp();
        let signature = sign_params(
            &[("invalidate", "true"), ("public_id", public_id.as_str()), ("timestamp", timestamp.as_str())],
            &self.config.api_secret,
        );
        let params = [
            ("api_key", self.config.api_key.as_str()),
            ("invalidate", "true"),
            ("public_id", public_id.as_str()),
            ("timestamp", timestamp.as_str()),
            ("signature", signature.as_str()),
            ("signature_algorithm", "sha256"),
        ];

        let resp = self
            .http
            .post(self.endpoint(kind, "destroy"))
            .form(&params)
            .send()
            .await
            .map_err(|e| MediaError::Request(e.to_string()))?;
        let body: DestroyResponse = Self::read_json(resp).await?;
        let outcome = parse_destroy_result(&body.result)?;
        tracing::info!(%public_id, ?outcome, "media delete");
        Ok(outcome)
    }
}

#[cfg(test)]
#[path = "media_test.rs"]
mod tests;
