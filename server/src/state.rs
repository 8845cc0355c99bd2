//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the database pool, the parsed config, and the optional integrations.
//! Media and mail are trait objects so tests can swap in mocks.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::AppConfig;
use crate::services::mail::Mailer;
use crate::services::media::MediaHost;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<AppConfig>,
    /// `None` if the `MEDIA_*` env vars are not configured.
    pub media: Option<Arc<dyn MediaHost>>,
    /// `None` if the Resend env vars are not configured.
    pub mailer: Option<Arc<dyn Mailer>>,
}

impl AppState {
    #[must_use]
    pub fn new(
        pool: PgPool,
        config: AppConfig,
        media: Option<Arc<dyn MediaHost>>,
        mailer: Option<Arc<dyn Mailer>>,
    ) -> Self {
        Self { pool, config: Arc::new(config), media, mailer }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
#[path = "state_helpers_test.rs"]
pub mod test_helpers;

#[cfg(test)]
#[path = "state_test.rs"]
mod tests;
