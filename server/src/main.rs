#![recursion_limit = "256"]

mod config;
mod db;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use services::mail::{Mailer, ResendMailer};
use services::media::{CloudinaryHost, MediaHost};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::AppConfig::from_env().expect("invalid configuration");
    let port = config.port;

    let pool = db::init_pool(&config.database_url, config.db_max_connections)
        .await
        .expect("database init failed");

    // Media uploads are optional: admin media routes answer 503 without them.
    let media: Option<Arc<dyn MediaHost>> = match config.media.clone().map(CloudinaryHost::new) {
        Some(Ok(host)) => {
            tracing::info!("media host initialized");
            Some(Arc::new(host))
        }
        Some(Err(e)) => {
            tracing::warn!(error = %e, "media host init failed; uploads disabled");
            None
        }
        None => {
            tracing::warn!("media host not configured; uploads disabled");
            None
        }
    };

    let mailer: Option<Arc<dyn Mailer>> = if let Some(mail) = &config.mail {
        tracing::info!(to = %mail.to, "contact notifications enabled");
        Some(Arc::new(ResendMailer::new(mail)))
    } else {
        tracing::warn!("mail not configured; contact notifications disabled");
        None
    };

    let state = state::AppState::new(pool, config, media, mailer);

    let app = routes::leptos_app(state).expect("leptos app init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "praxis listening");
    axum::serve(listener, app).await.expect("server failed");
}
