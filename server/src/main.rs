#![recursion_limit = "256"]

mod config;
mod rate_limit;
mod routes;
mod services;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use services::mailer::{Mailer, ResendMailer};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid configuration");

    // Mail delivery is optional: without it the contact form answers
    // "not configured" (or logs submissions in development mode).
    let mailer: Option<Arc<dyn Mailer>> = match config.contact.mail.as_ref() {
        Some(mail) => {
            tracing::info!(from = %mail.from, recipients = mail.to.len(), "contact mailer initialized");
            let mailer: Arc<dyn Mailer> = Arc::new(ResendMailer::new(mail));
            Some(mailer)
        }
        None if config.contact.dev_mode => {
            tracing::warn!("contact mailer not configured; development mode logs enquiries instead");
            None
        }
        None => {
            tracing::warn!("contact mailer not configured; contact form will report it as unavailable");
            None
        }
    };

    let state = state::AppState::new(config.contact.clone(), mailer);
    let limits = state.rate_limiter.config();
    tracing::info!(
        per_client = limits.per_client_limit,
        global = limits.global_limit,
        window_secs = limits.window.as_secs(),
        "contact rate limits"
    );

    let app = routes::app(state, &config.assets_dir).expect("router init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, assets = %config.assets_dir.display(), "shelter listening");
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .await
        .expect("server failed");
}
