use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use textline::config::AppConfig;
use textline::db;
use textline::handlers;
use textline::services::crm::http::HttpNoteProcessor;
use textline::services::messaging::twilio::TwilioSmsGateway;
use textline::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let conn = db::init_db(&config.database_url)?;

    if config.twilio_account_sid.is_empty() {
        tracing::warn!("TWILIO_ACCOUNT_SID not set, outbound sends will be rejected");
    }

    let timeout = Duration::from_secs(config.collaborator_timeout_secs);

    let gateway = TwilioSmsGateway::new(
        config.twilio_account_sid.clone(),
        config.twilio_auth_token.clone(),
        config.twilio_phone_number.clone(),
        timeout,
    )?;

    tracing::info!(url = %config.note_processor_url, "using HTTP note processor");
    let notes = HttpNoteProcessor::new(
        config.note_processor_url.clone(),
        config.note_processor_api_key.clone(),
        timeout,
    )?;

    let state = Arc::new(AppState {
        db: Arc::new(Mutex::new(conn)),
        config: config.clone(),
        gateway: Box::new(gateway),
        notes: Box::new(notes),
    });

    let app = Router::new()
        .route("/", get(handlers::sms::index))
        .route("/health", get(handlers::health::health))
        .route("/sms/send-sms", post(handlers::sms::send_sms))
        .route("/sms/note-created", post(handlers::sms::note_created))
        .route("/sms/campaign", post(handlers::sms::campaign_trigger))
        .route(
            "/api/admin/templates",
            get(handlers::admin::list_templates).post(handlers::admin::upsert_template),
        )
        .route(
            "/api/admin/templates/delete",
            post(handlers::admin::delete_template),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
