use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use fortune_writers_backend::{
    config::{get_config, init_config},
    database::pool::create_pool,
    mail::smtp::SmtpMailer,
    routes,
    storage::postgres::PgLeadStore,
    AppState,
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let pool = create_pool().await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let mailer = Arc::new(SmtpMailer::new(config)?);
    let leads = Arc::new(PgLeadStore::new(pool));
    let app_state = AppState::new(mailer, leads, &config.email_user);

    info!("Serving static site from: {}", config.static_dir);

    let app = Router::new()
        .route("/send-email", post(routes::contact::send_email))
        .route("/submit-details", post(routes::leads::submit_details))
        .route("/health", get(routes::health::health))
        .fallback_service(ServeDir::new(&config.static_dir))
        .with_state(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
