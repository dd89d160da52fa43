//! Contact book server: reads settings from the environment (and `.env`), ensures the
//! `contacts` table exists, and serves the pages.
//!
//! Run from repo root: `cargo run -p contact_server`

use contact_book::{app, connect_options, ensure_schema, AppState, ContactService, Pages, ServerConfig};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("contact_book=info,contact_server=info")),
        )
        .init();

    let config = ServerConfig::from_env();
    let options = connect_options(&config.database_path);
    ensure_schema(&options).await?;
    tracing::info!(database = %config.database_path.display(), "schema ready");

    let state = AppState::new(ContactService::new(options), Pages::new()?);
    let router = app(state, config.body_limit);

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("contact book listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
