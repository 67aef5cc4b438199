use clap::Parser;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

use na_inference::create_model;
use na_news::NewsApiSource;
use na_storage::create_storage;
use na_web::{create_app, AppState};

mod config;

use config::Config;

/// Grace period between binding the listener and accepting traffic, to let
/// the listener stabilize.
const STARTUP_GRACE: Duration = Duration::from_secs(2);

#[derive(Parser, Debug)]
#[command(name = "na_server", about = "News analysis agent HTTP service")]
struct Cli {
    /// Address to listen on
    #[arg(long, default_value = "0.0.0.0:8000")]
    bind: SocketAddr,

    /// Model to use for preference scoring. Available models: gemini (default), dummy
    #[arg(long, default_value = "gemini")]
    model: String,

    /// Storage URL, overriding DATABASE_URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> na_core::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    let database_url = cli
        .database_url
        .unwrap_or_else(|| config.database_url.clone());
    let storage = create_storage(&database_url).await?;
    info!("✅ Connected to database ({})", database_url);

    let news = std::sync::Arc::new(NewsApiSource::with_base_url(
        config.news_api_key.clone(),
        config.news_api_url.clone(),
    ));

    let model = create_model(
        &cli.model,
        &na_inference::Config {
            api_key: config.gemini_api_key.clone(),
            api_url: config.gemini_api_url.clone(),
            model_name: None,
        },
    )?;
    info!("🤖 Using {} model for preference scoring", model.name());

    let app = create_app(AppState {
        news,
        model,
        storage: storage.clone(),
        user_preference: config.user_preference,
    });

    let listener = tokio::net::TcpListener::bind(cli.bind).await?;
    info!("🚀 News Analysis Agent listening on {}", cli.bind);

    tokio::time::sleep(STARTUP_GRACE).await;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    storage.close().await?;
    info!("🛑 News Analysis Agent stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
