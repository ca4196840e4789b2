//! Vetrina content kernel.
//!
//! HTTP server for page props, build-time theme generation, and studio
//! schema export.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use vetrina_kernel::client::ContentClient;
use vetrina_kernel::config::Config;
use vetrina_kernel::state::AppState;
use vetrina_kernel::{app, theme};

#[derive(Parser)]
#[command(name = "vetrina", about = "Vetrina content kernel")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the page props server.
    Serve,
    /// Fetch the theme document and write the generated theme artifacts.
    Theme,
    /// Export the studio schema definitions as JSON to stdout.
    Schema,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_tracing();

    let cli = Cli::parse();
    match cli.command {
        Command::Serve => serve().await,
        Command::Theme => generate_theme().await,
        Command::Schema => export_schema(),
    }
}

async fn serve() -> Result<()> {
    info!("Starting Vetrina content kernel");

    let config = Config::from_env().context("failed to load configuration")?;
    info!(port = config.port, "Configuration loaded");

    let port = config.port;
    let state = AppState::new(config).context("failed to initialize application state")?;
    let app = app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "Listening");

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

async fn generate_theme() -> Result<()> {
    let config = Config::from_env().context("failed to load configuration")?;
    let client = ContentClient::new(&config)
        .map_err(|e| anyhow::anyhow!("failed to create content client: {e}"))?;

    let theme = theme::generate(&client, &config)
        .await
        .map_err(|e| anyhow::anyhow!("theme generation failed: {e}"))?;

    info!(
        safelist = theme.safelist.len(),
        "theme generation complete"
    );
    Ok(())
}

fn export_schema() -> Result<()> {
    let registry = vetrina_schema::standard_registry();
    let json = registry.to_json().context("failed to serialize schemas")?;
    println!("{json}");
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("vetrina_kernel=info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
