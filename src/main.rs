//! Shift board HTTP server.
//!
//! Loads the unit configuration, seeds the in-memory store and serves the
//! board API.

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use shift_board::api::{AppState, create_router};
use shift_board::config::ConfigLoader;
use shift_board::store::InMemoryStore;

#[derive(Parser, Debug)]
#[command(name = "shift-board")]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory holding board.yaml, roles.yaml and staff.yaml
    #[arg(short, long, default_value = "config/sample_unit")]
    config: String,

    /// Listen address; overrides the one in board.yaml
    #[arg(short, long)]
    bind: Option<String>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let loader = ConfigLoader::load(&args.config)?;
    let metadata = loader.metadata().clone();
    let bind = args.bind.unwrap_or_else(|| metadata.bind_address.clone());

    let store = InMemoryStore::seeded(loader.config());
    let app = create_router(AppState::new(store, metadata));

    let listener = tokio::net::TcpListener::bind(bind.as_str()).await?;
    info!(
        address = %bind,
        unit = %loader.metadata().unit_name,
        "Shift board listening"
    );
    axum::serve(listener, app).await?;

    Ok(())
}
