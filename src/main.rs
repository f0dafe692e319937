//! Activity Board server
//!
//! Run with: cargo run --bin activity-board
//!
//! # Configuration
//!
//! Read from `--config <path>` or the default locations (see
//! `activity_board::config`), then environment overrides, then the
//! `--host` / `--port` flags. `RUST_LOG` takes precedence over the
//! configured log level.

use activity_board::api::{serve, ApiConfig, AppState};
use activity_board::catalogue::{default_catalogue, load_seed_file, ActivityStore};
use activity_board::config::{
    generate_default_config, Config, ConfigLoad, LogFormat, LoggingConfig,
};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "activity-board")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Extracurricular activity signup server")]
struct Args {
    /// Config file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    port: Option<u16>,

    /// Print a default config file and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.print_config {
        print!("{}", generate_default_config());
        return Ok(());
    }

    let loaded = match &args.config {
        Some(path) => ConfigLoad {
            config: Config::load_with_env(path)?,
            source: Some(path.clone()),
            skipped: Vec::new(),
        },
        None => Config::load_default(),
    };
    let mut config = loaded.config.clone();
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    init_logging(&config.logging);

    tracing::info!("Starting Activity Board v{}", env!("CARGO_PKG_VERSION"));
    loaded.log();

    let catalogue = match &config.catalogue.seed_file {
        Some(path) => {
            tracing::info!("Loading catalogue from {:?}", path);
            load_seed_file(path)?
        }
        None => default_catalogue(),
    };
    let store = Arc::new(ActivityStore::new(catalogue));
    tracing::info!("Catalogue ready: {}", store.stats().await);

    let api_config = ApiConfig::from(&config.server);
    tracing::info!("Serving UI from {:?}", api_config.static_dir);
    if !api_config.static_dir.exists() {
        tracing::warn!(
            "Static directory {:?} does not exist; build the UI with `trunk build` in board-ui/",
            api_config.static_dir
        );
    }

    let state = AppState::new(store, api_config.clone());
    serve(state, &api_config).await?;

    tracing::info!("Activity Board stopped");
    Ok(())
}

/// Install the global tracing subscriber
fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "activity_board={level},tower_http={level}",
            level = logging.level
        ))
    });

    let registry = tracing_subscriber::registry().with(filter);

    match logging.format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}
