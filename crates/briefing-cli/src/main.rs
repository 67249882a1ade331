use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use briefing_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "briefing")]
#[command(author, version, about = "Weekly biotech news briefing from Endpoints News")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to config.toml (defaults to ~/.config/briefing/config.toml)
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Address to bind (overrides [server] host)
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on (overrides [server] port)
        #[arg(short = 'p', long)]
        port: Option<u16>,
    },
    /// Generate a briefing once and print it to stdout
    Generate,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before reading OPENAI_API_KEY
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(AppConfig::config_path);
    let mut config = AppConfig::load_from(&config_path)?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    if config_path.exists() {
        tracing::debug!("Loaded config from {}", config_path.display());
    } else {
        tracing::debug!("No config file at {}, using defaults", config_path.display());
    }

    match cli.command {
        Some(Commands::Serve { host, port }) => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            commands::serve::run(&config).await
        }
        None => commands::serve::run(&config).await,
        Some(Commands::Generate) => commands::generate::run(&config).await,
    }
}
