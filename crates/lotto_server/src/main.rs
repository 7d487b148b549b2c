//! Lotto Server
//!
//! REST API server for the unique-draw generator.

use clap::Parser;
use lotto_server::config::{build_config, CliArgs as ConfigCliArgs};
use lotto_server::server::Server;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Lotto Server - REST API for unique Powerball draw generation
#[derive(Parser, Debug)]
#[command(name = "lotto_server")]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path (TOML format)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Host address to bind to
    #[arg(long, env = "LOTTO_SERVER_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "LOTTO_SERVER_PORT")]
    port: Option<u16>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOTTO_LOG_LEVEL")]
    log_level: Option<String>,

    /// Path of the CSV history data file
    #[arg(short, long, env = "LOTTO_DATA_FILE")]
    data_file: Option<PathBuf>,
}

impl From<Args> for ConfigCliArgs {
    fn from(args: Args) -> Self {
        ConfigCliArgs {
            config_file: args.config,
            host: args.host,
            port: args.port,
            log_level: args.log_level,
            data_file: args.data_file,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let cli_args: ConfigCliArgs = args.into();
    let config = build_config(&cli_args)?;

    // Initialize tracing
    init_tracing(config.log_level.as_filter_str());

    tracing::info!("Lotto Server v{}", lotto_server::VERSION);
    tracing::info!(
        host = %config.host,
        port = %config.port,
        log_level = %config.log_level,
        environment = %config.environment,
        data_file = %config.data_file.display(),
        max_draws_per_request = %config.max_draws_per_request,
        "Server configuration loaded"
    );

    // Create and start the server
    let server = Server::new(config);
    tracing::info!(address = %server.socket_addr(), "Starting server");

    server.run().await?;

    Ok(())
}
