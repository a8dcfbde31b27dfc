//! # PFE Advisor Server Driver
//!
//! ## Purpose
//! Main entry point for the advisor server. Loads configuration, the record
//! snapshot and the completion client, then starts the web server.
//!
//! ## Architecture Flow
//! 1. Parse command line arguments and load configuration
//! 2. Initialize logging and tracing
//! 3. Load the record store snapshot
//! 4. Build the completion client
//! 5. Start the web API server
//! 6. Handle shutdown signals gracefully

use clap::{Arg, Command};
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use pfe_advisor::{
    api::ApiServer,
    completion::CompletionClient,
    config::Config,
    dataset::ProjectStore,
    errors::{AdvisorError, Result},
    AppState,
};

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Command::new("pfe-advisor-server")
        .version(env!("CARGO_PKG_VERSION"))
        .author("PFE Advisor Team")
        .about("Bilingual question-answering and recommendation server for PFE project records")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file path")
                .default_value("config.toml"),
        )
        .arg(
            Arg::new("port")
                .short('p')
                .long("port")
                .value_name("PORT")
                .help("Server port")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new("check-health")
                .long("check-health")
                .help("Validate configuration and dataset, then exit")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    // Load configuration
    let config_path = matches.get_one::<String>("config").expect("has default");
    let mut config = Config::from_file(config_path)?;

    // Override port if specified
    if let Some(port) = matches.get_one::<u16>("port") {
        config.server.port = *port;
    }

    let config = Arc::new(config);

    init_logging(&config)?;

    info!("Starting PFE Advisor v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration loaded from: {}", config_path);

    if matches.get_flag("check-health") {
        return run_health_checks(&config);
    }

    let app_state = initialize_components(config.clone())?;

    let server = ApiServer::new(app_state);

    info!(
        "PFE Advisor started on {}:{}",
        config.server.host, config.server.port
    );

    // The server future holds actix internals that are not Send, so it is
    // polled in the current task rather than spawned.
    tokio::select! {
        _ = signal::ctrl_c() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        result = server.run() => {
            if let Err(e) = result {
                error!("Server error: {}", e);
            }
            warn!("Server stopped unexpectedly");
        }
    }

    info!("PFE Advisor shut down successfully");
    Ok(())
}

/// Initialize logging and tracing
fn init_logging(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .map_err(|_| AdvisorError::Config {
            message: format!("Invalid log level: {}", config.logging.level),
        })?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);
    if config.logging.json {
        builder.json().init();
    } else {
        builder.init();
    }

    info!("Logging initialized with level: {}", config.logging.level);
    Ok(())
}

/// Initialize all application components
fn initialize_components(config: Arc<Config>) -> Result<AppState> {
    info!("Initializing application components...");

    info!("Loading record store from {:?}", config.dataset.path);
    let store = Arc::new(ProjectStore::from_file(&config.dataset.path)?);
    info!("✓ Record store loaded ({} records)", store.len());

    let completion = Arc::new(CompletionClient::new(config.completion.clone())?);
    if completion.is_configured() {
        info!("✓ Completion client configured for model {}", config.completion.model);
    } else {
        warn!("Completion API key not set; /chat will refuse requests");
    }

    Ok(AppState {
        config,
        store,
        completion,
    })
}

/// Validate configuration and dataset, then exit
fn run_health_checks(config: &Config) -> Result<()> {
    info!("Running health checks...");
    info!("✓ Configuration is valid");

    let store = ProjectStore::from_file(&config.dataset.path)?;
    info!("✓ Record store loads ({} records)", store.len());

    info!("All health checks passed!");
    Ok(())
}
