//! # Chroma Server
//!
//! Small color service.
//!
//! ## Overview
//!
//! - **Random colors**: uniformly random `#RRGGBB` with RGB and HSL forms
//! - **Color schemes**: six-step hue rotation around a base color
//! - **Saved colors**: a named, in-memory color list
//! - **Browser client**: static files served from the configured directory

use std::path::PathBuf;

use anyhow::Context;
use chroma_server::{
    AppState, create_app,
    infra::{
        config::{Config, ConfigLoad, ConfigLoader},
        telemetry::init_tracing,
    },
};
use clap::{Args as ClapArgs, Parser, Subcommand};
use tracing::{info, warn};

/// CLI entry point
#[derive(Parser, Debug)]
#[command(name = "chroma-server")]
#[command(about = "HTTP service for random colors, color schemes and saved colors")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    serve: ServeArgs,
}

#[derive(ClapArgs, Debug, Clone)]
struct ServeArgs {
    /// Path to a chroma.toml configuration file
    #[arg(long, env = "CHROMA_CONFIG")]
    config: Option<PathBuf>,

    /// Path to a .env file (defaults to ./.env when present)
    #[arg(long)]
    env_file: Option<PathBuf>,

    /// Server port (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Server host (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Directory with the browser client's static files (overrides config)
    #[arg(long)]
    static_dir: Option<PathBuf>,

    /// Permissive CORS and verbose defaults for local development
    #[arg(long, default_value_t = false)]
    dev: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load and validate configuration, print the effective values and exit
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Config first so RUST_LOG from a .env file reaches the subscriber.
    let ConfigLoad { config, warnings } = load_runtime_config(&cli.serve)?;
    init_tracing();

    if config.metadata.env_file_loaded {
        info!("loaded .env file");
    }
    if let Some(path) = config.metadata.config_path.as_ref() {
        info!(path = %path.display(), "configuration file loaded");
    }
    for warning in &warnings {
        warn!("{warning}");
    }

    if let Some(Command::CheckConfig) = cli.command {
        println!("{config:#?}");
        return Ok(());
    }

    run_server(config).await
}

fn load_runtime_config(args: &ServeArgs) -> anyhow::Result<ConfigLoad> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = args.config.as_ref() {
        loader = loader.with_config_path(path);
    }
    if let Some(path) = args.env_file.as_ref() {
        loader = loader.with_env_file(path);
    }
    let mut load = loader.load().context("failed to load configuration")?;

    if let Some(dir) = args.static_dir.as_ref()
        && !dir.is_dir()
    {
        load.warnings.push(format!(
            "Static directory {} not found; ignoring --static-dir",
            dir.display()
        ));
    }
    apply_cli_overrides(&mut load.config, args);

    Ok(load)
}

fn apply_cli_overrides(config: &mut Config, args: &ServeArgs) {
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(host) = args.host.clone() {
        config.server.host = host;
    }
    if let Some(dir) = args.static_dir.clone()
        && dir.is_dir()
    {
        config.static_files.root = Some(dir);
    }
    if args.dev {
        config.dev_mode = true;
    }
}

async fn run_server(config: Config) -> anyhow::Result<()> {
    let host = config.server.host.clone();
    let port = config.server.port;
    let state = AppState::in_memory(config);
    let router = create_app(state.clone());

    let listener = tokio::net::TcpListener::bind((host.as_str(), port))
        .await
        .with_context(|| format!("failed to bind {host}:{port}"))?;

    info!(
        "Starting Chroma color service (HTTP) on http://{}",
        listener.local_addr()?
    );
    if state.config().dev_mode {
        warn!("DEV_MODE is enabled; CORS is permissive");
    }

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated unexpectedly")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to install Ctrl+C handler");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
