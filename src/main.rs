mod cli;
mod config;
mod errors;
mod handlers;
mod models;
mod routes;
mod services;
mod state;

use anyhow::Context;
use clap::Parser;
use crate::{
    cli::{Cli, Mode},
    config::Config,
    services::Calculator,
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    // Load configuration, command-line values win
    let mut config = Config::load().context("Failed to load configuration")?;
    config.apply_overrides(args.port, args.loglevel, args.debug_override());

    // Logs go to stderr so computed results stay alone on stdout
    tracing_subscriber::fmt()
        .with_max_level(config.server.log_level.as_tracing_level())
        .with_writer(std::io::stderr)
        .init();

    match args.mode() {
        Mode::Usage => {
            cli::print_usage()?;
            Ok(())
        }
        Mode::Calculate { operation, a, b } => {
            let result = Calculator::new().calculate(operation, a, b)?;
            println!("{}", cli::format_result(operation, a, b, result));
            Ok(())
        }
        Mode::Serve => serve(config).await,
    }
}

async fn serve(config: Config) -> anyhow::Result<()> {
    let state = AppState::from_config(&config)?;
    let app = routes::build_router(state, config.server.debug);

    let address = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    tracing::info!("Calculator service listening on http://{}", address);
    tracing::debug!("Configuration: {:?}", config);

    axum::serve(listener, app)
        .await
        .context("Server terminated unexpectedly")
}
