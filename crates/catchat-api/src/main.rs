//! CatChat REST API entry point.
//!
//! Binary name: `catchat`
//!
//! Parses CLI arguments and environment, initializes tracing, then either
//! prints the resolved configuration or wires the application state and
//! starts the HTTP server.

mod cli;
mod config;
mod http;
mod state;

use clap::Parser;
use console::style;
use tracing::info;

use catchat_observe::tracing_setup::{init_tracing, shutdown_tracing};

use cli::{Cli, Commands, ServeArgs};
use config::DeploymentInfo;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity; RUST_LOG overrides
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "info",
        1 => "info,catchat=debug",
        _ => "trace",
    };
    init_tracing(cli.otel, filter).map_err(|e| anyhow::anyhow!(e))?;

    let deployment = DeploymentInfo::from_env();

    let result = match cli.command.unwrap_or(Commands::Serve) {
        Commands::Status => cli::status::status(&cli.serve, &deployment, cli.json),
        Commands::Serve => serve(cli.serve, deployment).await,
    };

    shutdown_tracing();
    result
}

async fn serve(args: ServeArgs, deployment: DeploymentInfo) -> anyhow::Result<()> {
    let addr = args.bind_addr();
    let state = AppState::init(args, deployment).await?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    println!();
    println!(
        "  {} CatChat backend v{}",
        style("🐱").bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(
        "  Environment: {}   Platform: {} {}",
        style(&state.config.environment).bold(),
        state.config.platform_name,
        if state.config.on_platform {
            style("✓").green()
        } else {
            style("✗").red()
        }
    );
    println!("  Storage:     {}", style(state.storage).bold());
    println!(
        "  {} Listening on {}",
        style("⚡").bold(),
        style(format!("http://{addr}")).cyan()
    );
    println!(
        "  Health:      {}",
        style(format!("http://{addr}/api/health")).cyan()
    );
    println!("  {}", style("Press Ctrl+C to stop").dim());
    println!();

    info!(
        addr = %addr,
        storage = %state.storage,
        assistant = state.assistant.provider_name().unwrap_or("canned"),
        "Server started"
    );

    let router = http::router::build_router(state);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    println!("\n  Server stopped.");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
