//! Superheroes binary entry point.

use app_lib::app::seed_sample_data;
use app_lib::infra::init_db;
use app_lib::{create_router, Cli, Command};
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // `log` records from the use cases are bridged into tracing by init()
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,superheroes=debug,app_lib=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    tracing::info!("DB path: {:?}", cli.db_path);
    let pool = init_db(&cli.db_path).map_err(|e| {
        tracing::error!("DB init failed: {}", e);
        e
    })?;

    match cli.command() {
        Command::Seed { reset } => {
            let report = seed_sample_data(&pool, reset)?;
            tracing::info!(
                heroes = report.heroes,
                powers = report.powers,
                hero_powers = report.hero_powers,
                "Seed complete"
            );
        }
        Command::Serve => {
            let addr = cli.socket_addr()?;
            let app = create_router(Arc::new(pool));
            let listener = tokio::net::TcpListener::bind(addr).await?;
            tracing::info!("Listening on: http://{}", addr);

            axum::serve(listener, app)
                .with_graceful_shutdown(shutdown_signal())
                .await?;
            tracing::info!("Shutdown complete");
        }
    }
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C signal"),
        _ = terminate => tracing::info!("Received terminate signal"),
    }
}
