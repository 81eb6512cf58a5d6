mod cli;
mod telemetry;

use crate::cli::CLI;
use clap::Parser;
use linkify_gateway::{serve, AppState, ServerSettings};
use linkify_shortener::InMemoryShortener;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = CLI::parse();

    telemetry::init(&config.log_level, config.log_format)?;

    info!(
        listen_addr = %config.listen_addr,
        log_format = %config.log_format,
        "starting linkify gateway"
    );

    let state = AppState::new(Arc::new(InMemoryShortener::in_memory()));
    let settings = ServerSettings::builder()
        .listen_addr(config.listen_addr)
        .max_body_size(config.max_body_size)
        .build();

    serve(settings, state, shutdown_signal()).await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to register SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutting down gracefully");
}
