use crate::{
    cmd::{create_client, resolve_recent_size},
    modules::handlers::{create_router, AppState},
};
use anyhow::{Context, Result};
use axum::Server;
use clap::Args;
use std::{env, net::SocketAddr};

#[derive(Debug, Args)]
pub struct ServerArgs {
    #[arg(long)]
    port: Option<u16>,
    /// Number of recent finished Div. 2 / Div. 3 contests to pick problems from
    #[arg(long)]
    recent_size: Option<usize>,
}

pub async fn run(args: ServerArgs) -> Result<()> {
    let client = create_client()?;
    let recent_size = resolve_recent_size(args.recent_size)?;

    let port = match args.port {
        Some(port) => port,
        None => match env::var("PORT") {
            Ok(port) => port.parse::<u16>().with_context(|| {
                let message = format!("PORT has an invalid value `{}`", port);
                tracing::error!(message);
                message
            })?,
            Err(_) => {
                tracing::warn!("Server will be launched at default port number 8000");
                8000u16
            }
        },
    };

    let app = create_router(AppState {
        client,
        recent_size,
    });
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!(
        "Server start at port {} with {} recent contests",
        port,
        recent_size
    );
    Server::try_bind(&addr)
        .with_context(|| {
            let message = format!("failed to bind server to {}", addr);
            tracing::error!(message);
            message
        })?
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {:?}", e);
        }
    };

    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install signal handler: {:?}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown.");
}
