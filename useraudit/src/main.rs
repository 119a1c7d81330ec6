//! useraudit Server Entry Point

use clap::Parser;
use tracing::{error, info};
use useraudit::cli::{Cli, Commands};
use useraudit::config::AppConfig;
use useraudit::{api, logging, AppState};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let _log_guard = match logging::init() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error: failed to initialize logging: {}", e);
            std::process::exit(1);
        }
    };

    let mut config = AppConfig::from_env();
    if let Some(Commands::Serve(args)) = &cli.command {
        args.apply(&mut config);
    }

    if let Err(e) = run_server(config).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}

async fn run_server(config: AppConfig) -> Result<(), String> {
    info!("useraudit v{}", env!("CARGO_PKG_VERSION"));
    info!(
        database_url = %config.storage.database_url,
        audit_url = %config.audit.url,
        "Configuration loaded"
    );

    let state = AppState::from_config(&config).map_err(|e| e.to_string())?;
    let app = api::create_router(state);

    let bind_addr = config.server.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| format!("Failed to bind to {}: {}", bind_addr, e))?;
    info!("Server listening on {}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| e.to_string())?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
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
    info!("Shutdown signal received");
}
