use cr_server::{AppState, ServerError, ServerResult, build_router, logger};

use cr_auth::{PasswordHasher, TokenService};
use cr_config::Config;

use std::path::PathBuf;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ServerResult<()> {
    // .env is optional; real environment variables win
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    // Log file lives in the config directory when configured
    let log_file_path: Option<PathBuf> = match &config.logging.file {
        Some(filename) => Some(Config::config_dir()?.join(filename)),
        None => None,
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting cr-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Open database and apply migrations
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());
    let pool = cr_db::connect(&database_path, config.database.max_connections).await?;
    info!("Database ready");

    let tokens = TokenService::with_hs256(config.auth.secret_bytes()?);
    let hasher = PasswordHasher::new(config.auth.bcrypt_cost);

    let app_state = AppState::new(pool, tokens, hasher, config.server.max_body_bytes);
    let app = build_router(app_state);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: bind_addr.clone(),
            source,
        })?;
    let local_addr = listener
        .local_addr()
        .map_err(|source| ServerError::Bind {
            addr: bind_addr.clone(),
            source,
        })?;
    info!("Server listening on {}", local_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|source| ServerError::Serve { source })?;

    info!("Graceful shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
        Err(e) => {
            // Keep serving; without a signal handler there is nothing to wait for
            error!("Failed to listen for SIGINT: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
