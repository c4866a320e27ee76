use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::sync::Arc;

mod config;
mod controllers;
mod db;
mod error;
mod models;
mod notes;

use config::Config;
use db::Database;
use error::ApiError;
use notes::{NoteStore, StoreError};

pub struct AppState {
    /// The one shared store handle; opened in `main`, released after the server stops
    pub store: Arc<dyn NoteStore>,
    pub config: Config,
}

impl AppState {
    /// Map a store failure using this process's environment mode
    pub fn api_error(&self, err: StoreError) -> ApiError {
        ApiError::from_store(err, self.config.environment)
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    log::info!("Notes backend v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env().map_err(std::io::Error::other)?;
    let port = config.port;
    log::info!("Environment: {:?}", config.environment);

    config::ensure_database_dir(&config.database_url)?;
    log::info!("Initializing database at {}", config.database_url);
    let db = Database::new(&config.database_url).map_err(|e| {
        log::error!("Failed to initialize database: {}", e);
        std::io::Error::other(e)
    })?;
    let db = Arc::new(db);

    let store: Arc<dyn NoteStore> = db.clone();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(AppState {
                store: Arc::clone(&store),
                config: config.clone(),
            }))
            .wrap(Logger::default())
            .configure(controllers::health::config)
            .configure(controllers::notes::config)
    })
    .bind(("0.0.0.0", port))?
    .run();

    log::info!("Server running on port {}", port);

    // Get server handle for graceful shutdown
    let server_handle = server.handle();

    // Spawn Ctrl+C handler
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        log::info!("Received Ctrl+C, shutting down...");

        // Stop the HTTP server with timeout
        let server_stop = server_handle.stop(true);
        if tokio::time::timeout(std::time::Duration::from_secs(5), server_stop).await.is_err() {
            log::warn!("Timeout waiting for HTTP server to stop, forcing exit...");
        }
    });

    server.await?;

    // Workers are gone; release the store explicitly when we hold the last handle
    match Arc::try_unwrap(db) {
        Ok(db) => {
            if let Err(e) = db.close() {
                log::warn!("Error closing database: {}", e);
            }
        }
        Err(_) => log::warn!("Database still referenced at shutdown, dropping handle"),
    }

    log::info!("Shutdown complete");
    Ok(())
}
