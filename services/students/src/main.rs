use std::sync::Arc;

use anyhow::{Context, Result};
use sqlx::migrate::Migrator;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod error;
mod models;
mod repositories;
mod routes;
mod service;
mod settings;
mod state;
mod validation;

use crate::{
    repositories::PgStudentRepository, service::StudentService, settings::Settings,
    state::AppState,
};

/// Schema migrations embedded from `migrations/`
pub static MIGRATOR: Migrator = sqlx::migrate!();

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting students service");

    let settings = Settings::load().context("Failed to load settings")?;
    let database = settings.database();

    if settings.run_migrations {
        common::database::run_migrations(&database, &MIGRATOR).await?;
    } else {
        warn!("Skipping database migrations");
    }

    // Check database connectivity
    if common::database::health_check(&database).await {
        info!("Database connection successful");
    } else {
        anyhow::bail!("Failed to connect to database");
    }

    // Repository -> service -> state
    let student_repository = PgStudentRepository::new(database.clone());
    let student_service = StudentService::new(Arc::new(student_repository));

    let app_state = AppState {
        database,
        student_service,
    };

    let app = routes::create_router(app_state);

    let listener = TcpListener::bind(&settings.listen_addr)
        .await
        .with_context(|| format!("Failed to bind {}", settings.listen_addr))?;
    info!("Students service listening on {}", settings.listen_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Students service stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
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
                warn!("Failed to listen for SIGTERM: {}", e);
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
