//! # Reminder Bot Main Entry Point
//!
//! Initializes logging, loads configuration, wires the reminder store to the
//! Telegram sender, starts the background sweep, and serves the webhook and
//! health endpoints.

use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use teloxide::Bot;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod services;
mod store;
mod utils;
mod web;

use crate::config::Config;
use crate::services::health::HealthService;
use crate::services::notifier::{NotificationSender, TelegramSender};
use crate::services::scheduler::ReminderScheduler;
use crate::store::ReminderStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reminder_bot=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!("Starting Reminder Bot v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration loaded - HTTP Port: {}, Sweep interval: {}s",
        config.http_port, config.sweep_interval_secs
    );

    // The store is shared between the webhook handlers and the scheduler
    let store = Arc::new(ReminderStore::new());

    // Outbound-only Telegram client; inbound events arrive over the webhook
    let bot = Bot::new(&config.telegram_bot_token);
    let sender: Arc<dyn NotificationSender> = Arc::new(TelegramSender::new(bot));

    // Initialize and start the background sweep
    info!("Initializing reminder scheduler...");
    let mut scheduler = match ReminderScheduler::new(
        store.clone(),
        sender,
        Duration::from_secs(config.sweep_interval_secs),
    )
    .await
    {
        Ok(scheduler) => {
            info!("Reminder scheduler initialized successfully");
            scheduler
        }
        Err(e) => {
            tracing::error!("Failed to create reminder scheduler: {}", e);
            return Err(anyhow::anyhow!("Failed to create reminder scheduler: {}", e));
        }
    };

    if let Err(e) = scheduler.start().await {
        tracing::error!("Failed to start reminder scheduler: {}", e);
    } else {
        info!("Reminder scheduler started successfully");
    }

    // Webhook and health endpoints share one listener
    let health_service = HealthService::new(store.clone());
    let app = web::router(store)
        .merge(health_service.router)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.http_port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to port {}: {}", config.http_port, e))?;

    info!("Webhook server starting on port {}", config.http_port);

    let server_task = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            tracing::error!("HTTP server error: {}", e);
        }
    });

    tokio::select! {
        result = server_task => {
            if let Err(e) = result {
                tracing::error!("Server task error: {}", e);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    // Stop the scheduler on shutdown
    if let Err(e) = scheduler.stop().await {
        tracing::warn!("Error stopping reminder scheduler: {}", e);
    }

    info!("Application stopped");
    Ok(())
}
