//!
//! REST service estimating bi-monthly KSEB domestic electricity bills.
//! Reads configuration from TOML file (~/.config/kseb-tariff/config.toml).

use std::sync::Arc;

use tracing::{error, info};

use kseb_tariff::{create_api_router, default_config_path, AppConfig, BillingService, TariffSchedule};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("KSEB_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let app_cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            // Initialize logging with configured level
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.level)),
                )
                .init();
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            error!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        }
    };

    info!("Starting KSEB Tariff Service...");

    // ── Prometheus metrics recorder (must be installed before any metrics calls) ──
    let prometheus_handle = metrics_exporter_prometheus::PrometheusBuilder::new()
        .install_recorder()
        .expect("Failed to install Prometheus metrics recorder");

    // ── Tariff schedule (table coverage checked once, up front) ──
    let schedule = match TariffSchedule::domestic() {
        Ok(schedule) => schedule,
        Err(e) => {
            error!("Tariff schedule rejected: {}", e);
            return Err(e.into());
        }
    };
    info!("LT-1A tariff schedule validated");

    let billing = Arc::new(BillingService::new(schedule));

    // Create REST API router
    let app = create_api_router(billing, &app_cfg, prometheus_handle);

    // Start REST API server with graceful shutdown
    let api_addr = format!("{}:{}", app_cfg.server.api_host, app_cfg.server.api_port);
    let listener = tokio::net::TcpListener::bind(&api_addr).await?;
    info!("REST API server listening on http://{}", api_addr);
    info!("Swagger UI available at http://{}/docs/", api_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("Failed to listen for shutdown signal: {}", e);
            }
            info!("Shutdown signal received");
        })
        .await?;

    info!("KSEB Tariff Service shutdown complete");
    Ok(())
}
