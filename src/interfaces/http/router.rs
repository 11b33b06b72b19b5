//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::BillingService;
use crate::config::AppConfig;
use crate::interfaces::http::common::ApiResponse;

use super::modules::{bills, firebase, health, metrics, readings, request_id};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Bills
        bills::estimate_bill,
        bills::generate_official_bill,
        bills::save_official_bill,
        bills::get_latest_official_bill,
        // Readings
        readings::save_daily_reading,
        readings::get_latest_daily_reading,
        readings::get_daily_usage_data,
        // Firebase
        firebase::firebase_config,
    ),
    components(
        schemas(
            // Common
            ApiResponse<String>,
            // Health
            health::HealthResponse,
            // Bills
            bills::EstimateBillRequest,
            bills::BillResponse,
            // Readings
            readings::SaveDailyReadingRequest,
            // Firebase
            firebase::FirebaseWebConfig,
        )
    ),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Bills", description = "Bi-monthly bill estimation for KSEB Domestic (LT-1A) consumers"),
        (name = "Readings", description = "Daily meter-reading endpoints (placeholders, no persistence)"),
        (name = "Firebase", description = "Firebase web-app configuration delivery"),
    ),
    info(
        title = "KSEB Tariff Service API",
        version = "1.0.0",
        description = "REST API for estimating bi-monthly KSEB domestic electricity bills",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(
    billing: Arc<BillingService>,
    app_cfg: &AppConfig,
    prometheus_handle: PrometheusHandle,
) -> Router {
    // ── Per-module states ──────────────────────────────────────
    let billing_state = bills::BillingState { billing };
    let firebase_state = firebase::FirebaseState {
        config: app_cfg.firebase.clone(),
    };
    let health_state = health::HealthState {
        started_at: Arc::new(Instant::now()),
    };
    let metrics_state = metrics::MetricsState {
        handle: prometheus_handle,
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let bill_routes = Router::new()
        .route("/estimate", post(bills::estimate_bill))
        .route("/official", post(bills::save_official_bill))
        .route("/official/generate", post(bills::generate_official_bill))
        .route("/official/latest", get(bills::get_latest_official_bill))
        .with_state(billing_state);

    let reading_routes = Router::new()
        .route("/daily", post(readings::save_daily_reading))
        .route("/daily/latest", get(readings::get_latest_daily_reading))
        .route("/daily/usage", get(readings::get_daily_usage_data));

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    // Build router
    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Health
        .route("/health", get(health::health_check).with_state(health_state))
        // Prometheus scrape endpoint
        .route(
            "/metrics",
            get(metrics::prometheus_metrics).with_state(metrics_state),
        )
        // Firebase web-app bootstrap
        .route(
            "/firebase-config",
            get(firebase::firebase_config).with_state(firebase_state),
        )
        // Bills
        .nest("/api/v1/bills", bill_routes)
        // Readings
        .nest("/api/v1/readings", reading_routes)
        // Middleware
        .layer(middleware::from_fn(request_id::request_id_middleware))
        .layer(middleware::from_fn(metrics::http_metrics_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

// ── Tests ──────────────────────────────────────────────────────
