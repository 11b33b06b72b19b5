//! Daily meter-reading REST API handlers
//!
//! Persistence is deliberately absent; these routes accept and acknowledge
//! requests so the web client keeps working, exactly like the endpoints
//! they stand in for.

use axum::Json;
use tracing::info;

use super::dto::SaveDailyReadingRequest;
use crate::interfaces::http::common::{ApiResponse, ValidatedJson};

#[utoipa::path(
    post,
    path = "/api/v1/readings/daily",
    tag = "Readings",
    request_body = SaveDailyReadingRequest,
    responses(
        (status = 200, description = "Placeholder response", body = ApiResponse<String>),
        (status = 422, description = "Negative reading")
    )
)]
pub async fn save_daily_reading(
    ValidatedJson(req): ValidatedJson<SaveDailyReadingRequest>,
) -> Json<ApiResponse<String>> {
    info!(date = %req.date, units = req.units, "Daily reading received");
    Json(ApiResponse::success(
        "Daily reading endpoint placeholder".to_string(),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/readings/daily/latest",
    tag = "Readings",
    responses((status = 200, description = "Placeholder response", body = ApiResponse<String>))
)]
pub async fn get_latest_daily_reading() -> Json<ApiResponse<String>> {
    Json(ApiResponse::success(
        "Get latest daily reading endpoint placeholder".to_string(),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/readings/daily/usage",
    tag = "Readings",
    responses((status = 200, description = "Placeholder response", body = ApiResponse<String>))
)]
pub async fn get_daily_usage_data() -> Json<ApiResponse<String>> {
    Json(ApiResponse::success(
        "Get daily usage data endpoint placeholder".to_string(),
    ))
}

// ── Tests ──────────────────────────────────────────────────────
