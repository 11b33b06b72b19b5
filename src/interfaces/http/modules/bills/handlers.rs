//! Bill REST API handlers

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use super::dto::{BillResponse, EstimateBillRequest};
use crate::application::BillingService;
use crate::interfaces::http::common::{ApiResponse, ValidatedJson};

/// Shared state for bill routes
#[derive(Clone)]
pub struct BillingState {
    pub billing: Arc<BillingService>,
}

#[utoipa::path(
    post,
    path = "/api/v1/bills/estimate",
    tag = "Bills",
    request_body = EstimateBillRequest,
    responses(
        (status = 200, description = "Estimated bill breakdown", body = ApiResponse<BillResponse>),
        (status = 400, description = "Missing or malformed units"),
        (status = 422, description = "Negative units")
    )
)]
pub async fn estimate_bill(
    State(state): State<BillingState>,
    ValidatedJson(req): ValidatedJson<EstimateBillRequest>,
) -> Result<Json<ApiResponse<BillResponse>>, (StatusCode, Json<ApiResponse<()>>)> {
    let units = req.units as u64;

    match state.billing.estimate(units) {
        Ok(breakdown) => {
            metrics::counter!("bill_estimates_total").increment(1);
            Ok(Json(ApiResponse::success(breakdown.into())))
        }
        Err(e) => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(format!("Failed to estimate bill: {}", e))),
        )),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/bills/official/generate",
    tag = "Bills",
    responses((status = 200, description = "Placeholder response", body = ApiResponse<String>))
)]
pub async fn generate_official_bill() -> Json<ApiResponse<String>> {
    Json(ApiResponse::success(
        "Generate official bill endpoint placeholder".to_string(),
    ))
}

#[utoipa::path(
    post,
    path = "/api/v1/bills/official",
    tag = "Bills",
    responses((status = 200, description = "Placeholder response", body = ApiResponse<String>))
)]
pub async fn save_official_bill() -> Json<ApiResponse<String>> {
    Json(ApiResponse::success(
        "Save official bill endpoint placeholder".to_string(),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/bills/official/latest",
    tag = "Bills",
    responses((status = 200, description = "Placeholder response", body = ApiResponse<String>))
)]
pub async fn get_latest_official_bill() -> Json<ApiResponse<String>> {
    Json(ApiResponse::success(
        "Get latest official bill endpoint placeholder".to_string(),
    ))
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use axum::routing::{get, post};
    use axum::Router;
    use tower::ServiceExt;

    use crate::domain::TariffSchedule;

    fn app() -> Router {
        let state = BillingState {
            billing: Arc::new(BillingService::new(TariffSchedule::domestic().unwrap())),
        };
        Router::new()
            .route("/api/v1/bills/estimate", post(estimate_bill))
            .route("/api/v1/bills/official/latest", get(get_latest_official_bill))
            .with_state(state)
    }

    fn estimate_request(body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/v1/bills/estimate")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_json(resp: axum::http::Response<Body>) -> serde_json::Value {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn estimate_returns_the_full_breakdown() {
        let body = serde_json::json!({"units": 250}).to_string();
        let resp = app().oneshot(estimate_request(body)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let json = body_json(resp).await;
        assert_eq!(json["success"], true);
        let data = &json["data"];
        assert_eq!(data["total_units"], 250);
        assert_eq!(data["fixed_charge"].as_f64(), Some(209.0));
        assert_eq!(data["energy_charge"].as_f64(), Some(1027.5));
        assert_eq!(data["electricity_duty"].as_f64(), Some(102.75));
        assert_eq!(data["fuel_surcharge"].as_f64(), Some(20.0));
        assert_eq!(data["meter_rent"].as_f64(), Some(12.0));
        assert_eq!(data["fc_subsidy"].as_f64(), Some(-40.0));
        assert_eq!(data["ec_subsidy"].as_f64(), Some(-78.0));
        assert_eq!(data["total_bill"].as_f64(), Some(1253.25));
    }

    #[tokio::test]
    async fn estimate_accepts_zero_units() {
        let body = serde_json::json!({"units": 0}).to_string();
        let resp = app().oneshot(estimate_request(body)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let json = body_json(resp).await;
        assert_eq!(json["data"]["total_bill"].as_f64(), Some(65.5));
    }

    #[tokio::test]
    async fn missing_units_is_a_client_error() {
        let resp = app().oneshot(estimate_request("{}".to_string())).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn non_numeric_units_is_a_client_error() {
        let body = serde_json::json!({"units": "many"}).to_string();
        let resp = app().oneshot(estimate_request(body)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn negative_units_fail_validation() {
        let body = serde_json::json!({"units": -10}).to_string();
        let resp = app().oneshot(estimate_request(body)).await.unwrap();
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let json = body_json(resp).await;
        assert_eq!(json["success"], false);
    }

    #[tokio::test]
    async fn official_bill_routes_are_placeholders() {
        let req = Request::builder()
            .method("GET")
            .uri("/api/v1/bills/official/latest")
            .body(Body::empty())
            .unwrap();
        let resp = app().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);

        let json = body_json(resp).await;
        assert_eq!(json["success"], true);
        assert!(json["data"].as_str().unwrap().contains("placeholder"));
    }
}
