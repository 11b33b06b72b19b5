//! Firebase configuration handler
//!
//! The browser client bootstraps its Firebase SDK from `GET /firebase-config`.
//! The keys come from the `[firebase]` section of the TOML config and are
//! served verbatim as the camelCase object the SDK expects, unwrapped.

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::config::FirebaseConfig;

/// Shared state for the firebase-config endpoint
#[derive(Clone)]
pub struct FirebaseState {
    pub config: FirebaseConfig,
}

/// Firebase web-app keys in SDK field naming
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FirebaseWebConfig {
    pub api_key: Option<String>,
    pub auth_domain: Option<String>,
    pub project_id: Option<String>,
    pub storage_bucket: Option<String>,
    pub messaging_sender_id: Option<String>,
    pub app_id: Option<String>,
    pub measurement_id: Option<String>,
}

impl From<&FirebaseConfig> for FirebaseWebConfig {
    fn from(cfg: &FirebaseConfig) -> Self {
        Self {
            api_key: cfg.api_key.clone(),
            auth_domain: cfg.auth_domain.clone(),
            project_id: cfg.project_id.clone(),
            storage_bucket: cfg.storage_bucket.clone(),
            messaging_sender_id: cfg.messaging_sender_id.clone(),
            app_id: cfg.app_id.clone(),
            measurement_id: cfg.measurement_id.clone(),
        }
    }
}

#[utoipa::path(
    get,
    path = "/firebase-config",
    tag = "Firebase",
    responses((status = 200, description = "Firebase web-app configuration", body = FirebaseWebConfig))
)]
pub async fn firebase_config(State(state): State<FirebaseState>) -> Json<FirebaseWebConfig> {
    Json(FirebaseWebConfig::from(&state.config))
}

// ── Tests ──────────────────────────────────────────────────────
