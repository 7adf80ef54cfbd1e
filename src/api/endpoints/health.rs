//! Liveness endpoints.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::types::ApiContext;
use crate::pipeline::interpretation::SPECIALIST_TABLE;

#[derive(Serialize)]
pub struct RootResponse {
    pub status: &'static str,
    pub model: String,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub groq_configured: bool,
    pub version: &'static str,
    pub specialist_table_version: u32,
}

/// `GET /`: banner with the active text model.
pub async fn root(State(ctx): State<ApiContext>) -> Json<RootResponse> {
    Json(RootResponse {
        status: "ZYCARE AI Engine Running",
        model: ctx.service.models().text.clone(),
    })
}

/// `GET /health`: reports whether model credentials are present.
/// Does not contact the model service.
pub async fn check(State(ctx): State<ApiContext>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        groq_configured: ctx.service.is_configured(),
        version: crate::config::APP_VERSION,
        specialist_table_version: SPECIALIST_TABLE.version,
    })
}
