use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::api::types::ApiContext;
use crate::pipeline::interpretation::LanguageDetection;

#[derive(Deserialize)]
pub struct DetectLanguageRequest {
    #[serde(default)]
    pub text: String,
}

/// `POST /detect-language`: script-based; runs inline since it never
/// touches the model.
pub async fn detect(
    State(ctx): State<ApiContext>,
    Json(req): Json<DetectLanguageRequest>,
) -> Json<LanguageDetection> {
    Json(ctx.service.detect_language(&req.text))
}
