//! Triage endpoints: quick text assessment and full analysis with an
//! optional clinical image.

use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, State};
use axum::Json;
use serde::Deserialize;

use crate::api::endpoints::run_blocking;
use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::pipeline::generation::ImagePayload;
use crate::pipeline::interpretation::{QuickAssessment, TriageContext, TriageRecord};

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub text: String,
}

/// `POST /analyze`: severity, score, summary and recommended action.
pub async fn quick(
    State(ctx): State<ApiContext>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<QuickAssessment>, ApiError> {
    let service = ctx.service.clone();
    let assessment = run_blocking(move || service.quick_assessment(&req.text)).await?;
    Ok(Json(assessment))
}

/// `POST /analyze-with-image`: multipart form with `symptoms`,
/// `duration`, `additional_info` and an optional `file`.
pub async fn with_image(
    State(ctx): State<ApiContext>,
    mut multipart: Multipart,
) -> Result<Json<TriageRecord>, ApiError> {
    let mut context = TriageContext::default();
    let mut image: Option<ImagePayload> = None;

    while let Some(field) = multipart.next_field().await.map_err(malformed)? {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                let mime_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await.map_err(malformed)?;
                // Browsers send an empty part when no file was chosen
                if !bytes.is_empty() {
                    image = Some(ImagePayload::new(bytes.to_vec(), mime_type.as_deref()));
                }
            }
            "symptoms" => context.symptoms = field.text().await.map_err(malformed)?,
            "duration" => context.duration = field.text().await.map_err(malformed)?,
            "additional_info" => {
                context.additional_info = field.text().await.map_err(malformed)?
            }
            other => tracing::debug!(field = other, "Ignoring unknown form field"),
        }
    }

    tracing::debug!(
        has_image = image.is_some(),
        image_bytes = image.as_ref().map_or(0, |i| i.bytes.len()),
        "Analysis form received"
    );

    let service = ctx.service.clone();
    let record = run_blocking(move || service.analyze_symptoms(&context, image.as_ref())).await?;
    Ok(Json(record))
}

fn malformed(err: MultipartError) -> ApiError {
    tracing::warn!("Failed to read multipart form: {err}");
    ApiError::BadRequest(format!("Malformed form data: {}", err.body_text()))
}
