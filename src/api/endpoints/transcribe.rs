//! Voice message transcription for the chat screen.

use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, State};
use axum::Json;

use crate::api::endpoints::run_blocking;
use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::pipeline::generation::{AudioPayload, Transcription};

/// `POST /transcribe`: multipart form with one audio `file`.
/// Returns `{text, language}`.
pub async fn transcribe(
    State(ctx): State<ApiContext>,
    mut multipart: Multipart,
) -> Result<Json<Transcription>, ApiError> {
    let mut audio: Option<AudioPayload> = None;

    while let Some(field) = multipart.next_field().await.map_err(malformed)? {
        if field.name() != Some("file") {
            tracing::debug!(field = ?field.name(), "Ignoring unknown form field");
            continue;
        }
        let file_name = field.file_name().map(str::to_string);
        let mime_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await.map_err(malformed)?;
        if !bytes.is_empty() {
            audio = Some(AudioPayload::new(
                bytes.to_vec(),
                file_name.as_deref(),
                mime_type.as_deref(),
            ));
        }
    }

    let audio = audio.ok_or_else(|| ApiError::BadRequest("No audio file provided".into()))?;

    let service = ctx.service.clone();
    let transcription = run_blocking(move || service.transcribe(audio)).await?;
    Ok(Json(transcription))
}

fn malformed(err: MultipartError) -> ApiError {
    tracing::warn!("Failed to read audio upload: {err}");
    ApiError::BadRequest(format!("Malformed form data: {}", err.body_text()))
}
