//! Nurse-assistant chat endpoint.

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use crate::api::endpoints::run_blocking;
use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::pipeline::generation::{ChatReply, HistoryEntry};

#[derive(Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

/// `POST /chat`: reply in the language the patient wrote in.
pub async fn send(
    State(ctx): State<ApiContext>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatReply>, ApiError> {
    let service = ctx.service.clone();
    let reply = run_blocking(move || service.chat(&req.message, &req.history)).await?;
    Ok(Json(reply))
}
