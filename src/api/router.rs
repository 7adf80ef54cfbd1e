//! Triage API router.
//!
//! Returns a composable `Router` that can be mounted on any axum server.
//! Layers: permissive CORS (browser and mobile front ends call it
//! directly) and a 10 MB request body cap.

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::api::endpoints;
use crate::api::types::ApiContext;
use crate::config::MAX_BODY_BYTES;
use crate::pipeline::generation::TriageService;

/// Build the triage API router around a shared service.
pub fn triage_router(service: Arc<TriageService>) -> Router {
    build_router(ApiContext::new(service))
}

fn build_router(ctx: ApiContext) -> Router {
    Router::new()
        .route("/", get(endpoints::health::root))
        .route("/health", get(endpoints::health::check))
        .route("/analyze", post(endpoints::analyze::quick))
        .route("/analyze-with-image", post(endpoints::analyze::with_image))
        .route("/chat", post(endpoints::chat::send))
        .route("/detect-language", post(endpoints::language::detect))
        .route("/transcribe", post(endpoints::transcribe::transcribe))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CorsLayer::permissive())
        .with_state(ctx)
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════
