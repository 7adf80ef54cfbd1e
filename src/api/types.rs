//! Shared types for the triage API layer.

use std::sync::Arc;

use crate::pipeline::generation::TriageService;

// ═══════════════════════════════════════════════════════════
// API context: shared state for the triage router
// ═══════════════════════════════════════════════════════════

/// Shared context for all API routes. Cheap to clone.
#[derive(Clone)]
pub struct ApiContext {
    pub service: Arc<TriageService>,
}

impl ApiContext {
    pub fn new(service: Arc<TriageService>) -> Self {
        Self { service }
    }
}
