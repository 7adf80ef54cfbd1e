//! API endpoint handlers.
//!
//! Handlers are thin: decode, hand off to `TriageService` on the blocking
//! pool, encode.

pub mod analyze;
pub mod chat;
pub mod health;
pub mod language;
pub mod transcribe;

use crate::api::error::ApiError;
use crate::pipeline::generation::TriageError;

/// Run a blocking triage operation off the async executor.
pub(crate) async fn run_blocking<T, F>(task: F) -> Result<T, ApiError>
where
    F: FnOnce() -> Result<T, TriageError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|e| ApiError::Internal(format!("Task join error: {e}")))?
        .map_err(ApiError::from)
}
