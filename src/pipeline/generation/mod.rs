pub mod types;
pub mod prompt;
pub mod client;
pub mod service;

pub use types::*;
pub use prompt::*;
pub use client::*;
pub use service::*;

use thiserror::Error;

use crate::pipeline::interpretation::InterpretationError;

/// Failures talking to the hosted generative model.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("GROQ_API_KEY is not configured")]
    MissingApiKey,

    #[error("Model service is not reachable at {0}")]
    Connection(String),

    #[error("Model service timed out after {0}s")]
    Timeout(u64),

    #[error("Model service returned error (status {status}): {body}")]
    ServiceError { status: u16, body: String },

    #[error("HTTP client error: {0}")]
    HttpClient(String),

    #[error("Response parsing error: {0}")]
    ResponseParsing(String),
}

/// Failures of a full triage operation.
#[derive(Error, Debug)]
pub enum TriageError {
    #[error("Please provide symptoms for analysis")]
    NoSymptoms,

    #[error("Input text is empty")]
    EmptyInput,

    #[error("Generation failed: {0}")]
    Generation(#[from] GenerationError),

    #[error("Interpretation failed: {0}")]
    Interpretation(#[from] InterpretationError),
}
