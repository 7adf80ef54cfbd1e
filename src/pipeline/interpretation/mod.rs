//! Response interpretation: turns free-form model output into bounded,
//! schema-valid triage records.
//!
//! Every extractor here is a tolerant pattern matcher. A miss is never an
//! error; it falls through to the defaults in [`fallbacks`]. The only failure
//! a caller can observe is [`InterpretationError::EmptyModelOutput`].

pub mod types;
pub mod helpers;
pub mod script;
pub mod severity;
pub mod sections;
pub mod specialists;
pub mod conditions;
pub mod recommendations;
pub mod findings;
pub mod fallbacks;
pub mod assessment;
pub mod orchestrator;

pub use types::*;
pub use helpers::*;
pub use script::*;
pub use severity::*;
pub use sections::*;
pub use specialists::*;
pub use conditions::*;
pub use recommendations::*;
pub use findings::*;
pub use fallbacks::*;
pub use assessment::*;
pub use orchestrator::*;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InterpretationError {
    #[error("Model returned no text to interpret")]
    EmptyModelOutput,
}
