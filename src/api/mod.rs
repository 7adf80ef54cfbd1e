//! HTTP surface of the triage service.
//!
//! `triage_router()` returns a composable `Router`; `server` binds it and
//! manages shutdown. No authentication: the service is expected to sit
//! behind the clinic gateway.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
pub mod types;

pub use router::triage_router;
pub use server::{start_api_server, ApiServer};
pub use types::ApiContext;
