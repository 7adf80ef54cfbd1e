pub mod interpretation; // Model reply → structured triage record
pub mod generation; // Prompting and the hosted model client
