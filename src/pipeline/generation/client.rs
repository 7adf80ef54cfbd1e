use std::sync::Mutex;

use serde::Deserialize;

use super::types::{CompletionRequest, ModelClient, TranscriptionRequest};
use super::GenerationError;

/// Default OpenAI-compatible endpoint of the hosted inference service.
pub const DEFAULT_API_BASE: &str = "https://api.groq.com/openai/v1";

/// HTTP client for the hosted chat-completions service.
pub struct GroqClient {
    base_url: String,
    api_key: Option<String>,
    client: reqwest::blocking::Client,
    timeout_secs: u64,
}

impl GroqClient {
    /// Create a client. A missing key is allowed here; every completion
    /// then fails with `MissingApiKey`.
    pub fn new(
        base_url: &str,
        api_key: Option<String>,
        timeout_secs: u64,
    ) -> Result<Self, GenerationError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| GenerationError::HttpClient(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            client,
            timeout_secs,
        })
    }
}

/// Response body from `/chat/completions` (fields we read).
#[derive(Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Deserialize)]
struct CompletionChoice {
    message: AssistantMessage,
}

#[derive(Deserialize)]
struct AssistantMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Response body from `/audio/transcriptions` with `response_format=json`.
#[derive(Deserialize)]
struct TranscriptionResponse {
    #[serde(default)]
    text: String,
}

impl GroqClient {
    fn api_key(&self) -> Result<&str, GenerationError> {
        self.api_key.as_deref().ok_or(GenerationError::MissingApiKey)
    }

    fn send_error(&self, e: reqwest::Error) -> GenerationError {
        if e.is_connect() {
            GenerationError::Connection(self.base_url.clone())
        } else if e.is_timeout() {
            GenerationError::Timeout(self.timeout_secs)
        } else {
            GenerationError::HttpClient(e.to_string())
        }
    }

    /// Non-success statuses become `ServiceError` carrying the body.
    fn check_status(
        response: reqwest::blocking::Response,
    ) -> Result<reqwest::blocking::Response, GenerationError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().unwrap_or_default();
        Err(GenerationError::ServiceError {
            status: status.as_u16(),
            body,
        })
    }
}

impl ModelClient for GroqClient {
    fn complete(&self, request: &CompletionRequest) -> Result<String, GenerationError> {
        let api_key = self.api_key()?;
        let url = format!("{}/chat/completions", self.base_url);

        tracing::debug!(
            model = %request.model,
            messages = request.messages.len(),
            max_tokens = request.max_tokens,
            "Requesting completion"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .map_err(|e| self.send_error(e))?;

        let parsed: CompletionResponse = Self::check_status(response)?
            .json()
            .map_err(|e| GenerationError::ResponseParsing(e.to_string()))?;

        Ok(first_choice_text(parsed))
    }

    fn transcribe(&self, request: &TranscriptionRequest) -> Result<String, GenerationError> {
        let api_key = self.api_key()?;
        let url = format!("{}/audio/transcriptions", self.base_url);

        tracing::debug!(
            model = %request.model,
            audio_bytes = request.audio.bytes.len(),
            "Requesting transcription"
        );

        let file = reqwest::blocking::multipart::Part::bytes(request.audio.bytes.clone())
            .file_name(request.audio.file_name.clone())
            .mime_str(&request.audio.mime_type)
            .map_err(|e| GenerationError::HttpClient(e.to_string()))?;
        let form = reqwest::blocking::multipart::Form::new()
            .text("model", request.model.clone())
            .text("response_format", "json")
            .part("file", file);

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .multipart(form)
            .send()
            .map_err(|e| self.send_error(e))?;

        let parsed: TranscriptionResponse = Self::check_status(response)?
            .json()
            .map_err(|e| GenerationError::ResponseParsing(e.to_string()))?;

        Ok(parsed.text)
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

fn first_choice_text(response: CompletionResponse) -> String {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .unwrap_or_default()
}

/// Mock model client for testing: returns a canned reply (or a canned
/// failure) for completions and transcriptions alike, and remembers the
/// last request of each kind.
pub struct MockModelClient {
    reply: Result<String, u16>,
    last_request: Mutex<Option<CompletionRequest>>,
    last_transcription: Mutex<Option<TranscriptionRequest>>,
}

impl MockModelClient {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: Ok(reply.to_string()),
            last_request: Mutex::new(None),
            last_transcription: Mutex::new(None),
        }
    }

    /// Mock whose every call fails with the given HTTP status.
    pub fn failing(status: u16) -> Self {
        Self {
            reply: Err(status),
            last_request: Mutex::new(None),
            last_transcription: Mutex::new(None),
        }
    }

    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.last_request.lock().ok().and_then(|guard| guard.clone())
    }

    pub fn last_transcription(&self) -> Option<TranscriptionRequest> {
        self.last_transcription.lock().ok().and_then(|guard| guard.clone())
    }

    fn canned_reply(&self) -> Result<String, GenerationError> {
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(status) => Err(GenerationError::ServiceError {
                status: *status,
                body: "mock failure".to_string(),
            }),
        }
    }
}

impl ModelClient for MockModelClient {
    fn complete(&self, request: &CompletionRequest) -> Result<String, GenerationError> {
        if let Ok(mut guard) = self.last_request.lock() {
            *guard = Some(request.clone());
        }
        self.canned_reply()
    }

    fn transcribe(&self, request: &TranscriptionRequest) -> Result<String, GenerationError> {
        if let Ok(mut guard) = self.last_transcription.lock() {
            *guard = Some(request.clone());
        }
        self.canned_reply()
    }

    fn is_configured(&self) -> bool {
        true
    }
}
