use base64::Engine;
use serde::{Deserialize, Serialize};

use super::GenerationError;

/// Chat-completions message role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

/// One part of a multimodal user message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageUrl {
    pub url: String,
}

/// Plain text, or text plus inline images.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: MessageContent,
}

impl ChatMessage {
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: MessageContent::Text(text.into()),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: MessageContent::Text(text.into()),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: MessageContent::Text(text.into()),
        }
    }

    /// User message carrying a prompt and one inline image.
    pub fn user_with_image(text: impl Into<String>, image: &ImagePayload) -> Self {
        Self {
            role: ChatRole::User,
            content: MessageContent::Parts(vec![
                ContentPart::Text { text: text.into() },
                ContentPart::ImageUrl {
                    image_url: ImageUrl {
                        url: image.data_url(),
                    },
                },
            ]),
        }
    }
}

/// Request body for an OpenAI-compatible `/chat/completions` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// An uploaded clinical image, sent inline as a data URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    pub bytes: Vec<u8>,
    /// MIME type; uploads without one are treated as JPEG.
    pub mime_type: String,
}

impl ImagePayload {
    pub fn new(bytes: Vec<u8>, mime_type: Option<&str>) -> Self {
        Self {
            bytes,
            mime_type: mime_type
                .filter(|m| m.starts_with("image/"))
                .unwrap_or("image/jpeg")
                .to_string(),
        }
    }

    pub fn data_url(&self) -> String {
        let encoded = base64::engine::general_purpose::STANDARD.encode(&self.bytes);
        format!("data:{};base64,{}", self.mime_type, encoded)
    }
}

/// A recorded voice message. The mobile client records `.m4a`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioPayload {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub mime_type: String,
}

impl AudioPayload {
    pub fn new(bytes: Vec<u8>, file_name: Option<&str>, mime_type: Option<&str>) -> Self {
        Self {
            bytes,
            file_name: file_name
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .unwrap_or("voice.m4a")
                .to_string(),
            mime_type: mime_type
                .filter(|m| m.starts_with("audio/") || m.starts_with("video/"))
                .unwrap_or("audio/m4a")
                .to_string(),
        }
    }
}

/// Multipart request for an OpenAI-compatible `/audio/transcriptions` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptionRequest {
    pub model: String,
    pub audio: AudioPayload,
}

/// One prior chat turn supplied by the client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HistoryEntry {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub content: String,
}

/// Generative model service abstraction (allows mocking).
///
/// Returns the completion text; an absent completion is an empty string.
pub trait ModelClient: Send + Sync {
    fn complete(&self, request: &CompletionRequest) -> Result<String, GenerationError>;

    /// Speech to text. Returns the transcript, possibly empty.
    fn transcribe(&self, request: &TranscriptionRequest) -> Result<String, GenerationError>;

    /// Whether credentials are present. Does not contact the service.
    fn is_configured(&self) -> bool;
}
