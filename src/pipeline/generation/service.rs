use std::sync::Arc;

use serde::Serialize;

use crate::pipeline::interpretation::{
    classify_script, detect_language, interpret_quick_assessment, interpret_response,
    parse_symptom_list, InterpretationError, Language, LanguageDetection, QuickAssessment,
    TriageContext, TriageRecord,
};

use super::prompt::{
    build_chat_messages, build_quick_triage_prompt, build_symptom_analysis_prompt,
    ANALYSIS_MAX_TOKENS, ANALYSIS_SYSTEM_PROMPT, CHAT_MAX_TOKENS, QUICK_TRIAGE_MAX_TOKENS,
    QUICK_TRIAGE_SYSTEM_PROMPT, TEMPERATURE,
};
use super::types::{
    AudioPayload, ChatMessage, CompletionRequest, HistoryEntry, ImagePayload, ModelClient,
    TranscriptionRequest,
};
use super::TriageError;

pub const DEFAULT_TEXT_MODEL: &str = "llama-3.3-70b-versatile";
pub const DEFAULT_VISION_MODEL: &str = "llama-3.2-11b-vision-preview";
pub const DEFAULT_SPEECH_MODEL: &str = "whisper-large-v3-turbo";

/// Which hosted models serve text, image and voice requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSelection {
    pub text: String,
    pub vision: String,
    pub speech: String,
}

impl Default for ModelSelection {
    fn default() -> Self {
        Self {
            text: DEFAULT_TEXT_MODEL.to_string(),
            vision: DEFAULT_VISION_MODEL.to_string(),
            speech: DEFAULT_SPEECH_MODEL.to_string(),
        }
    }
}

/// Nurse-assistant chat reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatReply {
    pub reply: String,
    pub language: Language,
}

/// Transcript of a voice message with its detected script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transcription {
    pub text: String,
    pub language: Language,
}

/// Triage operations: prompt the model, then interpret its reply.
///
/// Blocking; async callers run it on `spawn_blocking`.
pub struct TriageService {
    client: Arc<dyn ModelClient>,
    models: ModelSelection,
}

impl TriageService {
    pub fn new(client: Arc<dyn ModelClient>, models: ModelSelection) -> Self {
        Self { client, models }
    }

    pub fn models(&self) -> &ModelSelection {
        &self.models
    }

    /// Whether the model client has credentials.
    pub fn is_configured(&self) -> bool {
        self.client.is_configured()
    }

    /// Severity, score, summary and action for free-text symptoms.
    pub fn quick_assessment(&self, symptoms: &str) -> Result<QuickAssessment, TriageError> {
        if symptoms.trim().is_empty() {
            return Err(TriageError::EmptyInput);
        }

        let request = CompletionRequest {
            model: self.models.text.clone(),
            messages: vec![
                ChatMessage::system(QUICK_TRIAGE_SYSTEM_PROMPT),
                ChatMessage::user(build_quick_triage_prompt(symptoms)),
            ],
            temperature: TEMPERATURE,
            max_tokens: QUICK_TRIAGE_MAX_TOKENS,
        };

        let reply = self.client.complete(&request)?;
        let assessment = interpret_quick_assessment(&reply)?;

        tracing::info!(
            severity = %assessment.severity,
            score = assessment.score,
            "Quick assessment complete"
        );
        Ok(assessment)
    }

    /// Full structured analysis, optionally with a clinical image.
    ///
    /// At least one symptom is required even when an image is attached.
    pub fn analyze_symptoms(
        &self,
        context: &TriageContext,
        image: Option<&ImagePayload>,
    ) -> Result<TriageRecord, TriageError> {
        let symptoms = parse_symptom_list(&context.symptoms);
        if symptoms.is_empty() {
            return Err(TriageError::NoSymptoms);
        }

        let prompt = build_symptom_analysis_prompt(
            &symptoms,
            &context.duration,
            &context.additional_info,
            image.is_some(),
        );

        let request = match image {
            Some(image) => CompletionRequest {
                model: self.models.vision.clone(),
                messages: vec![ChatMessage::user_with_image(prompt, image)],
                temperature: TEMPERATURE,
                max_tokens: ANALYSIS_MAX_TOKENS,
            },
            None => CompletionRequest {
                model: self.models.text.clone(),
                messages: vec![
                    ChatMessage::system(ANALYSIS_SYSTEM_PROMPT),
                    ChatMessage::user(prompt),
                ],
                temperature: TEMPERATURE,
                max_tokens: ANALYSIS_MAX_TOKENS,
            },
        };

        tracing::info!(
            symptoms = symptoms.len(),
            with_image = image.is_some(),
            model = %request.model,
            "Analyzing symptoms"
        );

        let reply = self.client.complete(&request)?;
        let record = interpret_response(&reply, context)?;

        tracing::info!(
            severity = %record.severity,
            conditions = record.possible_conditions.len(),
            "Symptom analysis complete"
        );
        Ok(record)
    }

    /// Reply to the patient in the script they wrote in.
    pub fn chat(&self, message: &str, history: &[HistoryEntry]) -> Result<ChatReply, TriageError> {
        if message.trim().is_empty() {
            return Err(TriageError::EmptyInput);
        }

        let language = classify_script(message);
        let request = CompletionRequest {
            model: self.models.text.clone(),
            messages: build_chat_messages(message, history, language),
            temperature: TEMPERATURE,
            max_tokens: CHAT_MAX_TOKENS,
        };

        let reply = self.client.complete(&request)?;
        if reply.trim().is_empty() {
            return Err(InterpretationError::EmptyModelOutput.into());
        }

        tracing::debug!(%language, history = history.len(), "Chat reply generated");
        Ok(ChatReply { reply, language })
    }

    /// Voice message to text, tagged with the script of the transcript.
    ///
    /// An empty transcript is returned as-is (silence is not an error).
    pub fn transcribe(&self, audio: AudioPayload) -> Result<Transcription, TriageError> {
        if audio.bytes.is_empty() {
            return Err(TriageError::EmptyInput);
        }

        let request = TranscriptionRequest {
            model: self.models.speech.clone(),
            audio,
        };
        let text = self.client.transcribe(&request)?;
        let language = classify_script(&text);

        tracing::info!(
            %language,
            audio_bytes = request.audio.bytes.len(),
            "Voice message transcribed"
        );
        Ok(Transcription { text, language })
    }

    /// Script-based language detection; no model call.
    pub fn detect_language(&self, text: &str) -> LanguageDetection {
        detect_language(text)
    }
}
