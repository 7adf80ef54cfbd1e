//! Prompt construction for the three conversations the service has
//! with the model: quick triage, full symptom analysis and nurse chat.

use crate::pipeline::interpretation::Language;

use super::types::{ChatMessage, HistoryEntry};

/// Sampling temperature for every request.
pub const TEMPERATURE: f32 = 0.7;
pub const QUICK_TRIAGE_MAX_TOKENS: u32 = 1024;
pub const ANALYSIS_MAX_TOKENS: u32 = 2048;
pub const CHAT_MAX_TOKENS: u32 = 512;

/// Prior chat turns forwarded as context.
pub const CHAT_HISTORY_WINDOW: usize = 6;

pub const QUICK_TRIAGE_SYSTEM_PROMPT: &str = "You are a compassionate AI medical triage \
assistant helping rural healthcare workers in India.";

pub const ANALYSIS_SYSTEM_PROMPT: &str = "You are an expert medical AI assistant \
specializing in diagnostic analysis for rural healthcare in India.";

const NOT_SPECIFIED: &str = "Not specified";
const NONE_PROVIDED: &str = "None provided";

/// User prompt asking for the labeled Severity/Score/Summary/Action reply.
pub fn build_quick_triage_prompt(symptoms: &str) -> String {
    format!(
        "You are an AI medical triage assistant for rural healthcare in India.\n\
         Analyze the following patient symptoms and provide:\n\
         1. A severity assessment (LOW, MEDIUM, or HIGH)\n\
         2. A severity score from 1-10\n\
         3. A brief summary of the condition\n\
         4. Recommended action for the patient\n\
         \n\
         Patient symptoms: {symptoms}\n\
         \n\
         Format your response as:\n\
         Severity: [LOW/MEDIUM/HIGH]\n\
         Score: [1-10]\n\
         Summary: [Brief medical summary]\n\
         Recommended Action: [What the patient should do]\n\
         \n\
         Be concise and clear. Focus on practical advice for rural settings."
    )
}

/// Full analysis prompt. The task block depends on whether an image
/// accompanies the request.
pub fn build_symptom_analysis_prompt(
    symptoms: &[String],
    duration: &str,
    additional_info: &str,
    with_image: bool,
) -> String {
    let symptoms = if symptoms.is_empty() {
        NOT_SPECIFIED.to_string()
    } else {
        symptoms.join(", ")
    };
    let duration = non_empty_or(duration, NOT_SPECIFIED);
    let additional_info = non_empty_or(additional_info, NONE_PROVIDED);

    let mut prompt = format!(
        "You are an expert AI medical diagnostic assistant analyzing patient symptoms and medical images.\n\
         \n\
         **Patient Information:**\n\
         - Symptoms: {symptoms}\n\
         - Duration: {duration}\n\
         - Additional Information: {additional_info}\n\
         \n"
    );

    if with_image {
        prompt.push_str(
            "**Medical Image Analysis Required:**\n\
             Analyze the provided medical image carefully and provide:\n\
             1. Detailed description of visible findings\n\
             2. Any abnormalities, lesions, or concerning features\n\
             3. Possible conditions based on image analysis\n",
        );
    } else {
        prompt.push_str(
            "**Analysis Task:**\n\
             Based on the symptoms provided, please provide:\n\
             1. Most likely diagnoses (top 3)\n\
             2. Severity assessment (Low/Medium/High/Emergency)\n\
             3. Recommended actions\n\
             4. Which medical specialists should be consulted\n\
             \n\
             Provide a comprehensive but concise analysis.",
        );
    }

    prompt
}

/// Sentence telling the model which language and script to answer in.
pub fn language_instruction(language: Language) -> &'static str {
    match language {
        Language::Tamil => {
            "The patient is speaking Tamil. Please respond in Tamil (தமிழ்) using Tamil script."
        }
        Language::Hindi => {
            "The patient is speaking Hindi. Please respond in Hindi (हिंदी) using Devanagari script."
        }
        Language::English => "The patient is speaking English. Please respond in English.",
    }
}

pub fn build_chat_system_prompt(language: Language) -> String {
    format!(
        "You are a compassionate AI Nurse Assistant helping patients in India. {}\n\
         \n\
         Guidelines:\n\
         - Be warm, empathetic, and supportive\n\
         - Ask relevant follow-up questions to understand symptoms better\n\
         - NEVER provide definitive diagnoses - always recommend consulting a doctor for serious concerns\n\
         - For minor issues, suggest home remedies and self-care\n\
         - For moderate/severe symptoms, strongly recommend seeing a doctor\n\
         - Be culturally sensitive to Indian healthcare context\n\
         - Keep responses concise (2-3 sentences unless more detail is needed)\n\
         - If patient mentions emergency symptoms (chest pain, difficulty breathing, severe bleeding), \
         immediately advise seeking emergency care\n\
         \n\
         Remember: You are a helpful assistant, not a replacement for professional medical care.",
        language_instruction(language)
    )
}

/// System prompt, then the usable tail of the history, then the new message.
///
/// The window is taken before filtering, so dropped entries still count
/// against it. Only "user" and "assistant" turns with content are kept.
pub fn build_chat_messages(
    message: &str,
    history: &[HistoryEntry],
    language: Language,
) -> Vec<ChatMessage> {
    let window_start = history.len().saturating_sub(CHAT_HISTORY_WINDOW);

    let mut messages = vec![ChatMessage::system(build_chat_system_prompt(language))];
    messages.extend(history[window_start..].iter().filter_map(|entry| {
        if entry.content.is_empty() {
            return None;
        }
        match entry.role.as_str() {
            "user" => Some(ChatMessage::user(entry.content.as_str())),
            "assistant" => Some(ChatMessage::assistant(entry.content.as_str())),
            _ => None,
        }
    }));
    messages.push(ChatMessage::user(message));
    messages
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}
