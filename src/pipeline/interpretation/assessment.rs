use super::fallbacks::fallbacks_for;
use super::helpers::truncate_chars;
use super::severity::classify_severity;
use super::types::QuickAssessment;
use super::InterpretationError;

const MAX_FALLBACK_SUMMARY_CHARS: usize = 200;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Capture {
    None,
    Summary,
    Action,
}

/// Interpret the reply to the quick triage prompt
/// ("Severity: / Score: / Summary: / Recommended Action:").
pub fn interpret_quick_assessment(response: &str) -> Result<QuickAssessment, InterpretationError> {
    if response.trim().is_empty() {
        return Err(InterpretationError::EmptyModelOutput);
    }

    let (severity, score) = classify_severity(response);

    let mut summary = String::new();
    let mut action = String::new();
    let mut capture = Capture::None;

    for line in response.lines() {
        let lower = line.to_lowercase();
        if lower.contains("summary:") {
            summary = text_after_label(line);
            capture = Capture::Summary;
        } else if lower.contains("recommended action:") || lower.contains("action:") {
            action = text_after_label(line);
            capture = Capture::Action;
        } else if !line.trim().is_empty() {
            let target = match capture {
                Capture::Summary => &mut summary,
                Capture::Action => &mut action,
                Capture::None => continue,
            };
            append_continuation(target, line.trim());
        }
    }

    if summary.is_empty() {
        tracing::debug!("No summary label; using leading response text");
        summary = leading_text(response);
    }
    if action.is_empty() {
        tracing::debug!(%severity, "No action label; using severity default");
        action = fallbacks_for(severity).recommended_action.to_string();
    }

    Ok(QuickAssessment {
        severity,
        score,
        summary,
        recommended_action: action,
    })
}

/// Text after the first colon, minus bold markers left by "**Label:**".
fn text_after_label(line: &str) -> String {
    line.split_once(':')
        .map(|(_, rest)| rest.trim().trim_start_matches('*').trim().to_string())
        .unwrap_or_default()
}

fn append_continuation(target: &mut String, line: &str) {
    if !target.is_empty() {
        target.push(' ');
    }
    target.push_str(line);
}

fn leading_text(response: &str) -> String {
    if response.chars().count() > MAX_FALLBACK_SUMMARY_CHARS {
        format!("{}...", truncate_chars(response, MAX_FALLBACK_SUMMARY_CHARS))
    } else {
        response.to_string()
    }
}
