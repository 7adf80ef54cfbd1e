use super::fallbacks::default_recommendations;
use super::helpers::strip_list_marker;
use super::sections::locate_section;
use super::types::Severity;

/// Section keywords for advice blocks.
pub const RECOMMENDATION_SECTION_KEYWORDS: &[&str] =
    &["recommendation", "management", "advice", "should do", "action"];

/// A kept line must contain at least one of these.
pub const ACTION_VERBS: &[&str] = &[
    "consult", "see", "visit", "avoid", "take", "apply", "monitor", "seek", "rest", "drink",
];

pub const MAX_RECOMMENDATIONS: usize = 5;

const MIN_RECOMMENDATION_CHARS: usize = 16;

/// Produce 1–5 actionable recommendations, or the severity defaults.
pub fn filter_recommendations(response: &str, severity: Severity) -> Vec<String> {
    let extracted = extract_recommendations(response);
    if extracted.is_empty() {
        tracing::debug!(%severity, "No actionable recommendations; using defaults");
        return default_recommendations(severity);
    }
    extracted
}

fn extract_recommendations(response: &str) -> Vec<String> {
    let Some(section) = locate_section(response, RECOMMENDATION_SECTION_KEYWORDS) else {
        return Vec::new();
    };

    section
        .lines()
        .map(strip_list_marker)
        .filter(|cleaned| cleaned.chars().count() >= MIN_RECOMMENDATION_CHARS)
        .filter(|cleaned| is_actionable(cleaned))
        .take(MAX_RECOMMENDATIONS)
        .collect()
}

fn is_actionable(line: &str) -> bool {
    let lower = line.to_lowercase();
    ACTION_VERBS.iter().any(|verb| lower.contains(verb))
}
