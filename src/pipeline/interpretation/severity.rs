use std::sync::LazyLock;

use regex::Regex;

use super::types::Severity;

/// Keywords that put a response in the HIGH tier.
pub const HIGH_SEVERITY_KEYWORDS: &[&str] =
    &["emergency", "critical", "severe", "urgent", "immediate"];

/// Keywords that put a response in the MEDIUM tier.
pub const MEDIUM_SEVERITY_KEYWORDS: &[&str] = &["moderate", "concerning", "attention"];

/// "score" followed by optional colons/whitespace and digits. Applied to
/// lower-cased text, so "Score: 9" and "SCORE 9" both match.
static SCORE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"score[:\s]*(\d+)").expect("Invalid score regex pattern"));

/// Classify response text into a severity tier and a 1–10 score.
///
/// Keywords decide first; an explicit in-range score overrides both values.
pub fn classify_severity(text: &str) -> (Severity, u8) {
    let lower = text.to_lowercase();

    let severity = keyword_severity(&lower);
    let mut result = (severity, severity.default_score());

    if let Some(score) = explicit_score(&lower) {
        tracing::debug!(score, keyword_tier = %severity, "Explicit score overrides keyword tier");
        result = (Severity::from_score(score), score);
    }

    result
}

fn keyword_severity(lower: &str) -> Severity {
    if HIGH_SEVERITY_KEYWORDS.iter().any(|k| lower.contains(k)) {
        Severity::High
    } else if MEDIUM_SEVERITY_KEYWORDS.iter().any(|k| lower.contains(k)) {
        Severity::Medium
    } else {
        Severity::Low
    }
}

/// First "score N" in the text, if N is within 1..=10. Only the first match
/// is considered; an out-of-range first match means no override at all.
fn explicit_score(lower: &str) -> Option<u8> {
    let digits = SCORE_PATTERN.captures(lower)?.get(1)?.as_str();
    match digits.parse::<u32>() {
        Ok(n) if (1..=10).contains(&n) => Some(n as u8),
        _ => {
            tracing::debug!(digits, "Ignoring out-of-range score");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_keywords_give_default_eight() {
        assert_eq!(classify_severity("This is an EMERGENCY"), (Severity::High, 8));
        assert_eq!(classify_severity("severe dehydration"), (Severity::High, 8));
    }

    #[test]
    fn medium_keywords_give_default_five() {
        assert_eq!(
            classify_severity("A moderate infection needing attention"),
            (Severity::Medium, 5)
        );
    }

    #[test]
    fn no_keywords_is_low_two() {
        assert_eq!(classify_severity("Mild cold, rest at home."), (Severity::Low, 2));
        assert_eq!(classify_severity(""), (Severity::Low, 2));
    }

    #[test]
    fn high_keywords_win_over_medium() {
        assert_eq!(
            classify_severity("moderate pain but urgent review"),
            (Severity::High, 8)
        );
    }

    #[test]
    fn explicit_score_overrides_contradicting_keyword() {
        assert_eq!(
            classify_severity("Moderate symptoms. Score: 9"),
            (Severity::High, 9)
        );
        assert_eq!(classify_severity("score:9 moderate"), (Severity::High, 9));
        assert_eq!(classify_severity("SCORE 9, moderate"), (Severity::High, 9));
    }

    #[test]
    fn explicit_score_can_lower_the_tier() {
        assert_eq!(classify_severity("Critical? No. Score: 3"), (Severity::Low, 3));
        assert_eq!(classify_severity("urgent. Score: 5"), (Severity::Medium, 5));
    }

    #[test]
    fn out_of_range_score_is_ignored() {
        assert_eq!(classify_severity("moderate. Score: 15"), (Severity::Medium, 5));
        assert_eq!(classify_severity("Score: 0"), (Severity::Low, 2));
    }

    #[test]
    fn huge_digit_run_is_ignored() {
        assert_eq!(
            classify_severity("score 99999999999999999999 severe"),
            (Severity::High, 8)
        );
    }

    #[test]
    fn boundary_scores() {
        assert_eq!(classify_severity("score 10"), (Severity::High, 10));
        assert_eq!(classify_severity("score 7"), (Severity::High, 7));
        assert_eq!(classify_severity("score 4"), (Severity::Medium, 4));
        assert_eq!(classify_severity("score 1"), (Severity::Low, 1));
    }

    #[test]
    fn classification_is_idempotent() {
        let text = "Concerning rash. Severity score: 6/10.";
        assert_eq!(classify_severity(text), classify_severity(text));
        assert_eq!(classify_severity(text), (Severity::Medium, 6));
    }
}
