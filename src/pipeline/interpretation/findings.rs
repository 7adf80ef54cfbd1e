//! Free-text fields: image findings and diagnosis.
//!
//! Both are copied out of the response, never synthesized. A miss yields the
//! sentinel (findings) or an empty string (diagnosis).

use super::fallbacks::NO_IMAGE_FINDINGS;
use super::helpers::truncate_chars;
use super::sections::{locate_section, split_sections};

pub const FINDINGS_SECTION_KEYWORDS: &[&str] = &[
    "visual finding",
    "image analysis",
    "visible",
    "observed in image",
    "clinical image",
];

pub const DIAGNOSIS_SECTION_KEYWORDS: &[&str] = &[
    "differential diagnosis",
    "likely condition",
    "diagnosis:",
    "clinical impression",
];

const MAX_FINDINGS_LINES: usize = 3;

/// Sections shorter than this are not used as an unlabeled diagnosis.
const MIN_UNLABELED_DIAGNOSIS_CHARS: usize = 51;

pub const MAX_DIAGNOSIS_CHARS: usize = 300;

/// First three text lines of the findings section, or the sentinel.
pub fn extract_image_findings(response: &str) -> String {
    let Some(section) = locate_section(response, FINDINGS_SECTION_KEYWORDS) else {
        return NO_IMAGE_FINDINGS.to_string();
    };

    let lines: Vec<String> = section
        .lines()
        .map(strip_markup)
        .filter(|line| !line.is_empty())
        .take(MAX_FINDINGS_LINES)
        .collect();

    if lines.is_empty() {
        return NO_IMAGE_FINDINGS.to_string();
    }
    lines.join(" ")
}

/// Labeled diagnosis section, else the first substantial section, flattened
/// to one line and capped at 300 characters. Empty when neither exists.
pub fn extract_diagnosis(response: &str) -> String {
    let section = locate_section(response, DIAGNOSIS_SECTION_KEYWORDS).or_else(|| {
        split_sections(response).find(|s| s.char_len() >= MIN_UNLABELED_DIAGNOSIS_CHARS)
    });

    let Some(section) = section else {
        tracing::debug!("No diagnosis section found");
        return String::new();
    };

    let flattened = section
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    truncate_chars(&flattened, MAX_DIAGNOSIS_CHARS)
}

/// Remove heading, emphasis, quote and rule characters around a line.
fn strip_markup(line: &str) -> String {
    line.trim()
        .trim_matches(|c: char| {
            c.is_whitespace() || matches!(c, '#' | '*' | '_' | '`' | '>' | '=' | '-' | '•')
        })
        .replace("**", "")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn findings_take_first_three_text_lines() {
        let response = "Summary line.\n\n\
            ### Visual Findings\n\
            ---\n\
            - Circular red patch on forearm\n\
            - Raised scaly border\n\
            - Central clearing\n\
            - Fourth line ignored";
        assert_eq!(
            extract_image_findings(response),
            "Visual Findings Circular red patch on forearm Raised scaly border"
        );
    }

    #[test]
    fn findings_sentinel_when_no_section() {
        assert_eq!(
            extract_image_findings("Fever and cough for two days."),
            "No image provided for analysis"
        );
    }

    #[test]
    fn findings_match_visible_keyword() {
        let response = "A visible rash covers the lower legs.";
        assert_eq!(extract_image_findings(response), response);
    }

    #[test]
    fn labeled_diagnosis_section_preferred() {
        let response = "This opening paragraph is long enough to count as a diagnosis on its own merit.\n\n\
                        Clinical impression\nAcute gastroenteritis.";
        assert_eq!(
            extract_diagnosis(response),
            "Clinical impression Acute gastroenteritis."
        );
    }

    #[test]
    fn diagnosis_colon_keyword() {
        let response = "Intro\n\nDiagnosis: Tension headache";
        assert_eq!(extract_diagnosis(response), "Diagnosis: Tension headache");
    }

    #[test]
    fn unlabeled_diagnosis_needs_more_than_fifty_chars() {
        let short = "Looks like a common cold, rest at home.";
        assert_eq!(extract_diagnosis(short), "");

        let long = "Short intro.\n\nThe presentation is consistent with a seasonal viral fever in an adult.";
        assert_eq!(
            extract_diagnosis(long),
            "The presentation is consistent with a seasonal viral fever in an adult."
        );
    }

    #[test]
    fn diagnosis_truncated_to_three_hundred_chars() {
        let response = format!("Diagnosis: {}", "x".repeat(500));
        assert_eq!(extract_diagnosis(&response).chars().count(), 300);
    }

    #[test]
    fn strip_markup_removes_headings_and_rules() {
        assert_eq!(strip_markup("## **Image Analysis**"), "Image Analysis");
        assert_eq!(strip_markup("---"), "");
        assert_eq!(strip_markup("> quoted text"), "quoted text");
    }
}
