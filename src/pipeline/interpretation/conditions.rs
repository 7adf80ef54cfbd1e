use super::fallbacks::placeholder_condition;
use super::helpers::{is_heading, starts_with_list_marker, strip_list_marker, truncate_chars};
use super::sections::locate_section;
use super::types::Condition;

/// Section keywords for a dedicated differential-diagnosis block.
pub const CONDITION_SECTION_KEYWORDS: &[&str] =
    &["differential diagnosis", "possible condition", "likely diagnos"];

/// Cap for conditions read from a list.
pub const MAX_LISTED_CONDITIONS: usize = 4;

/// Cap for conditions derived from diagnosis sentences.
pub const MAX_DIAGNOSIS_CONDITIONS: usize = 3;

const MAX_LISTED_NAME_CHARS: usize = 60;
const MAX_DIAGNOSIS_NAME_CHARS: usize = 50;

/// Heuristic probabilities by intensity wording. Uncalibrated.
pub mod condition_probability {
    pub const STRONG: u8 = 80;
    pub const DEFAULT: u8 = 70;
    pub const POSSIBLE: u8 = 60;
    pub const WEAK: u8 = 40;

    /// First diagnosis-sentence probability; each later one drops by `DIAGNOSIS_STEP`.
    pub const DIAGNOSIS_START: u8 = 75;
    pub const DIAGNOSIS_STEP: u8 = 15;
}

/// Produce 1–4 candidate conditions.
///
/// Reads list items from a differential-diagnosis section first, then falls
/// back to sentences of `diagnosis`, then to the placeholder condition.
pub fn rank_conditions(response: &str, diagnosis: &str) -> Vec<Condition> {
    let listed = listed_conditions(response);
    if !listed.is_empty() {
        return listed;
    }

    let derived = diagnosis_conditions(diagnosis);
    if !derived.is_empty() {
        tracing::debug!(count = derived.len(), "Conditions derived from diagnosis text");
        return derived;
    }

    tracing::warn!("No conditions extractable; using placeholder");
    vec![placeholder_condition()]
}

fn listed_conditions(response: &str) -> Vec<Condition> {
    let Some(section) = locate_section(response, CONDITION_SECTION_KEYWORDS) else {
        return Vec::new();
    };

    section
        .lines()
        .filter(|line| starts_with_list_marker(line))
        .map(strip_list_marker)
        .filter(|cleaned| !is_heading(cleaned))
        .filter(|cleaned| cleaned.chars().count() > 10)
        .take(MAX_LISTED_CONDITIONS)
        .map(|cleaned| Condition {
            name: condition_name(&cleaned),
            probability: intensity_probability(&cleaned),
            description: cleaned,
        })
        .collect()
}

/// Text before the first colon, else the first 60 characters.
fn condition_name(cleaned: &str) -> String {
    match cleaned.split_once(':') {
        Some((head, _)) if !head.trim().is_empty() => {
            truncate_chars(head.trim(), MAX_LISTED_NAME_CHARS)
        }
        _ => truncate_chars(cleaned, MAX_LISTED_NAME_CHARS),
    }
}

/// Probability from intensity words. "unlikely" is tested before "likely",
/// since the former contains the latter.
pub fn intensity_probability(line: &str) -> u8 {
    use condition_probability::*;

    let lower = line.to_lowercase();
    if lower.contains("unlikely") || lower.contains("less likely") {
        WEAK
    } else if lower.contains("high") || lower.contains("likely") {
        STRONG
    } else if lower.contains("possible") || lower.contains("consider") {
        POSSIBLE
    } else {
        DEFAULT
    }
}

fn diagnosis_conditions(diagnosis: &str) -> Vec<Condition> {
    use condition_probability::{DIAGNOSIS_START, DIAGNOSIS_STEP};

    diagnosis
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|segment| segment.chars().count() > 15)
        .take(MAX_DIAGNOSIS_CONDITIONS)
        .enumerate()
        .map(|(i, segment)| Condition {
            name: truncate_chars(segment, MAX_DIAGNOSIS_NAME_CHARS),
            probability: DIAGNOSIS_START - DIAGNOSIS_STEP * i as u8,
            description: segment.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const DIFFERENTIAL: &str = "Assessment of the patient.\n\n\
        Differential Diagnosis:\n\
        1. **Malaria**: high fever with chills, likely given the region\n\
        2. Dengue fever: possible, check platelet count\n\
        3. Typhoid: less likely without abdominal pain\n\
        4. Viral upper respiratory infection\n\
        5. Leptospirosis: consider if exposed to floodwater\n\
        - flu\n\n\
        Recommendations:\n- Rest";

    #[test]
    fn reads_listed_conditions_in_order() {
        let conditions = rank_conditions(DIFFERENTIAL, "");
        assert_eq!(conditions.len(), 4);
        assert_eq!(conditions[0].name, "Malaria");
        assert_eq!(conditions[0].probability, 80);
        assert_eq!(conditions[1].name, "Dengue fever");
        assert_eq!(conditions[1].probability, 60);
        assert_eq!(conditions[2].name, "Typhoid");
        assert_eq!(conditions[2].probability, 40);
        assert_eq!(conditions[3].name, "Viral upper respiratory infection");
        assert_eq!(conditions[3].probability, 70);
    }

    #[test]
    fn description_is_cleaned_line() {
        let conditions = rank_conditions(DIFFERENTIAL, "");
        assert_eq!(
            conditions[0].description,
            "Malaria: high fever with chills, likely given the region"
        );
    }

    #[test]
    fn bold_lines_are_list_items() {
        let text = "Differential diagnosis:\n\
            **Malaria**: high fever likely given region\n\
            **Dengue fever**: possible, check platelets";
        let conditions = rank_conditions(text, "");
        assert_eq!(conditions.len(), 2);
        assert_eq!(conditions[0].name, "Malaria");
        assert_eq!(conditions[0].probability, 80);
        assert_eq!(conditions[1].name, "Dengue fever");
        assert_eq!(conditions[1].probability, 60);
    }

    #[test]
    fn bold_heading_is_not_a_condition() {
        let text = "**Differential Diagnosis:**\n\
            * Tinea corporis: ring-shaped plaque with scaling";
        let conditions = rank_conditions(text, "");
        assert_eq!(conditions.len(), 1);
        assert_eq!(conditions[0].name, "Tinea corporis");
        assert_eq!(conditions[0].probability, 70);
    }

    #[test]
    fn short_list_items_are_skipped() {
        let text = "Possible conditions\n- flu\n- Common cold with mild cough";
        let conditions = rank_conditions(text, "");
        assert_eq!(conditions.len(), 1);
        assert_eq!(conditions[0].name, "Common cold with mild cough");
    }

    #[test]
    fn unmarked_lines_are_ignored() {
        let text = "Likely diagnosis\nGastroenteritis from contaminated water\n* Food poisoning: possible";
        let conditions = rank_conditions(text, "");
        assert_eq!(conditions.len(), 1);
        assert_eq!(conditions[0].name, "Food poisoning");
    }

    #[test]
    fn name_without_colon_is_first_sixty_chars() {
        let long = format!("- {}", "a".repeat(80));
        let text = format!("Differential diagnosis\n{long}");
        let conditions = rank_conditions(&text, "");
        assert_eq!(conditions[0].name.chars().count(), 60);
        assert_eq!(conditions[0].description.chars().count(), 80);
    }

    #[test]
    fn unlikely_is_not_read_as_likely() {
        assert_eq!(intensity_probability("Appendicitis: unlikely"), 40);
        assert_eq!(intensity_probability("Appendicitis: likely"), 80);
        assert_eq!(intensity_probability("High probability of flu"), 80);
        assert_eq!(intensity_probability("Consider anaemia"), 60);
        assert_eq!(intensity_probability("Anaemia"), 70);
    }

    #[test]
    fn falls_back_to_diagnosis_sentences() {
        let diagnosis = "Symptoms suggest a viral fever. Ok. Dehydration is also a concern! \
                         Monitor for dengue warning signs? Fourth sentence that is long enough.";
        let conditions = rank_conditions("no list here", diagnosis);
        assert_eq!(conditions.len(), 3);
        assert_eq!(conditions[0].name, "Symptoms suggest a viral fever");
        assert_eq!(conditions[0].probability, 75);
        assert_eq!(conditions[1].name, "Dehydration is also a concern");
        assert_eq!(conditions[1].probability, 60);
        assert_eq!(conditions[2].probability, 45);
    }

    #[test]
    fn diagnosis_names_capped_at_fifty_chars() {
        let diagnosis = "b".repeat(120);
        let conditions = rank_conditions("", &diagnosis);
        assert_eq!(conditions[0].name.chars().count(), 50);
        assert_eq!(conditions[0].description.chars().count(), 120);
    }

    #[test]
    fn section_without_list_uses_diagnosis_fallback() {
        let text = "Differential diagnosis is difficult without examination.";
        let conditions = rank_conditions(text, "Probably a seasonal viral illness");
        assert_eq!(conditions.len(), 1);
        assert_eq!(conditions[0].probability, 75);
    }

    #[test]
    fn placeholder_when_nothing_found() {
        let conditions = rank_conditions("Take rest.", "");
        assert_eq!(conditions, vec![placeholder_condition()]);
    }

    #[test]
    fn never_empty_for_non_empty_diagnosis() {
        for diagnosis in ["x", "short one.", "A reasonably long diagnosis sentence here"] {
            let conditions = rank_conditions("", diagnosis);
            assert!(!conditions.is_empty());
            assert!(conditions.len() <= MAX_LISTED_CONDITIONS);
        }
    }
}
