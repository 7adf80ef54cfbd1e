//! Fixed fallback content, keyed by severity.
//!
//! All defaults the engine may emit live here. Nothing in this table is
//! derived from model output.

use super::types::{Condition, Severity};

/// Emitted as image findings when no findings section exists.
pub const NO_IMAGE_FINDINGS: &str = "No image provided for analysis";

/// Name of the synthesized single-entry condition list.
pub const PLACEHOLDER_CONDITION_NAME: &str = "Requires professional evaluation";

pub const PLACEHOLDER_CONDITION_PROBABILITY: u8 = 50;

const PLACEHOLDER_CONDITION_DESCRIPTION: &str =
    "No specific condition could be identified from the analysis. \
     A healthcare professional should examine the patient.";

/// The universal specialist fallback.
pub const GENERAL_PHYSICIAN: &str = "General Physician";

pub const EMERGENCY_MEDICINE: &str = "Emergency Medicine";

/// Per-tier defaults.
#[derive(Debug, Clone, Copy)]
pub struct SeverityFallbacks {
    pub recommendations: [&'static str; 3],
    pub specialists: &'static [&'static str],
    /// Single-sentence action used by the quick assessment.
    pub recommended_action: &'static str,
}

const HIGH_FALLBACKS: SeverityFallbacks = SeverityFallbacks {
    recommendations: [
        "Seek immediate medical attention at the nearest hospital or emergency facility",
        "Arrange transport now and consult an emergency doctor without delay",
        "Keep the patient still and monitor breathing and consciousness until help arrives",
    ],
    specialists: &[EMERGENCY_MEDICINE, GENERAL_PHYSICIAN],
    recommended_action: "Seek immediate medical attention.",
};

const MEDIUM_FALLBACKS: SeverityFallbacks = SeverityFallbacks {
    recommendations: [
        "Consult a doctor within the next 24 to 48 hours",
        "Monitor symptoms closely and note any changes or new symptoms",
        "Seek urgent care sooner if symptoms get worse",
    ],
    specialists: &[GENERAL_PHYSICIAN],
    recommended_action: "Consult with a doctor within 24 hours.",
};

const LOW_FALLBACKS: SeverityFallbacks = SeverityFallbacks {
    recommendations: [
        "Monitor symptoms at home and note any changes",
        "Rest well and drink plenty of fluids to stay hydrated",
        "Visit a health worker if symptoms persist or worsen",
    ],
    specialists: &[GENERAL_PHYSICIAN],
    recommended_action: "Monitor symptoms and rest. Seek care if symptoms worsen.",
};

pub fn fallbacks_for(severity: Severity) -> &'static SeverityFallbacks {
    match severity {
        Severity::High => &HIGH_FALLBACKS,
        Severity::Medium => &MEDIUM_FALLBACKS,
        Severity::Low => &LOW_FALLBACKS,
    }
}

pub fn default_recommendations(severity: Severity) -> Vec<String> {
    fallbacks_for(severity)
        .recommendations
        .iter()
        .map(|r| r.to_string())
        .collect()
}

pub fn default_specialists(severity: Severity) -> Vec<String> {
    fallbacks_for(severity)
        .specialists
        .iter()
        .map(|s| s.to_string())
        .collect()
}

pub fn placeholder_condition() -> Condition {
    Condition {
        name: PLACEHOLDER_CONDITION_NAME.to_string(),
        probability: PLACEHOLDER_CONDITION_PROBABILITY,
        description: PLACEHOLDER_CONDITION_DESCRIPTION.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Severity; 3] = [Severity::Low, Severity::Medium, Severity::High];

    #[test]
    fn every_tier_has_three_recommendations() {
        for severity in ALL {
            let recs = default_recommendations(severity);
            assert_eq!(recs.len(), 3);
            assert!(recs.iter().all(|r| r.len() > 15));
        }
    }

    #[test]
    fn high_tier_adds_emergency_medicine() {
        assert_eq!(
            default_specialists(Severity::High),
            vec!["Emergency Medicine", "General Physician"]
        );
        assert_eq!(default_specialists(Severity::Medium), vec!["General Physician"]);
        assert_eq!(default_specialists(Severity::Low), vec!["General Physician"]);
    }

    #[test]
    fn high_defaults_tell_the_patient_to_consult() {
        assert!(default_recommendations(Severity::High)
            .iter()
            .any(|r| r.contains("consult")));
    }

    #[test]
    fn placeholder_condition_is_fixed() {
        let c = placeholder_condition();
        assert_eq!(c.name, "Requires professional evaluation");
        assert_eq!(c.probability, 50);
    }

    #[test]
    fn quick_action_sentences_per_tier() {
        assert_eq!(
            fallbacks_for(Severity::High).recommended_action,
            "Seek immediate medical attention."
        );
        assert_eq!(
            fallbacks_for(Severity::Low).recommended_action,
            "Monitor symptoms and rest. Seek care if symptoms worsen."
        );
    }
}
