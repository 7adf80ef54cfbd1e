use serde::{Deserialize, Serialize};

/// Generates a closed enum with a fixed wire string per variant.
macro_rules! str_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

str_enum!(
    /// Coarse triage bucket.
    Severity {
        Low => "LOW",
        Medium => "MEDIUM",
        High => "HIGH",
    }
);

str_enum!(
    /// Lower-case mirror of [`Severity`], used in output records only.
    UrgencyLevel {
        Low => "low",
        Medium => "medium",
        High => "high",
    }
);

str_enum!(
    /// Response language picked from the script of the input.
    Language {
        Tamil => "ta",
        Hindi => "hi",
        English => "en",
    }
);

impl Severity {
    /// Score assigned when severity comes from keywords alone.
    pub fn default_score(&self) -> u8 {
        match self {
            Severity::High => 8,
            Severity::Medium => 5,
            Severity::Low => 2,
        }
    }

    /// Tier implied by an explicit score (caller guarantees 1..=10).
    pub fn from_score(score: u8) -> Self {
        if score >= 7 {
            Severity::High
        } else if score >= 4 {
            Severity::Medium
        } else {
            Severity::Low
        }
    }

    pub fn urgency(&self) -> UrgencyLevel {
        match self {
            Severity::High => UrgencyLevel::High,
            Severity::Medium => UrgencyLevel::Medium,
            Severity::Low => UrgencyLevel::Low,
        }
    }
}

/// Script classifier output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LanguageDetection {
    pub language: Language,
    /// In [0, 1]. Fixed constant for English.
    pub confidence: f32,
}

/// One candidate condition with a heuristic probability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Condition {
    pub name: String,
    /// 0–100.
    pub probability: u8,
    pub description: String,
}

/// Echo of one caller-supplied symptom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymptomEntry {
    /// Snake-case identifier derived from the name.
    pub id: String,
    pub name: String,
    pub severity: UrgencyLevel,
    pub duration: String,
}

/// Request-side context the engine needs besides the model output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriageContext {
    /// Comma-separated symptom list as typed by the health worker.
    pub symptoms: String,
    pub duration: String,
    pub additional_info: String,
}

/// Terminal output of one interpretation pass. Never mutated after assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriageRecord {
    pub image_findings: String,
    pub severity: Severity,
    /// Kept for callers; not part of the wire record.
    #[serde(skip)]
    pub score: u8,
    pub diagnosis: String,
    pub recommendations: Vec<String>,
    pub suggested_specialists: Vec<String>,
    pub urgency_level: UrgencyLevel,
    pub possible_conditions: Vec<Condition>,
    pub symptoms: Vec<SymptomEntry>,
}

/// Result of the single-text quick triage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickAssessment {
    pub severity: Severity,
    pub score: u8,
    pub summary: String,
    pub recommended_action: String,
}
