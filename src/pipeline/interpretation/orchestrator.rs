use super::conditions::rank_conditions;
use super::findings::{extract_diagnosis, extract_image_findings};
use super::recommendations::filter_recommendations;
use super::severity::classify_severity;
use super::specialists::map_specialists;
use super::types::{Severity, SymptomEntry, TriageContext, TriageRecord};
use super::InterpretationError;

/// Apply every extractor to one model response and assemble the record.
///
/// Pure and synchronous. Each list field is bounded and non-empty on return;
/// the only failure is an empty response.
pub fn interpret_response(
    response: &str,
    context: &TriageContext,
) -> Result<TriageRecord, InterpretationError> {
    if response.trim().is_empty() {
        return Err(InterpretationError::EmptyModelOutput);
    }

    let (severity, score) = classify_severity(response);
    let diagnosis = extract_diagnosis(response);
    let image_findings = extract_image_findings(response);
    let recommendations = filter_recommendations(response, severity);
    let suggested_specialists = map_specialists(response, severity);
    let possible_conditions = rank_conditions(response, &diagnosis);
    let symptoms = echo_symptoms(&context.symptoms, &context.duration, severity);

    tracing::debug!(
        %severity,
        score,
        recommendations = recommendations.len(),
        specialists = suggested_specialists.len(),
        conditions = possible_conditions.len(),
        symptoms = symptoms.len(),
        "Response interpreted"
    );

    Ok(TriageRecord {
        image_findings,
        severity,
        score,
        diagnosis,
        recommendations,
        suggested_specialists,
        urgency_level: severity.urgency(),
        possible_conditions,
        symptoms,
    })
}

/// Split a comma-separated symptom string, trimming and dropping empties.
pub fn parse_symptom_list(symptoms: &str) -> Vec<String> {
    symptoms
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Snake-case identifier for a symptom name: "Chest Pain" → "chest_pain".
pub fn symptom_id(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("_")
}

fn echo_symptoms(symptoms: &str, duration: &str, severity: Severity) -> Vec<SymptomEntry> {
    parse_symptom_list(symptoms)
        .into_iter()
        .map(|name| SymptomEntry {
            id: symptom_id(&name),
            severity: severity.urgency(),
            duration: duration.trim().to_string(),
            name,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::interpretation::fallbacks::{
        default_recommendations, placeholder_condition, NO_IMAGE_FINDINGS,
    };
    use crate::pipeline::interpretation::types::UrgencyLevel;

    fn context(symptoms: &str, duration: &str) -> TriageContext {
        TriageContext {
            symptoms: symptoms.to_string(),
            duration: duration.to_string(),
            additional_info: String::new(),
        }
    }

    const STRUCTURED_REPLY: &str = "\
**Visual Findings:**
- Annular erythematous plaque with raised border
- Fine scaling at the margin

**Differential Diagnosis:**
1. Tinea corporis: highly likely given ring shape
2. Nummular eczema: possible
3. Psoriasis: less likely

**Severity:** Moderate, needs attention

**Recommendations:**
- Apply clotrimazole cream twice daily for 2 weeks
- Keep the area dry and avoid sharing towels
- Consult a dermatologist if no improvement in 2 weeks";

    #[test]
    fn emergency_scenario() {
        let response = "Patient shows Emergency symptoms. Score: 9. \
                        Likely cardiology issue, consult a cardiologist urgently.";
        let record = interpret_response(response, &context("chest pain", "1 hour")).unwrap();
        assert_eq!(record.severity, Severity::High);
        assert_eq!(record.score, 9);
        assert_eq!(record.urgency_level, UrgencyLevel::High);
        assert!(record.suggested_specialists.contains(&"Cardiologist".to_string()));
        assert!(record.recommendations.iter().any(|r| r.contains("consult")));
    }

    #[test]
    fn empty_output_is_a_failure() {
        assert_eq!(
            interpret_response("", &context("fever", "")),
            Err(InterpretationError::EmptyModelOutput)
        );
        assert_eq!(
            interpret_response(" \n\t", &context("fever", "")),
            Err(InterpretationError::EmptyModelOutput)
        );
    }

    #[test]
    fn short_unstructured_reply_uses_low_defaults() {
        let record = interpret_response("Probably nothing serious.", &context("fever, cough", "2 days"))
            .unwrap();
        assert_eq!(record.severity, Severity::Low);
        assert_eq!(record.recommendations, default_recommendations(Severity::Low));
        assert_eq!(record.possible_conditions, vec![placeholder_condition()]);
        assert_eq!(record.suggested_specialists, vec!["General Physician"]);
        assert_eq!(record.image_findings, NO_IMAGE_FINDINGS);
        assert_eq!(record.diagnosis, "");
    }

    #[test]
    fn structured_reply_fills_every_field() {
        let record = interpret_response(STRUCTURED_REPLY, &context("rash, itching", "1 week")).unwrap();

        assert_eq!(record.severity, Severity::Medium);
        assert_eq!(record.score, 5);
        assert_eq!(
            record.image_findings,
            "Visual Findings: Annular erythematous plaque with raised border Fine scaling at the margin"
        );
        assert!(record.diagnosis.contains("Differential Diagnosis:"));
        assert!(record.diagnosis.contains("Tinea corporis"));

        let names: Vec<_> = record.possible_conditions.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Tinea corporis", "Nummular eczema", "Psoriasis"]);
        let probabilities: Vec<_> = record.possible_conditions.iter().map(|c| c.probability).collect();
        assert_eq!(probabilities, vec![80, 60, 40]);

        assert_eq!(record.recommendations.len(), 3);
        assert_eq!(
            record.recommendations[0],
            "Apply clotrimazole cream twice daily for 2 weeks"
        );
        assert_eq!(record.suggested_specialists, vec!["Dermatologist"]);
    }

    #[test]
    fn symptoms_echoed_with_ids_and_severity() {
        let record = interpret_response(
            "Score: 8",
            &context(" Chest Pain , ,shortness of  breath,", " 3 hours "),
        )
        .unwrap();
        assert_eq!(record.symptoms.len(), 2);
        assert_eq!(record.symptoms[0].id, "chest_pain");
        assert_eq!(record.symptoms[0].name, "Chest Pain");
        assert_eq!(record.symptoms[0].severity, UrgencyLevel::High);
        assert_eq!(record.symptoms[0].duration, "3 hours");
        assert_eq!(record.symptoms[1].id, "shortness_of_breath");
    }

    #[test]
    fn list_invariants_hold_for_varied_inputs() {
        let inputs = [
            "x",
            STRUCTURED_REPLY,
            "Differential diagnosis:\n1. A long enough condition one\n2. A long enough condition two\n\
             3. A long enough condition three\n4. A long enough condition four\n5. A long enough condition five",
            "cardiology dermatology pediatrics neurology urology",
        ];
        for input in inputs {
            let record = interpret_response(input, &TriageContext::default()).unwrap();
            assert!((1..=5).contains(&record.recommendations.len()));
            assert!((1..=3).contains(&record.suggested_specialists.len()));
            assert!((1..=4).contains(&record.possible_conditions.len()));
            assert!(record.diagnosis.chars().count() <= 300);
            assert!(record.possible_conditions.iter().all(|c| c.name.chars().count() <= 60));
        }
    }

    #[test]
    fn wire_record_uses_contract_field_names() {
        let record = interpret_response(STRUCTURED_REPLY, &context("rash", "1 week")).unwrap();
        let json = serde_json::to_value(&record).unwrap();
        for field in [
            "image_findings",
            "severity",
            "diagnosis",
            "recommendations",
            "suggested_specialists",
            "urgency_level",
            "possible_conditions",
            "symptoms",
        ] {
            assert!(json.get(field).is_some(), "missing {field}");
        }
        assert_eq!(json["severity"], "MEDIUM");
        assert_eq!(json["urgency_level"], "medium");
        assert_eq!(json["symptoms"][0]["severity"], "medium");
    }

    #[test]
    fn symptom_parsing_drops_blank_entries() {
        assert_eq!(parse_symptom_list("fever, cough"), vec!["fever", "cough"]);
        assert!(parse_symptom_list(" , ,").is_empty());
        assert!(parse_symptom_list("").is_empty());
    }
}
