use super::fallbacks::default_specialists;
use super::types::Severity;

/// Maximum specialists in an output record.
pub const MAX_SPECIALISTS: usize = 3;

/// Ordered substring → specialist table.
#[derive(Debug, Clone, Copy)]
pub struct KeywordTable {
    /// Bumped on every vocabulary change; reported by `/health`.
    pub version: u32,
    pub entries: &'static [(&'static str, &'static str)],
}

/// Specialist vocabulary. Table order is output order. Keywords are matched
/// as plain substrings of the lower-cased response, so they are stems
/// ("cardiol" hits "cardiology" and "cardiologist").
pub const SPECIALIST_TABLE: KeywordTable = KeywordTable {
    version: 1,
    entries: &[
        ("cardiol", "Cardiologist"),
        ("dermato", "Dermatologist"),
        ("pediatr", "Pediatrician"),
        ("paediatr", "Pediatrician"),
        ("orthoped", "Orthopedist"),
        ("orthopaed", "Orthopedist"),
        ("psychiat", "Psychiatrist"),
        ("neurolog", "Neurologist"),
        ("gynecolog", "Gynecologist"),
        ("gynaecolog", "Gynecologist"),
        ("obstetric", "Gynecologist"),
        ("urolog", "Urologist"),
        ("gastroenterolog", "Gastroenterologist"),
        ("pulmonolog", "Pulmonologist"),
        ("ophthalmolog", "Ophthalmologist"),
        ("endocrinolog", "Endocrinologist"),
        ("nephrolog", "Nephrologist"),
        ("otolaryngolog", "ENT Specialist"),
        ("ent specialist", "ENT Specialist"),
        ("emergency medicine", "Emergency Medicine"),
        ("emergency physician", "Emergency Medicine"),
        ("general physician", "General Physician"),
        ("primary care", "General Physician"),
    ],
};

/// Specialists mentioned in the response, de-duplicated, in table order,
/// capped at [`MAX_SPECIALISTS`]. Falls back per severity when nothing matches.
pub fn map_specialists(response: &str, severity: Severity) -> Vec<String> {
    let found = match_specialists(&response.to_lowercase(), &SPECIALIST_TABLE);

    if found.is_empty() {
        tracing::debug!(
            %severity,
            table_version = SPECIALIST_TABLE.version,
            "No specialist keywords; using fallback"
        );
        return default_specialists(severity);
    }
    tracing::debug!(
        count = found.len(),
        table_version = SPECIALIST_TABLE.version,
        "Specialists matched"
    );
    found
}

/// Scan `lower` against `table`. Empty when nothing matches.
pub fn match_specialists(lower: &str, table: &KeywordTable) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for (keyword, title) in table.entries {
        if found.len() == MAX_SPECIALISTS {
            break;
        }
        if lower.contains(keyword) && !found.iter().any(|f| f == title) {
            found.push(title.to_string());
        }
    }
    found
}
