//! Small text utilities shared by the extractors.

/// First `max` characters of `text` (char-safe).
pub fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// Whether a trimmed line opens with a list marker: a digit, bullet,
/// asterisk or dash. "**Malaria**: ..." counts as a list item.
pub fn starts_with_list_marker(line: &str) -> bool {
    matches!(
        line.trim_start().chars().next(),
        Some(c) if c.is_ascii_digit() || matches!(c, '•' | '*' | '-')
    )
}

/// A cleaned line that is only a label, such as "Differential Diagnosis:".
pub fn is_heading(cleaned: &str) -> bool {
    cleaned.trim_end().ends_with(':')
}

/// Strip leading numbering, bullet glyphs and punctuation, then drop
/// Markdown bold markers. "2. **Malaria**: fever" → "Malaria: fever".
pub fn strip_list_marker(line: &str) -> String {
    line.trim()
        .trim_start_matches(|c: char| {
            c.is_ascii_digit()
                || c.is_whitespace()
                || matches!(c, '.' | ')' | '(' | ':' | '•' | '*' | '-' | '#' | '>' | '–')
        })
        .replace("**", "")
        .trim()
        .to_string()
}
