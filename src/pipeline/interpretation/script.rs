//! Script-based language classification for patient text.
//!
//! Picks the response language from the Unicode block of the input: any Tamil
//! code point wins, then any Devanagari code point, else English. There is no
//! mixed-script handling; Tamil is always checked first.

use super::types::{Language, LanguageDetection};

/// Tamil block, U+0B80–U+0BFF.
const TAMIL_BLOCK: std::ops::RangeInclusive<char> = '\u{0B80}'..='\u{0BFF}';

/// Devanagari block, U+0900–U+097F.
const DEVANAGARI_BLOCK: std::ops::RangeInclusive<char> = '\u{0900}'..='\u{097F}';

/// Confidence reported for English. A constant, not a measurement.
pub const ENGLISH_CONFIDENCE: f32 = 0.8;

/// Classify text by script. First match wins.
pub fn classify_script(text: &str) -> Language {
    if text.chars().any(|c| TAMIL_BLOCK.contains(&c)) {
        Language::Tamil
    } else if text.chars().any(|c| DEVANAGARI_BLOCK.contains(&c)) {
        Language::Hindi
    } else {
        Language::English
    }
}

/// Classify text and report the share of code points in the winning block.
pub fn detect_language(text: &str) -> LanguageDetection {
    let language = classify_script(text);
    let total = text.chars().count();

    let block = match language {
        Language::Tamil => &TAMIL_BLOCK,
        Language::Hindi => &DEVANAGARI_BLOCK,
        Language::English => {
            return LanguageDetection {
                language,
                confidence: ENGLISH_CONFIDENCE,
            }
        }
    };

    // total > 0 here: a non-English verdict needs at least one matching char
    let matching = count_in_block(text, block);
    LanguageDetection {
        language,
        confidence: matching as f32 / total as f32,
    }
}

fn count_in_block(text: &str, block: &std::ops::RangeInclusive<char>) -> usize {
    text.chars().filter(|c| block.contains(c)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tamil_text_detected() {
        assert_eq!(classify_script("எனக்கு காய்ச்சல்"), Language::Tamil);
    }

    #[test]
    fn hindi_text_detected() {
        assert_eq!(classify_script("मुझे बुखार है"), Language::Hindi);
    }

    #[test]
    fn latin_text_is_english() {
        assert_eq!(classify_script("I have a fever since two days"), Language::English);
    }

    #[test]
    fn tamil_wins_inside_latin_text() {
        assert_eq!(classify_script("fever and காய்ச்சல் since monday"), Language::Tamil);
    }

    #[test]
    fn tamil_precedes_hindi_when_both_present() {
        assert_eq!(classify_script("बुखार காய்ச்சல்"), Language::Tamil);
        assert_eq!(classify_script("காய்ச்சல் बुखार"), Language::Tamil);
    }

    #[test]
    fn empty_string_is_english_with_fixed_confidence() {
        let detection = detect_language("");
        assert_eq!(detection.language, Language::English);
        assert!((detection.confidence - 0.8).abs() < f32::EPSILON);
    }

    #[test]
    fn english_confidence_is_constant() {
        let detection = detect_language("headache");
        assert!((detection.confidence - ENGLISH_CONFIDENCE).abs() < f32::EPSILON);
    }

    #[test]
    fn confidence_is_block_share_of_code_points() {
        let detection = detect_language("बुखार abc");
        assert_eq!(detection.language, Language::Hindi);
        let expected = count_in_block("बुखार abc", &DEVANAGARI_BLOCK) as f32
            / "बुखार abc".chars().count() as f32;
        assert!((detection.confidence - expected).abs() < 1e-6);
        assert!(detection.confidence > 0.0 && detection.confidence < 1.0);
    }

    #[test]
    fn pure_tamil_has_full_confidence() {
        let detection = detect_language("தமிழ்");
        assert!((detection.confidence - 1.0).abs() < 1e-6);
    }
}
