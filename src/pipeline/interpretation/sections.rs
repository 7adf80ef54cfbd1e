//! Blank-line sectioning of model output.
//!
//! A section is a run of non-blank lines. Sections are scanning units only:
//! they borrow from the response and are produced fresh on every call.

/// A contiguous block of response text between blank lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section<'a> {
    text: &'a str,
}

impl<'a> Section<'a> {
    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn lines(&self) -> impl Iterator<Item = &'a str> {
        self.text.lines()
    }

    /// Whether the lower-cased section contains any of `keywords`.
    /// Keywords are expected in lower case.
    pub fn mentions_any(&self, keywords: &[&str]) -> bool {
        let lower = self.text.to_lowercase();
        keywords.iter().any(|k| lower.contains(k))
    }

    /// Length in characters, not bytes.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Iterator over the non-empty sections of a response, in document order.
#[derive(Debug, Clone)]
pub struct Sections<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Sections<'a> {
    type Item = Section<'a>;

    fn next(&mut self) -> Option<Section<'a>> {
        let mut start: Option<usize> = None;
        let mut end = 0;
        let mut offset = 0;

        for line in self.rest.split_inclusive('\n') {
            let blank = line.trim().is_empty();
            match (start, blank) {
                (None, true) => {}
                (None, false) => {
                    start = Some(offset);
                    end = offset + line.len();
                }
                (Some(_), false) => end = offset + line.len(),
                (Some(_), true) => break,
            }
            offset += line.len();
        }

        let Some(start) = start else {
            self.rest = "";
            return None;
        };

        let text = self.rest[start..end].trim_end();
        self.rest = &self.rest[end..];
        Some(Section { text })
    }
}

/// Split text on blank-line boundaries.
pub fn split_sections(text: &str) -> Sections<'_> {
    Sections { rest: text }
}

/// First section (in document order) that mentions any keyword.
pub fn locate_section<'a>(text: &'a str, keywords: &[&str]) -> Option<Section<'a>> {
    split_sections(text).find(|s| s.mentions_any(keywords))
}
