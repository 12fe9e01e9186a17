//! Section markers and extraction.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

/// "Item 7 ... Management's Discussion and Analysis of Financial Condition and
/// Results of Operations The ... Item 7A", with flexible whitespace.
static MDNA_PATTERN: Lazy<SectionPattern> = Lazy::new(|| {
    SectionPattern::new(
        r"Item\s*7[\.\s]*Management['’]s\s*Discussion\s*and\s*Analysis\s*of\s*Financial\s*Condition\s*and\s*Results\s*of\s*Operations\s*The",
        r"Item\s*7A",
    )
    .expect("MD&A pattern is valid")
});

/// Outcome of looking for a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extraction<'a> {
    /// The section text, start marker through end marker, trimmed
    Found(&'a str),
    /// The section markers are absent
    SectionNotFound,
}

impl<'a> Extraction<'a> {
    pub fn is_found(&self) -> bool {
        matches!(self, Extraction::Found(_))
    }

    /// The section text, or `""` when not found, so downstream aggregation
    /// sees an empty document.
    pub fn text(&self) -> &'a str {
        match *self {
            Extraction::Found(text) => text,
            Extraction::SectionNotFound => "",
        }
    }

    pub fn found(&self) -> Option<&'a str> {
        match *self {
            Extraction::Found(text) => Some(text),
            Extraction::SectionNotFound => None,
        }
    }
}

/// A case-insensitive start/end marker pair.
///
/// The match runs from the first start marker to the nearest end marker after
/// it, across line breaks.
#[derive(Debug, Clone)]
pub struct SectionPattern {
    regex: Regex,
}

impl SectionPattern {
    /// Build from two regular expressions.
    pub fn new(start: &str, end: &str) -> Result<Self, regex::Error> {
        let regex = RegexBuilder::new(&format!("(?:{}).*?(?:{})", start, end))
            .case_insensitive(true)
            .dot_matches_new_line(true)
            .build()?;
        Ok(Self { regex })
    }

    /// The MD&A section ending at "Item 7A".
    pub fn mdna() -> &'static SectionPattern {
        &MDNA_PATTERN
    }

    pub fn extract<'a>(&self, text: &'a str) -> Extraction<'a> {
        match self.regex.find(text) {
            Some(found) => {
                tracing::debug!(
                    start = found.start(),
                    end = found.end(),
                    "located section"
                );
                Extraction::Found(found.as_str().trim())
            }
            None => {
                tracing::debug!("section markers not found");
                Extraction::SectionNotFound
            }
        }
    }
}

/// Extract the MD&A section with the standard markers.
pub fn extract_mdna(text: &str) -> Extraction<'_> {
    SectionPattern::mdna().extract(text)
}
