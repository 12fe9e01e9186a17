//! Sentence segmentation.
//!
//! Documents are split with Unicode (UAX #29) sentence boundaries, then
//! boundaries that follow a known abbreviation ("Dr.", "Inc.", "U.S.") are
//! undone so those periods do not end a sentence.

use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

/// Splits plain text into an ordered sequence of sentences.
///
/// Calling `segment` again on the same text yields the same sentences.
pub trait SentenceSegmenter {
    fn segment(&self, text: &str) -> Vec<String>;
}

impl<F> SentenceSegmenter for F
where
    F: Fn(&str) -> Vec<String>,
{
    fn segment(&self, text: &str) -> Vec<String> {
        self(text)
    }
}

/// Default segmenter built on `unicode-segmentation`.
#[derive(Debug, Clone)]
pub struct UnicodeSentenceSegmenter {
    abbreviations: HashSet<String>,
    /// When true, a blank line always ends a sentence
    paragraph_breaks: bool,
}

impl UnicodeSentenceSegmenter {
    pub fn new() -> Self {
        // Common abbreviations that should NOT be treated as sentence boundaries
        let abbreviations = [
            "dr", "mr", "mrs", "ms", "prof", "sr", "jr",
            "inc", "ltd", "corp", "co", "llc", "no",
            "e.g", "i.e", "vs", "etc", "approx",
            "u.s", "u.k", "p.m", "a.m",
            "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec",
        ]
        .iter()
        .map(|abbrev| abbrev.to_string())
        .collect();

        UnicodeSentenceSegmenter {
            abbreviations,
            paragraph_breaks: false,
        }
    }

    /// Treat blank lines as hard sentence boundaries.
    ///
    /// Useful for extracted filings where headings and table rows carry no
    /// terminal punctuation.
    pub fn with_paragraph_breaks(mut self) -> Self {
        self.paragraph_breaks = true;
        self
    }

    pub fn with_custom_abbreviations(mut self, abbreviations: &[&str]) -> Self {
        for abbrev in abbreviations {
            self.abbreviations
                .insert(abbrev.trim_end_matches('.').to_lowercase());
        }
        self
    }

    fn ends_with_abbreviation(&self, sentence: &str) -> bool {
        let Some(stripped) = sentence.strip_suffix('.') else {
            return false;
        };
        let last_word = stripped
            .rsplit(|c: char| c.is_whitespace() || c == '(')
            .next()
            .unwrap_or("");
        self.abbreviations.contains(&last_word.to_lowercase())
    }

    fn segment_block(&self, block: &str, sentences: &mut Vec<String>) {
        let collapsed = block.split_whitespace().collect::<Vec<_>>().join(" ");
        let mut pending: Option<String> = None;

        for bound in collapsed.split_sentence_bounds() {
            let piece = bound.trim();
            if piece.is_empty() {
                continue;
            }

            let sentence = match pending.take() {
                Some(mut prefix) => {
                    prefix.push(' ');
                    prefix.push_str(piece);
                    prefix
                }
                None => piece.to_string(),
            };

            if self.ends_with_abbreviation(&sentence) {
                pending = Some(sentence);
            } else {
                sentences.push(sentence);
            }
        }

        if let Some(rest) = pending {
            sentences.push(rest);
        }
    }
}

impl Default for UnicodeSentenceSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceSegmenter for UnicodeSentenceSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        if self.paragraph_breaks {
            for block in split_paragraphs(text) {
                self.segment_block(block, &mut sentences);
            }
        } else {
            self.segment_block(text, &mut sentences);
        }
        sentences
    }
}

/// Split on lines that contain only whitespace.
fn split_paragraphs(text: &str) -> Vec<&str> {
    let mut blocks = Vec::new();
    let mut start = 0;
    let mut offset = 0;
    let mut previous_blank = false;

    for line in text.split_inclusive('\n') {
        let blank = line.trim().is_empty();
        if blank && !previous_blank {
            blocks.push(&text[start..offset]);
        }
        if blank {
            start = offset + line.len();
        }
        previous_blank = blank;
        offset += line.len();
    }
    blocks.push(&text[start..]);
    blocks
}
