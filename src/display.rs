use crate::aggregate::ClassifiedSentence;
use crate::classifier::Classification;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const SPACE_PADDING: usize = 2;
const FLAG_WIDTH: usize = 3;
const TOPIC_WIDTH: usize = 6;

/// Renders classified sentences as an aligned table.
///
/// ```text
/// FLS  UNC  TOPIC   SENTENCE
/// yes  yes  UnitCM  We anticipate the price might be uncertain.
///                   ╰ fls: anticipate, unc: uncertain, topic: price
/// no   no   -       Sales were flat.
/// ```
pub struct ClassificationDisplay<'a> {
    sentences: &'a [ClassifiedSentence],
    show_evidence: bool,
    max_sentence_width: Option<usize>,
}

impl<'a> ClassificationDisplay<'a> {
    pub fn new(sentences: &'a [ClassifiedSentence]) -> Self {
        ClassificationDisplay {
            sentences,
            show_evidence: false,
            max_sentence_width: None,
        }
    }

    /// Add a line under each sentence naming the terms that matched.
    pub fn include_evidence(&mut self) -> &mut Self {
        self.show_evidence = true;
        self
    }

    /// Truncate sentences wider than `width` display columns.
    pub fn max_sentence_width(&mut self, width: usize) -> &mut Self {
        self.max_sentence_width = Some(width);
        self
    }

    fn sentence_column(&self, text: &str) -> String {
        match self.max_sentence_width {
            Some(max) if UnicodeWidthStr::width(text) > max => truncate_to_width(text, max),
            _ => text.to_string(),
        }
    }
}

fn flag(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// Cut `text` so that, with a trailing ellipsis, it spans at most `max` columns.
fn truncate_to_width(text: &str, max: usize) -> String {
    let budget = max.saturating_sub(1);
    let mut used = 0;
    let mut out = String::new();
    for c in text.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

fn evidence_line(classification: &Classification) -> Option<String> {
    let evidence = &classification.evidence;
    let mut parts = Vec::new();
    if let Some(term) = &evidence.forward_looking {
        parts.push(format!("fls: {}", term));
    }
    if let Some(term) = &evidence.exclusion {
        parts.push(format!("excluded: {}", term));
    }
    if let Some(term) = &evidence.uncertainty {
        parts.push(format!("unc: {}", term));
    }
    if let Some(term) = &evidence.topic_term {
        parts.push(format!("topic: {}", term));
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

impl<'a> std::fmt::Display for ClassificationDisplay<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let pad = " ".repeat(SPACE_PADDING);
        let sentence_indent = " ".repeat(FLAG_WIDTH * 2 + TOPIC_WIDTH + SPACE_PADDING * 3);

        write!(
            f,
            "{:<fw$}{pad}{:<fw$}{pad}{:<tw$}{pad}SENTENCE",
            "FLS",
            "UNC",
            "TOPIC",
            fw = FLAG_WIDTH,
            tw = TOPIC_WIDTH,
            pad = pad,
        )?;

        for sentence in self.sentences {
            let classification = &sentence.classification;
            let topic = classification
                .topic
                .map(|t| t.to_string())
                .unwrap_or_else(|| "-".to_string());

            write!(
                f,
                "\n{:<fw$}{pad}{:<fw$}{pad}{:<tw$}{pad}{}",
                flag(classification.is_forward_looking),
                flag(classification.is_uncertain),
                topic,
                self.sentence_column(&sentence.text),
                fw = FLAG_WIDTH,
                tw = TOPIC_WIDTH,
                pad = pad,
            )?;

            if self.show_evidence {
                if let Some(line) = evidence_line(classification) {
                    write!(f, "\n{}╰ {}", sentence_indent, line)?;
                }
            }
        }

        Ok(())
    }
}
