//! Sentence normalization ahead of lexicon matching.
//!
//! Lower-casing is always applied. Punctuation stripping and stopword removal
//! are toggled independently through [`NormalizeOptions`].

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

/// English function words removed when `remove_stopwords` is enabled.
static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're",
        "you've", "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him",
        "his", "himself", "she", "she's", "her", "hers", "herself", "it", "it's", "its",
        "itself", "they", "them", "their", "theirs", "themselves", "what", "which", "who",
        "whom", "this", "that", "that'll", "these", "those", "am", "is", "are", "was",
        "were", "be", "been", "being", "have", "has", "had", "having", "do", "does", "did",
        "doing", "a", "an", "the", "and", "but", "if", "or", "because", "as", "until",
        "while", "of", "at", "by", "for", "with", "about", "against", "between", "into",
        "through", "during", "before", "after", "above", "below", "to", "from", "up",
        "down", "in", "out", "on", "off", "over", "under", "again", "further", "then",
        "once", "here", "there", "when", "where", "why", "how", "all", "any", "both",
        "each", "few", "more", "most", "other", "some", "such", "no", "nor", "not", "only",
        "own", "same", "so", "than", "too", "very", "s", "t", "can", "will", "just", "don",
        "don't", "should", "should've", "now", "d", "ll", "m", "o", "re", "ve", "y", "ain",
        "aren", "aren't", "couldn", "couldn't", "didn", "didn't", "doesn", "doesn't",
        "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn", "isn't", "ma",
        "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
        "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
        "wouldn", "wouldn't",
    ]
    .iter()
    .copied()
    .collect()
});

/// Optional normalization steps. Lower-casing is not optional.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeOptions {
    /// Delete ASCII punctuation characters (no whitespace is inserted).
    pub strip_punctuation: bool,
    /// Drop English stopwords.
    pub remove_stopwords: bool,
}

impl NormalizeOptions {
    /// Lower-casing only.
    pub fn lowercase_only() -> Self {
        Self::default()
    }

    /// Punctuation stripping and stopword removal.
    pub fn full() -> Self {
        Self {
            strip_punctuation: true,
            remove_stopwords: true,
        }
    }
}

/// Whether `word` (already lower-cased) is an English stopword.
pub fn is_stopword(word: &str) -> bool {
    STOPWORDS.contains(word)
}

/// Normalize a sentence into the text searched by substring matching.
///
/// When stopwords are removed the surviving tokens are re-joined with single
/// spaces; otherwise the original spacing is preserved.
pub fn normalize(sentence: &str, options: NormalizeOptions) -> String {
    let text = lower_and_strip(sentence, options.strip_punctuation);
    if options.remove_stopwords {
        word_tokens(&text)
            .filter(|token| !is_stopword(token))
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        text
    }
}

/// Normalize a sentence into the tokens searched by exact-token matching.
///
/// Tokens follow Unicode word boundaries, so any punctuation left in place
/// becomes a token of its own instead of clinging to a word.
pub fn tokenize(sentence: &str, options: NormalizeOptions) -> Vec<String> {
    let text = lower_and_strip(sentence, options.strip_punctuation);
    word_tokens(&text)
        .filter(|token| !(options.remove_stopwords && is_stopword(token)))
        .map(str::to_string)
        .collect()
}

fn lower_and_strip(sentence: &str, strip_punctuation: bool) -> String {
    let mut text = sentence.to_lowercase();
    if strip_punctuation {
        text.retain(|c| !c.is_ascii_punctuation());
    }
    text
}

fn word_tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split_word_bounds()
        .filter(|token| !token.trim().is_empty())
}
