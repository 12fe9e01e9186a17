//! Matching strategies.
//!
//! Substring matching finds a term anywhere in the lower-cased sentence, so
//! "risk" also matches inside "asterisk". Exact-token matching requires every
//! word of the term to line up with whole sentence tokens.

use crate::normalize::{normalize, tokenize, NormalizeOptions};
use crate::FlsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How lexicon terms are located in a sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchStrategy {
    /// Case-insensitive substring containment.
    #[default]
    Substring,
    /// Contiguous whole-token containment after full normalization.
    ExactToken,
}

impl MatchStrategy {
    /// The normalization each strategy applies unless overridden.
    pub fn default_options(self) -> NormalizeOptions {
        match self {
            MatchStrategy::Substring => NormalizeOptions::lowercase_only(),
            MatchStrategy::ExactToken => NormalizeOptions::full(),
        }
    }

    /// Prepare a lexicon term for matching under this strategy.
    ///
    /// Terms receive the same punctuation handling as sentences but keep
    /// their stopwords.
    pub(crate) fn prepare_term(self, term: &str, options: NormalizeOptions) -> PreparedText {
        let term_options = NormalizeOptions {
            remove_stopwords: false,
            ..options
        };
        match self {
            MatchStrategy::Substring => PreparedText::Text(normalize(term, term_options)),
            MatchStrategy::ExactToken => PreparedText::Tokens(tokenize(term, term_options)),
        }
    }

    /// Prepare a sentence for matching under this strategy.
    pub(crate) fn prepare_sentence(
        self,
        sentence: &str,
        options: NormalizeOptions,
    ) -> PreparedText {
        match self {
            MatchStrategy::Substring => PreparedText::Text(normalize(sentence, options)),
            MatchStrategy::ExactToken => PreparedText::Tokens(tokenize(sentence, options)),
        }
    }
}

/// A sentence or term in the form a strategy compares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PreparedText {
    Text(String),
    Tokens(Vec<String>),
}

impl PreparedText {
    pub(crate) fn is_empty(&self) -> bool {
        match self {
            PreparedText::Text(text) => text.is_empty(),
            PreparedText::Tokens(tokens) => tokens.is_empty(),
        }
    }

    /// Whether `term` occurs in `self`. An empty term never matches.
    pub(crate) fn contains(&self, term: &PreparedText) -> bool {
        if term.is_empty() {
            return false;
        }
        match (self, term) {
            (PreparedText::Text(haystack), PreparedText::Text(needle)) => {
                haystack.contains(needle.as_str())
            }
            (PreparedText::Tokens(haystack), PreparedText::Tokens(needle)) => haystack
                .windows(needle.len())
                .any(|window| window == needle.as_slice()),
            _ => false,
        }
    }
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchStrategy::Substring => f.write_str("substring"),
            MatchStrategy::ExactToken => f.write_str("exact-token"),
        }
    }
}

impl FromStr for MatchStrategy {
    type Err = FlsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "substring" => Ok(MatchStrategy::Substring),
            "exact-token" | "exact_token" | "token" => Ok(MatchStrategy::ExactToken),
            other => Err(FlsError::UnknownStrategy(other.to_string())),
        }
    }
}
