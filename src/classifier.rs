//! Sentence classification.
//!
//! A sentence is forward-looking when it contains a forward-looking term and
//! no exclusion phrase. It is uncertain when it contains an uncertainty term.
//! Sentences that are both are attributed to a topic: unit CM first, then
//! volume, otherwise "other".
//!
//! Exclusion phrases are always searched as substrings of the normalized
//! sentence, whatever the strategy, so "previous" also excludes
//! "previously disclosed" under exact-token matching.

use crate::lexicon::{Lexicon, LexiconGroup};
use crate::normalize::NormalizeOptions;
use crate::strategy::{MatchStrategy, PreparedText};
use serde::Serialize;
use std::fmt;

/// Business topic of an uncertain forward-looking sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Topic {
    /// Unit contribution margin (price, unit cost)
    UnitCm,
    /// Sales volume
    Volume,
    /// Neither topic lexicon matched
    Other,
}

impl Topic {
    /// Topics in attribution priority order.
    pub const ALL: [Topic; 3] = [Topic::UnitCm, Topic::Volume, Topic::Other];
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Topic::UnitCm => f.write_str("UnitCM"),
            Topic::Volume => f.write_str("Volume"),
            Topic::Other => f.write_str("Other"),
        }
    }
}

/// The terms that drove a classification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Evidence {
    /// First forward-looking term found
    pub forward_looking: Option<String>,
    /// Exclusion phrase that suppressed the forward-looking match
    pub exclusion: Option<String>,
    /// First uncertainty term found
    pub uncertainty: Option<String>,
    /// Topic term that decided the topic (absent for `Other`)
    pub topic_term: Option<String>,
}

/// Per-sentence classification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub is_forward_looking: bool,
    pub is_uncertain: bool,
    /// Only set when the sentence is both forward-looking and uncertain.
    pub topic: Option<Topic>,
    pub evidence: Evidence,
}

impl Classification {
    /// Forward-looking and uncertain.
    pub fn is_uncertain_fls(&self) -> bool {
        self.is_forward_looking && self.is_uncertain
    }
}

/// One lexicon group in the form the strategy compares.
#[derive(Debug, Clone)]
struct PreparedGroup {
    terms: Vec<(String, PreparedText)>,
}

impl PreparedGroup {
    fn new(
        lexicon: &Lexicon,
        group: LexiconGroup,
        strategy: MatchStrategy,
        options: NormalizeOptions,
    ) -> Self {
        let terms = lexicon
            .terms(group)
            .iter()
            .map(|term| (term.clone(), strategy.prepare_term(term, options)))
            .collect();
        Self { terms }
    }

    /// The first term, in lexicon order, found in `sentence`.
    fn first_match(&self, sentence: &PreparedText) -> Option<&str> {
        self.terms
            .iter()
            .find(|(_, prepared)| sentence.contains(prepared))
            .map(|(term, _)| term.as_str())
    }
}

/// Classifies sentences against a lexicon with a fixed matching strategy.
///
/// Term preparation happens once, in [`SentenceClassifier::new`]; each call to
/// [`classify`](SentenceClassifier::classify) is pure.
#[derive(Debug, Clone)]
pub struct SentenceClassifier {
    strategy: MatchStrategy,
    options: NormalizeOptions,
    forward_looking: PreparedGroup,
    uncertainty: PreparedGroup,
    exclusion: PreparedGroup,
    unit_cm: PreparedGroup,
    volume: PreparedGroup,
}

impl SentenceClassifier {
    /// Create a classifier using the strategy's default normalization.
    pub fn new(lexicon: &Lexicon, strategy: MatchStrategy) -> Self {
        Self::with_options(lexicon, strategy, strategy.default_options())
    }

    /// Create a classifier with explicit normalization options.
    pub fn with_options(
        lexicon: &Lexicon,
        strategy: MatchStrategy,
        options: NormalizeOptions,
    ) -> Self {
        for group in lexicon.empty_groups() {
            tracing::warn!(%group, "lexicon group is empty and will never match");
        }

        let prepare = |group| PreparedGroup::new(lexicon, group, strategy, options);
        Self {
            strategy,
            options,
            forward_looking: prepare(LexiconGroup::ForwardLooking),
            uncertainty: prepare(LexiconGroup::Uncertainty),
            exclusion: PreparedGroup::new(
                lexicon,
                LexiconGroup::Exclusion,
                MatchStrategy::Substring,
                options,
            ),
            unit_cm: prepare(LexiconGroup::UnitCm),
            volume: prepare(LexiconGroup::Volume),
        }
    }

    pub fn strategy(&self) -> MatchStrategy {
        self.strategy
    }

    pub fn options(&self) -> NormalizeOptions {
        self.options
    }

    /// Classify a single sentence.
    pub fn classify(&self, sentence: &str) -> Classification {
        let prepared = self.strategy.prepare_sentence(sentence, self.options);
        if prepared.is_empty() {
            return Classification::default();
        }

        let mut evidence = Evidence::default();

        // Exclusion is only consulted once a forward-looking term is present.
        let is_forward_looking = match self.forward_looking.first_match(&prepared) {
            Some(term) => {
                evidence.forward_looking = Some(term.to_string());
                evidence.exclusion = self.excluded_by(sentence, &prepared).map(str::to_string);
                evidence.exclusion.is_none()
            }
            None => false,
        };

        evidence.uncertainty = self.uncertainty.first_match(&prepared).map(str::to_string);
        let is_uncertain = evidence.uncertainty.is_some();

        let topic = if is_forward_looking && is_uncertain {
            let (topic, term) = self.attribute_topic(&prepared);
            evidence.topic_term = term;
            Some(topic)
        } else {
            None
        };

        let classification = Classification {
            is_forward_looking,
            is_uncertain,
            topic,
            evidence,
        };
        tracing::trace!(sentence, ?classification, "classified sentence");
        classification
    }

    /// The exclusion phrase found in the normalized sentence text, if any.
    fn excluded_by(&self, sentence: &str, prepared: &PreparedText) -> Option<&str> {
        match prepared {
            PreparedText::Text(_) => self.exclusion.first_match(prepared),
            PreparedText::Tokens(_) => {
                let text = MatchStrategy::Substring.prepare_sentence(sentence, self.options);
                self.exclusion.first_match(&text)
            }
        }
    }

    fn attribute_topic(&self, prepared: &PreparedText) -> (Topic, Option<String>) {
        if let Some(term) = self.unit_cm.first_match(prepared) {
            (Topic::UnitCm, Some(term.to_string()))
        } else if let Some(term) = self.volume.first_match(prepared) {
            (Topic::Volume, Some(term.to_string()))
        } else {
            (Topic::Other, None)
        }
    }
}

/// Classify one sentence without keeping a classifier around.
///
/// Prefer [`SentenceClassifier`] when classifying many sentences.
pub fn classify(sentence: &str, lexicon: &Lexicon, strategy: MatchStrategy) -> Classification {
    SentenceClassifier::new(lexicon, strategy).classify(sentence)
}
