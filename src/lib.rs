//! Forward-looking statement (FLS) uncertainty measures for annual report text.
//!
//! This crate classifies the sentences of an MD&A section as forward-looking,
//! uncertain, and attributable to unit contribution margin (CM), sales volume,
//! or neither, then aggregates the classifications into comparable uncertainty
//! indices for a current/prior year pair of filings.
//!
//! ## Layers
//!
//! - [`Lexicon`] - the five immutable term groups
//! - [`normalize`] / [`MatchStrategy`] - lower-casing, punctuation and stopword
//!   handling, and the substring vs. exact-token matching strategies
//! - [`SentenceClassifier`] - per-sentence decisions
//! - [`aggregate`] / [`DocumentMetrics`] / [`UncertaintyScores`] - counts, ratios,
//!   and the two-period blend
//! - [`scale`] / [`MinMaxScaler`] - optional min/max normalization
//!
//! ## Usage
//!
//! ```
//! use fls_uncertainty::{Analyzer, Lexicon, MatchStrategy};
//!
//! let analyzer = Analyzer::new(Lexicon::standard(), MatchStrategy::Substring);
//! let report = analyzer.analyze_pair(
//!     "We anticipate that the price might be uncertain next year.",
//!     "We expect demand to remain a potential risk.",
//! );
//!
//! assert_eq!(report.current.uncertain_fls(), 1);
//! assert!(report.scores.uc_unit_cm > 0.0);
//! ```

mod aggregate;
mod analyzer;
mod classifier;
mod config;
mod display;
mod errors;
mod lexicon;
mod normalize;
mod scale;
mod segment;
mod strategy;

pub use aggregate::{
    aggregate, aggregate_sentences, blended_topic_ratios, classify_document, safe_ratio,
    ClassifiedSentence, DocumentMetrics, TopicRatios, UncertaintyScores,
};
pub use analyzer::{Analyzer, PairReport};
pub use classifier::{classify, Classification, Evidence, SentenceClassifier, Topic};
pub use config::{load_terms, AnalysisConfig, LexiconSource, LexiconSources};
pub use display::ClassificationDisplay;
pub use errors::{FlsError, FlsResult};
pub use lexicon::{Lexicon, LexiconBuilder, LexiconGroup};
pub use normalize::{is_stopword, normalize, tokenize, NormalizeOptions};
pub use scale::{scale, MinMaxScaler};
pub use segment::{SentenceSegmenter, UnicodeSentenceSegmenter};
pub use strategy::MatchStrategy;

#[cfg(test)]
mod tests {
    mod scenarios;
}
