//! End-to-end analysis of a current/prior year document pair.

use crate::aggregate::{
    aggregate, classify_document, ClassifiedSentence, DocumentMetrics, UncertaintyScores,
};
use crate::classifier::SentenceClassifier;
use crate::config::AnalysisConfig;
use crate::lexicon::Lexicon;
use crate::normalize::NormalizeOptions;
use crate::segment::{SentenceSegmenter, UnicodeSentenceSegmenter};
use crate::strategy::MatchStrategy;
use crate::FlsResult;
use serde::Serialize;

/// Metrics for both years plus the blended scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PairReport {
    pub current: DocumentMetrics,
    pub prior: DocumentMetrics,
    pub scores: UncertaintyScores,
}

/// A classifier paired with a segmenter.
///
/// The analyzer holds no per-document state; one instance can score any
/// number of filings.
pub struct Analyzer {
    classifier: SentenceClassifier,
    segmenter: Box<dyn SentenceSegmenter + Send + Sync>,
}

impl Analyzer {
    /// Analyzer with the default segmenter and the strategy's default normalization.
    pub fn new(lexicon: Lexicon, strategy: MatchStrategy) -> Self {
        Self::with_options(lexicon, strategy, strategy.default_options())
    }

    pub fn with_options(
        lexicon: Lexicon,
        strategy: MatchStrategy,
        options: NormalizeOptions,
    ) -> Self {
        Self {
            classifier: SentenceClassifier::with_options(&lexicon, strategy, options),
            segmenter: Box::new(UnicodeSentenceSegmenter::new()),
        }
    }

    /// Build from configuration, reading any lexicon files it names.
    pub fn from_config(config: &AnalysisConfig) -> FlsResult<Self> {
        let lexicon = config.build_lexicon()?;
        let mut segmenter = UnicodeSentenceSegmenter::new();
        if config.paragraph_breaks {
            segmenter = segmenter.with_paragraph_breaks();
        }

        Ok(
            Self::with_options(lexicon, config.strategy, config.normalize_options())
                .with_segmenter(segmenter),
        )
    }

    /// Replace the sentence segmenter.
    pub fn with_segmenter<S>(mut self, segmenter: S) -> Self
    where
        S: SentenceSegmenter + Send + Sync + 'static,
    {
        self.segmenter = Box::new(segmenter);
        self
    }

    pub fn classifier(&self) -> &SentenceClassifier {
        &self.classifier
    }

    pub fn analyze_document(&self, text: &str) -> DocumentMetrics {
        aggregate(text, self.segmenter.as_ref(), &self.classifier)
    }

    pub fn classify_document(&self, text: &str) -> Vec<ClassifiedSentence> {
        classify_document(text, self.segmenter.as_ref(), &self.classifier)
    }

    /// Score a current/prior year pair.
    pub fn analyze_pair(&self, current: &str, prior: &str) -> PairReport {
        let current = self.analyze_document(current);
        let prior = self.analyze_document(prior);
        let scores = UncertaintyScores::blend(&current, &prior);

        tracing::debug!(
            uc_unit_cm = scores.uc_unit_cm,
            uc_volume = scores.uc_volume,
            uc_other = scores.uc_other,
            fls_uncertainty = scores.fls_uncertainty,
            "blended document pair"
        );

        PairReport {
            current,
            prior,
            scores,
        }
    }
}

impl std::fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyzer")
            .field("classifier", &self.classifier)
            .finish_non_exhaustive()
    }
}
