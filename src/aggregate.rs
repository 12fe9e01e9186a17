//! Document metrics and the two-period uncertainty blend.
//!
//! Every ratio goes through [`safe_ratio`], so a zero denominator yields
//! `0.0` instead of `NaN` or infinity.

use crate::classifier::{Classification, SentenceClassifier, Topic};
use crate::segment::SentenceSegmenter;
use serde::Serialize;

/// `numerator / denominator`, or `0.0` when the denominator is zero.
pub fn safe_ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Sentence counts for one document.
///
/// Topic counts only include sentences that are both forward-looking and
/// uncertain, and each such sentence lands in exactly one topic, so
/// [`uncertain_fls`](DocumentMetrics::uncertain_fls) is their sum.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DocumentMetrics {
    /// Sentences produced by segmentation
    pub sentences: usize,
    /// Forward-looking sentences, uncertain or not
    pub fls: usize,
    pub unit_cm: usize,
    pub volume: usize,
    pub other: usize,
}

impl DocumentMetrics {
    /// Tally one classified sentence.
    pub fn record(&mut self, classification: &Classification) {
        self.sentences += 1;
        if !classification.is_forward_looking {
            return;
        }
        self.fls += 1;
        if let Some(topic) = classification.topic.filter(|_| classification.is_uncertain) {
            match topic {
                Topic::UnitCm => self.unit_cm += 1,
                Topic::Volume => self.volume += 1,
                Topic::Other => self.other += 1,
            }
        }
    }

    /// Uncertain forward-looking sentences.
    pub fn uncertain_fls(&self) -> usize {
        self.unit_cm + self.volume + self.other
    }

    pub fn count(&self, topic: Topic) -> usize {
        match topic {
            Topic::UnitCm => self.unit_cm,
            Topic::Volume => self.volume,
            Topic::Other => self.other,
        }
    }

    /// Share of forward-looking sentences that are uncertain.
    pub fn fls_uncertainty_ratio(&self) -> f64 {
        safe_ratio(self.uncertain_fls(), self.fls)
    }

    /// Share of uncertain forward-looking sentences attributed to `topic`.
    pub fn topic_ratio(&self, topic: Topic) -> f64 {
        safe_ratio(self.count(topic), self.uncertain_fls())
    }

    pub fn topic_ratios(&self) -> TopicRatios {
        TopicRatios {
            unit_cm: self.topic_ratio(Topic::UnitCm),
            volume: self.topic_ratio(Topic::Volume),
            other: self.topic_ratio(Topic::Other),
        }
    }
}

/// One value per topic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct TopicRatios {
    pub unit_cm: f64,
    pub volume: f64,
    pub other: f64,
}

impl TopicRatios {
    pub fn get(&self, topic: Topic) -> f64 {
        match topic {
            Topic::UnitCm => self.unit_cm,
            Topic::Volume => self.volume,
            Topic::Other => self.other,
        }
    }

    fn mean(a: &TopicRatios, b: &TopicRatios) -> TopicRatios {
        TopicRatios {
            unit_cm: (a.unit_cm + b.unit_cm) / 2.0,
            volume: (a.volume + b.volume) / 2.0,
            other: (a.other + b.other) / 2.0,
        }
    }
}

/// Topic ratios averaged over a current/prior year pair.
///
/// When neither year has an uncertain forward-looking sentence every blended
/// ratio is `0.0`. Otherwise each year's ratio is computed on its own (a year
/// without uncertain sentences contributes `0.0`) and the two are averaged.
pub fn blended_topic_ratios(current: &DocumentMetrics, prior: &DocumentMetrics) -> TopicRatios {
    if current.uncertain_fls() == 0 && prior.uncertain_fls() == 0 {
        return TopicRatios::default();
    }
    TopicRatios::mean(&current.topic_ratios(), &prior.topic_ratios())
}

/// The blended uncertainty indices for a current/prior year pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct UncertaintyScores {
    #[serde(rename = "UC_UnitCM")]
    pub uc_unit_cm: f64,
    #[serde(rename = "UC_Volume")]
    pub uc_volume: f64,
    #[serde(rename = "UC_Other")]
    pub uc_other: f64,
    /// Mean of the two yearly FLS uncertainty ratios
    pub fls_uncertainty: f64,
}

impl UncertaintyScores {
    /// Combine two years of metrics.
    ///
    /// Each topic score is the blended topic ratio multiplied by the mean of
    /// the yearly FLS uncertainty ratios. A year with no forward-looking
    /// sentences still takes part in that mean with a ratio of `0.0`.
    pub fn blend(current: &DocumentMetrics, prior: &DocumentMetrics) -> Self {
        let topics = blended_topic_ratios(current, prior);
        let fls_uncertainty =
            (current.fls_uncertainty_ratio() + prior.fls_uncertainty_ratio()) / 2.0;

        UncertaintyScores {
            uc_unit_cm: topics.unit_cm * fls_uncertainty,
            uc_volume: topics.volume * fls_uncertainty,
            uc_other: topics.other * fls_uncertainty,
            fls_uncertainty,
        }
    }

    pub fn get(&self, topic: Topic) -> f64 {
        match topic {
            Topic::UnitCm => self.uc_unit_cm,
            Topic::Volume => self.uc_volume,
            Topic::Other => self.uc_other,
        }
    }
}

/// A sentence together with its classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedSentence {
    pub text: String,
    pub classification: Classification,
}

/// Segment and classify every sentence of a document.
pub fn classify_document(
    text: &str,
    segmenter: &dyn SentenceSegmenter,
    classifier: &SentenceClassifier,
) -> Vec<ClassifiedSentence> {
    segmenter
        .segment(text)
        .into_iter()
        .map(|sentence| {
            let classification = classifier.classify(&sentence);
            ClassifiedSentence {
                text: sentence,
                classification,
            }
        })
        .collect()
}

/// Tally already-segmented sentences.
pub fn aggregate_sentences<I, S>(sentences: I, classifier: &SentenceClassifier) -> DocumentMetrics
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut metrics = DocumentMetrics::default();
    for sentence in sentences {
        metrics.record(&classifier.classify(sentence.as_ref()));
    }
    metrics
}

/// Segment a document and tally its classified sentences.
pub fn aggregate(
    text: &str,
    segmenter: &dyn SentenceSegmenter,
    classifier: &SentenceClassifier,
) -> DocumentMetrics {
    let metrics = aggregate_sentences(segmenter.segment(text), classifier);
    tracing::debug!(
        sentences = metrics.sentences,
        fls = metrics.fls,
        uncertain_fls = metrics.uncertain_fls(),
        unit_cm = metrics.unit_cm,
        volume = metrics.volume,
        other = metrics.other,
        "aggregated document"
    );
    metrics
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Lexicon, LexiconGroup, MatchStrategy, UnicodeSentenceSegmenter};

    fn metrics(fls: usize, unit_cm: usize, volume: usize, other: usize) -> DocumentMetrics {
        DocumentMetrics {
            sentences: fls,
            fls,
            unit_cm,
            volume,
            other,
        }
    }

    fn classifier() -> SentenceClassifier {
        let lexicon = Lexicon::builder()
            .terms(LexiconGroup::ForwardLooking, ["expect", "anticipate"])
            .terms(LexiconGroup::Uncertainty, ["risk", "uncertain"])
            .terms(LexiconGroup::Exclusion, ["last year"])
            .terms(LexiconGroup::UnitCm, ["price"])
            .terms(LexiconGroup::Volume, ["demand"])
            .build();
        SentenceClassifier::new(&lexicon, MatchStrategy::Substring)
    }

    #[test]
    fn test_safe_ratio() {
        assert_eq!(safe_ratio(1, 4), 0.25);
        assert_eq!(safe_ratio(3, 0), 0.0);
        assert_eq!(safe_ratio(0, 0), 0.0);
    }

    #[test]
    fn test_aggregate_counts() {
        let text = "We expect price risk. We expect demand risk. We anticipate growth. \
                    We expect regulatory risk. Price risk rose last year. Demand was flat.";
        let metrics = aggregate(text, &UnicodeSentenceSegmenter::new(), &classifier());

        assert_eq!(
            metrics,
            DocumentMetrics {
                sentences: 6,
                fls: 4,
                unit_cm: 1,
                volume: 1,
                other: 1,
            }
        );
        assert_eq!(metrics.uncertain_fls(), 3);
        assert_eq!(metrics.fls_uncertainty_ratio(), 0.75);
        assert!((metrics.topic_ratio(Topic::UnitCm) - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_document() {
        let metrics = aggregate("", &UnicodeSentenceSegmenter::new(), &classifier());

        assert_eq!(metrics, DocumentMetrics::default());
        assert_eq!(metrics.fls_uncertainty_ratio(), 0.0);
        assert_eq!(metrics.topic_ratios(), TopicRatios::default());
    }

    #[test]
    fn test_partition_invariant() {
        let sentences = [
            "We expect price and demand risk.",
            "We expect demand risk.",
            "We expect uncertain outcomes.",
            "Risk is everywhere.",
            "We anticipate expansion.",
        ];
        let metrics = aggregate_sentences(sentences, &classifier());

        let by_topic: usize = Topic::ALL.iter().map(|&t| metrics.count(t)).sum();
        assert_eq!(by_topic, metrics.uncertain_fls());
        assert_eq!(metrics.uncertain_fls(), 3);
        assert_eq!(metrics.fls, 4);
        assert_eq!(metrics.unit_cm, 1);
    }

    #[test]
    fn test_blend_keeps_zero_year_in_mean() {
        let current = metrics(3, 2, 0, 1);
        let prior = metrics(0, 0, 0, 0);

        let topics = blended_topic_ratios(&current, &prior);
        assert!((topics.unit_cm - 1.0 / 3.0).abs() < 1e-12);
        assert!((topics.other - 1.0 / 6.0).abs() < 1e-12);
        assert_eq!(topics.volume, 0.0);
    }

    #[test]
    fn test_blend_no_signal() {
        let scores = UncertaintyScores::blend(&metrics(5, 0, 0, 0), &metrics(0, 0, 0, 0));
        assert_eq!(scores, UncertaintyScores::default());
    }

    #[test]
    fn test_blend_scores() {
        // current: 4 FLS, 2 uncertain (1 CM, 1 volume); prior: 2 FLS, 2 uncertain (other)
        let current = metrics(4, 1, 1, 0);
        let prior = metrics(2, 0, 0, 2);

        let scores = UncertaintyScores::blend(&current, &prior);
        assert_eq!(scores.fls_uncertainty, 0.75);
        assert_eq!(scores.uc_unit_cm, 0.25 * 0.75);
        assert_eq!(scores.uc_volume, 0.25 * 0.75);
        assert_eq!(scores.uc_other, 0.5 * 0.75);
        assert_eq!(scores.get(Topic::Other), scores.uc_other);
    }

    #[test]
    fn test_classify_document_keeps_order() {
        let classified = classify_document(
            "We expect demand risk. Sales were flat.",
            &UnicodeSentenceSegmenter::new(),
            &classifier(),
        );

        assert_eq!(classified.len(), 2);
        assert_eq!(classified[0].text, "We expect demand risk.");
        assert_eq!(classified[0].classification.topic, Some(Topic::Volume));
        assert_eq!(classified[1].classification.topic, None);
    }
}
