//! Behavioural scenarios for classification, aggregation, and scaling.

use crate::{
    aggregate, aggregate_sentences, classify, scale, Analyzer, DocumentMetrics, Lexicon,
    LexiconGroup, MatchStrategy, SentenceClassifier, Topic, TopicRatios, UncertaintyScores,
    UnicodeSentenceSegmenter,
};

const STRATEGIES: [MatchStrategy; 2] = [MatchStrategy::Substring, MatchStrategy::ExactToken];

fn lexicon() -> Lexicon {
    Lexicon::builder()
        .terms(LexiconGroup::ForwardLooking, ["anticipate", "expect", "forecast"])
        .terms(LexiconGroup::Uncertainty, ["uncertain", "risk", "possible"])
        .terms(LexiconGroup::Exclusion, ["last year", "previous", "in the past"])
        .terms(LexiconGroup::UnitCm, ["cost per unit", "price"])
        .terms(LexiconGroup::Volume, ["sales volume", "demand"])
        .build()
}

#[test]
fn test_cost_per_unit_sentence() {
    let sentence = "We anticipate the cost per unit might be uncertain next year.";
    for strategy in STRATEGIES {
        let result = classify(sentence, &lexicon(), strategy);
        assert!(result.is_forward_looking, "{:?}", strategy);
        assert!(result.is_uncertain, "{:?}", strategy);
        assert_eq!(result.topic, Some(Topic::UnitCm), "{:?}", strategy);
    }
}

#[test]
fn test_last_year_suppresses_forward_looking() {
    let sentence = "We anticipate the cost per unit might be uncertain, unlike last year.";
    for strategy in STRATEGIES {
        let result = classify(sentence, &lexicon(), strategy);
        assert!(!result.is_forward_looking, "{:?}", strategy);
        assert!(result.is_uncertain, "{:?}", strategy);
        assert_eq!(result.topic, None, "{:?}", strategy);
    }
}

#[test]
fn test_cm_priority_over_volume() {
    let sentence = "We forecast that price and demand remain uncertain.";
    for strategy in STRATEGIES {
        assert_eq!(
            classify(sentence, &lexicon(), strategy).topic,
            Some(Topic::UnitCm),
            "{:?}",
            strategy
        );
    }
}

#[test]
fn test_topic_list_order_does_not_change_topic() {
    let reordered = Lexicon::builder()
        .terms(LexiconGroup::ForwardLooking, ["forecast", "expect", "anticipate"])
        .terms(LexiconGroup::Uncertainty, ["possible", "risk", "uncertain"])
        .terms(LexiconGroup::Exclusion, ["in the past", "previous", "last year"])
        .terms(LexiconGroup::UnitCm, ["price", "cost per unit"])
        .terms(LexiconGroup::Volume, ["demand", "sales volume"])
        .build();

    let sentences = [
        "We expect demand and price risk.",
        "We anticipate possible shifts in sales volume.",
        "Previously we did not forecast risk.",
        "We expect growth.",
    ];
    for strategy in STRATEGIES {
        let a = SentenceClassifier::new(&lexicon(), strategy);
        let b = SentenceClassifier::new(&reordered, strategy);
        for sentence in sentences {
            let (x, y) = (a.classify(sentence), b.classify(sentence));
            assert_eq!(x.is_forward_looking, y.is_forward_looking, "{}", sentence);
            assert_eq!(x.is_uncertain, y.is_uncertain, "{}", sentence);
            assert_eq!(x.topic, y.topic, "{}", sentence);
        }
    }
}

#[test]
fn test_single_uncertain_cm_sentence_document() {
    let text = "We anticipate the cost per unit might be uncertain next year. Sales rose.";
    for strategy in STRATEGIES {
        let classifier = SentenceClassifier::new(&lexicon(), strategy);
        let metrics = aggregate(text, &UnicodeSentenceSegmenter::new(), &classifier);

        assert_eq!(metrics.fls, 1);
        assert_eq!(metrics.fls_uncertainty_ratio(), 1.0);
        assert_eq!(
            metrics.topic_ratios(),
            TopicRatios {
                unit_cm: 1.0,
                volume: 0.0,
                other: 0.0,
            }
        );
    }
}

#[test]
fn test_empty_document_is_all_zero() {
    for strategy in STRATEGIES {
        let analyzer = Analyzer::new(lexicon(), strategy);
        let report = analyzer.analyze_pair("", "");

        assert_eq!(report.current, DocumentMetrics::default());
        assert_eq!(report.scores, UncertaintyScores::default());
        for topic in Topic::ALL {
            assert_eq!(report.current.topic_ratio(topic), 0.0);
        }
    }
}

#[test]
fn test_blend_with_silent_year() {
    let classifier = SentenceClassifier::new(&lexicon(), MatchStrategy::Substring);
    let current = aggregate_sentences(
        [
            "We expect price risk.",
            "We anticipate cost per unit to be uncertain.",
            "We expect possible delays.",
        ],
        &classifier,
    );
    let prior = aggregate_sentences(["Revenue grew.", "We expect expansion."], &classifier);

    assert_eq!(current.uncertain_fls(), 3);
    assert_eq!(current.unit_cm, 2);
    assert_eq!(prior.uncertain_fls(), 0);

    let scores = UncertaintyScores::blend(&current, &prior);
    // topic: mean(2/3, 0) = 1/3; fls: mean(3/3, 0/1) = 1/2
    assert!((scores.uc_unit_cm - 1.0 / 6.0).abs() < 1e-12);
    assert!((scores.uc_other - 1.0 / 12.0).abs() < 1e-12);
    assert_eq!(scores.uc_volume, 0.0);
    assert_eq!(scores.fls_uncertainty, 0.5);
}

#[test]
fn test_scaled_scores() {
    let analyzer = Analyzer::new(lexicon(), MatchStrategy::ExactToken);
    let report = analyzer.analyze_pair(
        "We expect demand risk. We expect growth.",
        "We anticipate uncertain pricing.",
    );

    // current: fls 2, uncertain 1 (volume); prior: fls 1, uncertain 1 (other)
    assert_eq!(report.scores.fls_uncertainty, 0.75);
    assert_eq!(report.scores.uc_volume, 0.375);
    assert_eq!(scale(report.scores.uc_volume, 0.0, 0.75), 0.5);
    assert_eq!(scale(report.scores.uc_volume, 0.0, 0.0), 0.0);
}
