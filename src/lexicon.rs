//! The lexicon store.
//!
//! A [`Lexicon`] holds the five term groups consulted by the classifier. It is
//! built once and only read afterwards, so a single instance can be shared by
//! reference across any number of documents or threads.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Forward-looking terms.
const FORWARD_LOOKING: &[&str] = &["anticipate", "expect", "estimate", "project", "forecast"];

/// Uncertainty terms.
const UNCERTAINTY: &[&str] = &["uncertain", "risk", "uncertainty", "possible", "potential"];

/// Phrases marking boilerplate or references to past events.
const EXCLUSION: &[&str] = &["last year", "previous", "in the past"];

/// Seed terms for unit contribution margin. Curated lists should be loaded
/// from files for real measurement.
const UNIT_CM: &[&str] = &[
    "price",
    "pricing",
    "cost per unit",
    "unit cost",
    "contribution margin",
    "gross margin",
    "cost of sales",
    "raw material",
];

/// Seed terms for sales volume.
const VOLUME: &[&str] = &[
    "sales volume",
    "demand",
    "units sold",
    "shipments",
    "sales quantity",
    "order backlog",
];

/// The role a group of terms plays during classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LexiconGroup {
    /// Terms signalling a statement about the future
    ForwardLooking,
    /// Terms signalling uncertainty
    Uncertainty,
    /// Phrases that suppress a forward-looking match
    Exclusion,
    /// Unit contribution margin topic terms
    UnitCm,
    /// Sales volume topic terms
    Volume,
}

impl LexiconGroup {
    /// All groups in classification order.
    pub const ALL: [LexiconGroup; 5] = [
        LexiconGroup::ForwardLooking,
        LexiconGroup::Uncertainty,
        LexiconGroup::Exclusion,
        LexiconGroup::UnitCm,
        LexiconGroup::Volume,
    ];
}

impl fmt::Display for LexiconGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LexiconGroup::ForwardLooking => "forward-looking",
            LexiconGroup::Uncertainty => "uncertainty",
            LexiconGroup::Exclusion => "exclusion",
            LexiconGroup::UnitCm => "unit-cm",
            LexiconGroup::Volume => "volume",
        };
        f.write_str(name)
    }
}

/// Immutable term lists grouped by role.
///
/// Terms are stored lower-cased and trimmed, in the order they were supplied.
/// Order never changes a yes/no decision; it only decides which term is
/// reported as evidence when several match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    forward_looking: Vec<String>,
    uncertainty: Vec<String>,
    exclusion: Vec<String>,
    unit_cm: Vec<String>,
    volume: Vec<String>,
}

impl Lexicon {
    /// The built-in seed lexicon.
    pub fn standard() -> Self {
        Self::builder()
            .terms(LexiconGroup::ForwardLooking, FORWARD_LOOKING.iter().copied())
            .terms(LexiconGroup::Uncertainty, UNCERTAINTY.iter().copied())
            .terms(LexiconGroup::Exclusion, EXCLUSION.iter().copied())
            .terms(LexiconGroup::UnitCm, UNIT_CM.iter().copied())
            .terms(LexiconGroup::Volume, VOLUME.iter().copied())
            .build()
    }

    /// Start building a lexicon with every group empty.
    pub fn builder() -> LexiconBuilder {
        LexiconBuilder::default()
    }

    /// The terms of one group.
    pub fn terms(&self, group: LexiconGroup) -> &[String] {
        match group {
            LexiconGroup::ForwardLooking => &self.forward_looking,
            LexiconGroup::Uncertainty => &self.uncertainty,
            LexiconGroup::Exclusion => &self.exclusion,
            LexiconGroup::UnitCm => &self.unit_cm,
            LexiconGroup::Volume => &self.volume,
        }
    }

    /// Groups with no terms at all. Such a group never matches.
    pub fn empty_groups(&self) -> Vec<LexiconGroup> {
        LexiconGroup::ALL
            .iter()
            .copied()
            .filter(|&group| self.terms(group).is_empty())
            .collect()
    }

    /// Total number of terms across all groups.
    pub fn len(&self) -> usize {
        LexiconGroup::ALL
            .iter()
            .map(|&group| self.terms(group).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Builder for [`Lexicon`].
#[derive(Debug, Clone, Default)]
pub struct LexiconBuilder {
    lexicon: Lexicon,
}

impl LexiconBuilder {
    /// Replace the terms of a group.
    ///
    /// Entries are trimmed and lower-cased; blank entries are dropped.
    pub fn terms<I, S>(mut self, group: LexiconGroup, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let cleaned = terms
            .into_iter()
            .map(|term| term.as_ref().trim().to_lowercase())
            .filter(|term| !term.is_empty())
            .collect();

        let slot = match group {
            LexiconGroup::ForwardLooking => &mut self.lexicon.forward_looking,
            LexiconGroup::Uncertainty => &mut self.lexicon.uncertainty,
            LexiconGroup::Exclusion => &mut self.lexicon.exclusion,
            LexiconGroup::UnitCm => &mut self.lexicon.unit_cm,
            LexiconGroup::Volume => &mut self.lexicon.volume,
        };
        *slot = cleaned;
        self
    }

    pub fn build(self) -> Lexicon {
        self.lexicon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_lexicon_has_every_group() {
        let lexicon = Lexicon::standard();
        assert!(lexicon.empty_groups().is_empty());
        assert_eq!(
            lexicon.terms(LexiconGroup::ForwardLooking),
            &["anticipate", "expect", "estimate", "project", "forecast"]
        );
        assert_eq!(
            lexicon.terms(LexiconGroup::Exclusion),
            &["last year", "previous", "in the past"]
        );
    }

    #[test]
    fn test_builder_cleans_terms() {
        let lexicon = Lexicon::builder()
            .terms(LexiconGroup::UnitCm, ["  Cost Per Unit ", "", "   ", "PRICE"])
            .build();

        assert_eq!(lexicon.terms(LexiconGroup::UnitCm), &["cost per unit", "price"]);
        assert_eq!(lexicon.len(), 2);
    }

    #[test]
    fn test_empty_groups_reported() {
        let lexicon = Lexicon::builder()
            .terms(LexiconGroup::ForwardLooking, ["expect"])
            .terms(LexiconGroup::Uncertainty, ["risk"])
            .build();

        assert_eq!(
            lexicon.empty_groups(),
            vec![LexiconGroup::Exclusion, LexiconGroup::UnitCm, LexiconGroup::Volume]
        );
        assert!(Lexicon::default().is_empty());
    }

    #[test]
    fn test_group_display() {
        assert_eq!(LexiconGroup::UnitCm.to_string(), "unit-cm");
        assert_eq!(LexiconGroup::ForwardLooking.to_string(), "forward-looking");
    }
}
