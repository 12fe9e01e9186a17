//! Analysis configuration and lexicon file loading.
//!
//! A configuration file is TOML:
//!
//! ```toml
//! strategy = "exact-token"
//!
//! [normalize]
//! strip_punctuation = true
//! remove_stopwords = false
//!
//! [lexicons]
//! forward_looking = ["anticipate", "expect"]
//! unit_cm = "lexicons/cm_related_words.txt"
//! volume = "lexicons/volume_related_words.txt"
//! ```
//!
//! Each lexicon group is either an inline list or a path to a term file.
//! Groups left out fall back to [`Lexicon::standard`].

use crate::lexicon::{Lexicon, LexiconGroup};
use crate::normalize::NormalizeOptions;
use crate::strategy::MatchStrategy;
use crate::{FlsError, FlsResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Where the terms of one lexicon group come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LexiconSource {
    /// Terms listed directly in the configuration
    Inline(Vec<String>),
    /// Newline-delimited term file
    File(PathBuf),
}

/// Per-group lexicon sources.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LexiconSources {
    pub forward_looking: Option<LexiconSource>,
    pub uncertainty: Option<LexiconSource>,
    pub exclusion: Option<LexiconSource>,
    pub unit_cm: Option<LexiconSource>,
    pub volume: Option<LexiconSource>,
}

impl LexiconSources {
    fn get(&self, group: LexiconGroup) -> Option<&LexiconSource> {
        match group {
            LexiconGroup::ForwardLooking => self.forward_looking.as_ref(),
            LexiconGroup::Uncertainty => self.uncertainty.as_ref(),
            LexiconGroup::Exclusion => self.exclusion.as_ref(),
            LexiconGroup::UnitCm => self.unit_cm.as_ref(),
            LexiconGroup::Volume => self.volume.as_ref(),
        }
    }
}

/// Configuration for an analysis run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    pub strategy: MatchStrategy,
    /// Overrides the strategy's default normalization
    pub normalize: Option<NormalizeOptions>,
    pub lexicons: LexiconSources,
    /// Treat blank lines as sentence boundaries
    pub paragraph_breaks: bool,
    /// Directory relative term file paths are resolved against
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

impl AnalysisConfig {
    /// Load from a TOML file. Relative term file paths resolve against the
    /// file's directory.
    pub fn load(path: &Path) -> FlsResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| FlsError::Load {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let mut config = Self::from_toml_str(&content)?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> FlsResult<Self> {
        toml::from_str(content).map_err(|e| FlsError::Config {
            message: e.to_string(),
        })
    }

    /// Normalization in effect: the override if present, else the strategy default.
    pub fn normalize_options(&self) -> NormalizeOptions {
        self.normalize
            .unwrap_or_else(|| self.strategy.default_options())
    }

    /// Build the lexicon, reading any term files.
    pub fn build_lexicon(&self) -> FlsResult<Lexicon> {
        let standard = Lexicon::standard();
        let mut builder = Lexicon::builder();

        for group in LexiconGroup::ALL {
            builder = match self.lexicons.get(group) {
                Some(LexiconSource::Inline(terms)) => builder.terms(group, terms),
                Some(LexiconSource::File(path)) => {
                    let terms = load_terms(&self.resolve(path))?;
                    tracing::debug!(
                        %group,
                        path = %path.display(),
                        terms = terms.len(),
                        "loaded lexicon file"
                    );
                    builder.terms(group, terms)
                }
                None => builder.terms(group, standard.terms(group)),
            };
        }

        Ok(builder.build())
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}

/// Read a newline-delimited term file.
///
/// Lines are trimmed; blank lines and lines starting with `#` are skipped.
pub fn load_terms(path: &Path) -> FlsResult<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|e| FlsError::Load {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_terms() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# unit CM terms\nprice\n\n  cost per unit  \nmargin").unwrap();

        let terms = load_terms(file.path()).unwrap();
        assert_eq!(terms, vec!["price", "cost per unit", "margin"]);
    }

    #[test]
    fn test_load_terms_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_terms(&dir.path().join("missing.txt")).unwrap_err();
        assert!(matches!(err, FlsError::Load { .. }));
    }

    #[test]
    fn test_default_config() {
        let config = AnalysisConfig::from_toml_str("").unwrap();
        assert_eq!(config.strategy, MatchStrategy::Substring);
        assert_eq!(config.normalize_options(), NormalizeOptions::lowercase_only());
        assert_eq!(config.build_lexicon().unwrap(), Lexicon::standard());
    }

    #[test]
    fn test_inline_and_file_sources() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("volume.txt"), "Demand\nunits sold\n").unwrap();
        let config_path = dir.path().join("analysis.toml");
        fs::write(
            &config_path,
            r#"
strategy = "exact-token"

[lexicons]
forward_looking = ["expect"]
volume = "volume.txt"
"#,
        )
        .unwrap();

        let config = AnalysisConfig::load(&config_path).unwrap();
        assert_eq!(config.strategy, MatchStrategy::ExactToken);
        assert_eq!(config.normalize_options(), NormalizeOptions::full());

        let lexicon = config.build_lexicon().unwrap();
        assert_eq!(lexicon.terms(LexiconGroup::ForwardLooking), &["expect"]);
        assert_eq!(lexicon.terms(LexiconGroup::Volume), &["demand", "units sold"]);
        assert_eq!(
            lexicon.terms(LexiconGroup::Uncertainty),
            Lexicon::standard().terms(LexiconGroup::Uncertainty)
        );
    }

    #[test]
    fn test_normalize_override() {
        let config = AnalysisConfig::from_toml_str(
            "strategy = \"exact-token\"\n[normalize]\nstrip_punctuation = true\n",
        )
        .unwrap();
        assert_eq!(
            config.normalize_options(),
            NormalizeOptions {
                strip_punctuation: true,
                remove_stopwords: false,
            }
        );
    }

    #[test]
    fn test_invalid_config() {
        let err = AnalysisConfig::from_toml_str("strategy = \"fuzzy\"").unwrap_err();
        assert!(matches!(err, FlsError::Config { .. }));

        let err = AnalysisConfig::from_toml_str("[lexicons]\ntopics = []").unwrap_err();
        assert!(matches!(err, FlsError::Config { .. }));
    }

    #[test]
    fn test_missing_term_file() {
        let config = AnalysisConfig::from_toml_str("[lexicons]\nunit_cm = \"nope.txt\"").unwrap();
        assert!(matches!(config.build_lexicon(), Err(FlsError::Load { .. })));
    }
}
