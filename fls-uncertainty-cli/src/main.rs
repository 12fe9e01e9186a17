//! Command line front end for fls-uncertainty.
//!
//! Usage:
//! ```bash
//! fls-uncertainty score --current mdna_2023.txt --prior mdna_2022.txt
//! fls-uncertainty score --current 10k_2023.htm --prior 10k_2022.htm --extract --json
//! fls-uncertainty score --current 10k.txt --prior 10k_prior.txt --extract --encoding windows-1252
//! fls-uncertainty classify --text "We anticipate the price might be uncertain." --evidence
//! fls-uncertainty scale --fit 0.12 0.05 0.4
//! ```

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use fls_uncertainty::{
    AnalysisConfig, Analyzer, ClassificationDisplay, MatchStrategy, MinMaxScaler,
};
use fls_uncertainty_document::{Encoding, Extraction, FilingText};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fls-uncertainty")]
#[command(version)]
#[command(
    about = "Forward-looking statement uncertainty measures for 10-K MD&A text",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (overridden by RUST_LOG)
    #[arg(short, long, default_value = "warn", global = true)]
    log_level: String,
}

#[derive(Args)]
struct AnalysisArgs {
    /// TOML analysis configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Matching strategy: substring or exact-token (overrides the configuration)
    #[arg(short, long)]
    strategy: Option<MatchStrategy>,
}

#[derive(Args)]
struct InputArgs {
    /// Encoding label of the input files, e.g. windows-1252 (detected when omitted)
    #[arg(long)]
    encoding: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a current/prior year document pair
    Score {
        /// Current year text file
        #[arg(long)]
        current: PathBuf,

        /// Prior year text file
        #[arg(long)]
        prior: PathBuf,

        /// Locate the MD&A section before scoring
        #[arg(long)]
        extract: bool,

        /// Print the full report as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        analysis: AnalysisArgs,
    },

    /// Classify each sentence of a text
    Classify {
        /// Text to classify
        #[arg(short, long, conflicts_with = "file")]
        text: Option<String>,

        /// File to classify
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Show the matched terms under each sentence
        #[arg(long)]
        evidence: bool,

        /// Truncate sentences to this many columns
        #[arg(long)]
        width: Option<usize>,

        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        analysis: AnalysisArgs,
    },

    /// Min/max scale aggregate values
    Scale {
        /// Reference minimum (ignored with --fit)
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        min: f64,

        /// Reference maximum (ignored with --fit)
        #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
        max: f64,

        /// Derive the reference range from the values themselves
        #[arg(long)]
        fit: bool,

        /// Values to scale
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&cli.log_level))
        .context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let output = run(cli.command)?;
    println!("{}", output);
    Ok(())
}

fn run(command: Commands) -> Result<String> {
    match command {
        Commands::Score {
            current,
            prior,
            extract,
            json,
            input,
            analysis,
        } => score(&current, &prior, extract, json, &input, &analysis),
        Commands::Classify {
            text,
            file,
            evidence,
            width,
            input,
            analysis,
        } => {
            let text = match (text, file) {
                (Some(text), _) => text,
                (None, Some(path)) => read_filing(&path, &input)?.text().to_string(),
                (None, None) => bail!("either --text or --file is required"),
            };
            classify(&text, evidence, width, &analysis)
        }
        Commands::Scale {
            min,
            max,
            fit,
            values,
        } => Ok(scale(&values, min, max, fit)),
    }
}

fn build_analyzer(args: &AnalysisArgs) -> Result<Analyzer> {
    let mut config = match &args.config {
        Some(path) => AnalysisConfig::load(path)
            .with_context(|| format!("loading configuration {}", path.display()))?,
        None => AnalysisConfig::default(),
    };
    if let Some(strategy) = args.strategy {
        config.strategy = strategy;
    }

    let analyzer = Analyzer::from_config(&config).context("building lexicon")?;
    info!(strategy = %config.strategy, "analyzer ready");
    Ok(analyzer)
}

/// Read a filing, decoding it and stripping HTML markup.
fn read_filing(path: &Path, input: &InputArgs) -> Result<FilingText> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let filing = match &input.encoding {
        Some(label) => {
            let Some(encoding) = Encoding::for_label(label.trim().as_bytes()) else {
                bail!("unknown encoding label {:?}", label);
            };
            FilingText::from_bytes_with_encoding(&bytes, encoding)
        }
        None => FilingText::from_bytes(&bytes),
    };
    info!(
        path = %path.display(),
        encoding = filing.encoding().name(),
        html = filing.was_html(),
        "read filing"
    );
    Ok(filing)
}

/// Section text to score, or an empty document when the markers are missing.
fn section_text(path: &Path, filing: &FilingText, extract: bool) -> String {
    if !extract {
        return filing.text().to_string();
    }
    match filing.mdna() {
        Extraction::Found(text) => text.to_string(),
        Extraction::SectionNotFound => {
            warn!(path = %path.display(), "MD&A section not found; scoring as empty document");
            String::new()
        }
    }
}

fn score(
    current: &Path,
    prior: &Path,
    extract: bool,
    json: bool,
    input: &InputArgs,
    args: &AnalysisArgs,
) -> Result<String> {
    let analyzer = build_analyzer(args)?;
    let current_text = section_text(current, &read_filing(current, input)?, extract);
    let prior_text = section_text(prior, &read_filing(prior, input)?, extract);

    let report = analyzer.analyze_pair(&current_text, &prior_text);
    if json {
        return serde_json::to_string_pretty(&report).context("serializing report");
    }

    let scores = report.scores;
    Ok(format!(
        "UC_UnitCM: {}\nUC_Volume: {}\nUC_Other: {}\nFLS uncertainty: {}",
        scores.uc_unit_cm, scores.uc_volume, scores.uc_other, scores.fls_uncertainty
    ))
}

fn classify(
    text: &str,
    evidence: bool,
    width: Option<usize>,
    args: &AnalysisArgs,
) -> Result<String> {
    let analyzer = build_analyzer(args)?;
    let sentences = analyzer.classify_document(text);

    let mut display = ClassificationDisplay::new(&sentences);
    if evidence {
        display.include_evidence();
    }
    if let Some(width) = width {
        display.max_sentence_width(width);
    }
    Ok(display.to_string())
}

fn scale(values: &[f64], min: f64, max: f64, fit: bool) -> String {
    let scaler = if fit {
        MinMaxScaler::fit(values.iter().copied())
    } else {
        MinMaxScaler::new(min, max)
    };

    values
        .iter()
        .map(|&value| format!("{}\t{}", value, scaler.transform(value)))
        .collect::<Vec<_>>()
        .join("\n")
}
