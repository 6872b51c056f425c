pub mod classifier;
pub mod segmenter;

use crate::config::Config;
use crate::corrector::rules::RuleSet;
use crate::corrector::SpacingCorrector;
use crate::{AnalysisReport, Document};
use anyhow::{Context, Result};
use thiserror::Error;

/// Rejected analysis input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalyzeError {
    #[error("no text to analyze")]
    InvalidInput,
}

/// Computes the statistics/correction bundle for a document.
///
/// Built once per process. `analyze` takes `&self` and keeps no state
/// between calls, so one analyzer can serve independent requests from any
/// number of threads.
pub struct TextAnalyzer {
    corrector: SpacingCorrector,
}

impl TextAnalyzer {
    /// Build an analyzer from configuration, loading the rule file it
    /// names or falling back to the built-in rules.
    pub fn new(config: &Config) -> Result<Self> {
        let rules = match &config.rules_file {
            Some(path) => RuleSet::load(path).with_context(|| {
                format!("failed to load spacing rules from {}", path.display())
            })?,
            None => RuleSet::defaults(),
        };
        Ok(Self::with_rules(rules))
    }

    pub fn with_rules(rules: RuleSet) -> Self {
        Self {
            corrector: SpacingCorrector::new(rules),
        }
    }

    /// Analyze one document: counts, segmentation, spacing correction.
    pub fn analyze(&self, doc: &Document) -> AnalysisReport {
        let text = doc.text();
        AnalysisReport {
            chars: classifier::count_chars(text),
            words: classifier::count_words(text),
            lines: segmenter::split_lines(text).len(),
            sentences: segmenter::split_sentences(text).len(),
            classes: classifier::classify_chars(text),
            correction: self.corrector.check(text),
        }
    }
}
