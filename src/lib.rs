pub mod analyzer;
pub mod cli;
pub mod config;
pub mod corrector;

use serde::{Deserialize, Serialize};

pub use analyzer::{AnalyzeError, TextAnalyzer};
pub use config::Config;
pub use corrector::rules::{Rule, RuleLoadError, RuleSet};
pub use corrector::SpacingCorrector;

/// Immutable input for a single analysis request.
///
/// Construction is the input-validation boundary: an empty string is
/// rejected here, so everything downstream operates on known-good text.
#[derive(Debug, Clone)]
pub struct Document {
    text: String,
}

impl Document {
    pub fn new(text: impl Into<String>) -> Result<Self, AnalyzeError> {
        let text = text.into();
        if text.is_empty() {
            return Err(AnalyzeError::InvalidInput);
        }
        Ok(Self { text })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Character count (Unicode scalar values, not bytes).
    pub fn char_count(&self) -> CharCount {
        analyzer::classifier::count_chars(&self.text)
    }
}

/// Full analysis bundle for one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub chars: CharCount,
    pub words: WordCount,
    pub lines: usize,
    pub sentences: usize,
    pub classes: CharClassCounts,
    pub correction: CorrectionResult,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharCount {
    pub total: usize,
    /// Total with U+0020 spaces removed; other whitespace still counts.
    pub without_spaces: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub hangul: usize,
    pub latin: usize,
}

impl WordCount {
    pub fn total(&self) -> usize {
        self.hangul + self.latin
    }
}

/// Per-class character tally. Every character lands in exactly one class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharClassCounts {
    pub hangul: usize,
    pub latin: usize,
    pub digit: usize,
    pub whitespace: usize,
    pub other: usize,
}

impl CharClassCounts {
    /// Equals the document's total character count.
    pub fn total(&self) -> usize {
        self.hangul + self.latin + self.digit + self.whitespace + self.other
    }
}

/// One proposed spacing edit, located in the original text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub original: String,
    pub corrected: String,
    /// Byte offset of the match start in the original text.
    pub start: usize,
    /// Byte offset one past the match end.
    pub end: usize,
}

/// Everything the spacing pass produced: the located suggestions
/// (ascending by start) and the fully corrected text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CorrectionResult {
    pub suggestions: Vec<Suggestion>,
    pub corrected: String,
}
