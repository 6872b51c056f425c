pub mod rules;

use crate::{CorrectionResult, Suggestion};
use rules::RuleSet;

/// Runs a [`RuleSet`] against text, producing located suggestions and a
/// fully corrected rendition.
pub struct SpacingCorrector {
    rules: RuleSet,
}

impl SpacingCorrector {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Scan `text` with every rule and assemble the corrected text.
    ///
    /// Each rule scans the pristine original left to right, so suggestion
    /// offsets are always original-text coordinates and rules never see
    /// each other's output. Two rules may therefore flag overlapping
    /// spans; both are reported.
    pub fn check(&self, text: &str) -> CorrectionResult {
        let mut suggestions = Vec::new();

        for rule in self.rules.iter() {
            for m in rule.pattern().find_iter(text) {
                let corrected = rule.apply(m.as_str());
                if corrected != m.as_str() {
                    suggestions.push(Suggestion {
                        original: m.as_str().to_string(),
                        corrected,
                        start: m.start(),
                        end: m.end(),
                    });
                }
            }
        }

        // Resolve the applied set while the list is still in rule order.
        let corrected = apply(text, &suggestions);

        // Reported list is ascending by position; stable, so rule order
        // still breaks ties.
        suggestions.sort_by_key(|s| s.start);

        CorrectionResult {
            suggestions,
            corrected,
        }
    }
}

/// Splice suggestions into `text`, rightmost first.
///
/// When spans collide, the suggestion seen first (rule order, then match
/// order) claims the region and the rest are dropped from the applied set.
/// Applying in descending start order keeps every remaining offset valid
/// no matter how many earlier edits changed the text length.
fn apply(text: &str, suggestions: &[Suggestion]) -> String {
    let mut accepted: Vec<&Suggestion> = Vec::new();
    for s in suggestions {
        if accepted
            .iter()
            .all(|a| s.end <= a.start || a.end <= s.start)
        {
            accepted.push(s);
        }
    }
    accepted.sort_by(|a, b| b.start.cmp(&a.start));

    let mut corrected = text.to_string();
    for s in &accepted {
        corrected.replace_range(s.start..s.end, &s.corrected);
    }
    corrected
}
