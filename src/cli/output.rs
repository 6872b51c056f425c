use crate::{AnalysisReport, CharClassCounts, CorrectionResult};
use colored::*;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use unicode_segmentation::UnicodeSegmentation;

/// Graphemes shown on each side of a suggestion in its context snippet.
const CONTEXT_WINDOW: usize = 10;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    input: &'a str,
    #[serde(flatten)]
    report: &'a AnalysisReport,
}

pub fn print_report(
    label: &str,
    text: &str,
    report: &AnalysisReport,
    colored_output: bool,
    format: &OutputFormat,
) {
    match format {
        OutputFormat::Text => print_text_report(label, text, report, colored_output),
        OutputFormat::Json => print_json_report(label, report),
    }
}

fn print_text_report(label: &str, text: &str, report: &AnalysisReport, colored_output: bool) {
    if colored_output {
        println!("\n{}", label.bold().underline());
    } else {
        println!("\n{}", label);
    }

    println!(
        "  Characters: {} (excluding spaces: {})",
        report.chars.total, report.chars.without_spaces
    );
    println!(
        "  Words: {} (hangul: {}, latin: {})",
        report.words.total(),
        report.words.hangul,
        report.words.latin
    );
    println!("  Lines: {}", report.lines);
    println!("  Sentences: {}", report.sentences);

    print_class_distribution(&report.classes, colored_output);
    print_suggestions(text, &report.correction, colored_output);
}

fn print_json_report(label: &str, report: &AnalysisReport) {
    let output = JsonReport {
        input: label,
        report,
    };
    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

fn print_class_distribution(classes: &CharClassCounts, colored_output: bool) {
    let total = classes.total().max(1);
    println!("  Character classes:");

    let rows = [
        ("hangul", classes.hangul),
        ("latin", classes.latin),
        ("digit", classes.digit),
        ("whitespace", classes.whitespace),
        ("other", classes.other),
    ];

    for (name, count) in rows {
        let pct = 100.0 * count as f64 / total as f64;
        let row = format!("    {:<12}{:>6} ({:>5.1}%)", name, count, pct);
        if colored_output {
            println!("{}", row.dimmed());
        } else {
            println!("{}", row);
        }
    }
}

fn print_suggestions(text: &str, correction: &CorrectionResult, colored_output: bool) {
    if correction.suggestions.is_empty() {
        if colored_output {
            println!("  {}", "✓ No spacing issues found".green());
        } else {
            println!("  ✓ No spacing issues found");
        }
        return;
    }

    println!("  Spacing suggestions:");
    for s in &correction.suggestions {
        let context = context_around(text, s.start, s.end);
        if colored_output {
            println!(
                "    {} → {}  {}",
                s.original.red().strikethrough(),
                s.corrected.green().bold(),
                context.dimmed()
            );
        } else {
            println!("    {} → {}  {}", s.original, s.corrected, context);
        }
    }
}

pub fn print_corrected(corrected: &str, colored_output: bool) {
    if colored_output {
        println!("\n{}", "Corrected text:".bold());
    } else {
        println!("\nCorrected text:");
    }
    println!("{}", corrected);
}

pub fn print_summary(total_suggestions: usize, inputs: usize, colored_output: bool) {
    println!();
    if total_suggestions == 0 {
        if colored_output {
            println!("{}", "✓ No spacing issues found!".green().bold());
        } else {
            println!("✓ No spacing issues found!");
        }
    } else {
        let suggestion_word = if total_suggestions == 1 {
            "suggestion"
        } else {
            "suggestions"
        };
        if colored_output {
            println!(
                "{} {} {} in {} {}",
                "✗".red().bold(),
                total_suggestions.to_string().red().bold(),
                suggestion_word,
                inputs,
                if inputs == 1 { "input" } else { "inputs" }
            );
        } else {
            println!(
                "✗ {} {} in {} {}",
                total_suggestions,
                suggestion_word,
                inputs,
                if inputs == 1 { "input" } else { "inputs" }
            );
        }
    }
}

/// Window of surrounding text for one suggestion, cut on grapheme
/// boundaries so a syllable is never split mid-byte.
fn context_around(text: &str, start: usize, end: usize) -> String {
    let mut left = start;
    for (taken, (idx, _)) in text[..start].grapheme_indices(true).rev().enumerate() {
        left = idx;
        if taken + 1 == CONTEXT_WINDOW {
            break;
        }
    }

    let mut right = end;
    for (taken, (idx, g)) in text[end..].grapheme_indices(true).enumerate() {
        right = end + idx + g.len();
        if taken + 1 == CONTEXT_WINDOW {
            break;
        }
    }

    let core = text[left..right].replace(['\n', '\t'], " ");
    match (left > 0, right < text.len()) {
        (true, true) => format!("...{}...", core),
        (true, false) => format!("...{}", core),
        (false, true) => format!("{}...", core),
        (false, false) => core,
    }
}
