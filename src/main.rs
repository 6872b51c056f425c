use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io::{self, Read};
use std::path::PathBuf;
use textchk::cli::output::{self, OutputFormat};
use textchk::{Config, Document, TextAnalyzer};

#[derive(Parser, Debug)]
#[command(name = "textchk")]
#[command(version, about = "A blazingly fast text analyzer and Korean spacing checker", long_about = None)]
struct Cli {
    /// Files to analyze (reads stdin when omitted)
    #[arg(value_name = "FILES")]
    files: Vec<PathBuf>,

    /// Spacing rule file (one `pattern,correction` per line)
    #[arg(short, long)]
    rules: Option<PathBuf>,

    /// Print the fully corrected text after the report
    #[arg(short, long)]
    corrected: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with code 0 even if spacing suggestions are found
    #[arg(long)]
    no_fail: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "textchk", &mut io::stdout());
        return Ok(());
    }

    // Load configuration
    let config = Config::load(cli.rules.clone())?;

    // Initialize analyzer (loads the rule set once)
    let analyzer = TextAnalyzer::new(&config)?;

    // Collect inputs: named files, or stdin as a single input
    let mut inputs = Vec::new();
    if cli.files.is_empty() {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        inputs.push(("<stdin>".to_string(), buffer));
    } else {
        for file_path in &cli.files {
            if !file_path.exists() {
                eprintln!("Error: File not found: {}", file_path.display());
                continue;
            }
            let content = std::fs::read_to_string(file_path)
                .with_context(|| format!("Failed to read file: {}", file_path.display()))?;
            inputs.push((file_path.display().to_string(), content));
        }
    }

    let show_corrected = cli.corrected || config.show_corrected;
    let analyzed = inputs.len();
    let mut total_suggestions = 0;

    for (label, content) in inputs {
        let doc = match Document::new(content) {
            Ok(doc) => doc,
            Err(e) => {
                eprintln!("{}: {}", label, e);
                continue;
            }
        };

        let report = analyzer.analyze(&doc);
        total_suggestions += report.correction.suggestions.len();

        output::print_report(&label, doc.text(), &report, !cli.no_color, &cli.format);
        if show_corrected {
            output::print_corrected(&report.correction.corrected, !cli.no_color);
        }
    }

    if matches!(cli.format, OutputFormat::Text) {
        output::print_summary(total_suggestions, analyzed, !cli.no_color);
    }

    // Exit with appropriate code
    if total_suggestions > 0 && !cli.no_fail {
        std::process::exit(1);
    }

    Ok(())
}
