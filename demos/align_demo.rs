use std::fs;
use std::path::PathBuf;

use bitext_align_rs::*;
use clap::Parser;

/// Aligns a bilingual English/Chinese text and prints the analysis as JSON.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Path to the English source text
    english: PathBuf,
    /// Path to the Chinese source text
    chinese: PathBuf,
    /// Minimum confidence kept in the output
    #[arg(long, default_value_t = 0.7)]
    min_confidence: f64,
    /// How to resolve unmatched sentences: skip, placeholder or machine-translation
    #[arg(long, default_value = "skip")]
    fallback: String,
}

fn main() -> Result<(), BTAError> {
    env_logger::init();
    let args = Args::parse();

    let english = fs::read_to_string(&args.english)?;
    let chinese = fs::read_to_string(&args.chinese)?;

    let fallback_strategy = match args.fallback.as_str() {
        "skip" => FallbackStrategy::Skip,
        "placeholder" => FallbackStrategy::Placeholder,
        "machine-translation" => FallbackStrategy::MachineTranslation,
        other => return Err(BTAError::from(format!("unknown fallback strategy: {}", other))),
    };

    let options = AlignmentOptions {
        method: AlignMethod::Hybrid,
        min_confidence: args.min_confidence,
        fallback_strategy,
    };

    let report = MaterialAnalyzer::new().analyze(&english, &chinese, &options)?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
