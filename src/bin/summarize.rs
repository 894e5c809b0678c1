//! Thin, synchronous demonstrator for the summarization core.
//!
//! Takes a JSON fixture of already-parsed sentences (the shape the
//! out-of-scope tokenizer/parser/morphological analyzer would hand the
//! core, see `Sentence`/`Token`/`Morphology` in `summarizer_core`),
//! runs `Summarizer::get_summary`, and prints the relevant itemsets plus
//! the sentences whose salience clears `--strength`. This replaces the
//! workspace's `actix-web` HTTP surface, which has no counterpart in this
//! crate: the core performs no network, process or database I/O.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

use summarizer_core::config::SummarizerConfig;
use summarizer_core::morphology::Sentence;
use summarizer_core::summarizer::Summarizer;

#[derive(Parser, Debug)]
#[command(about = "Runs the extractive summarization core over a parsed-sentence fixture")]
struct Args {
    /// Path to a JSON file containing a list of already-parsed sentences.
    path: PathBuf,

    /// Minimum salience a sentence needs to be printed as part of the summary.
    #[arg(long, default_value_t = 0.2)]
    strength: f64,

    /// Minimum relative support passed to the itemset miner.
    #[arg(long, default_value_t = 0.01)]
    min_support: f64,

    /// Inclusive n-gram size range, e.g. "2,4".
    #[arg(long, default_value = "2,4")]
    ngram_range: String,
}

fn parse_ngram_range(spec: &str) -> Option<(usize, usize)> {
    let (min, max) = spec.split_once(',')?;
    Some((min.trim().parse().ok()?, max.trim().parse().ok()?))
}

fn run(args: Args) -> summarizer_core::Result<()> {
    let raw = fs::read_to_string(&args.path)
        .map_err(|e| summarizer_core::Error::InvalidInput(format!("failed to read {:?}: {e}", args.path)))?;
    let sentences: Vec<Sentence> = serde_json::from_str(&raw)
        .map_err(|e| summarizer_core::Error::InvalidInput(format!("failed to parse fixture: {e}")))?;

    let ngram_dim_range = parse_ngram_range(&args.ngram_range)
        .ok_or_else(|| summarizer_core::Error::InvalidInput(format!("bad --ngram-range {:?}", args.ngram_range)))?;

    let config = SummarizerConfig { min_lcm_support: args.min_support, ngram_dim_range, ..SummarizerConfig::default() };

    info!("read {} sentences from {:?}", sentences.len(), args.path);
    let summary = Summarizer::new().get_summary(&sentences, &config)?;

    println!("relevant itemsets:");
    for itemset in &summary.relevant_itemsets {
        println!("  {:.4}  {}", itemset.score, itemset.text);
    }

    println!("\nrelevant keywords:");
    for keyword in summary.relevant_keywords.iter().take(20) {
        println!("  {:.4}  {}", keyword.score, keyword.keyword);
    }

    println!("\nsummary (strength >= {:.2}):", args.strength);
    for (index, score) in summary.salience_scores.iter().enumerate() {
        if *score >= args.strength {
            println!("  [{index}] salience={score:.4}");
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
