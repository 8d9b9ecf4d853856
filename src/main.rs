// src/main.rs
use anyhow::Result;
use clap::Parser;
use colorful::Colorful;
use log::debug;
use std::path::PathBuf;

use flacaudit::batch::{analyze_batch, discover_audio_files, BatchOptions, CancelToken};
use flacaudit::cli::output;
use flacaudit::config::AnalysisConfig;

#[derive(Parser, Debug)]
#[command(name = "flacaudit")]
#[command(about = "Detect upsampled fake lossless audio files and report DR/loudness metrics")]
struct Args {
    /// Input file or directory (scanned recursively for .flac/.wav)
    #[arg(short, long)]
    input: PathBuf,

    /// High-frequency threshold bias in dB (known calibrations: 18 or 20)
    #[arg(long, default_value = "18.0")]
    bias_db: f64,

    /// Worker pool size (defaults to available parallelism)
    #[arg(short, long)]
    threads: Option<usize>,

    /// Emit the report as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Disable the progress bar
    #[arg(long)]
    no_progress: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = AnalysisConfig::default();
    config.cutoff.hf_bias_db = args.bias_db;

    let files = discover_audio_files(&args.input)?;
    if files.is_empty() {
        println!("{}", "No audio files found!".red());
        return Ok(());
    }

    if args.verbose {
        println!("Found {} audio file(s)", files.len());
        for file in &files {
            debug!("queued {}", file.display());
        }
    }

    let options = BatchOptions {
        threads: args.threads,
        progress: !args.no_progress && !args.json,
    };
    let cancel = CancelToken::new();

    let records = analyze_batch(&files, &config, &options, &cancel)?;

    if args.json {
        println!("{}", output::render_json(&records)?);
    } else {
        print!("{}", output::render_table(&records));
    }

    Ok(())
}
