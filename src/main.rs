use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use rolecall::{
    aggregate_durations, classify, extract_labels, read_segments_file, session_paths,
    write_records_file, ClassifyConfig, GuestThresholds, InteractionWindow, RegexLabelExtractor,
    ReportTable, SegmentKind,
};

#[derive(Parser)]
#[command(name = "rolecall")]
#[command(author, version, about = "Speaker role classification for diarized broadcast transcripts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify speaker roles in a segment table
    Classify {
        /// Input segment file (CSV with Type, Speakers, Duration columns)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for the role table (CSV)
        #[arg(short, long)]
        output: PathBuf,

        #[command(flatten)]
        tuning: TuningArgs,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Locate a dated session under a base directory and classify it
    Session {
        /// Session date (YYYYMMDD)
        date: String,

        /// Directory holding per-date session folders
        #[arg(long)]
        base_dir: PathBuf,

        #[command(flatten)]
        tuning: TuningArgs,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Summarize a segment table without classifying
    Analyze {
        /// Input segment file (CSV with Type, Speakers, Duration columns)
        #[arg(short, long)]
        input: PathBuf,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

#[derive(Args)]
struct TuningArgs {
    /// Neighborhood radius in segments when counting host interactions
    #[arg(long, default_value = "3")]
    window: usize,

    /// Interaction floor below which nobody qualifies as guest
    #[arg(long, default_value = "12")]
    min_absolute: u32,

    /// Required fraction of the top non-host speaker's interaction count
    #[arg(long, default_value = "0.2")]
    relative_ratio: f64,

    /// Interaction count that always qualifies as guest
    #[arg(long, default_value = "20")]
    free_pass: u32,

    /// Rows shown in the console report
    #[arg(long, default_value = "15")]
    top: usize,
}

impl TuningArgs {
    fn to_config(&self) -> ClassifyConfig {
        ClassifyConfig {
            window: InteractionWindow::with_radius(self.window),
            thresholds: GuestThresholds {
                min_absolute: self.min_absolute,
                relative_ratio: self.relative_ratio,
                free_pass: self.free_pass,
            },
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Classify {
            input,
            output,
            tuning,
            verbose,
        } => {
            setup_logging(verbose);
            run_classify(input, output, &tuning)
        }
        Commands::Session {
            date,
            base_dir,
            tuning,
            verbose,
        } => {
            setup_logging(verbose);
            let paths = session_paths(&base_dir, &date)?;
            run_classify(paths.input, paths.output, &tuning)
        }
        Commands::Analyze { input, verbose } => {
            setup_logging(verbose);
            analyze_segments(input)
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn run_classify(input: PathBuf, output: PathBuf, tuning: &TuningArgs) -> Result<()> {
    info!("Loading segments from {:?}", input);
    let segments = read_segments_file(&input).context("Failed to load segment file")?;
    info!("Loaded {} segments", segments.len());

    let extractor = RegexLabelExtractor::new();
    let outcome = classify(&segments, &tuning.to_config(), &extractor);

    if outcome.is_empty() {
        println!("No labeled speech segments found.");
    } else {
        print!(
            "{}",
            ReportTable::new(&outcome.records).with_top(tuning.top).format()
        );
    }

    write_records_file(&output, &outcome.records).context("Failed to write role table")?;
    info!("Role table written to {:?}", output);

    Ok(())
}

fn analyze_segments(input: PathBuf) -> Result<()> {
    info!("Analyzing segments from {:?}", input);
    let segments = read_segments_file(&input).context("Failed to load segment file")?;

    let speech_count = segments.iter().filter(|s| s.is_speech()).count();
    let speech_duration: f64 = segments
        .iter()
        .filter(|s| s.is_speech())
        .map(|s| s.duration)
        .sum();

    println!("Segment Analysis");
    println!("================");
    println!("Total segments: {}", segments.len());
    println!("Speech segments: {}", speech_count);
    println!("Other segments: {}", segments.len() - speech_count);
    println!("Speech duration: {:.1}s", speech_duration);
    println!();

    let extractor = RegexLabelExtractor::new();
    let labels = extract_labels(&segments, &extractor);
    let unlabeled_speech = segments
        .iter()
        .zip(&labels)
        .filter(|(s, label)| s.kind == SegmentKind::Speech && label.is_none())
        .count();
    let durations = aggregate_durations(&segments, &labels);

    println!("Speakers");
    println!("--------");
    println!("Distinct speakers: {}", durations.len());
    println!("Unlabeled speech segments: {}", unlabeled_speech);
    for (label, total) in durations.ranked() {
        let occurrences = labels
            .iter()
            .filter(|l| l.as_deref() == Some(label))
            .count();
        println!("{}: {:.1}s over {} segments", label, total, occurrences);
    }

    Ok(())
}
