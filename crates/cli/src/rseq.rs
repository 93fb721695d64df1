//! rseq - Print reproducible random sequences
//!
//! Draws raw values, random integers, evenly spaced samples or a shuffle
//! from a seeded sequence and prints them as text or JSON. Without a seed
//! one is taken from OS entropy and printed, so any run can be replayed.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use randseq_core::{EnumerationMode, RandomSequence, SampleRange, shuffled};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// What to draw from the sequence.
#[derive(Debug, Clone, Copy, ValueEnum, Default, Serialize)]
#[serde(rename_all = "lowercase")]
enum Mode {
    /// Random integers in [from, to) (default)
    #[default]
    Integers,
    /// Evenly spaced ascending integers in [from, to)
    Samples,
    /// Raw values in [0, 1)
    Values,
    /// Shuffle the positional items
    Shuffle,
}

impl Mode {
    fn name(self) -> &'static str {
        match self {
            Mode::Integers => "integers",
            Mode::Samples => "samples",
            Mode::Values => "values",
            Mode::Shuffle => "shuffle",
        }
    }
}

/// Output format.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    /// One `serial<TAB>value` line per item after a `#` header line
    #[default]
    Text,
    /// A single JSON object
    Json,
}

/// Print reproducible random sequences.
#[derive(Parser, Debug)]
#[command(name = "rseq")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Items to shuffle (shuffle mode only)
    items: Vec<String>,

    /// Seed for the sequence; a random seed is used when omitted
    #[arg(short = 's', long, env = "RSEQ_SEED")]
    seed: Option<u32>,

    /// What to draw
    #[arg(short = 'm', long, value_enum, default_value = "integers")]
    mode: Mode,

    /// Number of items to draw (ignored by shuffle)
    #[arg(short = 'n', long, default_value = "10")]
    count: usize,

    /// Inclusive lower bound for integers and samples
    #[arg(short = 'f', long, default_value = "0", allow_negative_numbers = true)]
    from: i64,

    /// Exclusive upper bound for integers and samples
    #[arg(short = 't', long, default_value = "100", allow_negative_numbers = true)]
    to: i64,

    /// Output format
    #[arg(short = 'F', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Path to file where output is written, or "-" for stdout
    #[arg(short = 'o', long, default_value = "-")]
    outfile: String,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum EntryValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

#[derive(Debug, Serialize)]
struct Entry {
    value: EntryValue,
    serial: usize,
}

#[derive(Debug, Serialize)]
struct Report {
    seed: u32,
    mode: Mode,
    #[serde(skip_serializing_if = "Option::is_none")]
    range: Option<SampleRange>,
    items: Vec<Entry>,
}

fn setup_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn enumeration(
    sequence: &mut RandomSequence,
    args: &Args,
    mode: EnumerationMode,
) -> Result<(Option<SampleRange>, Vec<Entry>)> {
    let range = SampleRange::new(args.from, args.to)?;
    let entries = sequence
        .enumerate(args.count, range, mode)?
        .map(|(value, serial)| Entry {
            value: EntryValue::Integer(value),
            serial,
        })
        .collect();
    Ok((Some(range), entries))
}

/// Draws everything the arguments ask for.
fn build_report(args: &Args) -> Result<Report> {
    let mut sequence = match args.seed {
        Some(seed) => RandomSequence::new(seed),
        None => RandomSequence::from_entropy(),
    };
    let seed = sequence.seed();
    tracing::debug!(seed, mode = args.mode.name(), count = args.count, "drawing");

    let (range, items) = match args.mode {
        Mode::Integers => enumeration(&mut sequence, args, EnumerationMode::Random)?,
        Mode::Samples => enumeration(&mut sequence, args, EnumerationMode::Samples)?,
        Mode::Values => {
            let items = (0..args.count)
                .map(|serial| Entry {
                    value: EntryValue::Float(sequence.next_value()),
                    serial,
                })
                .collect();
            (None, items)
        }
        Mode::Shuffle => {
            let items = shuffled(args.items.as_slice(), &mut sequence)
                .into_iter()
                .enumerate()
                .map(|(serial, item)| Entry {
                    value: EntryValue::Text(item),
                    serial,
                })
                .collect();
            (None, items)
        }
    };

    Ok(Report {
        seed,
        mode: args.mode,
        range,
        items,
    })
}

fn write_text<W: Write>(writer: &mut W, report: &Report) -> io::Result<()> {
    write!(writer, "# seed={} mode={}", report.seed, report.mode.name())?;
    if let Some(range) = report.range {
        write!(writer, " range={}", range)?;
    }
    writeln!(writer)?;

    for entry in &report.items {
        match &entry.value {
            EntryValue::Integer(v) => writeln!(writer, "{}\t{}", entry.serial, v)?,
            EntryValue::Float(v) => writeln!(writer, "{}\t{}", entry.serial, v)?,
            EntryValue::Text(v) => writeln!(writer, "{}\t{}", entry.serial, v)?,
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.debug);

    if !args.items.is_empty() && !matches!(args.mode, Mode::Shuffle) {
        tracing::warn!(
            mode = args.mode.name(),
            "positional items are only used by shuffle mode"
        );
    }

    let report = build_report(&args)?;

    // Open output file or use stdout
    let mut output: Box<dyn Write> = if args.outfile == "-" {
        Box::new(BufWriter::new(io::stdout()))
    } else {
        let file = File::create(&args.outfile)
            .with_context(|| format!("failed to create output file {}", args.outfile))?;
        Box::new(BufWriter::new(file))
    };

    match args.format {
        OutputFormat::Text => write_text(&mut output, &report)?,
        OutputFormat::Json => {
            serde_json::to_writer(&mut output, &report)?;
            writeln!(output)?;
        }
    }

    output.flush()?;
    Ok(())
}
