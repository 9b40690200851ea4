//! `easybank2qif`: convert an easybank or BAWAG CSV export file to QIF.
//!
//! ```bash
//! # Bank account export, summary on stderr
//! easybank2qif Bank export.csv -o export.qif -s
//!
//! # Card export from stdin, Latin-1 in, UTF-8 out
//! cat card.csv | easybank2qif CCard - -f latin1 > card.qif
//! ```

use std::fs::File;
use std::io::{Read, Write, stdin, stdout};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use easybank_qif::{ConverterBuilder, StatementType, Verbosity};

/// Convert an easybank or BAWAG CSV export file to QIF format.
#[derive(Parser, Debug)]
#[command(name = "easybank2qif")]
#[command(version, about)]
struct Args {
    /// Type of the CSV export.
    #[arg(value_enum)]
    statement_type: StatementTypeArg,

    /// Input file in CSV format. `-` reads from stdin.
    file: String,

    /// Output file for the resulting QIF. If not given, stdout is used.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print debugging information to stderr; includes --summary.
    #[arg(short, long)]
    debug: bool,

    /// Print a summary of transaction kinds to stderr.
    #[arg(short, long)]
    summary: bool,

    /// Encoding of the output file (e.g. utf-8, latin1, windows-1252).
    #[arg(short = 't', long = "encto")]
    encto: Option<String>,

    /// Encoding of the input file.
    #[arg(short = 'f', long = "encfrom")]
    encfrom: Option<String>,

    /// Date format of the input file, in chrono syntax.
    #[arg(long = "dateformat", default_value = "%d.%m.%Y")]
    date_format: String,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StatementTypeArg {
    /// Credit card statement.
    #[value(name = "CCard")]
    CCard,
    /// Bank account statement.
    #[value(name = "Bank")]
    Bank,
}

impl From<StatementTypeArg> for StatementType {
    fn from(arg: StatementTypeArg) -> Self {
        match arg {
            StatementTypeArg::CCard => StatementType::Card,
            StatementTypeArg::Bank => StatementType::Bank,
        }
    }
}

impl Args {
    fn verbosity(&self) -> Verbosity {
        if self.debug {
            Verbosity::Debug
        } else if self.summary {
            Verbosity::Summary
        } else {
            Verbosity::Quiet
        }
    }
}

fn main() {
    let args = Args::parse();

    let level = if args.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();

    if let Err(e) = run(args) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let input: Box<dyn Read> = if args.file == "-" {
        Box::new(stdin().lock())
    } else {
        let file = File::open(&args.file)
            .with_context(|| format!("Failed to open input file: {}", args.file))?;
        Box::new(file)
    };

    let output: Box<dyn Write> = match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Box::new(file)
        }
        None => Box::new(stdout().lock()),
    };

    let verbosity = args.verbosity();
    let mut builder = ConverterBuilder::new()
        .statement_type(args.statement_type.into())
        .date_format(&args.date_format)
        .verbosity(verbosity);
    if let Some(label) = &args.encfrom {
        builder = builder.input_encoding(label);
    }
    if let Some(label) = &args.encto {
        builder = builder.output_encoding(label);
    }

    let summary = builder.convert(input, output).context("Conversion failed")?;

    // stderr, so it never mixes with QIF on stdout
    if verbosity.wants_summary() {
        eprint!("{summary}");
    }

    Ok(())
}
