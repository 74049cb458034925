//! `transit-catalogue` — answer stat and route requests from a document.
//!
//! ```text
//! transit-catalogue input.json --pretty
//! transit-catalogue --format text < queries.txt
//! ```
//!
//! The document is read from `INPUT` or stdin; answers go to stdout and
//! log output to stderr.  `RUST_LOG` overrides the default filter.

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, info};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// JSON document with base_requests / stat_requests arrays
    Json,
    /// Line-oriented `Stop …` / `Bus …` document
    Text,
}

#[derive(Parser, Debug)]
#[command(name = "transit-catalogue", version, about = "Query a transit catalogue: bus stats, stop buses and fastest routes")]
struct Cli {
    /// Input document (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Input format
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Verbose output (show debug messages)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if cli.verbose { "debug" } else { "warn" }),
    )
    .format_timestamp(None)
    .target(env_logger::Target::Stderr)
    .init();

    let reader = open_input(cli.input.as_ref())?;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match cli.format {
        Format::Json => {
            let responses = tc_query::process_json(reader).context("failed to process JSON document")?;
            info!("answered {} requests", responses.len());
            if cli.pretty {
                serde_json::to_writer_pretty(&mut out, &responses)?;
            } else {
                serde_json::to_writer(&mut out, &responses)?;
            }
            writeln!(out)?;
        }
        Format::Text => {
            tc_query::process_text(reader, &mut out).context("failed to process text document")?;
        }
    }

    out.flush()?;
    Ok(())
}

fn open_input(path: Option<&PathBuf>) -> Result<Box<dyn BufRead>> {
    match path {
        Some(path) => {
            debug!("reading {}", path.display());
            let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => {
            debug!("reading stdin");
            Ok(Box::new(BufReader::new(io::stdin())))
        }
    }
}
