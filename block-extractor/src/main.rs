//! block-extractor - Pull fenced code blocks out of Markdown

use anyhow::{Context, Result};
use block_extractor_core::{Config, Document, Selection};
use clap::Parser;
use std::io::{self, Read, Write};
use std::path::PathBuf;

const AFTER_HELP: &str = "\
Reads Markdown content from a file or standard input and extracts code blocks
delimited by triple backticks (```).

Examples:
  Extract all code blocks from a file:
    block-extractor example.md

  Extract the second code block from standard input:
    cat example.md | block-extractor --block 1";

/// Extracts code blocks from Markdown content
#[derive(Parser, Debug)]
#[command(name = "block-extractor")]
#[command(author, version, about, long_about = None, after_help = AFTER_HELP)]
struct Args {
    /// Markdown file to read (standard input when omitted)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Output only the NUM-th code block (0-indexed)
    #[arg(
        short,
        long,
        value_name = "NUM",
        allow_hyphen_values = true,
        num_args = 0..=1,
        default_missing_value = ""
    )]
    block: Option<String>,

    /// Configuration file (defaults to the platform config directory)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let stdout = io::stdout();
    run(&args, io::stdin().lock(), &mut stdout.lock())
}

fn run<R: Read, W: Write>(args: &Args, stdin: R, out: &mut W) -> Result<()> {
    // Load configuration
    let config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().context("Failed to load configuration")?,
    };

    // Load document
    let mut doc = match &args.file {
        Some(path) => Document::load(path)?,
        None => Document::from_reader(stdin)?,
    };
    if config.input.normalize_line_endings {
        doc = doc.normalized();
    }

    let selection = Selection::parse(args.block.as_deref());
    log::debug!(
        "extracting {} from {} ({} lines)",
        selection,
        doc.source,
        doc.line_count()
    );

    let result = doc.extract(selection, &config.output.separator);

    out.write_all(result.as_bytes())
        .context("Failed to write output")?;
    if config.output.trailing_newline {
        out.write_all(b"\n").context("Failed to write output")?;
    }
    out.flush().context("Failed to write output")?;

    Ok(())
}
