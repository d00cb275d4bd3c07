//! Command-line interface for splitrs.
//!
//! Thin plumbing over the library: argument parsing, the split/glue mode
//! switch, and error-to-exit-code mapping. All chunk arithmetic and file
//! layout lives in the library.

use std::path::PathBuf;
use std::process;

use clap::Parser;

use splitrs::{DEFAULT_GLUE_OUTPUT, Gluer, SplitConfig, SplitError, split_file};

/// Split files into numbered chunk files and glue them back together.
#[derive(Debug, Parser)]
#[command(name = "splitrs", version, about)]
struct Cli {
    /// Input file to split, or chunk directory to glue (defaults to the
    /// current directory in glue mode).
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// How many chunk files the input should be split into.
    #[arg(short, long)]
    count: Option<u64>,

    /// How large each chunk file can get, in bytes.
    #[arg(short = 's', long = "maxsize")]
    max_size: Option<u64>,

    /// Glue chunk files back into their original file.
    #[arg(short, long)]
    glue: bool,

    /// Output: chunk directory for split, file path for glue.
    #[arg(short, long)]
    out: Option<PathBuf>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(err) = run(&cli) {
        eprintln!("splitrs: fatal error: {}", err);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), SplitError> {
    if cli.glue { glue(cli) } else { split(cli) }
}

fn split(cli: &Cli) -> Result<(), SplitError> {
    let input = cli.input.as_deref().ok_or(SplitError::InvalidConfig {
        message: "no input file specified",
    })?;

    // Both sizing options are handed through unchecked; the library owns
    // the both-set / neither-set / zero validation.
    let config = SplitConfig::from_options(cli.count, cli.max_size);
    let dir = split_file(input, &config, cli.out.as_deref())?;

    eprintln!("splitrs done: {}", dir.display());
    Ok(())
}

fn glue(cli: &Cli) -> Result<(), SplitError> {
    let dir = cli.input.clone().unwrap_or_else(|| PathBuf::from("."));
    let out = cli
        .out
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_GLUE_OUTPUT));

    let gluer = Gluer::new(dir);
    let files = gluer.discover()?;
    for file in &files {
        println!("Reading {}", file.file_name());
    }
    let contents = gluer.concat(&files)?;
    std::fs::write(&out, &contents)?;

    eprintln!("splitrs done: {}", out.display());
    Ok(())
}
