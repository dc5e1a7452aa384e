mod cli;
mod counts;
mod error;
mod genotype;
mod model;
mod orient;
mod output;
mod reader;

use crate::error::Result;
use clap::Parser;
use miette::IntoDiagnostic;
use std::path::PathBuf;

const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Count target alleles per sample from a tab-separated genotype matrix.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Base directory for the default input and output paths.
    #[arg(short, long, value_hint = clap::ValueHint::DirPath, default_value = ".")]
    work_dir: PathBuf,

    /// Genotype matrix (TSV: CHROM POS ID REF ALT sample...).
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    matrix: Option<PathBuf>,

    /// Target-allele panel (CSV with SNP/rsID/ID and Allele columns).
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    panel: Option<PathBuf>,

    /// Output CSV of per-sample counts.
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    output: Option<PathBuf>,
}

fn try_main() -> Result<()> {
    let args = Args::parse();
    let config = cli::build_run_config(&args);

    let partial = output::partial_path(&config.output);
    ctrlc::set_handler(move || {
        let _ = std::fs::remove_file(&partial);
        eprintln!("Aborted by user.");
        std::process::exit(INTERRUPTED_EXIT_CODE);
    })?;

    config.print_paths();

    cli::run(&config)?;
    Ok(())
}

fn main() -> miette::Result<()> {
    try_main().into_diagnostic()
}
