// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! `fixcheck`: spot-check and digest fixmath results.
//!
//! # Usage
//! ```text
//! fixcheck eval [--json] <op> <operand>...
//! fixcheck digest [--samples N] [--seed S] [--out FILE] [--golden FILE]
//! fixcheck lut
//! ```
//!
//! Logs go to stderr; `RUST_LOG` controls verbosity (default `info`).

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use fixmath_cli::audit::{self, DigestReport, DEFAULT_SAMPLES, DEFAULT_SEED};
use fixmath_cli::eval;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "fixcheck",
    version,
    about = "Evaluate, digest and audit fixmath results",
    disable_help_subcommand = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate one operation and print the value and raw bits.
    Eval(EvalArgs),
    /// Hash every operation over a deterministic input sweep.
    Digest(DigestArgs),
    /// Print size and BLAKE3 digest of each embedded lookup table.
    Lut,
}

#[derive(Args)]
struct EvalArgs {
    /// Print a JSON record instead of text.
    #[arg(long)]
    json: bool,

    /// Operation name (e.g. `sqrt`, `atan2`, `overflow_mul`).
    op: String,

    /// Operands: decimal (`-1.5`), raw bits (`raw:0x1_0000_0000`) or a
    /// named constant (`pi`, `max`, `min`).
    #[arg(allow_hyphen_values = true)]
    operands: Vec<String>,
}

#[derive(Args)]
struct DigestArgs {
    /// Samples per operation [default: 4096].
    #[arg(long)]
    samples: Option<u32>,

    /// Sweep seed [default: 0x51313332f1c5ceed].
    #[arg(long)]
    seed: Option<u64>,

    /// Write the report as golden JSON.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Compare against a golden JSON report; its seed and sample count are
    /// used unless overridden.
    #[arg(long)]
    golden: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Eval(args) => run_eval(args),
        Commands::Digest(args) => run_digest(args),
        Commands::Lut => {
            println!("{}", audit::lut_table(&audit::lut_digests()));
            Ok(())
        }
    }
}

fn run_eval(args: EvalArgs) -> Result<()> {
    let evaluation = eval::evaluate(&args.op, &args.operands)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&evaluation)?);
    } else {
        println!("{}", evaluation.to_text());
    }
    Ok(())
}

fn run_digest(args: DigestArgs) -> Result<()> {
    let golden = args.golden.as_deref().map(DigestReport::load).transpose()?;
    let seed = args
        .seed
        .or_else(|| golden.as_ref().map(|g| g.seed))
        .unwrap_or(DEFAULT_SEED);
    let samples = args
        .samples
        .or_else(|| golden.as_ref().map(|g| g.samples))
        .unwrap_or(DEFAULT_SAMPLES);

    let report = DigestReport::sweep(seed, samples);
    println!("{}", report.table());

    if let Some(path) = &args.out {
        report.save(path)?;
    }
    if let (Some(golden), Some(path)) = (golden, &args.golden) {
        report.compare(&golden)?;
        info!(path = %path.display(), "all digests match golden");
        println!(
            "all {} operations match {}",
            report.digests.len(),
            path.display()
        );
    }
    Ok(())
}
