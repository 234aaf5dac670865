//! # Main — CLI entry point
//!
//! Parses Q0 and search parameters, then drives one of the three sieve
//! flavors to a bounded number of survivors.
//!
//! ## Subcommands
//!
//! - `plain`: a single candidate Q surviving the small-prime sieve.
//! - `twin`: Q and Q+2 both surviving.
//! - `safe`: Q and 2Q+1 both surviving.
//!
//! ## Global options
//!
//! - `--table-size`: override the small-prime table tier (576/1856/3456).
//!   Falls back to the `PRIMES` env var, then the largest compiled-in tier.
//! - `--jobs`: run that many independent searches concurrently via rayon
//!   (each with its own residue state); only meaningful with `--count`
//!   greater than what a single search would need, or multiple `--q0`
//!   values.
//! - `--digest`: print a SHA-512 digest of the survivor stream, for
//!   reproducible benchmark comparisons.

mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(name = "qsieve", about = "SIMD-friendly prime candidate sieve")]
pub struct Cli {
    /// Override the small-prime table size (576, 1856, or 3456 entries).
    /// Falls back to the PRIMES env var, then the largest compiled tier.
    #[arg(long)]
    table_size: Option<u64>,

    /// Print a SHA-512 digest of the emitted survivor stream.
    #[arg(long)]
    digest: bool,

    /// Number of independent searches to run concurrently via rayon.
    #[arg(long, default_value_t = 1)]
    jobs: usize,

    /// Rayon thread pool size (0 = rayon's default).
    #[arg(long, default_value_t = 0)]
    threads: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy)]
pub enum Flavor {
    Plain,
    Twin,
    Safe,
}

#[derive(Subcommand)]
enum Commands {
    /// Search for a single Q surviving the small-prime sieve.
    Plain {
        /// Starting candidate, as hex (optional 0x prefix).
        q0: String,
        /// Number of survivors to collect (0 = test only Q0).
        #[arg(long, default_value_t = 1)]
        count: usize,
        /// Optional FIPS-186-style additive increment (parsed, not driven).
        #[arg(long)]
        incr: Option<String>,
    },
    /// Search for Q where both Q and Q+2 survive the sieve.
    Twin {
        q0: String,
        #[arg(long, default_value_t = 1)]
        count: usize,
        #[arg(long)]
        incr: Option<String>,
    },
    /// Search for Q where both Q and 2Q+1 survive the sieve.
    Safe {
        q0: String,
        #[arg(long, default_value_t = 1)]
        count: usize,
        #[arg(long)]
        incr: Option<String>,
    },
}

fn main() -> Result<()> {
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_default();
    if log_format == "json" {
        tracing_subscriber::fmt().json().with_target(false).init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }

    let cli = Cli::parse();
    cli::configure_rayon(Some(cli.threads));

    let (flavor, q0, count, incr) = match &cli.command {
        Commands::Plain { q0, count, incr } => (Flavor::Plain, q0, *count, incr.as_deref()),
        Commands::Twin { q0, count, incr } => (Flavor::Twin, q0, *count, incr.as_deref()),
        Commands::Safe { q0, count, incr } => (Flavor::Safe, q0, *count, incr.as_deref()),
    };

    if cli.jobs <= 1 {
        return cli::run_search(&cli, flavor, q0, count, incr);
    }

    use rayon::prelude::*;

    let q0 = q0.clone();
    let incr = incr.map(str::to_string);
    let errors: Vec<anyhow::Error> = (0..cli.jobs)
        .into_par_iter()
        .filter_map(|_| cli::run_search(&cli, flavor, &q0, count, incr.as_deref()).err())
        .collect();

    if let Some(first) = errors.into_iter().next() {
        return Err(first);
    }
    Ok(())
}
