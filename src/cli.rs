//! CLI argument parsing support: rayon thread pool configuration and the
//! per-subcommand dispatch that turns parsed arguments into a `sieve::search`
//! call.

use anyhow::{Context, Result};
use tracing::{info, warn};

use qsieve::sieve::{init, search, PrimeType, TableSize};

use crate::{Cli, Flavor};

/// Configures the global rayon thread pool. `0`/`None` leaves rayon at its
/// default (one worker per logical core).
pub fn configure_rayon(threads: Option<usize>) {
    let Some(num_threads) = threads.filter(|&n| n > 0) else {
        return;
    };
    if let Err(e) = rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
    {
        warn!(error = %e, "could not configure rayon thread pool");
    }
}

fn table_size_for(cli: &Cli) -> Result<TableSize> {
    match cli.table_size {
        Some(n) => TableSize::from_count(n).context("--table-size"),
        None => {
            let default = TableSize::largest_enabled().context("PRIMES env var")?;
            TableSize::from_env_or(default).context("PRIMES env var")
        }
    }
}

fn prime_type_for(flavor: Flavor) -> PrimeType {
    match flavor {
        Flavor::Plain => PrimeType::Plain,
        Flavor::Twin => PrimeType::Twin,
        Flavor::Safe => PrimeType::Safe,
    }
}

/// Runs one `plain`/`twin`/`safe` subcommand: parses Q0, builds the
/// residue state, runs the bounded search, and prints survivors as hex.
pub fn run_search(cli: &Cli, flavor: Flavor, q0: &str, count: usize, incr: Option<&str>) -> Result<()> {
    let table = table_size_for(cli)?;
    let mut state = init::init_from_hex(q0, table).context("parsing Q0")?;
    state.mode.kind = prime_type_for(flavor);
    if let Some(incr_hex) = incr {
        init::attach_increment(&mut state, incr_hex).context("parsing --incr")?;
    }

    let start = std::time::Instant::now();
    let survivors = search::search(&mut state, count).context("running sieve search")?;
    let elapsed = start.elapsed();

    info!(
        survivors = survivors.len(),
        elapsed_ms = elapsed.as_millis() as u64,
        table_size = table.len(),
        "sieve search finished"
    );

    for q in &survivors {
        println!("{q:x}");
    }

    if cli.digest {
        use sha2::{Digest, Sha512};
        let mut hasher = Sha512::new();
        for q in &survivors {
            hasher.update(q.to_be_bytes());
        }
        println!("sha512:{:x}", hasher.finalize());
    }

    Ok(())
}
