use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;
use zonemap::config::DEFAULT_TARGET_ZONES;
use zonemap::workload::{self, Scenario};
use zonemap::{ZoneMap, ZoneMapConfig};

#[derive(Parser, Debug)]
#[command(name = "zonemap", about = "Benchmark zone map point and range queries")]
struct Cli {
    /// Flat binary file of native-endian 32-bit integers.
    input_file: PathBuf,
    /// One of test_pq, test_rq_1, test_rq_2, test_rq_3 or test_rq_4.
    test_case: Scenario,
    /// Number of zones to aim for when no capacity is given.
    #[arg(long, default_value_t = DEFAULT_TARGET_ZONES)]
    zones: usize,
    /// Explicit elements per zone; overrides --zones.
    #[arg(long)]
    capacity: Option<usize>,
    /// Seed for the point-query workload (random when omitted).
    #[arg(long)]
    seed: Option<u64>,
    /// Replay queries to report pruning statistics.
    #[arg(long)]
    explain: bool,
    /// Log at debug level.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let data = workload::load_i32_file(&cli.input_file)
        .with_context(|| format!("failed to read input from {}", cli.input_file.display()))?;
    tracing::debug!(fingerprint = %workload::fingerprint(&data), "dataset fingerprint");

    let config = match cli.capacity {
        Some(capacity) => ZoneMapConfig::with_capacity(capacity),
        None => ZoneMapConfig::for_dataset(data.len(), cli.zones),
    };

    let build_start = Instant::now();
    let map = ZoneMap::with_config(data.iter().copied(), &config)
        .context("failed to build zone map")?;
    tracing::info!(
        zones = map.num_zones(),
        capacity = map.capacity(),
        build_us = build_start.elapsed().as_micros() as u64,
        "zone map ready"
    );

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let report = workload::run_scenario(&map, &data, cli.test_case, cli.explain, &mut rng)
        .with_context(|| format!("scenario {} failed", cli.test_case))?;
    print!("{}", report);

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
