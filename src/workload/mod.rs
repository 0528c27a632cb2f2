//! Benchmark harness built around the zone map
//!
//! This module exposes the collaborators the benchmark binary drives:
//! - Loading a flat binary file of 32-bit integers
//! - Generating synthetic point and range workloads
//! - Running a named scenario and reporting its timing

mod loader;
mod queries;
mod scenario;

pub use loader::{decode_i32s, fingerprint, load_i32_file, VALUE_WIDTH};
pub use queries::{generate_point_queries, range_from_ratios, RangeQuery, MISSING_KEY_FRACTION};
pub use scenario::{run_scenario, Scenario, ScenarioOutcome, ScenarioReport};

use crate::ZoneMapError;
use thiserror::Error;

/// Errors raised by the benchmark harness
#[derive(Debug, Error)]
pub enum WorkloadError {
    /// Reading the input file failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Input length is not a whole number of values.
    #[error("input of {len} bytes is not a multiple of {width}-byte values")]
    MisalignedInput {
        /// Length of the input in bytes
        len: usize,
        /// Width of one value in bytes
        width: usize,
    },

    /// Scenario name not recognised.
    #[error(
        "unknown scenario '{0}': expected one of test_pq, test_rq_1, test_rq_2, test_rq_3 or test_rq_4"
    )]
    UnknownScenario(String),

    /// Range workloads need at least one value to derive bounds from.
    #[error("dataset is empty; range bounds cannot be derived")]
    EmptyDataset,

    /// Range ratios must satisfy `0 <= start <= end <= 1`.
    #[error("invalid range ratios {start}..{end}")]
    InvalidRatio {
        /// Start ratio
        start: f64,
        /// End ratio
        end: f64,
    },

    /// Building the index failed.
    #[error("index error: {0}")]
    Index(#[from] ZoneMapError),
}
