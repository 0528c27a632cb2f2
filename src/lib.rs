//! # Zone Maps
//!
//! A zone map is a coarse block index over a fixed collection of ordered
//! keys. The input is partitioned, in its original order, into zones of at
//! most `capacity` elements, and each zone records its exact minimum and
//! maximum.
//!
//! ## Query Model
//!
//! 1. **Point query**: skip every zone whose `[min, max]` excludes the key,
//!    linearly scan the rest for an exact match
//! 2. **Range query**: skip every zone that cannot overlap `[low, high)`,
//!    collect matching elements from the rest in scan order
//!
//! Input is never sorted, so pruning relies only on tight per-zone bounds.
//!
//! ## Usage Example
//!
//! ```
//! use zonemap::ZoneMap;
//!
//! let map = ZoneMap::new(vec![5, 3, 9, 1, 7, 2, 8], 3)?;
//! assert_eq!(map.num_zones(), 3);
//! assert!(map.query_point(&9));
//! assert_eq!(map.query_range(&2, &8), vec![5, 3, 7, 2]);
//! # Ok::<(), zonemap::ZoneMapError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod config;   // Capacity selection
pub mod index;    // Zone map build and queries
pub mod workload; // Benchmark harness: loading, query generation, scenarios

// Re-exports for convenience
pub use config::ZoneMapConfig;
pub use index::{ScanStats, Zone, ZoneBounds, ZoneMap};

use thiserror::Error;

/// Errors raised while building a zone map
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ZoneMapError {
    /// Zone capacity must be at least one element
    #[error("invalid configuration: zone capacity must be positive, got {capacity}")]
    InvalidConfiguration {
        /// Capacity that was requested
        capacity: usize,
    },
}
