//! Per-query pruning statistics

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// How much work a single query did against a zone map
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ScanStats {
    /// Zones in the map
    pub zones_total: usize,
    /// Zones skipped on bounds alone
    pub zones_pruned: usize,
    /// Zones whose elements were scanned
    pub zones_scanned: usize,
    /// Elements compared during scans
    pub elements_scanned: usize,
    /// Matching elements found (a point query stops at the first)
    pub matches: usize,
}

impl ScanStats {
    pub(crate) fn new(zones_total: usize) -> Self {
        Self {
            zones_total,
            ..Self::default()
        }
    }

    /// Fraction of zones skipped without a scan, 0.0 for an empty map.
    pub fn pruning_ratio(&self) -> f64 {
        if self.zones_total == 0 {
            0.0
        } else {
            self.zones_pruned as f64 / self.zones_total as f64
        }
    }

    /// Fold another query's counts into this one.
    pub fn accumulate(&mut self, other: &ScanStats) {
        self.zones_total += other.zones_total;
        self.zones_pruned += other.zones_pruned;
        self.zones_scanned += other.zones_scanned;
        self.elements_scanned += other.elements_scanned;
        self.matches += other.matches;
    }
}

impl fmt::Display for ScanStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "zones pruned {}/{} ({:.1}%), zones scanned {}, elements scanned {}, matches {}",
            self.zones_pruned,
            self.zones_total,
            self.pruning_ratio() * 100.0,
            self.zones_scanned,
            self.elements_scanned,
            self.matches
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pruning_ratio_of_empty_map_is_zero() {
        assert_eq!(ScanStats::new(0).pruning_ratio(), 0.0);
    }

    #[test]
    fn accumulate_sums_fields() {
        let mut total = ScanStats::new(4);
        total.zones_pruned = 3;
        let other = ScanStats {
            zones_total: 4,
            zones_pruned: 1,
            zones_scanned: 3,
            elements_scanned: 9,
            matches: 2,
        };
        total.accumulate(&other);
        assert_eq!(total.zones_total, 8);
        assert_eq!(total.zones_pruned, 4);
        assert_eq!(total.elements_scanned, 9);
        assert_eq!(total.pruning_ratio(), 0.5);
    }
}
